//! Memory-mapped file access for the operation layer.
//!
//! Inputs are mapped read-only and copied into memory (source files are
//! moderate size and every operation consumes them fully); outputs are
//! written through a preallocated read-write mapping. Handles and mappings
//! are scoped to these functions, so they are released on every path.

use crate::error::{OperationError, OperationResult};
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::path::Path;

/// Read a whole file into memory.
pub fn read_to_vec(path: &Path) -> OperationResult<Vec<u8>> {
    let handle = ReadOnlyFileHandle::open(path).map_err(|e| OperationError::Open {
        path: path.into(),
        details: e.to_string(),
    })?;
    let size = handle.size().map_err(|e| OperationError::Read {
        path: path.into(),
        details: e.to_string(),
    })? as usize;
    if size == 0 {
        return Ok(Vec::new());
    }
    let mapping = ReadOnlyMmap::new(&handle, 0, size).map_err(|e| OperationError::Read {
        path: path.into(),
        details: e.to_string(),
    })?;
    Ok(mapping.as_slice().to_vec())
}

/// Read a whole file and decode it as UTF-8 text.
pub fn read_to_string(path: &Path) -> OperationResult<String> {
    let bytes = read_to_vec(path)?;
    String::from_utf8(bytes).map_err(|_| OperationError::NotText { path: path.into() })
}

/// Write a fully composed buffer to `path`.
///
/// The file is created preallocated at its final size; callers compose the
/// complete output before calling, so a failed operation never creates the
/// file at all.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> OperationResult<()> {
    let handle = ReadWriteFileHandle::create_preallocated(path, bytes.len() as i64).map_err(|e| {
        OperationError::Write {
            path: path.into(),
            details: e.to_string(),
        }
    })?;
    if bytes.is_empty() {
        return Ok(());
    }
    let mut mapping =
        ReadWriteMmap::new(&handle, 0, bytes.len()).map_err(|e| OperationError::Write {
            path: path.into(),
            details: e.to_string(),
        })?;
    mapping.as_mut_slice().copy_from_slice(bytes);
    Ok(())
}
