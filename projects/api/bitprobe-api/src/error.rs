//! Error types for the operation layer.

use bitprobe_analysis::AnalysisError;
use bitprobe_core::{BitRangeError, LayoutError, PackError};
use bitprobe_raw::RawFormatError;
use bitprobe_spp::SppError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for operations.
pub type OperationResult<T> = Result<T, OperationError>;

/// Everything an operation can fail with.
///
/// Engine errors bubble up transparently; file-system failures carry the
/// path and the underlying description. [`crate::Status`] maps each variant
/// onto the integer status taxonomy.
#[derive(Debug, Error)]
pub enum OperationError {
    /// A parameter failed validation before any work started.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    #[error(transparent)]
    Range(#[from] BitRangeError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Pack(#[from] PackError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    RawFormat(#[from] RawFormatError),

    #[error(transparent)]
    Spp(#[from] SppError),

    /// Input text (bit text, index lists) that is not valid UTF-8.
    #[error("{path} is not valid UTF-8 text")]
    NotText { path: PathBuf },

    /// Pixel reorder requires a linear input image.
    #[error("input image is not linear (height is {height})")]
    NotLinear { height: u32 },

    #[error("failed to open {path}: {details}")]
    Open { path: PathBuf, details: String },

    #[error("failed to read {path}: {details}")]
    Read { path: PathBuf, details: String },

    #[error("failed to write {path}: {details}")]
    Write { path: PathBuf, details: String },
}
