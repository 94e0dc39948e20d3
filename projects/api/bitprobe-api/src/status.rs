//! The integer status contract.
//!
//! Shell frontends display one message per status value, so every error an
//! operation can produce collapses onto this fixed taxonomy.

use crate::error::{OperationError, OperationResult};
use bitprobe_analysis::AnalysisError;
use bitprobe_raw::RawFormatError;

/// Standardized operation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Status {
    Success = 1,
    ParameterInvalid = 0,
    AllocationFailure = -1,
    OpenFailure = -2,
    ReadFailure = -3,
    TypeMismatch = -4,
    SizeMismatch = -5,
    NotImplemented = -6,
}

impl Status {
    /// The raw integer code.
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl From<&OperationError> for Status {
    fn from(error: &OperationError) -> Self {
        match error {
            OperationError::InvalidParameter(_) | OperationError::Pack(_) => {
                Status::ParameterInvalid
            }
            OperationError::Range(_) | OperationError::Layout(_) => Status::SizeMismatch,
            OperationError::Analysis(inner) => match inner {
                AnalysisError::Range(_)
                | AnalysisError::Layout(_)
                | AnalysisError::SkipBeyondEnd { .. }
                | AnalysisError::GeometryTooLarge => Status::SizeMismatch,
                AnalysisError::ZeroRowWidth
                | AnalysisError::BitDepthOutOfRange(_)
                | AnalysisError::BadIndexToken { .. }
                | AnalysisError::IndexOutOfRange { .. } => Status::ParameterInvalid,
            },
            OperationError::RawFormat(inner) => match inner {
                RawFormatError::TooShort { .. }
                | RawFormatError::BadMagic { .. }
                | RawFormatError::BadBitDepth(_) => Status::TypeMismatch,
                RawFormatError::PayloadSizeMismatch { .. } => Status::SizeMismatch,
            },
            OperationError::Spp(_) => Status::SizeMismatch,
            OperationError::NotText { .. } => Status::TypeMismatch,
            OperationError::NotLinear { .. } => Status::TypeMismatch,
            OperationError::Open { .. } => Status::OpenFailure,
            OperationError::Read { .. } => Status::ReadFailure,
            OperationError::Write { .. } => Status::OpenFailure,
        }
    }
}

/// Collapse an operation outcome onto the integer status contract.
pub fn status_of<T>(result: &OperationResult<T>) -> Status {
    match result {
        Ok(_) => Status::Success,
        Err(error) => Status::from(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitprobe_core::LayoutError;
    use std::path::PathBuf;

    #[test]
    fn status_codes_match_the_published_taxonomy() {
        assert_eq!(Status::Success.code(), 1);
        assert_eq!(Status::ParameterInvalid.code(), 0);
        assert_eq!(Status::AllocationFailure.code(), -1);
        assert_eq!(Status::OpenFailure.code(), -2);
        assert_eq!(Status::ReadFailure.code(), -3);
        assert_eq!(Status::TypeMismatch.code(), -4);
        assert_eq!(Status::SizeMismatch.code(), -5);
        assert_eq!(Status::NotImplemented.code(), -6);
    }

    #[test]
    fn layout_mismatch_maps_to_size_mismatch() {
        let error = OperationError::Layout(LayoutError::SizeMismatch {
            required: 100,
            available: 10,
        });
        assert_eq!(Status::from(&error), Status::SizeMismatch);
    }

    #[test]
    fn open_failure_maps_to_open_status() {
        let error = OperationError::Open {
            path: PathBuf::from("missing.bin"),
            details: "no such file".into(),
        };
        assert_eq!(Status::from(&error), Status::OpenFailure);
    }

    #[test]
    fn success_maps_to_one() {
        let result: OperationResult<()> = Ok(());
        assert_eq!(status_of(&result).code(), 1);
    }
}
