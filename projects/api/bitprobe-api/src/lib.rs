//! Operation layer over the bitprobe engine.
//!
//! Each operation is a pure function of a parameter struct: it validates its
//! parameters, reads the input file fully into memory, computes the complete
//! output in memory, and only then writes the output file. No operation
//! leaves a partial output behind on failure.
//!
//! Callers that need the classic integer status contract instead of a
//! `Result` can map any outcome through [`status::status_of`].

pub mod error;
pub mod file_io;
pub mod ops;
pub mod status;

pub use error::{OperationError, OperationResult};
pub use status::{status_of, Status};
