//! Emitters that reinterpret a segmented bit stream as text, statistics or
//! pixel data.
//!
//! Every function here is a stateless transform over a byte slice plus a
//! [`bitprobe_core::StreamLayout`]; the same segmentation drives all of them,
//! they only differ in what they aggregate or emit.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod grid;
pub mod hexdump;
pub mod image;
pub mod reorder;
pub mod stats;

pub use error::AnalysisError;
pub use grid::bit_grid;
pub use hexdump::hex_dump;
pub use image::{extract_pixels, PixelPlane};
pub use reorder::{invert_pixels, parse_index_list, reorder_pixels, scale_pixels};
pub use stats::{bit_distances, bit_runs, bit_stats, BitRun, BlockStats};
