//! Core primitives for treating a byte buffer as an ordered sequence of bits.
//!
//! Everything in this crate is pure: no I/O, no shared state. The building
//! blocks are:
//!
//! - [`BitOrder`]: whether bit 0 of a byte is its most or least significant bit
//! - [`BitReader`]: checked bit-indexed reads with optional inversion
//! - [`StreamLayout`]: a prologue followed by repeating (header, body) blocks
//! - [`pack_bits`] / [`BitPacker`]: ASCII `'0'`/`'1'` text back into packed bytes

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod layout;
pub mod order;
pub mod packer;
pub mod reader;

pub use error::{BitRangeError, LayoutError, PackError};
pub use layout::{Segment, Segments, StreamLayout};
pub use order::BitOrder;
pub use packer::{pack_bits, BitPacker};
pub use reader::{BitIter, BitReader};
