//! The operations, one module per output family.

pub mod bit_text;
pub mod extract_bits;
pub mod hex_dump;
pub mod image;
pub mod null_strip;
pub mod pack;
pub mod prime;
pub mod reorder;
pub mod spp;
pub mod stats;

pub use bit_text::{bit_text, BitTextParams};
pub use extract_bits::{extract_bits, ExtractBitsParams};
pub use hex_dump::{hex_dump_file, HexDumpParams};
pub use image::{batch_bit_stream_to_image, bit_stream_to_image, BatchImageParams, ImageParams};
pub use null_strip::{strip_null_runs, NullStripParams, NullStripReport};
pub use pack::{pack_bit_text, PackBitTextParams};
pub use prime::find_prime;
pub use reorder::{pixel_reorder, PixelReorderParams};
pub use spp::{extract_spp, ExtractSppParams, SppReport};
pub use stats::{bit_distance, bit_sequences, bit_stream_stats, StreamStatsParams};
