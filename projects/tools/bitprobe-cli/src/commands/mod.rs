pub mod bits;
pub mod dump;
pub mod image;
pub mod misc;
pub mod spp;
pub mod stats;
pub mod text;
