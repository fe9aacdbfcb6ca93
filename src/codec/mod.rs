//! Lossless run-length codec over flat sample sequences.

mod rle;
mod stats;

pub use rle::{decode, decoded_len, encode, Run};
pub use stats::{compression_ratio, CompressionStats};
