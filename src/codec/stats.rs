use super::rle::Run;

/// Space saved by run-length encoding, in percent.
///
/// `original_len` is the number of samples before encoding and `run_count`
/// the number of runs after. Returns 0.0 for an empty input.
pub fn compression_ratio(original_len: usize, run_count: usize) -> f64 {
    if original_len == 0 {
        return 0.0;
    }
    (1.0 - run_count as f64 / original_len as f64) * 100.0
}

/// Summary reported after encoding a flat pixel sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionStats {
    pub original_len: usize,
    pub run_count: usize,
    pub ratio: f64,
}

impl CompressionStats {
    pub fn new<T>(original_len: usize, runs: &[Run<T>]) -> Self {
        let run_count = runs.len();
        Self {
            original_len,
            run_count,
            ratio: compression_ratio(original_len, run_count),
        }
    }
}
