//! Byte offset to line number mapping
//!
//! Lines are counted by `\n` only, so a `\r\n` pair is a single break and
//! a lone `\r` is not a break at all. Line numbers are 1-based.

/// Line number of `offset` within `buffer`
///
/// Offsets past the end are clamped to the buffer length.
pub fn line_number_at(buffer: &str, offset: usize) -> usize {
    let end = offset.min(buffer.len());
    buffer.as_bytes()[..end]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}

/// Precomputed line starts for buffers queried many times
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset of the first byte of every line after the first
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(buffer: &str) -> Self {
        let line_starts = buffer
            .bytes()
            .enumerate()
            .filter(|(_, b)| *b == b'\n')
            .map(|(i, _)| i + 1)
            .collect();

        Self {
            line_starts,
            len: buffer.len(),
        }
    }

    /// Same result as [`line_number_at`] on the indexed buffer
    pub fn line_number_at(&self, offset: usize) -> usize {
        let offset = offset.min(self.len);
        // Number of line breaks strictly before `offset`
        self.line_starts.partition_point(|&start| start <= offset) + 1
    }
}
