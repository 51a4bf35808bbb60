// crates/uvmask-core/src/rle/run.rs

use crate::error::{Result, UvError};
use crate::pixel::{area, PixelBuffer};

/// A maximal stretch of same-intensity pixels in row-major scan order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Run {
    pub color: u8,
    pub length: u64,
}

impl Run {
    pub const fn new(color: u8, length: u64) -> Self {
        Self { color, length }
    }
}

/// Incremental run builder.
///
/// Rows are not flushed independently: a run continues from the last pixel
/// of one row into the first pixel of the next.
#[derive(Debug, Default)]
pub struct RunBuilder {
    runs: Vec<Run>,
    current: Option<Run>,
}

impl RunBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, color: u8) {
        self.push_run(color, 1);
    }

    /// Appends `length` pixels of `color`, merging with the open run.
    pub fn push_run(&mut self, color: u8, length: u64) {
        if length == 0 {
            return;
        }
        match self.current.as_mut() {
            Some(run) if run.color == color => run.length += length,
            _ => {
                if let Some(done) = self.current.replace(Run::new(color, length)) {
                    self.runs.push(done);
                }
            }
        }
    }

    pub fn finish(mut self) -> Vec<Run> {
        if let Some(done) = self.current.take() {
            self.runs.push(done);
        }
        self.runs
    }
}

/// Scan `buf` into its unique maximal run sequence.
pub fn build_runs(buf: &PixelBuffer) -> Vec<Run> {
    let mut b = RunBuilder::new();
    for &p in buf.pixels() {
        b.push(p);
    }
    b.finish()
}

/// Total pixel count covered by `runs`.
pub fn total_length(runs: &[Run]) -> u64 {
    runs.iter().map(|r| r.length).sum()
}

/// Write `runs` back into a `width` x `height` buffer.
pub fn expand_runs(runs: &[Run], width: u32, height: u32) -> Result<PixelBuffer> {
    let expected = area(width, height);
    let actual = total_length(runs);
    if actual != expected {
        return Err(UvError::SizeMismatch { expected, actual });
    }

    let mut pix = Vec::with_capacity(expected as usize);
    for r in runs {
        pix.resize(pix.len() + r.length as usize, r.color);
    }
    PixelBuffer::from_pixels(width, height, pix)
}
