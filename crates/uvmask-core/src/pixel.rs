// crates/uvmask-core/src/pixel.rs

use crate::error::{Result, UvError};
use crate::rle::token::quantize;

/// Row-major 8-bit grayscale bitmap for one printed layer.
///
/// 0 is unexposed (black), 255 is fully exposed (white). Anti-aliased
/// slices carry intermediate values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pix: Vec<u8>,
}

/// Pixel count of a `width` x `height` bitmap, without overflow.
#[inline]
pub fn area(width: u32, height: u32) -> u64 {
    width as u64 * height as u64
}

impl PixelBuffer {
    /// All-background buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, 0)
    }

    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self {
            width,
            height,
            pix: vec![value; area(width, height) as usize],
        }
    }

    pub fn from_pixels(width: u32, height: u32, pix: Vec<u8>) -> Result<Self> {
        let expected = area(width, height);
        if pix.len() as u64 != expected {
            return Err(UvError::Validation(format!(
                "pixel buffer {}x{} needs {} bytes, got {}",
                width,
                height,
                expected,
                pix.len()
            )));
        }
        Ok(Self { width, height, pix })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pix.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pix.is_empty()
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pix
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pix
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pix
    }

    /// Pixel at `(x, y)`, or `None` outside the bitmap.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pix.get(self.index(x, y)).copied()
    }

    /// Sets the pixel at `(x, y)`. Writes outside the bitmap are ignored.
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = self.index(x, y);
        self.pix[i] = value;
    }

    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = self.index(0, y);
        Some(&self.pix[start..start + self.width as usize])
    }

    /// True when no pixel would be exposed once packed, i.e. every pixel
    /// quantizes to gray code 0 (intensities 0 and 1). Agrees with a zero
    /// layer weight.
    pub fn is_blank(&self) -> bool {
        self.pix.iter().all(|&p| quantize(p) == 0)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
