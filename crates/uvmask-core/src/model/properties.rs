// crates/uvmask-core/src/model/properties.rs

use std::collections::BTreeMap;

use crate::model::exposure::{effective_exposure, Bottom, Exposure};
use crate::pixel::area;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SizeMillimeter {
    pub x: f32,
    pub y: f32,
}

/// Image size in pixels and millimetres, plus layer count and height.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub x: u32,
    pub y: u32,
    pub millimeter: SizeMillimeter,
    pub layers: usize,
    /// mm
    pub layer_height: f32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreviewType {
    Tiny,
    Huge,
}

/// RGBA thumbnail shown by printer firmware.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Preview {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Printer/material-wide settings shared by every layer of a stack.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Properties {
    pub size: Size,
    pub exposure: Exposure,
    pub bottom: Bottom,
    pub preview: BTreeMap<PreviewType, Preview>,
}

impl Properties {
    /// Layer image dimensions in pixels.
    #[inline]
    pub fn bounds(&self) -> (u32, u32) {
        (self.size.x, self.size.y)
    }

    #[inline]
    pub fn pixel_count(&self) -> u64 {
        area(self.size.x, self.size.y)
    }

    /// Nominal Z of the top of layer `index`.
    pub fn layer_z(&self, index: usize) -> f32 {
        (index + 1) as f32 * self.size.layer_height
    }

    /// Exposure for layer `index` from the bottom override and the default.
    pub fn layer_exposure(&self, index: usize) -> Exposure {
        effective_exposure(index, self.bottom.count, &self.bottom.exposure, &self.exposure)
    }

    /// Pixel pitch in millimetres, `(0.0, 0.0)` when unknown.
    pub fn pixel_pitch(&self) -> (f32, f32) {
        let pitch = |mm: f32, px: u32| if px == 0 { 0.0 } else { mm / px as f32 };
        (
            pitch(self.size.millimeter.x, self.size.x),
            pitch(self.size.millimeter.y, self.size.y),
        )
    }
}
