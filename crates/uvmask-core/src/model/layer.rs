// crates/uvmask-core/src/model/layer.rs

use std::borrow::Cow;

use crate::codec::{encode_layer, EncodedLayer};
use crate::error::Result;
use crate::model::exposure::Exposure;
use crate::pixel::PixelBuffer;

/// Layer content: raw pixels from a pipeline, or packed bytes from a decoder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayerImage {
    Pixels(PixelBuffer),
    Packed(EncodedLayer),
}

impl LayerImage {
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            LayerImage::Pixels(p) => p.dimensions(),
            LayerImage::Packed(e) => (e.width, e.height),
        }
    }
}

/// One printed slice.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    /// mm
    pub z: f32,
    /// Per-layer override; `None` follows the stack properties.
    pub exposure: Option<Exposure>,
    pub image: LayerImage,
}

impl Layer {
    pub fn from_pixels(z: f32, pixels: PixelBuffer) -> Self {
        Self {
            z,
            exposure: None,
            image: LayerImage::Pixels(pixels),
        }
    }

    pub fn from_encoded(z: f32, encoded: EncodedLayer) -> Self {
        Self {
            z,
            exposure: None,
            image: LayerImage::Packed(encoded),
        }
    }

    pub fn with_exposure(mut self, exposure: Exposure) -> Self {
        self.exposure = Some(exposure);
        self
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Pixels, decoding packed content on demand.
    pub fn pixels(&self) -> Result<Cow<'_, PixelBuffer>> {
        match &self.image {
            LayerImage::Pixels(p) => Ok(Cow::Borrowed(p)),
            LayerImage::Packed(e) => Ok(Cow::Owned(e.decode()?)),
        }
    }

    /// Packed content, encoding pixels on demand.
    pub fn encoded(&self) -> Cow<'_, EncodedLayer> {
        match &self.image {
            LayerImage::Pixels(p) => Cow::Owned(encode_layer(p)),
            LayerImage::Packed(e) => Cow::Borrowed(e),
        }
    }

    /// Replace pixel content by its packed form.
    pub fn into_packed(self) -> Self {
        let image = match self.image {
            LayerImage::Pixels(p) => LayerImage::Packed(encode_layer(&p)),
            packed => packed,
        };
        Self { image, ..self }
    }
}
