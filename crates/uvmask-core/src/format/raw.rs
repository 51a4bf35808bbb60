// crates/uvmask-core/src/format/raw.rs
//
// Header-less single-layer formats. Size and exposure come from the
// caller's properties.

use crate::codec::EncodedLayer;
use crate::error::{Result, UvError};
use crate::format::{Capabilities, Format};
use crate::model::{Layer, LayerStack, Properties};
use crate::pixel::PixelBuffer;

fn single_layer<'a>(name: &str, stack: &'a LayerStack) -> Result<&'a Layer> {
    match stack.layers() {
        [layer] => Ok(layer),
        layers => Err(UvError::Format(format!(
            "{name}: holds exactly one layer, stack has {}",
            layers.len()
        ))),
    }
}

/// 8-bit row-major pixels, `width * height` bytes.
pub struct GrayFormat;

impl Format for GrayFormat {
    fn name(&self) -> &'static str {
        "gray"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["gray", "raw"]
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::READ_WRITE
    }

    fn decode(&self, bytes: &[u8], props: &Properties) -> Result<LayerStack> {
        let (w, h) = props.bounds();
        let pixels = PixelBuffer::from_pixels(w, h, bytes.to_vec())?;
        LayerStack::new(props.clone(), vec![Layer::from_pixels(props.layer_z(0), pixels)])
    }

    fn encode(&self, stack: &LayerStack) -> Result<Vec<u8>> {
        let layer = single_layer(self.name(), stack)?;
        Ok(layer.pixels()?.into_owned().into_pixels())
    }
}

/// One packed layer stream.
pub struct RleFormat;

impl Format for RleFormat {
    fn name(&self) -> &'static str {
        "rle"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["rle"]
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::READ_WRITE
    }

    fn decode(&self, bytes: &[u8], props: &Properties) -> Result<LayerStack> {
        let (w, h) = props.bounds();
        let encoded = EncodedLayer::from_packed(w, h, bytes.to_vec())?;
        LayerStack::new(props.clone(), vec![Layer::from_encoded(props.layer_z(0), encoded)])
    }

    fn encode(&self, stack: &LayerStack) -> Result<Vec<u8>> {
        let layer = single_layer(self.name(), stack)?;
        Ok(layer.encoded().into_owned().data)
    }
}
