// crates/uvmask-core/src/stack/encode.rs

use log::debug;
use rayon::prelude::*;

use crate::codec::EncodedLayer;
use crate::error::Result;
use crate::model::{Layer, LayerStack};
use crate::pixel::PixelBuffer;

/// Pack every layer on the rayon pool, in layer order.
pub fn encode_stack(stack: &LayerStack) -> Vec<EncodedLayer> {
    let out: Vec<EncodedLayer> = stack
        .layers()
        .par_iter()
        .map(|l| l.encoded().into_owned())
        .collect();

    debug!(
        "encoded {} layers, {} packed bytes",
        out.len(),
        out.iter().map(|e| e.data.len()).sum::<usize>()
    );
    out
}

/// Unpack every layer on the rayon pool.
///
/// The first failing layer's error is returned; other layers may be
/// abandoned mid-flight.
pub fn decode_stack(stack: &LayerStack) -> Result<Vec<PixelBuffer>> {
    stack
        .layers()
        .par_iter()
        .map(|l| l.pixels().map(|p| p.into_owned()))
        .collect()
}

/// Same stack with every layer held in packed form.
pub fn pack_stack(stack: LayerStack) -> Result<LayerStack> {
    let (props, layers) = stack.into_parts();
    let layers: Vec<Layer> = layers.into_par_iter().map(Layer::into_packed).collect();
    LayerStack::new(props, layers)
}
