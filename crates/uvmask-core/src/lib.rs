pub mod error;
pub mod validate;

pub mod codec;
pub mod filter;
pub mod format;
pub mod model;
pub mod pixel;
pub mod rle;
pub mod stack;

pub use crate::codec::{decode_layer, encode_layer, EncodedLayer};
pub use crate::error::{Result, UvError};
pub use crate::model::{Bottom, Exposure, Layer, LayerImage, LayerStack, Properties, Size};
pub use crate::pixel::PixelBuffer;
