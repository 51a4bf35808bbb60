// crates/uvmask-core/src/model/mod.rs

pub mod defaults;
pub mod exposure;
pub mod layer;
pub mod properties;
pub mod stack;

pub use exposure::{effective_exposure, Bottom, Exposure};
pub use layer::{Layer, LayerImage};
pub use properties::{Preview, PreviewType, Properties, Size, SizeMillimeter};
pub use stack::{LayerMut, LayerStack, PropertiesMut};
