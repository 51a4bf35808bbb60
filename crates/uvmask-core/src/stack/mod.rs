// crates/uvmask-core/src/stack/mod.rs
//
// Whole-stack passes over the per-layer codec.

pub mod dedup;
pub mod encode;

pub use dedup::LayerTable;
pub use encode::{decode_stack, encode_stack, pack_stack};
