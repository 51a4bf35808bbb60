// crates/uvmask-cli/src/cmd/mod.rs

pub mod encode;
pub mod formats;
pub mod info;
