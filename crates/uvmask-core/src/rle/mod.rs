// crates/uvmask-core/src/rle/mod.rs

pub mod fingerprint;
pub mod length;
pub mod run;
pub mod token;

pub use fingerprint::{fingerprint, weigh, Weight};
pub use run::{build_runs, expand_runs, Run, RunBuilder};
pub use token::{dequantize, is_representable, pack_runs, quantize, unpack_runs, Packed, Token, TokenPacker, TokenReader};
