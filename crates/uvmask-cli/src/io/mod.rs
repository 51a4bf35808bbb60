// crates/uvmask-cli/src/io/mod.rs

pub mod stack_file;
