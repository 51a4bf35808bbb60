use std::path::PathBuf;

use clap::Args;
use log::info;
use uvmask_core::format::FormatRegistry;
use uvmask_core::stack::{encode_stack, LayerTable};

use crate::io::stack_file;

#[derive(Args)]
pub struct EncodeArgs {
    /// Input layer file
    #[arg(long)]
    pub r#in: PathBuf,

    /// Output layer file
    #[arg(long)]
    pub out: PathBuf,

    /// Layer width in pixels
    #[arg(long)]
    pub width: u32,

    /// Layer height in pixels
    #[arg(long)]
    pub height: u32,

    /// Input format name (default: from the input extension)
    #[arg(long)]
    pub from: Option<String>,

    /// Output format name (default: from the output extension)
    #[arg(long)]
    pub to: Option<String>,
}

pub fn run(args: EncodeArgs) -> anyhow::Result<()> {
    let reg = FormatRegistry::builtin();
    let src = stack_file::resolve(&reg, args.from.as_deref(), &args.r#in)?;
    let dst = stack_file::resolve(&reg, args.to.as_deref(), &args.out)?;

    let stack = stack_file::read_stack(&reg, src, &args.r#in, args.width, args.height)?;

    let encoded = encode_stack(&stack);
    let table = LayerTable::build(&encoded);
    for (i, e) in encoded.iter().enumerate() {
        info!(
            "layer {}: {} bytes fingerprint=0x{:016x} weight={}",
            i,
            e.data.len(),
            e.fingerprint,
            e.weight
        );
    }

    let written = stack_file::write_stack(&reg, dst, &args.out, &stack)?;

    eprintln!(
        "encode ok: in={} ({}) out={} ({}) layers={} unique={} out_bytes={}",
        args.r#in.display(),
        src.name(),
        args.out.display(),
        dst.name(),
        stack.len(),
        table.unique.len(),
        written
    );
    Ok(())
}
