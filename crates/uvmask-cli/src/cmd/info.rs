use std::path::PathBuf;

use clap::Args;
use uvmask_core::format::FormatRegistry;
use uvmask_core::rle::build_runs;

use crate::io::stack_file;

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Input layer file
    #[arg(long)]
    pub r#in: PathBuf,

    #[arg(long)]
    pub width: u32,

    #[arg(long)]
    pub height: u32,

    /// Input format name (default: from the extension)
    #[arg(long)]
    pub from: Option<String>,
}

pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let reg = FormatRegistry::builtin();
    let src = stack_file::resolve(&reg, args.from.as_deref(), &args.r#in)?;
    let stack = stack_file::read_stack(&reg, src, &args.r#in, args.width, args.height)?;

    let props = stack.properties();
    println!("file         = {}", args.r#in.display());
    println!("format       = {}", src.name());
    println!(
        "size         = {}x{} px, {:.2}x{:.2} mm",
        props.size.x, props.size.y, props.size.millimeter.x, props.size.millimeter.y
    );
    println!("layers       = {}", stack.len());

    for (i, layer) in stack.layers().iter().enumerate() {
        let encoded = layer.encoded();
        let pixels = layer.pixels()?;
        let runs = build_runs(&pixels);
        println!("--- layer {} ---", i);
        println!("z            = {:.3} mm", layer.z);
        println!("runs         = {}", runs.len());
        println!("packed_bytes = {}", encoded.data.len());
        println!("fingerprint  = 0x{:016x}", encoded.fingerprint);
        println!("weight       = {}", encoded.weight);
        println!("exposure     = {:.2}s", stack.layer_exposure(i).light_on_time);
    }
    Ok(())
}
