// crates/uvmask-cli/src/io/stack_file.rs

use std::path::Path;

use anyhow::Context;
use log::debug;
use uvmask_core::format::{Format, FormatRegistry};
use uvmask_core::model::defaults::properties_for;
use uvmask_core::LayerStack;

/// Pick a format by explicit name, else by the path's extension.
pub fn resolve<'r>(reg: &'r FormatRegistry, name: Option<&str>, path: &Path) -> anyhow::Result<&'r dyn Format> {
    let f = match name {
        Some(n) => reg.by_name(n)?,
        None => reg.for_path(path)?,
    };
    Ok(f)
}

/// Read a header-less layer file of `width` x `height` pixels.
pub fn read_stack(
    reg: &FormatRegistry,
    format: &dyn Format,
    path: &Path,
    width: u32,
    height: u32,
) -> anyhow::Result<LayerStack> {
    let bytes = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let props = properties_for(width, height);
    debug!("{}: {} bytes as {}", path.display(), bytes.len(), format.name());
    let stack = reg
        .decode(format, &bytes, &props)
        .with_context(|| format!("decode {} as {}", path.display(), format.name()))?;
    Ok(stack)
}

/// Encode fully in memory, then write. Nothing touches `path` on failure.
pub fn write_stack(reg: &FormatRegistry, format: &dyn Format, path: &Path, stack: &LayerStack) -> anyhow::Result<usize> {
    let bytes = reg
        .encode(format, stack)
        .with_context(|| format!("encode {} as {}", path.display(), format.name()))?;
    std::fs::write(path, &bytes).with_context(|| format!("write {}", path.display()))?;
    Ok(bytes.len())
}
