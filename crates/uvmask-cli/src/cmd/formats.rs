use uvmask_core::format::FormatRegistry;

pub fn run() -> anyhow::Result<()> {
    let reg = FormatRegistry::builtin();
    for name in reg.names() {
        let f = reg.by_name(name)?;
        let caps = f.capabilities();
        println!(
            "{:<8} {}{} .{}",
            name,
            if caps.read { "r" } else { "-" },
            if caps.write { "w" } else { "-" },
            f.extensions().join(" .")
        );
    }
    Ok(())
}
