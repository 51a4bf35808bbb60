// crates/uvmask-core/src/format/mod.rs
//
// Explicit format table. Nothing registers itself: callers build the
// registry they need, usually `FormatRegistry::builtin()`.

pub mod raw;

use std::path::Path;

use crate::error::{Result, UvError};
use crate::model::{LayerStack, Properties};

pub use raw::{GrayFormat, RleFormat};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub read: bool,
    pub write: bool,
}

impl Capabilities {
    pub const READ_WRITE: Self = Self {
        read: true,
        write: true,
    };
    pub const READ_ONLY: Self = Self {
        read: true,
        write: false,
    };
}

pub trait Format: Send + Sync {
    fn name(&self) -> &'static str;

    /// Lower-case file extensions without the dot.
    fn extensions(&self) -> &'static [&'static str];

    fn capabilities(&self) -> Capabilities;

    /// Build a stack from `bytes`. `props` supplies whatever the format
    /// does not carry itself (for header-less formats: everything).
    fn decode(&self, bytes: &[u8], props: &Properties) -> Result<LayerStack>;

    fn encode(&self, stack: &LayerStack) -> Result<Vec<u8>>;
}

#[derive(Default)]
pub struct FormatRegistry {
    formats: Vec<Box<dyn Format>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut r = Self::new();
        r.register(Box::new(GrayFormat));
        r.register(Box::new(RleFormat));
        r
    }

    /// Later registrations shadow earlier ones with the same name.
    pub fn register(&mut self, format: Box<dyn Format>) {
        self.formats.retain(|f| f.name() != format.name());
        self.formats.push(format);
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.formats.iter().map(|f| f.name()).collect()
    }

    pub fn by_name(&self, name: &str) -> Result<&dyn Format> {
        self.formats
            .iter()
            .rev()
            .find(|f| f.name().eq_ignore_ascii_case(name))
            .map(|f| f.as_ref())
            .ok_or_else(|| UvError::Format(format!("unknown format '{name}'")))
    }

    pub fn by_extension(&self, ext: &str) -> Result<&dyn Format> {
        let ext = ext.trim_start_matches('.');
        self.formats
            .iter()
            .rev()
            .find(|f| f.extensions().iter().any(|e| e.eq_ignore_ascii_case(ext)))
            .map(|f| f.as_ref())
            .ok_or_else(|| UvError::Format(format!("no format for extension '.{ext}'")))
    }

    pub fn for_path(&self, path: &Path) -> Result<&dyn Format> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| UvError::Format(format!("{}: no file extension", path.display())))?;
        self.by_extension(ext)
    }

    pub fn decode(&self, format: &dyn Format, bytes: &[u8], props: &Properties) -> Result<LayerStack> {
        if !format.capabilities().read {
            return Err(UvError::Format(format!("{}: format cannot be read", format.name())));
        }
        format.decode(bytes, props)
    }

    pub fn encode(&self, format: &dyn Format, stack: &LayerStack) -> Result<Vec<u8>> {
        if !format.capabilities().write {
            return Err(UvError::Format(format!("{}: format cannot be written", format.name())));
        }
        format.encode(stack)
    }
}
