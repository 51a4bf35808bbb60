// crates/uvmask-core/src/filter/mod.rs
//
// Stack transformations. Each filter consumes a stack and returns a new
// one; a Pipeline applies them left to right.

pub mod bottom;
pub mod exposure;
pub mod select;

use log::debug;

use crate::error::Result;
use crate::model::{Exposure, LayerStack};

pub use bottom::BottomFilter;
pub use exposure::ExposureFilter;
pub use select::SelectFilter;

pub trait Filter: Send + Sync {
    fn name(&self) -> &str;
    fn apply(&self, stack: LayerStack) -> Result<LayerStack>;
}

#[derive(Default)]
pub struct Pipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then<F: Filter + 'static>(mut self, filter: F) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn push(&mut self, filter: Box<dyn Filter>) {
        self.filters.push(filter);
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Stops at the first failing filter.
    pub fn run(&self, mut stack: LayerStack) -> Result<LayerStack> {
        for f in self.filters.iter() {
            debug!("filter {}: {} layers in", f.name(), stack.len());
            stack = f.apply(stack)?;
        }
        Ok(stack)
    }
}

impl Filter for Pipeline {
    fn name(&self) -> &str {
        "pipeline"
    }

    fn apply(&self, stack: LayerStack) -> Result<LayerStack> {
        self.run(stack)
    }
}

/// Optional field overrides shared by the exposure-editing filters.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ExposurePatch {
    pub light_on_time: Option<f32>,
    pub light_off_time: Option<f32>,
    pub light_pwm: Option<u8>,
    pub lift_height: Option<f32>,
    pub lift_speed: Option<f32>,
    pub retract_height: Option<f32>,
    pub retract_speed: Option<f32>,
}

impl ExposurePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(&self, e: &mut Exposure) {
        if let Some(v) = self.light_on_time {
            e.light_on_time = v;
        }
        if let Some(v) = self.light_off_time {
            e.light_off_time = v;
        }
        if let Some(v) = self.light_pwm {
            e.light_pwm = v;
        }
        if let Some(v) = self.lift_height {
            e.lift_height = v;
        }
        if let Some(v) = self.lift_speed {
            e.lift_speed = v;
        }
        if let Some(v) = self.retract_height {
            e.retract_height = v;
        }
        if let Some(v) = self.retract_speed {
            e.retract_speed = v;
        }
    }
}
