// crates/uvmask-core/src/filter/exposure.rs

use crate::error::Result;
use crate::filter::{ExposurePatch, Filter};
use crate::model::LayerStack;
use crate::validate::validate_exposure;

/// Rewrites the default (non-bottom) exposure.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ExposureFilter {
    pub exposure: ExposurePatch,
}

impl Filter for ExposureFilter {
    fn name(&self) -> &str {
        "exposure"
    }

    fn apply(&self, mut stack: LayerStack) -> Result<LayerStack> {
        let mut exposure = stack.properties().exposure;
        self.exposure.apply_to(&mut exposure);
        validate_exposure("exposure", &exposure)?;

        *stack.properties_mut().exposure() = exposure;
        Ok(stack)
    }
}
