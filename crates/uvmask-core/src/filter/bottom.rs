// crates/uvmask-core/src/filter/bottom.rs

use log::info;

use crate::error::Result;
use crate::filter::{ExposurePatch, Filter};
use crate::model::LayerStack;
use crate::validate::validate_exposure;

/// Rewrites the bottom-layer override.
///
/// Layers without their own exposure pick the new values up through the
/// shared bottom/default lookup.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BottomFilter {
    pub count: Option<usize>,
    pub exposure: ExposurePatch,
}

impl Filter for BottomFilter {
    fn name(&self) -> &str {
        "bottom"
    }

    fn apply(&self, mut stack: LayerStack) -> Result<LayerStack> {
        let mut bottom = stack.properties().bottom;

        if let Some(count) = self.count {
            info!("setting bottom layer count {}", count);
            bottom.count = count;
        }
        self.exposure.apply_to(&mut bottom.exposure);
        validate_exposure("bottom.exposure", &bottom.exposure)?;

        *stack.properties_mut().bottom() = bottom;
        Ok(stack)
    }
}
