// crates/uvmask-core/src/filter/select.rs

use crate::error::{Result, UvError};
use crate::filter::Filter;
use crate::model::LayerStack;

/// Keeps layers `first .. first + count` (to the end when `count` is None).
///
/// Z heights are renumbered from the layer height and the bottom count is
/// clamped to the new layer count.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectFilter {
    pub first: usize,
    pub count: Option<usize>,
}

impl Filter for SelectFilter {
    fn name(&self) -> &str {
        "select"
    }

    fn apply(&self, stack: LayerStack) -> Result<LayerStack> {
        if self.first > stack.len() {
            return Err(UvError::Validation(format!(
                "select: first layer {} beyond stack of {}",
                self.first,
                stack.len()
            )));
        }

        let (mut props, layers) = stack.into_parts();
        let end = match self.count {
            Some(n) => self.first.saturating_add(n).min(layers.len()),
            None => layers.len(),
        };

        let kept: Vec<_> = layers
            .into_iter()
            .skip(self.first)
            .take(end - self.first)
            .enumerate()
            .map(|(i, mut l)| {
                l.z = props.layer_z(i);
                l
            })
            .collect();

        props.bottom.count = props.bottom.count.min(kept.len());
        LayerStack::new(props, kept)
    }
}
