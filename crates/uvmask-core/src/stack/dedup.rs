// crates/uvmask-core/src/stack/dedup.rs

use std::collections::HashMap;

use log::debug;

use crate::codec::EncodedLayer;

/// Deduplicated layer table for format writers.
///
/// `unique` lists the indices of distinct layers in first-appearance order;
/// `slot[i]` is the position in `unique` whose data layer `i` reuses.
/// Layers match when fingerprints agree and the bytes are identical.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayerTable {
    pub unique: Vec<usize>,
    pub slot: Vec<usize>,
    pub bytes_saved: u64,
}

impl LayerTable {
    pub fn build(layers: &[EncodedLayer]) -> Self {
        let mut by_hash: HashMap<u64, Vec<usize>> = HashMap::new();
        let mut t = LayerTable {
            unique: Vec::new(),
            slot: Vec::with_capacity(layers.len()),
            bytes_saved: 0,
        };

        for (i, layer) in layers.iter().enumerate() {
            let candidates = by_hash.entry(layer.fingerprint).or_default();
            let hit = candidates
                .iter()
                .copied()
                .find(|&s| layers[t.unique[s]].data == layer.data);

            match hit {
                Some(s) => {
                    t.slot.push(s);
                    t.bytes_saved += layer.data.len() as u64;
                }
                None => {
                    let s = t.unique.len();
                    t.unique.push(i);
                    candidates.push(s);
                    t.slot.push(s);
                }
            }
        }

        debug!(
            "layer table: {} layers, {} unique, {} bytes saved",
            layers.len(),
            t.unique.len(),
            t.bytes_saved
        );
        t
    }

    /// Index of the layer whose data layer `index` reuses.
    pub fn source_of(&self, index: usize) -> Option<usize> {
        self.slot.get(index).map(|&s| self.unique[s])
    }

    pub fn duplicate_count(&self) -> usize {
        self.slot.len() - self.unique.len()
    }
}
