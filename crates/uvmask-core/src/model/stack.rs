// crates/uvmask-core/src/model/stack.rs

use std::collections::BTreeMap;

use crate::error::Result;
use crate::model::exposure::{Bottom, Exposure};
use crate::model::layer::Layer;
use crate::model::properties::{Preview, PreviewType, Properties};
use crate::validate::{validate_layer, validate_properties};

/// Ordered layers plus the properties they share.
///
/// Every layer has the dimensions of `properties.size`, and
/// `properties.size.layers` always equals the layer count.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayerStack {
    properties: Properties,
    layers: Vec<Layer>,
}

impl LayerStack {
    pub fn new(mut properties: Properties, layers: Vec<Layer>) -> Result<Self> {
        validate_properties(&properties)?;
        for (index, layer) in layers.iter().enumerate() {
            validate_layer(&properties, index, layer)?;
        }
        properties.size.layers = layers.len();
        Ok(Self { properties, layers })
    }

    pub fn empty(mut properties: Properties) -> Self {
        properties.size.layers = 0;
        Self {
            properties,
            layers: Vec::new(),
        }
    }

    pub fn push(&mut self, layer: Layer) -> Result<()> {
        validate_layer(&self.properties, self.layers.len(), &layer)?;
        self.layers.push(layer);
        self.properties.size.layers = self.layers.len();
        Ok(())
    }

    #[inline]
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Mutable properties. Image size and layer count are owned by the
    /// stack; use `new` to change them.
    pub fn properties_mut(&mut self) -> PropertiesMut<'_> {
        PropertiesMut(&mut self.properties)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    #[inline]
    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    #[inline]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Mutable access for per-layer overrides (z, exposure).
    pub fn layer_mut(&mut self, index: usize) -> Option<LayerMut<'_>> {
        self.layers.get_mut(index).map(LayerMut)
    }

    /// Effective exposure: the layer override when present, else the
    /// bottom/default lookup from the properties.
    pub fn layer_exposure(&self, index: usize) -> Exposure {
        match self.layers.get(index).and_then(|l| l.exposure) {
            Some(e) => e,
            None => self.properties.layer_exposure(index),
        }
    }

    pub fn into_parts(self) -> (Properties, Vec<Layer>) {
        (self.properties, self.layers)
    }
}

/// Mutable view of the stack properties that keeps the size fixed.
pub struct PropertiesMut<'a>(&'a mut Properties);

impl PropertiesMut<'_> {
    pub fn exposure(&mut self) -> &mut Exposure {
        &mut self.0.exposure
    }

    pub fn bottom(&mut self) -> &mut Bottom {
        &mut self.0.bottom
    }

    pub fn preview(&mut self) -> &mut BTreeMap<PreviewType, Preview> {
        &mut self.0.preview
    }

    pub fn set_layer_height(&mut self, mm: f32) {
        self.0.size.layer_height = mm;
    }
}

/// Mutable view of one layer that keeps its image fixed.
pub struct LayerMut<'a>(&'a mut Layer);

impl LayerMut<'_> {
    pub fn set_z(&mut self, z: f32) {
        self.0.z = z;
    }

    pub fn set_exposure(&mut self, exposure: Option<Exposure>) {
        self.0.exposure = exposure;
    }
}
