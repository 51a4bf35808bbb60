// crates/uvmask-core/src/model/defaults.rs

use std::collections::BTreeMap;

use crate::model::exposure::{Bottom, Exposure};
use crate::model::properties::{Properties, Size, SizeMillimeter};

/// 2K mono LCD, 47.25um pixels.
pub const DEFAULT_RESOLUTION: (u32, u32) = (1440, 2560);
pub const DEFAULT_PIXEL_MM: f32 = 0.04725;
pub const DEFAULT_LAYER_HEIGHT: f32 = 0.05;

pub fn default_exposure() -> Exposure {
    Exposure {
        light_on_time: 8.0,
        light_off_time: 1.0,
        light_pwm: 255,
        lift_height: 5.0,
        lift_speed: 60.0,
        retract_height: 5.0,
        retract_speed: 150.0,
    }
}

pub fn default_bottom() -> Bottom {
    Bottom {
        count: 5,
        transition: 0,
        exposure: Exposure {
            light_on_time: 60.0,
            ..default_exposure()
        },
    }
}

/// Baseline printer/material properties with no layers.
pub fn default_properties() -> Properties {
    let (x, y) = DEFAULT_RESOLUTION;
    properties_for(x, y)
}

/// Baseline properties resized to a `width` x `height` image.
/// Millimetre extents follow the default pixel pitch.
pub fn properties_for(width: u32, height: u32) -> Properties {
    Properties {
        size: Size {
            x: width,
            y: height,
            millimeter: SizeMillimeter {
                x: width as f32 * DEFAULT_PIXEL_MM,
                y: height as f32 * DEFAULT_PIXEL_MM,
            },
            layers: 0,
            layer_height: DEFAULT_LAYER_HEIGHT,
        },
        exposure: default_exposure(),
        bottom: default_bottom(),
        preview: BTreeMap::new(),
    }
}
