// crates/uvmask-core/src/model/exposure.rs

/// Curing and mechanical parameters for one layer.
///
/// Times are seconds, heights millimetres, speeds mm/min.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Exposure {
    pub light_on_time: f32,
    pub light_off_time: f32,
    /// 0..=255
    pub light_pwm: u8,
    pub lift_height: f32,
    pub lift_speed: f32,
    pub retract_height: f32,
    pub retract_speed: f32,
}

/// Bottom-layer override: the first `count` layers use `exposure`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bottom {
    pub count: usize,
    /// Layers over which firmware ramps from bottom to normal exposure.
    pub transition: usize,
    pub exposure: Exposure,
}

/// Exposure in effect for layer `index`.
///
/// Layers below `bottom_count` use `bottom`, all others use `normal`.
#[inline]
pub fn effective_exposure(index: usize, bottom_count: usize, bottom: &Exposure, normal: &Exposure) -> Exposure {
    if index < bottom_count {
        *bottom
    } else {
        *normal
    }
}
