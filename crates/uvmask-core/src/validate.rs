use crate::error::{Result, UvError};
use crate::model::{Exposure, Layer, Properties};

pub fn validate_properties(p: &Properties) -> Result<()> {
    // Zero-size images are legal (empty layers), negative geometry is not.
    if !(p.size.layer_height.is_finite() && p.size.layer_height >= 0.0) {
        return Err(UvError::Validation(format!(
            "layer_height must be finite and >= 0, got {}",
            p.size.layer_height
        )));
    }
    if !(p.size.millimeter.x >= 0.0 && p.size.millimeter.y >= 0.0) {
        return Err(UvError::Validation(format!(
            "bed size must be >= 0 mm, got {}x{}",
            p.size.millimeter.x, p.size.millimeter.y
        )));
    }

    validate_exposure("exposure", &p.exposure)?;
    validate_exposure("bottom.exposure", &p.bottom.exposure)?;

    for (kind, preview) in p.preview.iter() {
        let need = preview.width as u64 * preview.height as u64 * 4;
        if preview.rgba.len() as u64 != need {
            return Err(UvError::Validation(format!(
                "preview {:?} {}x{} needs {} bytes, got {}",
                kind,
                preview.width,
                preview.height,
                need,
                preview.rgba.len()
            )));
        }
    }

    Ok(())
}

pub fn validate_exposure(what: &str, e: &Exposure) -> Result<()> {
    let fields = [
        ("light_on_time", e.light_on_time),
        ("light_off_time", e.light_off_time),
        ("lift_height", e.lift_height),
        ("lift_speed", e.lift_speed),
        ("retract_height", e.retract_height),
        ("retract_speed", e.retract_speed),
    ];
    for (name, v) in fields {
        if !(v.is_finite() && v >= 0.0) {
            return Err(UvError::Validation(format!(
                "{what}.{name} must be finite and >= 0, got {v}"
            )));
        }
    }
    Ok(())
}

pub fn validate_layer(p: &Properties, index: usize, layer: &Layer) -> Result<()> {
    let want = p.bounds();
    let got = layer.dimensions();
    if got != want {
        return Err(UvError::Validation(format!(
            "layer {} is {}x{}, stack is {}x{}",
            index, got.0, got.1, want.0, want.1
        )));
    }
    if let Some(e) = layer.exposure.as_ref() {
        validate_exposure(&format!("layer[{index}].exposure"), e)?;
    }
    Ok(())
}
