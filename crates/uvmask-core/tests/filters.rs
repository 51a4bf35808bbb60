// crates/uvmask-core/tests/filters.rs

use uvmask_core::filter::{BottomFilter, ExposureFilter, ExposurePatch, Filter, Pipeline, SelectFilter};
use uvmask_core::model::defaults::properties_for;
use uvmask_core::{Layer, LayerStack, PixelBuffer, UvError};

fn stack(n: usize) -> LayerStack {
    let p = properties_for(6, 4);
    let layers = (0..n)
        .map(|i| Layer::from_pixels(p.layer_z(i), PixelBuffer::filled(6, 4, if i % 2 == 0 { 0xff } else { 0 })))
        .collect();
    LayerStack::new(p, layers).unwrap()
}

#[test]
fn bottom_filter_only_touches_given_fields() {
    let s = stack(6);
    let before = s.properties().bottom;

    let f = BottomFilter {
        count: Some(3),
        exposure: ExposurePatch {
            light_on_time: Some(42.0),
            light_pwm: Some(200),
            ..Default::default()
        },
    };
    let out = f.apply(s).unwrap();
    let b = out.properties().bottom;

    assert_eq!(b.count, 3);
    assert_eq!(b.exposure.light_on_time, 42.0);
    assert_eq!(b.exposure.light_pwm, 200);
    assert_eq!(b.exposure.light_off_time, before.exposure.light_off_time);
    assert_eq!(b.exposure.lift_height, before.exposure.lift_height);
    assert_eq!(b.transition, before.transition);

    assert_eq!(out.layer_exposure(2).light_on_time, 42.0);
    assert_eq!(out.layer_exposure(3), out.properties().exposure);
}

#[test]
fn exposure_filter_rewrites_default_exposure() {
    let f = ExposureFilter {
        exposure: ExposurePatch {
            light_on_time: Some(2.5),
            retract_speed: Some(90.0),
            ..Default::default()
        },
    };
    let out = f.apply(stack(8)).unwrap();
    let bottom_count = out.properties().bottom.count;

    assert_eq!(out.layer_exposure(bottom_count).light_on_time, 2.5);
    assert_eq!(out.layer_exposure(bottom_count).retract_speed, 90.0);
    assert_ne!(out.layer_exposure(0).light_on_time, 2.5);
}

#[test]
fn invalid_patch_is_rejected() {
    let f = ExposureFilter {
        exposure: ExposurePatch {
            lift_speed: Some(-1.0),
            ..Default::default()
        },
    };
    assert!(matches!(f.apply(stack(2)).unwrap_err(), UvError::Validation(_)));
}

#[test]
fn select_keeps_range_and_renumbers() {
    let out = SelectFilter {
        first: 3,
        count: Some(2),
    }
    .apply(stack(8))
    .unwrap();

    assert_eq!(out.len(), 2);
    assert_eq!(out.properties().size.layers, 2);
    assert!((out.layer(0).unwrap().z - 0.05).abs() < 1e-6);
    assert!((out.layer(1).unwrap().z - 0.10).abs() < 1e-6);
    // layer 3 of the source was blank
    assert!(out.layer(0).unwrap().pixels().unwrap().is_blank());
    assert!(out.properties().bottom.count <= 2);
}

#[test]
fn select_past_the_end() {
    let out = SelectFilter { first: 4, count: None }.apply(stack(4)).unwrap();
    assert!(out.is_empty());
    assert_eq!(out.properties().bottom.count, 0);

    let err = SelectFilter { first: 5, count: None }.apply(stack(4)).unwrap_err();
    assert!(matches!(err, UvError::Validation(_)));
}

#[test]
fn pipeline_applies_left_to_right() {
    let p = Pipeline::new()
        .then(SelectFilter { first: 0, count: Some(4) })
        .then(BottomFilter {
            count: Some(10),
            ..Default::default()
        })
        .then(SelectFilter { first: 1, count: None });
    assert_eq!(p.len(), 3);

    let out = p.run(stack(8)).unwrap();
    assert_eq!(out.len(), 3);
    // bottom count set to 10 then clamped by the second select
    assert_eq!(out.properties().bottom.count, 3);
}

#[test]
fn pipeline_stops_at_first_error() {
    let p = Pipeline::new()
        .then(SelectFilter { first: 9, count: None })
        .then(BottomFilter {
            count: Some(1),
            ..Default::default()
        });
    assert!(p.apply(stack(2)).is_err());
}
