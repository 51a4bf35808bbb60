// crates/uvmask-core/tests/stack_encode.rs

use uvmask_core::model::defaults::properties_for;
use uvmask_core::stack::{decode_stack, encode_stack, pack_stack, LayerTable};
use uvmask_core::{encode_layer, EncodedLayer, Layer, LayerImage, LayerStack, PixelBuffer, UvError};

fn bar(width: u32, height: u32, from: u32, to: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::new(width, height);
    for y in from..to.min(height) {
        for x in 0..width {
            buf.set(x, y, 0xff);
        }
    }
    buf
}

/// A column of repeated cross-sections: 0,1,0,1,2,0
fn repeating_stack() -> LayerStack {
    let p = properties_for(32, 16);
    let shapes = [bar(32, 16, 2, 5), bar(32, 16, 4, 12), bar(32, 16, 0, 16)];
    let order = [0usize, 1, 0, 1, 2, 0];
    let layers = order
        .iter()
        .enumerate()
        .map(|(i, &s)| Layer::from_pixels(p.layer_z(i), shapes[s].clone()))
        .collect();
    LayerStack::new(p, layers).unwrap()
}

#[test]
fn parallel_encode_matches_serial() {
    let s = repeating_stack();
    let par = encode_stack(&s);
    assert_eq!(par.len(), 6);
    for (layer, e) in s.layers().iter().zip(par.iter()) {
        let LayerImage::Pixels(p) = &layer.image else {
            panic!("expected pixel layer");
        };
        assert_eq!(*e, encode_layer(p));
    }
}

#[test]
fn decode_stack_restores_pixels() {
    let s = repeating_stack();
    let packed = pack_stack(s.clone()).unwrap();
    assert!(packed
        .layers()
        .iter()
        .all(|l| matches!(l.image, LayerImage::Packed(_))));

    let pixels = decode_stack(&packed).unwrap();
    for (layer, p) in s.layers().iter().zip(pixels.iter()) {
        assert_eq!(*layer.pixels().unwrap(), *p);
    }
}

#[test]
fn layer_table_dedups_repeated_sections() {
    let encoded = encode_stack(&repeating_stack());
    let t = LayerTable::build(&encoded);

    assert_eq!(t.unique, vec![0, 1, 4]);
    assert_eq!(t.slot, vec![0, 1, 0, 1, 2, 0]);
    assert_eq!(t.duplicate_count(), 3);
    assert_eq!(t.source_of(5), Some(0));
    assert_eq!(t.source_of(3), Some(1));
    assert_eq!(t.source_of(6), None);

    let saved = encoded[0].data.len() * 2 + encoded[1].data.len();
    assert_eq!(t.bytes_saved, saved as u64);
}

#[test]
fn equal_fingerprints_with_different_bytes_stay_distinct() {
    let a = encode_layer(&bar(8, 8, 0, 3));
    let mut b = encode_layer(&bar(8, 8, 0, 5));
    b.fingerprint = a.fingerprint;

    let t = LayerTable::build(&[a, b]);
    assert_eq!(t.unique, vec![0, 1]);
}

#[test]
fn first_bad_layer_fails_the_decode() {
    let p = properties_for(4, 4);
    let good = encode_layer(&PixelBuffer::new(4, 4));
    let bad = EncodedLayer {
        data: vec![0x80, 0x0f],
        ..good.clone()
    };
    let layers = vec![
        Layer::from_encoded(0.05, good),
        Layer::from_encoded(0.10, bad),
    ];
    let s = LayerStack::new(p, layers).unwrap();

    let err = decode_stack(&s).unwrap_err();
    assert!(matches!(err, UvError::SizeMismatch { expected: 16, actual: 15 }));
}

#[test]
fn layers_must_match_stack_size() {
    let p = properties_for(4, 4);
    let err = LayerStack::new(p.clone(), vec![Layer::from_pixels(0.05, PixelBuffer::new(4, 5))]).unwrap_err();
    assert!(matches!(err, UvError::Validation(_)));

    let mut s = LayerStack::empty(p);
    s.push(Layer::from_pixels(0.05, PixelBuffer::new(4, 4))).unwrap();
    assert!(s.push(Layer::from_pixels(0.10, PixelBuffer::new(3, 4))).is_err());
    assert_eq!(s.len(), 1);
    assert_eq!(s.properties().size.layers, 1);
}

#[test]
fn from_packed_checks_size_and_weighs() {
    let e = EncodedLayer::from_packed(8, 21, vec![0xff, 0x80, 0x85, 0x80, 0x23]).unwrap();
    assert_eq!(e.weight, 133);
    assert_eq!(e.fingerprint, uvmask_core::rle::fingerprint(&e.data));

    let err = EncodedLayer::from_packed(8, 20, vec![0xff, 0x80, 0x85, 0x80, 0x23]).unwrap_err();
    assert!(matches!(err, UvError::SizeMismatch { expected: 160, actual: 168 }));
}

#[test]
fn padded_streams_are_repacked_to_the_shortest_form() {
    let pixels = PixelBuffer::from_pixels(4, 1, vec![0xff, 0x00, 0x00, 0x00]).unwrap();
    let reference = encode_layer(&pixels);

    // explicit length 1, then the black run split in two
    let padded = EncodedLayer::from_packed(4, 1, vec![0xff, 0x01, 0x80, 0x02, 0x00]).unwrap();
    assert_eq!(padded.data, reference.data);
    assert_eq!(padded.fingerprint, reference.fingerprint);
    assert_eq!(padded.weight, 1);

    let table = LayerTable::build(&[reference, padded]);
    assert_eq!(table.duplicate_count(), 1);
}
