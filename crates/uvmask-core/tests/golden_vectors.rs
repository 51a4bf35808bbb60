// crates/uvmask-core/tests/golden_vectors.rs

use uvmask_core::{decode_layer, encode_layer, PixelBuffer};

fn pattern_8x21() -> PixelBuffer {
    let mut pix = Vec::with_capacity(8 * 21);
    pix.extend_from_slice(&[0xff; 8]);
    pix.extend_from_slice(&[0x00; 8]);
    for _ in 0..16 {
        pix.extend_from_slice(&[0xff; 8]);
    }
    pix.extend_from_slice(&[0xff, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0xff]);
    pix.extend_from_slice(&[0xff, 0x00, 0xff, 0x00, 0xff, 0x00, 0xff, 0x00]);
    pix.extend_from_slice(&[0x00; 8]);
    PixelBuffer::from_pixels(8, 21, pix).unwrap()
}

const PATTERN_RLE: [u8; 19] = [
    0xff, 0x08, // 8 white
    0x80, 0x08, // 8 black
    0xff, 0x80, 0x85, // 133 white
    0x80, 0x02, // 2 black
    0xff, 0x02, // 2 white
    0x00, 0x7f, 0x00, 0x7f, 0x00, 0x7f, // alternating single pixels
    0x80, 0x09, // 9 black
];

#[test]
fn pattern_8x21_encodes_to_reference_stream() {
    let e = encode_layer(&pattern_8x21());
    assert_eq!(e.data, PATTERN_RLE);
    assert_eq!(e.fingerprint, 0x1be2583a56fdcbe9);
    assert_eq!(e.weight, 146);
    assert_eq!((e.width, e.height), (8, 21));
}

#[test]
fn blank_127x4_encodes_to_reference_stream() {
    let e = encode_layer(&PixelBuffer::new(127, 4));
    assert_eq!(e.data, [0x80, 0x81, 0xfc]);
    assert_eq!(e.fingerprint, 0x6af46758cc323d17);
    assert_eq!(e.weight, 0);
}

#[test]
fn reference_streams_decode_to_original_buffers() {
    assert_eq!(decode_layer(&PATTERN_RLE, 8, 21).unwrap(), pattern_8x21());
    assert_eq!(
        decode_layer(&[0x80, 0x81, 0xfc], 127, 4).unwrap(),
        PixelBuffer::new(127, 4)
    );
}

#[test]
fn single_pixel_layers() {
    for v in [0x00u8, 0xff] {
        let buf = PixelBuffer::filled(1, 1, v);
        let e = encode_layer(&buf);
        assert_eq!(e.data, [v >> 1]);
        assert_eq!(decode_layer(&e.data, 1, 1).unwrap(), buf);
    }
}

#[test]
fn zero_size_layer_is_an_empty_stream() {
    let e = encode_layer(&PixelBuffer::new(0, 0));
    assert!(e.data.is_empty());
    assert_eq!(e.weight, 0);

    let d = decode_layer(&[], 0, 0).unwrap();
    assert!(d.is_empty());
    assert_eq!(d.dimensions(), (0, 0));
}

#[test]
fn run_of_exactly_128_uses_two_byte_length() {
    let buf = PixelBuffer::filled(128, 1, 0xff);
    let e = encode_layer(&buf);
    assert_eq!(e.data, [0xff, 0x80, 0x80]);
    assert_eq!(e.weight, 128);
    assert_eq!(decode_layer(&e.data, 128, 1).unwrap(), buf);

    let buf = PixelBuffer::filled(127, 1, 0xff);
    assert_eq!(encode_layer(&buf).data, [0xff, 0x7f]);
}
