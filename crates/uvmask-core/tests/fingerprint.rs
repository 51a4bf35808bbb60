// crates/uvmask-core/tests/fingerprint.rs

use uvmask_core::rle::{fingerprint, weigh};
use uvmask_core::{encode_layer, PixelBuffer};

fn disc(size: u32, r: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::new(size, size);
    let c = size as i64 / 2;
    for y in 0..size {
        for x in 0..size {
            let dx = x as i64 - c;
            let dy = y as i64 - c;
            if dx * dx + dy * dy <= (r * r) as i64 {
                buf.set(x, y, 0xff);
            }
        }
    }
    buf
}

#[test]
fn identical_buffers_share_a_fingerprint() {
    let a = encode_layer(&disc(64, 20));
    let b = encode_layer(&disc(64, 20));
    assert_eq!(a.fingerprint, b.fingerprint);
    assert_eq!(a.data, b.data);
}

#[test]
fn single_pixel_flip_changes_fingerprint() {
    let base = disc(64, 20);
    let h0 = encode_layer(&base).fingerprint;

    for &(x, y) in &[(0, 0), (32, 32), (63, 63), (12, 32)] {
        let mut flipped = base.clone();
        let v = flipped.get(x, y).unwrap();
        flipped.set(x, y, if v == 0 { 0xff } else { 0 });
        assert_ne!(encode_layer(&flipped).fingerprint, h0, "flip at {},{}", x, y);
    }
}

#[test]
fn fingerprint_is_a_function_of_the_stream() {
    let e = encode_layer(&disc(40, 11));
    assert_eq!(fingerprint(&e.data), e.fingerprint);
    // CRC-64/XZ check value
    assert_eq!(fingerprint(b"123456789"), 0x995d_c9bb_df19_39fa);
}

#[test]
fn weight_counts_exposed_pixels() {
    let buf = disc(64, 20);
    let lit = buf.pixels().iter().filter(|&&p| p != 0).count() as u64;
    let e = encode_layer(&buf);
    assert_eq!(e.weight, lit);
    assert_eq!(weigh(&e.data).unwrap(), lit);
}

#[test]
fn weight_is_zero_only_for_blank_layers() {
    let blank = encode_layer(&PixelBuffer::new(50, 50));
    assert_eq!(blank.weight, 0);
    assert!(blank.is_blank());

    let mut one = PixelBuffer::new(50, 50);
    one.set(49, 49, 0x41);
    let e = encode_layer(&one);
    assert_eq!(e.weight, 1);
    assert!(!e.is_blank());
}

#[test]
fn blank_buffer_agrees_with_zero_weight() {
    // intensity 1 shares gray code 0 with black
    let dim = PixelBuffer::filled(16, 16, 0x01);
    let e = encode_layer(&dim);
    assert_eq!(e.weight, 0);
    assert!(dim.is_blank());
    assert!(e.is_blank());

    let mut lit = dim.clone();
    lit.set(3, 3, 0x02);
    assert!(!lit.is_blank());
    assert_eq!(encode_layer(&lit).weight, 1);
}
