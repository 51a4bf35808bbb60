// crates/uvmask-core/src/rle/length.rs
//
// Prefix-coded big-endian run length, 1..=4 bytes:
//   0xxxxxxx                              < 0x80
//   10xxxxxx xxxxxxxx                     < 0x4000
//   110xxxxx xxxxxxxx xxxxxxxx            < 0x20_0000
//   1110xxxx xxxxxxxx xxxxxxxx xxxxxxxx   < 0x1000_0000

use crate::error::{Result, UvError};

/// Longest run a single token can carry.
pub const MAX_RUN: u32 = 0x0FFF_FFFF;

/// Append `len` in its shortest form. `len` must be in `1..=MAX_RUN`.
pub fn put_len(len: u32, out: &mut Vec<u8>) {
    debug_assert!(len >= 1 && len <= MAX_RUN);
    if len < 0x80 {
        out.push(len as u8);
    } else if len < 0x4000 {
        out.push(0x80 | (len >> 8) as u8);
        out.push(len as u8);
    } else if len < 0x20_0000 {
        out.push(0xC0 | (len >> 16) as u8);
        out.push((len >> 8) as u8);
        out.push(len as u8);
    } else {
        out.push(0xE0 | (len >> 24) as u8);
        out.push((len >> 16) as u8);
        out.push((len >> 8) as u8);
        out.push(len as u8);
    }
}

/// Encoded size of `len` in bytes.
pub fn len_size(len: u32) -> usize {
    match len {
        0..=0x7F => 1,
        0x80..=0x3FFF => 2,
        0x4000..=0x1F_FFFF => 3,
        _ => 4,
    }
}

/// Read one length field at `*i`, advancing the cursor.
pub fn get_len(bytes: &[u8], i: &mut usize) -> Result<u32> {
    let lead = next(bytes, i)?;

    let (extra, mut acc) = if lead & 0x80 == 0 {
        (0, lead as u32)
    } else if lead & 0x40 == 0 {
        (1, (lead & 0x3F) as u32)
    } else if lead & 0x20 == 0 {
        (2, (lead & 0x1F) as u32)
    } else if lead & 0x10 == 0 {
        (3, (lead & 0x0F) as u32)
    } else {
        return Err(UvError::MalformedStream(format!(
            "invalid length lead byte 0x{:02x} at offset {}",
            lead,
            *i - 1
        )));
    };

    for _ in 0..extra {
        acc = (acc << 8) | next(bytes, i)? as u32;
    }

    if acc == 0 {
        return Err(UvError::MalformedStream(format!(
            "zero-length run ending at offset {}",
            *i
        )));
    }
    Ok(acc)
}

#[inline]
fn next(bytes: &[u8], i: &mut usize) -> Result<u8> {
    let b = *bytes.get(*i).ok_or_else(|| {
        UvError::MalformedStream(format!("length field truncated at offset {}", *i))
    })?;
    *i += 1;
    Ok(b)
}
