// crates/uvmask-core/src/codec.rs
//
// The two operations format plugins consume: encode_layer / decode_layer.

use log::debug;

use crate::error::{Result, UvError};
use crate::pixel::{area, PixelBuffer};
use crate::rle::fingerprint::{fingerprint, Weight};
use crate::rle::run::build_runs;
use crate::rle::length::MAX_RUN;
use crate::rle::token::{dequantize, pack_runs, unpack_runs, Token, TokenReader};

/// A packed layer plus the metadata format plugins embed next to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedLayer {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub fingerprint: u64,
    pub weight: u64,
}

impl EncodedLayer {
    /// Wrap an existing packed stream, computing fingerprint and weight.
    ///
    /// The stream is checked against the declared size without unpacking it.
    /// A stream that is valid but not in the packer's shortest form (padded
    /// length fields, split runs) is re-packed so equal pixels always carry
    /// equal bytes and fingerprints.
    pub fn from_packed(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = area(width, height);
        let mut actual: u64 = 0;
        let mut weight = Weight::default();
        let mut canonical = true;
        let mut prev: Option<Token> = None;

        let mut reader = TokenReader::new(&data);
        let mut start = reader.position();
        while let Some(tok) = reader.next() {
            let tok = tok?;
            let end = reader.position();
            if end - start != tok.encoded_len() {
                canonical = false;
            }
            if let Some(p) = prev {
                if p.code == tok.code && p.length != MAX_RUN {
                    canonical = false;
                }
            }
            actual += tok.length as u64;
            weight.add(tok);
            prev = Some(tok);
            start = end;
        }
        if actual != expected {
            return Err(UvError::SizeMismatch { expected, actual });
        }

        let data = if canonical {
            data
        } else {
            debug!("re-packing non-canonical {}x{} stream ({} bytes)", width, height, data.len());
            pack_runs(&unpack_runs(&data)?).data
        };

        Ok(Self {
            width,
            height,
            fingerprint: fingerprint(&data),
            data,
            weight: weight.total(),
        })
    }

    pub fn decode(&self) -> Result<PixelBuffer> {
        decode_layer(&self.data, self.width, self.height)
    }

    #[inline]
    pub fn is_blank(&self) -> bool {
        self.weight == 0
    }
}

/// Pack one layer: pixels -> maximal runs -> tokens.
pub fn encode_layer(buf: &PixelBuffer) -> EncodedLayer {
    let packed = pack_runs(&build_runs(buf));
    EncodedLayer {
        width: buf.width(),
        height: buf.height(),
        fingerprint: fingerprint(&packed.data),
        weight: packed.weight,
        data: packed.data,
    }
}

/// Unpack one layer into a `width` x `height` buffer.
///
/// Fails with `SizeMismatch` as soon as the stream overshoots the declared
/// size, or at the end if it falls short. No partial buffer is returned.
///
/// The declared size is untrusted: the buffer grows with the tokens actually
/// read, so a short stream cannot force a huge allocation up front.
pub fn decode_layer(packed: &[u8], width: u32, height: u32) -> Result<PixelBuffer> {
    let expected = area(width, height);
    let mut pix: Vec<u8> = Vec::new();

    for tok in TokenReader::new(packed) {
        let tok = tok?;
        let actual = pix.len() as u64 + tok.length as u64;
        if actual > expected {
            return Err(UvError::SizeMismatch { expected, actual });
        }
        pix.resize(actual as usize, dequantize(tok.code));
    }

    if pix.len() as u64 != expected {
        return Err(UvError::SizeMismatch {
            expected,
            actual: pix.len() as u64,
        });
    }
    PixelBuffer::from_pixels(width, height, pix)
}
