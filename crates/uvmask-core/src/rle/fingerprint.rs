// crates/uvmask-core/src/rle/fingerprint.rs

use crc::{Crc, CRC_64_XZ};

use crate::error::Result;
use crate::rle::token::{Token, TokenReader};

const CRC64: Crc<u64> = Crc::<u64>::new(&CRC_64_XZ);

/// 64-bit content hash of a packed layer (CRC-64, ECMA-182 polynomial).
///
/// Byte-identical streams always hash equal, which is what makes it usable
/// as the layer deduplication key.
pub fn fingerprint(packed: &[u8]) -> u64 {
    CRC64.checksum(packed)
}

/// Exposed-pixel accumulator, updated once per packed token.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Weight(u64);

impl Weight {
    #[inline]
    pub fn add(&mut self, tok: Token) {
        if tok.code != 0 {
            self.0 += tok.length as u64;
        }
    }

    #[inline]
    pub fn total(self) -> u64 {
        self.0
    }
}

/// Weight of an already packed stream.
pub fn weigh(packed: &[u8]) -> Result<u64> {
    let mut w = Weight::default();
    for tok in TokenReader::new(packed) {
        w.add(tok?);
    }
    Ok(w.total())
}
