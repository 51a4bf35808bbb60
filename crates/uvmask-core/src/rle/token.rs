// crates/uvmask-core/src/rle/token.rs

use crate::error::Result;
use crate::rle::fingerprint::Weight;
use crate::rle::length::{get_len, len_size, put_len, MAX_RUN};
use crate::rle::run::{Run, RunBuilder};

/// Color byte flag: a length field follows.
pub const LENGTH_FOLLOWS: u8 = 0x80;

/// 7-bit gray code carried by a color byte.
#[inline]
pub fn quantize(pixel: u8) -> u8 {
    pixel >> 1
}

/// Intensity a 7-bit code unpacks to. Non-zero codes set the low bit so
/// that code 0x7F restores full white.
#[inline]
pub fn dequantize(code: u8) -> u8 {
    let code = code & 0x7F;
    if code == 0 {
        0
    } else {
        (code << 1) | 1
    }
}

/// True when `pixel` survives a pack/unpack cycle unchanged.
#[inline]
pub fn is_representable(pixel: u8) -> bool {
    dequantize(quantize(pixel)) == pixel
}

/// One packed token: a 7-bit code and a run length in `1..=MAX_RUN`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub code: u8,
    pub length: u32,
}

impl Token {
    /// Append the token. Single pixels use the bare color byte.
    pub fn write(self, out: &mut Vec<u8>) {
        let code = self.code & 0x7F;
        if self.length == 1 {
            out.push(code);
        } else {
            out.push(code | LENGTH_FOLLOWS);
            put_len(self.length, out);
        }
    }

    pub fn encoded_len(self) -> usize {
        if self.length == 1 {
            1
        } else {
            1 + len_size(self.length)
        }
    }
}

/// Packed stream plus the weight accumulated while packing it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Packed {
    pub data: Vec<u8>,
    pub weight: u64,
}

/// Streaming token packer.
///
/// Runs are re-merged on their 7-bit code, so two intensities that share a
/// code never produce consecutive tokens. Runs longer than `MAX_RUN` are
/// split into several tokens of the same code.
#[derive(Debug, Default)]
pub struct TokenPacker {
    out: Vec<u8>,
    weight: Weight,
    pending: Option<(u8, u64)>,
}

impl TokenPacker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, run: Run) {
        if run.length == 0 {
            return;
        }
        let code = quantize(run.color);
        match self.pending.as_mut() {
            Some((c, len)) if *c == code => *len += run.length,
            _ => {
                if let Some((c, len)) = self.pending.replace((code, run.length)) {
                    self.emit(c, len);
                }
            }
        }
    }

    pub fn finish(mut self) -> Packed {
        if let Some((c, len)) = self.pending.take() {
            self.emit(c, len);
        }
        Packed {
            data: self.out,
            weight: self.weight.total(),
        }
    }

    fn emit(&mut self, code: u8, mut len: u64) {
        while len > 0 {
            let chunk = len.min(MAX_RUN as u64) as u32;
            let tok = Token { code, length: chunk };
            tok.write(&mut self.out);
            self.weight.add(tok);
            len -= chunk as u64;
        }
    }
}

pub fn pack_runs(runs: &[Run]) -> Packed {
    let mut p = TokenPacker::new();
    for &r in runs {
        p.push(r);
    }
    p.finish()
}

/// Iterator over the tokens of a packed stream.
///
/// Yields an error and then stops when the stream is malformed.
pub struct TokenReader<'a> {
    bytes: &'a [u8],
    pos: usize,
    failed: bool,
}

impl<'a> TokenReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: 0,
            failed: false,
        }
    }

    /// Byte offset of the next token.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl Iterator for TokenReader<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.bytes.len() {
            return None;
        }
        let color = self.bytes[self.pos];
        self.pos += 1;

        let code = color & 0x7F;
        if color & LENGTH_FOLLOWS == 0 {
            return Some(Ok(Token { code, length: 1 }));
        }

        match get_len(self.bytes, &mut self.pos) {
            Ok(length) => Some(Ok(Token { code, length })),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

/// Parse a packed stream back into a maximal run sequence of intensities.
pub fn unpack_runs(bytes: &[u8]) -> Result<Vec<Run>> {
    let mut b = RunBuilder::new();
    for tok in TokenReader::new(bytes) {
        let tok = tok?;
        b.push_run(dequantize(tok.code), tok.length as u64);
    }
    Ok(b.finish())
}
