//! Sample buffer and the raster builder that fills it.

use alloc::boxed::Box;
use alloc::vec::Vec;

use enough::Stop;

use crate::error::PnmError;
use crate::limits::Limits;
use crate::reader::CHUNK_SIZE;
use crate::source::ByteSource;
use crate::tokenizer::Tokenizer;

/// Flat sample buffer, row-major and channel-interleaved:
/// `index = (y * width + x) * depth + channel`.
///
/// Elements are 8 bits wide when `maxval <= 255` and 16 bits otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Samples {
    U8(Vec<u8>),
    U16(Vec<u16>),
}

impl Default for Samples {
    fn default() -> Self {
        Samples::U8(Vec::new())
    }
}

impl Samples {
    pub fn len(&self) -> usize {
        match self {
            Samples::U8(v) => v.len(),
            Samples::U16(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 8 or 16.
    pub fn bits_per_sample(&self) -> u8 {
        match self {
            Samples::U8(_) => 8,
            Samples::U16(_) => 16,
        }
    }

    pub fn get(&self, index: usize) -> Option<u16> {
        match self {
            Samples::U8(v) => v.get(index).copied().map(u16::from),
            Samples::U16(v) => v.get(index).copied(),
        }
    }

    pub fn as_u8(&self) -> Option<&[u8]> {
        match self {
            Samples::U8(v) => Some(v),
            Samples::U16(_) => None,
        }
    }

    pub fn as_u16(&self) -> Option<&[u16]> {
        match self {
            Samples::U8(_) => None,
            Samples::U16(v) => Some(v),
        }
    }

    /// Every sample widened to `u16`, in buffer order.
    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        let iter: Box<dyn Iterator<Item = u16> + '_> = match self {
            Samples::U8(v) => Box::new(v.iter().copied().map(u16::from)),
            Samples::U16(v) => Box::new(v.iter().copied()),
        };
        iter
    }
}

/// How each sample is pulled from the stream. Chosen once per decode.
#[derive(Clone, Copy, Debug)]
pub(crate) enum SampleRule {
    /// P1: one `0`/`1` character per pixel, `'0'` -> 1 and `'1'` -> 0.
    AsciiBit,
    /// P2/P3: one decimal token per sample.
    AsciiNumber,
    /// P4: 8 pixels per byte, MSB first, inverted. Holds the current byte.
    PackedBit { byte: u8 },
    /// P5/P6/P7: one byte, or a big-endian byte pair for wide rasters.
    Binary,
}

impl SampleRule {
    fn next<S: ByteSource>(
        &mut self,
        tokens: &mut Tokenizer<S>,
        x: usize,
        wide: bool,
    ) -> Result<u32, PnmError> {
        match self {
            SampleRule::AsciiBit => {
                tokens.skip_space()?;
                match tokens.read_char()? {
                    '0' => Ok(1),
                    '1' => Ok(0),
                    other => Err(PnmError::InvalidBitmapDigit(other)),
                }
            }
            SampleRule::AsciiNumber => tokens.read_number(),
            SampleRule::PackedBit { byte } => {
                let shift = x % 8;
                if shift == 0 {
                    *byte = !tokens.read_byte()?;
                }
                Ok(u32::from((*byte >> (7 - shift)) & 1))
            }
            SampleRule::Binary => tokens.read_sample(wide).map(u32::from),
        }
    }
}

/// Header fields the raster builder needs.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RasterShape {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub maxval: u32,
}

impl RasterShape {
    pub(crate) fn is_wide(&self) -> bool {
        self.maxval > 0xff
    }

    pub(crate) fn sample_count(&self) -> Result<usize, PnmError> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|wh| wh.checked_mul(self.depth as usize))
            .ok_or(PnmError::DimensionsTooLarge {
                width: self.width,
                height: self.height,
                depth: self.depth,
            })
    }
}

/// Allocate and fill the sample buffer for `shape`.
///
/// The element width is fixed from `maxval` before the first sample is
/// read. Any error discards the buffer.
pub(crate) fn build_raster<S: ByteSource>(
    tokens: &mut Tokenizer<S>,
    shape: RasterShape,
    mut rule: SampleRule,
    limits: &Limits,
    stop: &dyn Stop,
) -> Result<Samples, PnmError> {
    let count = shape.sample_count()?;
    let bytes_per_sample = if shape.is_wide() { 2 } else { 1 };
    let buffer_bytes = count
        .checked_mul(bytes_per_sample)
        .ok_or(PnmError::DimensionsTooLarge {
            width: shape.width,
            height: shape.height,
            depth: shape.depth,
        })?;
    limits.check_raster(shape.width, shape.height, buffer_bytes)?;
    stop.check()?;

    if shape.is_wide() {
        fill::<u16, S>(tokens, shape, count, &mut rule, stop).map(Samples::U16)
    } else {
        fill::<u8, S>(tokens, shape, count, &mut rule, stop).map(Samples::U8)
    }
}

fn fill<T, S>(
    tokens: &mut Tokenizer<S>,
    shape: RasterShape,
    count: usize,
    rule: &mut SampleRule,
    stop: &dyn Stop,
) -> Result<Vec<T>, PnmError>
where
    T: Copy + TryFrom<u32>,
    S: ByteSource,
{
    let bits = (core::mem::size_of::<T>() * 8) as u8;
    let wide = shape.is_wide();
    let width = shape.width as usize;
    let depth = shape.depth as usize;
    // A zero-depth PAM reads nothing, however large its dimensions.
    if count == 0 {
        return Ok(Vec::new());
    }
    // Grows only as samples arrive: a truncated stream with huge
    // dimensions ends in `UnexpectedEof`.
    let mut out = Vec::with_capacity(count.min(CHUNK_SIZE));

    for y in 0..shape.height as usize {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..width {
            for _ in 0..depth {
                let value = rule.next(tokens, x, wide)?;
                let sample =
                    T::try_from(value).map_err(|_| PnmError::SampleOverflow { value, bits })?;
                out.push(sample);
            }
        }
    }
    Ok(out)
}
