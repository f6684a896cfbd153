//! PNM family: P1-P3 (ASCII), P4-P6 (binary), P7 (PAM).

mod decode;
mod header;

pub use decode::PnmDecoder;
pub use header::IgnoredTag;

use crate::raster::SampleRule;
use crate::tuple::TupleType;

/// PNM sub-format, one per magic number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PnmFormat {
    /// P1 — ASCII bitmap (PBM).
    PbmAscii,
    /// P2 — ASCII graymap (PGM).
    PgmAscii,
    /// P3 — ASCII pixmap (PPM).
    PpmAscii,
    /// P4 — binary bitmap, 8 pixels per byte.
    PbmBinary,
    /// P5 — binary graymap.
    PgmBinary,
    /// P6 — binary pixmap.
    PpmBinary,
    /// P7 — PAM, arbitrary depth with a tagged header.
    Pam,
}

impl PnmFormat {
    /// Map the digit after `P` to a format.
    pub fn from_digit(digit: char) -> Option<Self> {
        Some(match digit {
            '1' => Self::PbmAscii,
            '2' => Self::PgmAscii,
            '3' => Self::PpmAscii,
            '4' => Self::PbmBinary,
            '5' => Self::PgmBinary,
            '6' => Self::PpmBinary,
            '7' => Self::Pam,
            _ => return None,
        })
    }

    pub fn magic(self) -> &'static str {
        match self {
            Self::PbmAscii => "P1",
            Self::PgmAscii => "P2",
            Self::PpmAscii => "P3",
            Self::PbmBinary => "P4",
            Self::PgmBinary => "P5",
            Self::PpmBinary => "P6",
            Self::Pam => "P7",
        }
    }

    /// Whether samples are decimal text rather than raw bytes.
    pub fn is_ascii(self) -> bool {
        matches!(self, Self::PbmAscii | Self::PgmAscii | Self::PpmAscii)
    }

    /// Bitmaps have no `maxval` field; it is implicitly 1.
    fn is_bitmap(self) -> bool {
        matches!(self, Self::PbmAscii | Self::PbmBinary)
    }

    /// Depth and tuple type of the positional formats (everything but PAM).
    fn fixed_layout(self) -> Option<(u32, TupleType)> {
        match self {
            Self::PbmAscii | Self::PbmBinary => Some((1, TupleType::BlackAndWhite)),
            Self::PgmAscii | Self::PgmBinary => Some((1, TupleType::Grayscale)),
            Self::PpmAscii | Self::PpmBinary => Some((3, TupleType::Rgb)),
            Self::Pam => None,
        }
    }

    pub(crate) fn sample_rule(self) -> SampleRule {
        match self {
            Self::PbmAscii => SampleRule::AsciiBit,
            Self::PgmAscii | Self::PpmAscii => SampleRule::AsciiNumber,
            Self::PbmBinary => SampleRule::PackedBit { byte: 0 },
            Self::PgmBinary | Self::PpmBinary | Self::Pam => SampleRule::Binary,
        }
    }
}

impl core::fmt::Display for PnmFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.magic())
    }
}
