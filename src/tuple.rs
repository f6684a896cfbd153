use alloc::string::String;
use core::fmt;

/// Semantic meaning of a pixel's channel tuple.
///
/// PAM streams may carry arbitrary `TUPLTYPE` text; anything that is not one
/// of the well-known names is kept verbatim in [`TupleType::Other`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TupleType {
    #[default]
    BlackAndWhite,
    Grayscale,
    Rgb,
    BlackAndWhiteAlpha,
    GrayscaleAlpha,
    RgbAlpha,
    Other(String),
}

impl TupleType {
    /// Classify a `TUPLTYPE` value. Matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> Self {
        match name {
            "BLACKANDWHITE" => Self::BlackAndWhite,
            "GRAYSCALE" => Self::Grayscale,
            "RGB" => Self::Rgb,
            "BLACKANDWHITE_ALPHA" => Self::BlackAndWhiteAlpha,
            "GRAYSCALE_ALPHA" => Self::GrayscaleAlpha,
            "RGB_ALPHA" => Self::RgbAlpha,
            other => Self::Other(other.into()),
        }
    }

    /// Tuple type assumed for a PAM stream without a `TUPLTYPE` tag.
    pub fn infer_from_depth(depth: u32) -> Self {
        match depth {
            0 | 1 => Self::Grayscale,
            2 => Self::GrayscaleAlpha,
            3 => Self::Rgb,
            _ => Self::RgbAlpha,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::BlackAndWhite => "BLACKANDWHITE",
            Self::Grayscale => "GRAYSCALE",
            Self::Rgb => "RGB",
            Self::BlackAndWhiteAlpha => "BLACKANDWHITE_ALPHA",
            Self::GrayscaleAlpha => "GRAYSCALE_ALPHA",
            Self::RgbAlpha => "RGB_ALPHA",
            Self::Other(name) => name,
        }
    }

    /// Whether this is one of the six well-known tuple types.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for TupleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
