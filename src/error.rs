use alloc::boxed::Box;
use alloc::string::String;
use enough::StopReason;

/// Errors from PNM/PAM decoding.
///
/// Every error is fatal to the `decode()` call that produced it; no
/// partially filled raster is ever handed back.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PnmError {
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("expected ASCII character, got byte {0:#04x}")]
    NonAsciiByte(u8),

    #[error("malformed header: {0}")]
    MalformedHeader(String),

    #[error("expected decimal number, got {0:?}")]
    MalformedNumber(String),

    #[error("unknown magic number: {0}")]
    UnknownMagic(String),

    #[error("expected bitmap digit '0' or '1', got {0:?}")]
    InvalidBitmapDigit(char),

    #[error("sample value {value} does not fit in {bits} bits")]
    SampleOverflow { value: u32, bits: u8 },

    #[error("dimensions too large: {width}x{height}x{depth}")]
    DimensionsTooLarge { width: u32, height: u32, depth: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[error("byte source failed: {0}")]
    Source(#[source] Box<dyn core::error::Error + Send + Sync>),
}

impl From<StopReason> for PnmError {
    fn from(r: StopReason) -> Self {
        PnmError::Cancelled(r)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for PnmError {
    fn from(e: std::io::Error) -> Self {
        PnmError::Source(Box::new(e))
    }
}
