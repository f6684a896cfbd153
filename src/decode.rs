use enough::Stop;

use crate::error::PnmError;
use crate::limits::Limits;
use crate::pnm::{PnmDecoder, PnmFormat};
use crate::raster::Samples;
use crate::source::{ByteSource, SliceSource};
use crate::tuple::TupleType;

/// A fully decoded image, owned by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    pub format: PnmFormat,
    pub width: u32,
    pub height: u32,
    /// Channels per pixel.
    pub depth: u32,
    pub maxval: u32,
    pub tupltype: TupleType,
    /// `width * height * depth` samples, row-major, channel-interleaved.
    pub data: Samples,
}

impl DecodedImage {
    /// Sample at column `x`, row `y`, channel `channel`.
    pub fn sample(&self, x: u32, y: u32, channel: u32) -> Option<u16> {
        if x >= self.width || y >= self.height || channel >= self.depth {
            return None;
        }
        let (w, d) = (self.width as usize, self.depth as usize);
        self.data
            .get((y as usize * w + x as usize) * d + channel as usize)
    }
}

/// Decode request builder for one-shot decoding.
///
/// ```
/// use enough::Unstoppable;
/// use zenpnm_stream::{DecodeRequest, Limits, PnmError};
///
/// let limits = Limits { max_pixels: Some(1), ..Default::default() };
/// let result = DecodeRequest::new(b"P5\n2 1\n255\n\x00\x01")
///     .with_limits(&limits)
///     .decode(Unstoppable);
/// assert!(matches!(result, Err(PnmError::LimitExceeded(_))));
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn decode(self, stop: impl Stop) -> Result<DecodedImage, PnmError> {
        decode_source(SliceSource::new(self.data), self.limits, &stop)
    }
}

/// Decode an in-memory PNM/PAM image.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<DecodedImage, PnmError> {
    DecodeRequest::new(data).decode(stop)
}

/// Decode a PNM/PAM image pulled from `reader`.
#[cfg(feature = "std")]
pub fn decode_reader<R: std::io::Read>(
    reader: R,
    stop: impl Stop,
) -> Result<DecodedImage, PnmError> {
    decode_source(crate::source::ReadSource::new(reader), None, &stop)
}

/// Decode from any [`ByteSource`].
pub fn decode_source<S: ByteSource>(
    source: S,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodedImage, PnmError> {
    let mut decoder = PnmDecoder::new(source);
    if let Some(limits) = limits {
        decoder = decoder.with_limits(limits.clone());
    }
    decoder.decode_with_stop(stop)?;
    decoder.into_image().ok_or(PnmError::UnexpectedEof)
}
