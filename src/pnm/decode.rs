//! Pull-driven PNM/PAM decoder.

use alloc::vec::Vec;

use enough::{Stop, Unstoppable};

use super::PnmFormat;
use super::header::{self, IgnoredTag};
use crate::decode::DecodedImage;
use crate::error::PnmError;
use crate::info::ImageInfo;
use crate::limits::Limits;
use crate::raster::{Samples, build_raster};
use crate::source::{ByteSource, SliceSource};
use crate::tokenizer::Tokenizer;
use crate::tuple::TupleType;

/// Decodes one PNM/PAM image from a [`ByteSource`].
///
/// Fields start zeroed. After a successful [`decode`](Self::decode) they
/// hold the image, and [`into_image`](Self::into_image) hands the sample
/// buffer to the caller.
///
/// ```
/// use zenpnm_stream::{PnmDecoder, Samples};
///
/// let mut decoder = PnmDecoder::from_slice(b"P2\n2 2\n255\n0 64\n128 255\n");
/// decoder.decode()?;
/// assert_eq!((decoder.width(), decoder.height()), (2, 2));
/// assert_eq!(decoder.data(), &Samples::U8(vec![0, 64, 128, 255]));
/// # Ok::<(), zenpnm_stream::PnmError>(())
/// ```
///
/// A decoder is meant for a single image. Calling `decode` again re-reads
/// a header from wherever the previous raster ended, which only works if
/// another image follows immediately in the source.
pub struct PnmDecoder<S> {
    tokens: Tokenizer<S>,
    limits: Limits,
    header_pending: bool,
    decoded: bool,
    format: Option<PnmFormat>,
    width: u32,
    height: u32,
    depth: u32,
    tupltype: TupleType,
    maxval: u32,
    data: Samples,
    ignored_tags: Vec<IgnoredTag>,
}

impl<'a> PnmDecoder<SliceSource<'a>> {
    /// Decoder over an in-memory buffer.
    pub fn from_slice(data: &'a [u8]) -> Self {
        Self::new(SliceSource::new(data))
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> PnmDecoder<crate::source::ReadSource<R>> {
    /// Decoder over any reader, pulled in 64 KiB blocks.
    pub fn from_reader(reader: R) -> Self {
        Self::new(crate::source::ReadSource::new(reader))
    }
}

impl<S: ByteSource> PnmDecoder<S> {
    pub fn new(source: S) -> Self {
        Self {
            tokens: Tokenizer::new(source),
            limits: Limits::default(),
            header_pending: false,
            decoded: false,
            format: None,
            width: 0,
            height: 0,
            depth: 0,
            tupltype: TupleType::default(),
            maxval: 0,
            data: Samples::default(),
            ignored_tags: Vec::new(),
        }
    }

    /// Limits checked after the header and before the raster is allocated.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Read the magic number and header without touching the raster.
    ///
    /// A following [`decode`](Self::decode) continues from this header.
    pub fn read_header(&mut self) -> Result<ImageInfo, PnmError> {
        if !self.header_pending {
            let format = header::read_magic(&mut self.tokens)?;
            let info = header::read_header(&mut self.tokens, format, &mut self.ignored_tags)?;
            log::debug!(
                "{} header: {}x{} depth {} maxval {} tupltype {}",
                info.format,
                info.width,
                info.height,
                info.depth,
                info.maxval,
                info.tupltype
            );
            self.stage(info);
            self.header_pending = true;
        }
        Ok(self.info_unchecked())
    }

    /// Decode one complete image.
    pub fn decode(&mut self) -> Result<(), PnmError> {
        self.decode_with_stop(&Unstoppable)
    }

    /// Like [`decode`](Self::decode), checking `stop` before the raster is
    /// allocated and every 16 rows while it is filled.
    pub fn decode_with_stop(&mut self, stop: &dyn Stop) -> Result<(), PnmError> {
        self.decoded = false;
        let info = self.read_header()?;
        self.header_pending = false;

        let rule = info.format.sample_rule();
        self.data = build_raster(&mut self.tokens, info.shape(), rule, &self.limits, stop)?;
        self.decoded = true;
        Ok(())
    }

    fn stage(&mut self, info: ImageInfo) {
        self.format = Some(info.format);
        self.width = info.width;
        self.height = info.height;
        self.depth = info.depth;
        self.maxval = info.maxval;
        self.tupltype = info.tupltype;
        self.data = Samples::default();
    }

    fn info_unchecked(&self) -> ImageInfo {
        ImageInfo {
            format: self.format.unwrap_or(PnmFormat::PbmAscii),
            width: self.width,
            height: self.height,
            depth: self.depth,
            maxval: self.maxval,
            tupltype: self.tupltype.clone(),
        }
    }

    /// Header of the most recent image, if one has been read.
    pub fn info(&self) -> Option<ImageInfo> {
        self.format.map(|_| self.info_unchecked())
    }

    pub fn format(&self) -> Option<PnmFormat> {
        self.format
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn tupltype(&self) -> &TupleType {
        &self.tupltype
    }

    pub fn maxval(&self) -> u32 {
        self.maxval
    }

    /// Decoded samples; empty until `decode` succeeds.
    pub fn data(&self) -> &Samples {
        &self.data
    }

    /// Unknown PAM tags skipped so far.
    pub fn ignored_tags(&self) -> &[IgnoredTag] {
        &self.ignored_tags
    }

    /// Hand the decoded image to the caller. `None` unless the last
    /// `decode` succeeded.
    pub fn into_image(self) -> Option<DecodedImage> {
        if !self.decoded {
            return None;
        }
        let info = self.info_unchecked();
        Some(DecodedImage {
            format: info.format,
            width: info.width,
            height: info.height,
            depth: info.depth,
            maxval: info.maxval,
            tupltype: info.tupltype,
            data: self.data,
        })
    }
}
