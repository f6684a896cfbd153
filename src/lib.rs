//! # zenpnm-stream
//!
//! Streaming decoder for the PNM/PAM family of portable image formats.
//!
//! The decoder pulls bytes from a [`ByteSource`] one 64 KiB block at a time
//! and never seeks, so it works the same over memory, files and sockets.
//!
//! ## Supported Formats
//!
//! - **P1** / **P4** — bitmap (ASCII / packed binary), `maxval` fixed at 1
//! - **P2** / **P5** — graymap (ASCII / binary)
//! - **P3** / **P6** — pixmap (ASCII / binary)
//! - **P7** (PAM) — arbitrary depth, tagged header, free-form `TUPLTYPE`
//!
//! Samples land in a flat, row-major, channel-interleaved [`Samples`]
//! buffer: 8-bit when `maxval <= 255`, 16-bit (big-endian on the wire)
//! otherwise.
//!
//! Bitmaps decode with `'0'` (or a clear bit) as 1 and `'1'` (or a set bit)
//! as 0, identically for P1 and P4.
//!
//! ## Non-Goals
//!
//! - Encoding
//! - Color conversion, scaling or any other pixel post-processing
//! - Validating samples against `maxval`
//!
//! ## Usage
//!
//! ```
//! use enough::Unstoppable;
//! use zenpnm_stream::{PnmDecoder, TupleType, from_fn};
//!
//! // One-shot decode from memory.
//! let image = zenpnm_stream::decode(b"P1\n2 1\n0 1\n", Unstoppable)?;
//! assert_eq!(image.data.as_u8(), Some(&[1u8, 0][..]));
//!
//! // Pull-function source.
//! let mut pam = Some(b"P7\nWIDTH 1\nHEIGHT 1\nDEPTH 2\nMAXVAL 255\nENDHDR\n\x10\x20".to_vec());
//! let mut decoder = PnmDecoder::new(from_fn(move |_size| pam.take().unwrap_or_default()));
//! decoder.decode()?;
//! assert_eq!(decoder.tupltype(), &TupleType::GrayscaleAlpha);
//! # Ok::<(), zenpnm_stream::PnmError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod error;
mod info;
mod limits;
mod raster;
mod reader;
mod source;
mod tokenizer;
mod tuple;

pub mod pnm;

// Re-exports
pub use decode::{DecodeRequest, DecodedImage, decode, decode_source};
#[cfg(feature = "std")]
pub use decode::decode_reader;
pub use enough::{Stop, Unstoppable};
pub use error::PnmError;
pub use info::ImageInfo;
pub use limits::Limits;
pub use pnm::{IgnoredTag, PnmDecoder, PnmFormat};
pub use raster::Samples;
pub use reader::CHUNK_SIZE;
#[cfg(feature = "std")]
pub use source::ReadSource;
pub use source::{ByteSource, FnSource, SliceSource, from_fn};
pub use tuple::TupleType;
