//! Magic number dispatch and per-format header decoding.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use super::PnmFormat;
use crate::error::PnmError;
use crate::info::ImageInfo;
use crate::source::ByteSource;
use crate::tokenizer::{Tokenizer, is_space};
use crate::tuple::TupleType;

/// A PAM header tag that was not understood and skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IgnoredTag {
    pub tag: String,
    /// The single token that followed the tag.
    pub value: String,
}

/// `P`, the sub-type digit, then one whitespace character.
pub(crate) fn read_magic<S: ByteSource>(tokens: &mut Tokenizer<S>) -> Result<PnmFormat, PnmError> {
    let p = tokens.read_char()?;
    if p != 'P' {
        return Err(PnmError::UnknownMagic(format!("expected 'P', got {p:?}")));
    }
    let digit = tokens.read_char()?;
    let separator = tokens.read_char()?;
    if !is_space(separator) {
        return Err(PnmError::MalformedHeader(format!(
            "expected whitespace after magic, got {separator:?}"
        )));
    }
    PnmFormat::from_digit(digit).ok_or_else(|| PnmError::UnknownMagic(format!("P{digit}")))
}

/// Read the header that follows the magic of `format`, including the single
/// separator byte in front of the raster.
pub(crate) fn read_header<S: ByteSource>(
    tokens: &mut Tokenizer<S>,
    format: PnmFormat,
    ignored: &mut Vec<IgnoredTag>,
) -> Result<ImageInfo, PnmError> {
    let info = match format.fixed_layout() {
        Some((depth, tupltype)) => read_positional(tokens, format, depth, tupltype)?,
        None => read_pam(tokens, ignored)?,
    };
    tokens.read_byte()?;
    Ok(info)
}

/// `width height [maxval]` for P1-P6.
fn read_positional<S: ByteSource>(
    tokens: &mut Tokenizer<S>,
    format: PnmFormat,
    depth: u32,
    tupltype: TupleType,
) -> Result<ImageInfo, PnmError> {
    let width = tokens.read_number()?;
    let height = tokens.read_number()?;
    let maxval = if format.is_bitmap() {
        1
    } else {
        tokens.read_number()?
    };
    Ok(ImageInfo {
        format,
        width,
        height,
        depth,
        maxval,
        tupltype,
    })
}

/// Tag/value pairs up to `ENDHDR`, in any order.
fn read_pam<S: ByteSource>(
    tokens: &mut Tokenizer<S>,
    ignored: &mut Vec<IgnoredTag>,
) -> Result<ImageInfo, PnmError> {
    let mut width = 0;
    let mut height = 0;
    let mut depth = 0;
    let mut maxval = 0;
    let mut tupltype = None;

    loop {
        let tag = tokens.read_string()?;
        match tag.as_str() {
            "ENDHDR" => break,
            "WIDTH" => width = tokens.read_number()?,
            "HEIGHT" => height = tokens.read_number()?,
            "DEPTH" => depth = tokens.read_number()?,
            "MAXVAL" => maxval = tokens.read_number()?,
            "TUPLTYPE" => tupltype = Some(TupleType::from_name(&tokens.read_string()?)),
            _ => {
                let value = tokens.read_string()?;
                log::warn!("ignoring unknown PAM header tag {tag:?} (value {value:?})");
                ignored.push(IgnoredTag { tag, value });
            }
        }
    }

    Ok(ImageInfo {
        format: PnmFormat::Pam,
        width,
        height,
        depth,
        maxval,
        tupltype: tupltype.unwrap_or_else(|| TupleType::infer_from_depth(depth)),
    })
}
