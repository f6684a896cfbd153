//! Header/ASCII-raster tokenizer on top of the chunked buffer.
//!
//! Comments (`#` up to the next line feed) are elided inside
//! [`Tokenizer::peek_char`], so every character-level caller sees the
//! stream with comments already removed. The terminating line feed is left
//! in place and reads as ordinary whitespace.

use alloc::string::String;

use crate::error::PnmError;
use crate::reader::ChunkedBuffer;
use crate::source::ByteSource;

/// Tab, line feed, vertical tab, carriage return, space.
pub(crate) const fn is_space(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\x0b' | '\r' | ' ')
}

pub(crate) struct Tokenizer<S> {
    bytes: ChunkedBuffer<S>,
}

impl<S: ByteSource> Tokenizer<S> {
    pub(crate) fn new(source: S) -> Self {
        Self {
            bytes: ChunkedBuffer::new(source),
        }
    }

    pub(crate) fn read_byte(&mut self) -> Result<u8, PnmError> {
        self.bytes.read_byte()
    }

    pub(crate) fn peek_char(&mut self) -> Result<char, PnmError> {
        loop {
            let byte = self.bytes.peek_byte()?;
            if byte > 0x7f {
                return Err(PnmError::NonAsciiByte(byte));
            }
            if byte != b'#' {
                return Ok(char::from(byte));
            }
            while self.bytes.peek_byte()? != b'\n' {
                self.bytes.skip_byte();
            }
        }
    }

    pub(crate) fn read_char(&mut self) -> Result<char, PnmError> {
        let c = self.peek_char()?;
        self.bytes.skip_byte();
        Ok(c)
    }

    pub(crate) fn skip_space(&mut self) -> Result<(), PnmError> {
        while is_space(self.peek_char()?) {
            self.bytes.skip_byte();
        }
        Ok(())
    }

    /// Next whitespace-delimited token. The delimiter is not consumed.
    pub(crate) fn read_string(&mut self) -> Result<String, PnmError> {
        self.skip_space()?;
        let mut token = String::new();
        loop {
            let c = self.peek_char()?;
            if is_space(c) {
                return Ok(token);
            }
            token.push(c);
            self.bytes.skip_byte();
        }
    }

    pub(crate) fn read_number(&mut self) -> Result<u32, PnmError> {
        let token = self.read_string()?;
        parse_decimal(&token).ok_or(PnmError::MalformedNumber(token))
    }

    /// One binary sample: a single byte, or a big-endian pair when `wide`.
    pub(crate) fn read_sample(&mut self, wide: bool) -> Result<u16, PnmError> {
        if !wide {
            return self.read_byte().map(u16::from);
        }
        let high = self.read_byte()?;
        let low = self.read_byte()?;
        Ok(u16::from_be_bytes([high, low]))
    }
}

/// Unsigned base-10 integer; rejects signs, empty text and overflow.
fn parse_decimal(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
