use alloc::format;

use crate::error::PnmError;

/// Resource limits applied once a header has been read, before the sample
/// buffer is allocated.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the output sample buffer.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Limits that reject nothing.
    pub const NONE: Limits = Limits {
        max_width: None,
        max_height: None,
        max_pixels: None,
        max_memory_bytes: None,
    };

    /// Check a raster of `width * height` pixels whose buffer needs
    /// `buffer_bytes` bytes.
    pub(crate) fn check_raster(
        &self,
        width: u32,
        height: u32,
        buffer_bytes: usize,
    ) -> Result<(), PnmError> {
        exceeds("width", u64::from(width), self.max_width)?;
        exceeds("height", u64::from(height), self.max_height)?;
        exceeds(
            "pixel count",
            u64::from(width) * u64::from(height),
            self.max_pixels,
        )?;
        exceeds(
            "sample buffer bytes",
            buffer_bytes as u64,
            self.max_memory_bytes,
        )
    }
}

fn exceeds(what: &str, value: u64, limit: Option<u64>) -> Result<(), PnmError> {
    match limit {
        Some(max) if value > max => Err(PnmError::LimitExceeded(format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}
