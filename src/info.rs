use crate::pnm::PnmFormat;
use crate::raster::RasterShape;
use crate::tuple::TupleType;

/// Header fields of a PNM/PAM stream, available before the raster is read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub format: PnmFormat,
    pub width: u32,
    pub height: u32,
    /// Channels per pixel.
    pub depth: u32,
    pub maxval: u32,
    pub tupltype: TupleType,
}

impl ImageInfo {
    /// 16 when `maxval > 255`, else 8.
    pub fn bits_per_sample(&self) -> u8 {
        if self.maxval > 0xff { 16 } else { 8 }
    }

    /// `width * height * depth`, or `None` on overflow.
    pub fn sample_count(&self) -> Option<usize> {
        self.shape().sample_count().ok()
    }

    pub(crate) fn shape(&self) -> RasterShape {
        RasterShape {
            width: self.width,
            height: self.height,
            depth: self.depth,
            maxval: self.maxval,
        }
    }
}
