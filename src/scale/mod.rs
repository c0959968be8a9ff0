//! EPX-family integer up-scalers for palette-indexed pixel art.
//!
//! Both scalers copy source colors verbatim; no two colors are ever
//! blended, so palette indices survive unchanged. Each source pixel expands
//! into an `n x n` block whose sub-pixels default to the source color and
//! are overridden by neighbor-equality rules that keep diagonal edges sharp.

mod scale2x;
mod scale3x;

pub use scale2x::{scale2x, scale2x_with};
pub use scale3x::{scale3x, scale3x_with};

use crate::image::{Color, Raster};

/// How neighbor reads one step outside the image are resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdgeMode {
    /// Replicate the nearest edge pixel.
    #[default]
    Clamp,
    /// Read the raster's background color.
    Background,
}

/// Configuration shared by the scalers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScaleConfig {
    /// Edge handling for out-of-range neighbors.
    pub edge: EdgeMode,
}

/// Supported integer scale factors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScaleFactor {
    #[default]
    X2,
    X3,
}

impl ScaleFactor {
    /// Returns the factor as an integer.
    pub fn get(self) -> usize {
        match self {
            ScaleFactor::X2 => 2,
            ScaleFactor::X3 => 3,
        }
    }
}

/// Scales `src` by `factor` with the matching EPX rule set.
pub fn scale<I: Raster>(src: &I, factor: ScaleFactor, cfg: ScaleConfig) -> I {
    match factor {
        ScaleFactor::X2 => scale2x_with(src, cfg),
        ScaleFactor::X3 => scale3x_with(src, cfg),
    }
}

/// Reads a neighbor of an in-range pixel under the configured edge mode.
#[inline]
pub(crate) fn neighbor<I: Raster>(src: &I, x: i64, y: i64, edge: EdgeMode) -> Color {
    match edge {
        EdgeMode::Background => src.pixel(x, y),
        EdgeMode::Clamp => {
            let max_x = src.width() as i64 - 1;
            let max_y = src.height() as i64 - 1;
            src.pixel(x.clamp(0, max_x.max(0)), y.clamp(0, max_y.max(0)))
        }
    }
}
