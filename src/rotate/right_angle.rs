//! Lossless quarter-turn rotations by index permutation.
//!
//! Rotations are clockwise on screen, matching the sampling path. For a
//! `w x h` source:
//!
//! ```text
//! Deg90   out (h x w): out(x, y) = src(y, h - 1 - x)
//! Deg180  out (w x h): out(x, y) = src(w - 1 - x, h - 1 - y)
//! Deg270  out (h x w): out(x, y) = src(w - 1 - y, x)
//! ```

use crate::image::Raster;

/// Quarter-turn angles that admit an exact pixel permutation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RightAngle {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl RightAngle {
    /// Classifies a normalized angle in `[0, 360)`.
    pub fn from_normalized(angle_deg: i64) -> Option<Self> {
        match angle_deg {
            0 => Some(RightAngle::Deg0),
            90 => Some(RightAngle::Deg90),
            180 => Some(RightAngle::Deg180),
            270 => Some(RightAngle::Deg270),
            _ => None,
        }
    }

    /// Returns true if the output swaps width and height.
    pub fn swaps_axes(self) -> bool {
        matches!(self, RightAngle::Deg90 | RightAngle::Deg270)
    }
}

/// Rotates `src` clockwise by a quarter-turn multiple.
pub fn rotate_right_angle<I: Raster>(src: &I, angle: RightAngle) -> I {
    if angle == RightAngle::Deg0 {
        return src.clone();
    }

    let width = src.width();
    let height = src.height();
    let (out_width, out_height) = if angle.swaps_axes() {
        (height, width)
    } else {
        (width, height)
    };
    let (w, h) = (width as i64, height as i64);

    let mut out = I::create(out_width, out_height);
    for y in 0..out_height {
        for x in 0..out_width {
            let (dx, dy) = (x as i64, y as i64);
            let (sx, sy) = match angle {
                RightAngle::Deg90 => (dy, h - 1 - dx),
                RightAngle::Deg180 => (w - 1 - dx, h - 1 - dy),
                RightAngle::Deg270 => (w - 1 - dy, dx),
                RightAngle::Deg0 => (dx, dy),
            };
            out.set_pixel(x, y, src.pixel(sx, sy));
        }
    }
    out
}
