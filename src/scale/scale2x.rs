//! Scale2x (EPX) 2x up-scaler.
//!
//! For a source pixel `p` with neighbors
//!
//! ```text
//!     a
//!   c p b
//!     d
//! ```
//!
//! the 2x2 output block defaults to `p`, and each corner takes the color of
//! the two neighbors meeting at it when they agree with each other but not
//! with the opposite neighbors:
//!
//! ```text
//! top-left     = a  if c == a && c != d && a != b
//! top-right    = b  if a == b && a != c && b != d
//! bottom-left  = c  if d == c && d != b && c != a
//! bottom-right = d  if b == d && b != a && d != c
//! ```

use crate::image::{Color, Raster};
use crate::scale::{neighbor, ScaleConfig};
use crate::trace::trace_span;

/// Scales `src` by 2 with clamped edges.
pub fn scale2x<I: Raster>(src: &I) -> I {
    scale2x_with(src, ScaleConfig::default())
}

/// Scales `src` by 2 with the given configuration.
///
/// The output is `2 * width` by `2 * height`.
pub fn scale2x_with<I: Raster>(src: &I, cfg: ScaleConfig) -> I {
    let width = src.width();
    let height = src.height();
    let _span = trace_span!("scale2x", width = width, height = height).entered();

    let mut out = I::create(width * 2, height * 2);
    for y in 0..height {
        for x in 0..width {
            let block = expand(src, x as i64, y as i64, cfg);
            let (ox, oy) = (x * 2, y * 2);
            out.set_pixel(ox, oy, block[0]);
            out.set_pixel(ox + 1, oy, block[1]);
            out.set_pixel(ox, oy + 1, block[2]);
            out.set_pixel(ox + 1, oy + 1, block[3]);
        }
    }
    out
}

/// Computes the 2x2 block for the pixel at `(x, y)` in row-major order.
fn expand<I: Raster>(src: &I, x: i64, y: i64, cfg: ScaleConfig) -> [Color; 4] {
    let p = src.pixel(x, y);
    let a = neighbor(src, x, y - 1, cfg.edge);
    let b = neighbor(src, x + 1, y, cfg.edge);
    let c = neighbor(src, x - 1, y, cfg.edge);
    let d = neighbor(src, x, y + 1, cfg.edge);

    let mut block = [p; 4];
    if c == a && c != d && a != b {
        block[0] = a;
    }
    if a == b && a != c && b != d {
        block[1] = b;
    }
    if d == c && d != b && c != a {
        block[2] = c;
    }
    if b == d && b != a && d != c {
        block[3] = d;
    }
    block
}

#[cfg(test)]
mod tests {
    use super::{scale2x, scale2x_with};
    use crate::image::{IndexedImage, BACKGROUND};
    use crate::scale::{EdgeMode, ScaleConfig};

    #[test]
    fn isolated_pixel_stays_square() {
        let img = IndexedImage::from_rows(&[[0u8, 0, 0], [0, 5, 0], [0, 0, 0]]).unwrap();
        let out = scale2x(&img);
        let expected = IndexedImage::from_rows(&[
            [0u8, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0],
            [0, 0, 5, 5, 0, 0],
            [0, 0, 5, 5, 0, 0],
            [0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0],
        ])
        .unwrap();
        assert_eq!(out, expected);
    }

    #[test]
    fn diagonal_corner_takes_neighbor_color() {
        // Left and up neighbors agree, so the top-left sub-pixel is filled in.
        let img = IndexedImage::from_rows(&[[1u8, 1, 2], [1, 2, 2], [2, 2, 2]]).unwrap();
        let out = scale2x(&img);
        assert_eq!(out.get(2, 2), Some(1));
        assert_eq!(out.get(3, 2), Some(2));
        assert_eq!(out.get(2, 3), Some(2));
        assert_eq!(out.get(3, 3), Some(2));
    }

    #[test]
    fn background_edges_carve_solid_corners() {
        let img = IndexedImage::filled(2, 2, 4);
        let out = scale2x_with(
            &img,
            ScaleConfig {
                edge: EdgeMode::Background,
            },
        );
        assert_eq!(out.get(0, 0), Some(BACKGROUND));
        assert_eq!(out.get(3, 0), Some(BACKGROUND));
        assert_eq!(out.get(0, 3), Some(BACKGROUND));
        assert_eq!(out.get(3, 3), Some(BACKGROUND));
        assert_eq!(out.get(1, 1), Some(4));
        assert_eq!(out.get(1, 0), Some(4));
    }

    #[test]
    fn empty_image_scales_to_empty() {
        let img = IndexedImage::new(0, 3);
        let out = scale2x(&img);
        assert_eq!((out.width(), out.height()), (0, 6));
    }
}
