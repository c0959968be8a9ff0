//! Scale3x (AdvanceMAME) 3x up-scaler.
//!
//! Neighbors of the center pixel `e` are named row-major:
//!
//! ```text
//! a b c
//! d e f
//! g h i
//! ```
//!
//! The 3x3 output block `e0..e8` (row-major) defaults to `e`; the center
//! `e4` is always `e`. Corners follow the Scale2x rules, and each edge
//! midpoint copies its orthogonal neighbor only when one of the two
//! adjacent corner rules fires and the diagonal it faces differs from `e`.

use crate::image::{Color, Raster};
use crate::scale::{neighbor, ScaleConfig};
use crate::trace::trace_span;

/// Scales `src` by 3 with clamped edges.
pub fn scale3x<I: Raster>(src: &I) -> I {
    scale3x_with(src, ScaleConfig::default())
}

/// Scales `src` by 3 with the given configuration.
///
/// The output is `3 * width` by `3 * height`.
pub fn scale3x_with<I: Raster>(src: &I, cfg: ScaleConfig) -> I {
    let width = src.width();
    let height = src.height();
    let _span = trace_span!("scale3x", width = width, height = height).entered();

    let mut out = I::create(width * 3, height * 3);
    for y in 0..height {
        for x in 0..width {
            let block = expand(src, x as i64, y as i64, cfg);
            let (ox, oy) = (x * 3, y * 3);
            for (idx, &color) in block.iter().enumerate() {
                out.set_pixel(ox + idx % 3, oy + idx / 3, color);
            }
        }
    }
    out
}

/// Computes the 3x3 block for the pixel at `(x, y)` in row-major order.
fn expand<I: Raster>(src: &I, x: i64, y: i64, cfg: ScaleConfig) -> [Color; 9] {
    let at = |dx: i64, dy: i64| neighbor(src, x + dx, y + dy, cfg.edge);
    let (a, b, c) = (at(-1, -1), at(0, -1), at(1, -1));
    let (d, e, f) = (at(-1, 0), src.pixel(x, y), at(1, 0));
    let (g, h, i) = (at(-1, 1), at(0, 1), at(1, 1));

    let mut block = [e; 9];
    if b == h || d == f {
        return block;
    }

    // Corner conditions, shared with the edge rules.
    let top_left = d == b;
    let top_right = b == f;
    let bottom_left = d == h;
    let bottom_right = h == f;

    if top_left {
        block[0] = d;
    }
    if (top_left && e != c) || (top_right && e != a) {
        block[1] = b;
    }
    if top_right {
        block[2] = f;
    }
    if (top_left && e != g) || (bottom_left && e != a) {
        block[3] = d;
    }
    if (top_right && e != i) || (bottom_right && e != c) {
        block[5] = f;
    }
    if bottom_left {
        block[6] = d;
    }
    if (bottom_left && e != i) || (bottom_right && e != g) {
        block[7] = h;
    }
    if bottom_right {
        block[8] = f;
    }
    block
}

#[cfg(test)]
mod tests {
    use super::{expand, scale3x};
    use crate::image::IndexedImage;
    use crate::scale::ScaleConfig;

    fn center_block(rows: [[u8; 3]; 3]) -> [u8; 9] {
        let img = IndexedImage::from_rows(&rows).unwrap();
        expand(&img, 1, 1, ScaleConfig::default())
    }

    #[test]
    fn staircase_fills_only_facing_corner() {
        let block = center_block([[1, 1, 1], [2, 1, 1], [2, 2, 1]]);
        assert_eq!(block, [1, 1, 1, 1, 1, 1, 2, 1, 1]);
    }

    #[test]
    fn edge_midpoint_follows_corner_when_diagonal_differs() {
        let block = center_block([[0, 1, 2], [1, 0, 0], [0, 0, 0]]);
        assert_eq!(block, [1, 1, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn opposite_neighbors_matching_disables_all_rules() {
        let block = center_block([[3, 1, 3], [2, 0, 2], [3, 1, 3]]);
        assert_eq!(block, [0; 9]);
    }

    #[test]
    fn writes_blocks_at_tripled_offsets() {
        let img = IndexedImage::from_rows(&[[4u8, 7]]).unwrap();
        let out = scale3x(&img);
        assert_eq!((out.width(), out.height()), (6, 3));
        for y in 0..3 {
            assert_eq!(out.row(y).unwrap(), &[4, 4, 4, 7, 7, 7]);
        }
    }
}
