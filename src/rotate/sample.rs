//! Arbitrary-angle rotation by inverse nearest-neighbor sampling.

use crate::geometry::{Point, PolarVector};
use crate::image::Raster;
use crate::trace::trace_span;
use crate::util::math::{deg_to_rad, normalize_deg};

/// Rotates `original` clockwise by `angle_deg`, sampling from
/// `supersampled`, a copy of `original` enlarged by `factor`.
///
/// The output keeps the dimensions of `original`. Each destination pixel is
/// expressed as a polar offset from the integer center `(w / 2, h / 2)`,
/// turned back by the rotation angle, scaled by `factor` around the scaled
/// center, and rounded to the nearest supersampled pixel. Samples that land
/// outside `supersampled` leave the background color in place. Colors are
/// copied, never blended.
pub fn rotate_sampled<I: Raster>(
    original: &I,
    supersampled: &I,
    factor: usize,
    angle_deg: i64,
) -> I {
    let width = original.width();
    let height = original.height();
    let angle_deg = normalize_deg(angle_deg);
    let _span = trace_span!("rotate_sampled", angle_deg = angle_deg, width = width, height = height)
        .entered();

    let radians = deg_to_rad(angle_deg);
    let center = Point::new(width as i64 / 2, height as i64 / 2);
    let scaled_center = center.scaled(factor as i64);

    let mut out = I::create(width, height);
    for y in 0..height {
        for x in 0..width {
            let src = PolarVector::between(center, Point::new(x as i64, y as i64))
                .rotated(-radians)
                .scaled(factor as f64)
                .to_point(scaled_center);
            if supersampled.contains(src.x, src.y) {
                out.set_pixel(x, y, supersampled.pixel(src.x, src.y));
            }
        }
    }
    out
}
