//! Cartesian and polar value types used by the rotation sampler.

use std::ops::{Add, Sub};

/// Integer pixel coordinate or offset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Multiplies both coordinates by an integer factor.
    pub const fn scaled(self, factor: i64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Offset expressed as a length and an angle in radians.
///
/// Directions follow image coordinates (y grows downward), so increasing
/// the direction turns clockwise on screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PolarVector {
    pub magnitude: f64,
    pub direction: f64,
}

impl PolarVector {
    pub fn new(magnitude: f64, direction: f64) -> Self {
        Self {
            magnitude,
            direction,
        }
    }

    /// Polar form of an offset from the origin.
    pub fn from_offset(offset: Point) -> Self {
        let dx = offset.x as f64;
        let dy = offset.y as f64;
        Self::new(dx.hypot(dy), dy.atan2(dx))
    }

    /// Polar form of `point` relative to `center`.
    pub fn between(center: Point, point: Point) -> Self {
        Self::from_offset(point - center)
    }

    /// Returns the vector turned by `radians`.
    pub fn rotated(self, radians: f64) -> Self {
        Self::new(self.magnitude, self.direction + radians)
    }

    /// Returns the vector with its magnitude multiplied by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.magnitude * factor, self.direction)
    }

    /// Converts back to Cartesian form around `center`, rounding to the
    /// nearest pixel.
    pub fn to_point(self, center: Point) -> Point {
        let (sin, cos) = self.direction.sin_cos();
        let x = (self.magnitude * cos).round() as i64;
        let y = (self.magnitude * sin).round() as i64;
        center + Point::new(x, y)
    }
}
