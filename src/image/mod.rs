//! Palette-indexed image buffers.
//!
//! Transforms are written against the [`Raster`] capability so a host can
//! plug in its own sprite buffer. [`IndexedImage`] is the owned row-major
//! implementation used by this crate and its tests.
//!
//! Reads outside the image never fail: they resolve to the raster's
//! background color, which is [`BACKGROUND`] unless the raster overrides it.

use crate::util::{SpriteXformError, SpriteXformResult};

#[cfg(feature = "image-io")]
pub mod io;

/// A palette index.
pub type Color = u8;

/// Color returned for out-of-range reads and used to fill new images.
pub const BACKGROUND: Color = 0;

/// Pixel buffer capability consumed by the scaler and the rotation engine.
pub trait Raster: Clone {
    /// Creates a `width x height` image filled with the background color.
    fn create(width: usize, height: usize) -> Self;

    /// Returns the image width in pixels.
    fn width(&self) -> usize;

    /// Returns the image height in pixels.
    fn height(&self) -> usize;

    /// Returns the color at `(x, y)`, or the background color when the
    /// coordinate lies outside the image.
    fn pixel(&self, x: i64, y: i64) -> Color;

    /// Writes `color` at `(x, y)`. Callers only pass in-range coordinates.
    fn set_pixel(&mut self, x: usize, y: usize, color: Color);

    /// Color used for out-of-range reads.
    fn background(&self) -> Color {
        BACKGROUND
    }

    /// Returns true if `(x, y)` lies inside the image.
    fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.width() as u64 && (y as u64) < self.height() as u64
    }
}

/// Owned, contiguous, row-major palette-indexed image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedImage {
    data: Vec<Color>,
    width: usize,
    height: usize,
}

impl IndexedImage {
    /// Creates a background-filled image.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, BACKGROUND)
    }

    /// Creates an image where every pixel is `color`.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`.
    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        let len = width
            .checked_mul(height)
            .unwrap_or_else(|| panic!("image dimensions {width}x{height} overflow"));
        Self {
            data: vec![color; len],
            width,
            height,
        }
    }

    /// Wraps a row-major buffer whose length must equal `width * height`.
    pub fn from_vec(data: Vec<Color>, width: usize, height: usize) -> SpriteXformResult<Self> {
        let needed = width
            .checked_mul(height)
            .ok_or(SpriteXformError::InvalidDimensions { width, height })?;
        if data.len() != needed {
            return Err(SpriteXformError::BufferSizeMismatch {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Builds an image from equally sized rows.
    pub fn from_rows<R: AsRef<[Color]>>(rows: &[R]) -> SpriteXformResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut data = Vec::with_capacity(width.saturating_mul(height));
        for (idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(SpriteXformError::RaggedRows {
                    row: idx,
                    expected: width,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(data, width, height)
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the pixel buffer in row-major order.
    pub fn data(&self) -> &[Color] {
        &self.data
    }

    /// Consumes the image and returns its pixel buffer.
    pub fn into_data(self) -> Vec<Color> {
        self.data
    }

    /// Returns the color at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }

    /// Returns row `y` as a slice of length `width`.
    pub fn row(&self, y: usize) -> Option<&[Color]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.data.get(start..start + self.width)
    }

    /// Iterates over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        (0..self.height).filter_map(move |y| self.row(y))
    }
}

impl Raster for IndexedImage {
    fn create(width: usize, height: usize) -> Self {
        Self::new(width, height)
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn pixel(&self, x: i64, y: i64) -> Color {
        if !Raster::contains(self, x, y) {
            return self.background();
        }
        self.data[y as usize * self.width + x as usize]
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        debug_assert!(x < self.width && y < self.height);
        if let Some(slot) = self.data.get_mut(y * self.width + x) {
            *slot = color;
        }
    }
}
