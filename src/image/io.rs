//! Loading and saving indexed images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Palette indices are
//! stored as 8-bit luma: a gray value of `n` is palette index `n`.

use crate::image::IndexedImage;
use crate::util::{SpriteXformError, SpriteXformResult};
use std::path::Path;

/// Creates an indexed image from a grayscale buffer.
pub fn indexed_from_gray_image(img: &image::GrayImage) -> SpriteXformResult<IndexedImage> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    IndexedImage::from_vec(img.as_raw().clone(), width, height)
}

/// Creates an indexed image from a dynamic image via luma conversion.
pub fn indexed_from_dynamic_image(img: &image::DynamicImage) -> SpriteXformResult<IndexedImage> {
    let gray = img.to_luma8();
    indexed_from_gray_image(&gray)
}

/// Converts an indexed image into a grayscale buffer.
pub fn gray_image_from_indexed(img: &IndexedImage) -> SpriteXformResult<image::GrayImage> {
    let width = u32::try_from(img.width()).map_err(|_| SpriteXformError::InvalidDimensions {
        width: img.width(),
        height: img.height(),
    })?;
    let height = u32::try_from(img.height()).map_err(|_| SpriteXformError::InvalidDimensions {
        width: img.width(),
        height: img.height(),
    })?;
    image::GrayImage::from_raw(width, height, img.data().to_vec()).ok_or(
        SpriteXformError::BufferSizeMismatch {
            needed: img.width() * img.height(),
            got: img.data().len(),
        },
    )
}

/// Loads an image from disk as palette indices.
pub fn load_indexed_image<P: AsRef<Path>>(path: P) -> SpriteXformResult<IndexedImage> {
    let img = image::open(path).map_err(|err| SpriteXformError::ImageIo {
        reason: err.to_string(),
    })?;
    indexed_from_dynamic_image(&img)
}

/// Saves palette indices to disk as an 8-bit grayscale image.
///
/// The format is inferred from the path extension.
pub fn save_indexed_image<P: AsRef<Path>>(img: &IndexedImage, path: P) -> SpriteXformResult<()> {
    let gray = gray_image_from_indexed(img)?;
    gray.save(path).map_err(|err| SpriteXformError::ImageIo {
        reason: err.to_string(),
    })
}
