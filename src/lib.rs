//! Spritexform provides color-exact transforms for palette-indexed pixel art.
//!
//! Two primitives are offered: Scale2x/Scale3x (EPX family) up-scalers that
//! keep diagonal edges sharp without blending, and arbitrary-angle sprite
//! rotation that samples a supersampled copy of the sprite, with exact
//! permutations for quarter turns. Rotation state per entity lives in an
//! explicit [`RotationRegistry`].

pub mod geometry;
pub mod image;
pub mod registry;
pub mod rotate;
pub mod scale;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use crate::image::io;

pub use geometry::{Point, PolarVector};
pub use crate::image::{Color, IndexedImage, Raster, BACKGROUND};
pub use registry::{Entity, EntityId, RotationRegistry};
pub use rotate::{rotate_right_angle, rotate_sampled, RightAngle, RotationConfig, RotationState};
pub use scale::{
    scale, scale2x, scale2x_with, scale3x, scale3x_with, EdgeMode, ScaleConfig, ScaleFactor,
};
pub use util::{normalize_deg, SpriteXformError, SpriteXformResult};
