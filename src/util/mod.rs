//! Shared utility helpers.

pub mod error;
pub mod math;

pub use error::{SpriteXformError, SpriteXformResult};
pub use math::normalize_deg;
