//! Sprite rotation with a supersampled source.
//!
//! A [`RotationState`] owns a clone of the sprite's source image and a copy
//! enlarged once by an EPX scaler. Rendering an angle either permutes the
//! source exactly (quarter turns) or samples the enlarged copy with inverse
//! rotation, which smooths stair-stepping without blending colors.

mod right_angle;
mod sample;

pub use right_angle::{rotate_right_angle, RightAngle};
pub use sample::rotate_sampled;

use crate::image::Raster;
use crate::scale::{scale, EdgeMode, ScaleConfig, ScaleFactor};
use crate::trace::trace_span;
use crate::util::math::normalize_deg;

/// Configuration for rotation rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotationConfig {
    /// Scaler used to build the supersampled source.
    pub supersample: ScaleFactor,
    /// Edge handling for the supersampling scaler.
    pub edge: EdgeMode,
    /// Render 90/180/270 degrees by exact permutation.
    pub exact_right_angles: bool,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            supersample: ScaleFactor::X2,
            edge: EdgeMode::Clamp,
            exact_right_angles: true,
        }
    }
}

/// Rotation bookkeeping for one sprite.
///
/// The supersampled copy is computed once in [`RotationState::new`] and is
/// never refreshed; build a new state to pick up a changed source image.
#[derive(Clone, Debug)]
pub struct RotationState<I> {
    angle_deg: i64,
    original: I,
    supersampled: I,
    cfg: RotationConfig,
}

impl<I: Raster> RotationState<I> {
    /// Clones `source` and supersamples it. The angle starts at 0.
    pub fn new(source: &I, cfg: RotationConfig) -> Self {
        let original = source.clone();
        let supersampled = scale(&original, cfg.supersample, ScaleConfig { edge: cfg.edge });
        Self {
            angle_deg: 0,
            original,
            supersampled,
            cfg,
        }
    }

    /// Returns the current angle in `[0, 360)`.
    pub fn angle(&self) -> i64 {
        self.angle_deg
    }

    /// Sets the angle, normalizing it into `[0, 360)`.
    pub fn set_angle(&mut self, angle_deg: i64) {
        self.angle_deg = normalize_deg(angle_deg);
    }

    /// Adds `delta_deg` to the angle.
    pub fn add_angle(&mut self, delta_deg: i64) {
        self.angle_deg = normalize_deg(self.angle_deg + normalize_deg(delta_deg));
    }

    /// Returns the source image captured at creation.
    pub fn original(&self) -> &I {
        &self.original
    }

    /// Returns the supersampled source.
    pub fn supersampled(&self) -> &I {
        &self.supersampled
    }

    /// Returns the supersampling factor.
    pub fn factor(&self) -> usize {
        self.cfg.supersample.get()
    }

    /// Returns the configuration this state was built with.
    pub fn config(&self) -> RotationConfig {
        self.cfg
    }

    /// Renders the source at the current angle.
    pub fn render_current(&self) -> I {
        self.render(self.angle_deg)
    }

    /// Renders the source rotated clockwise by `angle_deg`.
    ///
    /// Any integer is accepted. A normalized angle of 0 returns a clone of
    /// the source; quarter turns are exact permutations when enabled; all
    /// other angles sample the supersampled copy.
    pub fn render(&self, angle_deg: i64) -> I {
        let angle_deg = normalize_deg(angle_deg);
        let _span = trace_span!("rotate", angle_deg = angle_deg).entered();

        match RightAngle::from_normalized(angle_deg) {
            Some(RightAngle::Deg0) => self.original.clone(),
            Some(right) if self.cfg.exact_right_angles => {
                rotate_right_angle(&self.original, right)
            }
            _ => rotate_sampled(&self.original, &self.supersampled, self.factor(), angle_deg),
        }
    }
}
