//! Per-entity rotation tracking.
//!
//! [`RotationRegistry`] maps entity ids to [`RotationState`]s. A state is
//! created lazily the first time an entity is rotated, capturing the
//! entity's image at that moment. Hosts that recycle ids must call
//! [`RotationRegistry::entity_destroyed`] when an entity goes away, or a new
//! entity reusing the id will be rotated from the old entity's image.
//!
//! The registry is not synchronized. Share it across threads only behind a
//! lock that covers every call.

use std::collections::HashMap;

use crate::image::Raster;
use crate::rotate::{RotationConfig, RotationState};
use crate::trace::trace_event;

/// Stable identifier of a host entity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// Host entity whose image the registry rotates.
pub trait Entity {
    type Image: Raster;

    /// Returns the entity's stable id.
    fn id(&self) -> EntityId;

    /// Returns the entity's current image.
    fn image(&self) -> &Self::Image;

    /// Replaces the entity's image with a rendered result.
    fn replace_image(&mut self, image: Self::Image);
}

/// Rotation states keyed by entity id.
pub struct RotationRegistry<I> {
    states: HashMap<EntityId, RotationState<I>>,
    cfg: RotationConfig,
}

impl<I: Raster> Default for RotationRegistry<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Raster> RotationRegistry<I> {
    /// Creates an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RotationConfig::default())
    }

    /// Creates an empty registry whose states use `cfg`.
    pub fn with_config(cfg: RotationConfig) -> Self {
        Self {
            states: HashMap::new(),
            cfg,
        }
    }

    /// Returns the configuration applied to new states.
    pub fn config(&self) -> RotationConfig {
        self.cfg
    }

    /// Adds `delta_deg` to the entity's angle and replaces its image with
    /// the re-rendered result. Untracked entities start at 0.
    pub fn change_rotation<E>(&mut self, entity: &mut E, delta_deg: i64)
    where
        E: Entity<Image = I>,
    {
        let state = self.state_for(entity);
        state.add_angle(delta_deg);
        let rendered = state.render_current();
        entity.replace_image(rendered);
    }

    /// Sets the entity's angle and replaces its image with the re-rendered
    /// result. Untracked entities are registered first.
    pub fn rotate_to<E>(&mut self, entity: &mut E, angle_deg: i64)
    where
        E: Entity<Image = I>,
    {
        let state = self.state_for(entity);
        state.set_angle(angle_deg);
        let rendered = state.render_current();
        entity.replace_image(rendered);
    }

    /// Returns the entity's angle in `[0, 360)`, or 0 if it is untracked.
    ///
    /// Never creates state.
    pub fn rotation(&self, id: EntityId) -> i64 {
        self.states.get(&id).map_or(0, RotationState::angle)
    }

    /// Captures the entity's current image as its new rotation source,
    /// resetting its angle to 0.
    ///
    /// Returns the angle the entity had before, if it was tracked. The
    /// entity's image is left untouched.
    pub fn register<E>(&mut self, entity: &E) -> Option<i64>
    where
        E: Entity<Image = I>,
    {
        let id = entity.id();
        let state = RotationState::new(entity.image(), self.cfg);
        let previous = self.states.insert(id, state).map(|prev| prev.angle());
        trace_event!("rotation_state_registered", entity = id.0);
        previous
    }

    /// Drops the state of a destroyed entity. Returns true if it was tracked.
    pub fn entity_destroyed(&mut self, id: EntityId) -> bool {
        let removed = self.states.remove(&id).is_some();
        if removed {
            trace_event!("rotation_state_removed", entity = id.0);
        }
        removed
    }

    /// Returns true if the entity has rotation state.
    pub fn contains(&self, id: EntityId) -> bool {
        self.states.contains_key(&id)
    }

    /// Returns the rotation state of an entity, if tracked.
    pub fn state(&self, id: EntityId) -> Option<&RotationState<I>> {
        self.states.get(&id)
    }

    /// Returns the number of tracked entities.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns true if no entity is tracked.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    fn state_for<E>(&mut self, entity: &E) -> &mut RotationState<I>
    where
        E: Entity<Image = I>,
    {
        let cfg = self.cfg;
        self.states.entry(entity.id()).or_insert_with(|| {
            trace_event!("rotation_state_created", entity = entity.id().0);
            RotationState::new(entity.image(), cfg)
        })
    }
}
