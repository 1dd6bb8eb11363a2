//! Scene actor hosting behaviors
//!
//! The actor owns its facing, visual model, optional world and the timeline
//! that drives `do_for` callbacks. Behaviors are stored on the actor but are
//! temporarily taken out while they run so they can borrow the actor as
//! their [`Host`].

use super::{Behavior, Host};
use crate::animation::{FrameCallback, TaskId, Timeline};
use crate::foundation::math::Vec2;
use crate::scene::{LightContainer, Model, World};

/// Errors raised while managing actor behaviors
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ActorError {
    /// A behavior with the same name is already attached
    #[error("Behavior `{0}` is already attached")]
    DuplicateBehavior(&'static str),
}

/// Object in the world that behaviors attach to
pub struct Actor {
    /// Signed facing, `x > 0` faces right
    pub direction: Vec2,
    /// Visual model
    pub model: Model,
    /// World the actor lives in
    pub world: Option<World>,
    timeline: Timeline,
    behaviors: Vec<Box<dyn Behavior>>,
}

impl Actor {
    /// Create an actor facing right with an empty model and no world
    pub fn new() -> Self {
        Self {
            direction: Vec2::new(1.0, 0.0),
            model: Model::new(),
            world: None,
            timeline: Timeline::new(),
            behaviors: Vec::new(),
        }
    }

    /// Builder pattern: Place the actor in a world
    #[must_use]
    pub fn with_world(mut self, world: World) -> Self {
        self.world = Some(world);
        self
    }

    /// Attach a behavior, names must be unique per actor
    pub fn attach(&mut self, behavior: Box<dyn Behavior>) -> Result<(), ActorError> {
        let name = behavior.name();
        if self.behavior_named(name).is_some() {
            return Err(ActorError::DuplicateBehavior(name));
        }
        log::debug!("Actor: attached behavior `{}`", name);
        self.behaviors.push(behavior);
        Ok(())
    }

    /// Detach a behavior by name
    pub fn detach(&mut self, name: &str) -> Option<Box<dyn Behavior>> {
        let index = self.behaviors.iter().position(|b| b.name() == name)?;
        log::debug!("Actor: detached behavior `{}`", name);
        Some(self.behaviors.remove(index))
    }

    /// Look up a behavior by name
    pub fn behavior_named(&self, name: &str) -> Option<&dyn Behavior> {
        self.behaviors
            .iter()
            .find(|b| b.name() == name)
            .map(|b| &**b)
    }

    /// Look up a behavior by type
    pub fn behavior<T: Behavior>(&self) -> Option<&T> {
        self.behaviors
            .iter()
            .find_map(|b| b.as_any().downcast_ref::<T>())
    }

    /// Look up a behavior by type, mutably
    ///
    /// Use [`Actor::with_behavior`] when the behavior also needs the actor.
    pub fn behavior_mut<T: Behavior>(&mut self) -> Option<&mut T> {
        self.behaviors
            .iter_mut()
            .find_map(|b| b.as_any_mut().downcast_mut::<T>())
    }

    /// Lend a behavior together with the actor as its host
    ///
    /// Returns `None` when no behavior of type `T` is attached.
    pub fn with_behavior<T, R>(&mut self, f: impl FnOnce(&mut T, &mut Self) -> R) -> Option<R>
    where
        T: Behavior,
    {
        let mut behaviors = std::mem::take(&mut self.behaviors);
        let result = behaviors
            .iter_mut()
            .find_map(|b| b.as_any_mut().downcast_mut::<T>())
            .map(|behavior| f(behavior, self));
        self.restore_behaviors(behaviors);
        result
    }

    /// Advance the actor by one frame
    ///
    /// Runs every behavior's hook, then steps scheduled callbacks.
    pub fn timeshift(&mut self, delta_time: f32) {
        let mut behaviors = std::mem::take(&mut self.behaviors);
        for behavior in &mut behaviors {
            behavior.timeshift(self, delta_time);
        }
        self.restore_behaviors(behaviors);
        self.timeline.update(delta_time);
    }

    /// Scheduled callbacks
    pub const fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Number of attached behaviors
    pub fn behavior_count(&self) -> usize {
        self.behaviors.len()
    }

    fn restore_behaviors(&mut self, behaviors: Vec<Box<dyn Behavior>>) {
        // Keep anything attached while the list was lent out
        let attached_meanwhile = std::mem::replace(&mut self.behaviors, behaviors);
        self.behaviors.extend(attached_meanwhile);
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for Actor {
    fn direction(&self) -> Vec2 {
        self.direction
    }

    fn model_mut(&mut self) -> &mut dyn LightContainer {
        &mut self.model
    }

    fn world_mut(&mut self) -> Option<&mut World> {
        self.world.as_mut()
    }

    fn do_for(&mut self, duration: f32, callback: FrameCallback) -> TaskId {
        self.timeline.do_for(duration, callback)
    }

    fn cancel(&mut self, task: TaskId) -> bool {
        self.timeline.cancel(task)
    }
}
