//! Behaviors attached to scene actors
//!
//! A behavior is a reusable unit of logic that runs against the actor it is
//! attached to. The actor is not stored inside the behavior; it is lent to
//! every call through the [`Host`] capability trait.

pub mod actor;
pub mod light;

pub use actor::{Actor, ActorError};

use crate::animation::{FrameCallback, TaskId};
use crate::foundation::math::Vec2;
use crate::scene::{LightContainer, World};
use std::any::Any;

/// Capabilities a behavior needs from the actor it runs on
pub trait Host {
    /// Signed facing of the actor, only `x` is meaningful for side-on actors
    fn direction(&self) -> Vec2;

    /// Visual model the actor renders
    fn model_mut(&mut self) -> &mut dyn LightContainer;

    /// World the actor currently lives in, if any
    fn world_mut(&mut self) -> Option<&mut World>;

    /// Call `callback` once per frame with `(elapsed, progress)` for `duration` seconds
    fn do_for(&mut self, duration: f32, callback: FrameCallback) -> TaskId;

    /// Stop a callback scheduled with [`Host::do_for`]
    ///
    /// Returns `false` if it had already finished or been cancelled.
    fn cancel(&mut self, task: TaskId) -> bool;
}

/// Reusable unit of actor logic
pub trait Behavior: Any {
    /// Unique name of the behavior on an actor
    fn name(&self) -> &'static str;

    /// Per-frame hook, called once per host update
    fn timeshift(&mut self, host: &mut dyn Host, delta_time: f32);

    /// Upcast for downcasting to the concrete behavior
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for downcasting to the concrete behavior
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
