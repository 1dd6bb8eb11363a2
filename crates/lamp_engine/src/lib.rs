//! # Lamp Engine
//!
//! Behaviors for scene-graph actors that carry light-emitting props such as
//! lanterns and torches.
//!
//! ## Features
//!
//! - **Light Behavior**: Lamps that stay in front of their host when it turns around
//! - **Eased Transitions**: Elastic heat-up and quintic cool-down of lamp intensity
//! - **Timeline Scheduling**: Frame-driven `do_for` callbacks with cancellable handles
//! - **Configuration**: Lamp tuning loaded from TOML or RON files
//!
//! ## Quick Start
//!
//! ```rust
//! use lamp_engine::prelude::*;
//!
//! let mut actor = Actor::new();
//! let mut light = Light::new();
//! light.add_lamp(None).heat_up_time = 0.5;
//!
//! light.on(&mut actor);
//! for _ in 0..60 {
//!     light.timeshift(&mut actor, 1.0 / 60.0);
//!     actor.timeshift(1.0 / 60.0);
//! }
//!
//! let lamp = &light.lamps()[0];
//! assert!(lamp.state);
//! assert!((lamp.light.borrow().intensity - lamp.intensity).abs() < 1e-4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod events;
pub mod animation;
pub mod scene;
pub mod behavior;

#[cfg(test)]
mod tests;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        animation::{Easing, TaskId, Timeline, Tween},
        behavior::{
            light::{Lamp, Light, EVENT_LAMP_CHANGE},
            Actor, Behavior, Host,
        },
        config::{Config, ConfigError, LampConfig},
        events::{Event, EventArg, EventHandler, EventSystem, EventType},
        foundation::math::{Vec2, Vec3},
        scene::{LightHandle, Material, Mesh, Model, Scene, SpotLight, World},
    };
}
