//! Animation primitives
//!
//! Easing curves, property tweens and the frame-driven `do_for` timeline that
//! lamp transitions are built from.

pub mod easing;
pub mod tween;
pub mod timeline;

pub use easing::Easing;
pub use tween::{Tween, TweenProperty, TweenSubject};
pub use timeline::{FrameCallback, TaskId, Timeline};
