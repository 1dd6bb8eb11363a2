//! Scene graph nodes
//!
//! The minimal node set a lamp behavior touches: spot lights shared between
//! a host model and its lamps, the model container itself, and the world
//! scene whose materials are invalidated when lights move.

pub mod light;
pub mod model;
pub mod world;

pub use light::{LightHandle, SpotLight};
pub use model::{LightContainer, Model};
pub use world::{Material, Mesh, Scene, World};
