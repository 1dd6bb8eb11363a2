//! Light behavior
//!
//! Drives the lamps of a light-carrying actor such as a lantern or torch:
//! - Keeps every lamp in front of the host whichever way it faces
//! - Parents lamp lights into the host model and invalidates scene materials
//! - Heats lamps up and cools them down with eased intensity transitions
//!
//! Switching is idempotent per lamp. `on` only touches lamps that are off and
//! `off` only touches lamps that are on; each real flip sends a
//! [`EventType::LampChange`] event on the behavior's event system.

mod lamp;

pub use lamp::Lamp;

use super::{Behavior, Host};
use crate::config::LampConfig;
use crate::events::{Event, EventArg, EventSystem, EventType};
use crate::foundation::math::Vec2;
use crate::scene::LightHandle;
use std::any::Any;
use std::rc::Rc;

/// Identifier of the event sent when a lamp is switched
pub const EVENT_LAMP_CHANGE: &str = EventType::LampChange.name();

/// Behavior owning the lamps of one actor
pub struct Light {
    direction: Vec2,
    lamps: Vec<Lamp>,
    events: EventSystem,
    time: f64,
}

impl Light {
    /// Behavior name
    pub const NAME: &'static str = "light";

    /// Create a behavior without lamps
    pub fn new() -> Self {
        Self {
            direction: Vec2::zeros(),
            lamps: Vec::new(),
            events: EventSystem::new(),
            time: 0.0,
        }
    }

    /// Add a lamp around `light`, or around a default light when `None`
    ///
    /// Returns the lamp for further tuning of durations and curves.
    pub fn add_lamp(&mut self, light: Option<LightHandle>) -> &mut Lamp {
        self.push_lamp(Lamp::new(light))
    }

    /// Add a lamp tuned from a configuration
    pub fn add_lamp_with(&mut self, light: Option<LightHandle>, config: &LampConfig) -> &mut Lamp {
        self.push_lamp(Lamp::from_config(light, config))
    }

    fn push_lamp(&mut self, lamp: Lamp) -> &mut Lamp {
        self.lamps.push(lamp);
        let index = self.lamps.len() - 1;
        log::debug!("Light: added lamp #{}", index);
        &mut self.lamps[index]
    }

    /// Lamps in the order they were added
    pub fn lamps(&self) -> &[Lamp] {
        &self.lamps
    }

    /// Mutable access to the lamps for retuning
    pub fn lamps_mut(&mut self) -> &mut [Lamp] {
        &mut self.lamps
    }

    /// Facing last synchronized to the lamps
    pub const fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Event system lamp changes are sent on
    pub const fn events(&self) -> &EventSystem {
        &self.events
    }

    /// Mutable event system, for registering handlers
    pub fn events_mut(&mut self) -> &mut EventSystem {
        &mut self.events
    }

    /// Switch every lamp on
    ///
    /// Lights are re-parented into the host model and scene materials are
    /// invalidated even when every lamp is already on.
    pub fn on<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.update_scene(host);
        for (index, lamp) in self.lamps.iter_mut().enumerate() {
            if lamp.start(host) {
                log::debug!("Light: lamp #{} heating up over {}s", index, lamp.heat_up_time);
                self.events.send(lamp_change(self.time, index, true));
            }
        }
        self.events.dispatch();
    }

    /// Switch every lamp off
    pub fn off<H: Host + ?Sized>(&mut self, host: &mut H) {
        for (index, lamp) in self.lamps.iter_mut().enumerate() {
            if lamp.stop(host) {
                log::debug!("Light: lamp #{} cooling down over {}s", index, lamp.cool_down_time);
                self.events.send(lamp_change(self.time, index, false));
            }
        }
        self.events.dispatch();
    }

    /// Per-frame hook: follow the host's facing
    pub fn timeshift<H: Host + ?Sized>(&mut self, host: &mut H, delta_time: f32) {
        self.time += f64::from(delta_time);
        self.update_direction(&*host);
    }

    #[allow(clippy::float_cmp)]
    fn update_direction<H: Host + ?Sized>(&mut self, host: &H) {
        let facing = host.direction().x;
        if facing == self.direction.x {
            return;
        }
        log::debug!("Light: facing changed {} -> {}", self.direction.x, facing);
        for lamp in &mut self.lamps {
            lamp.set_direction(facing);
        }
        self.direction.x = facing;
    }

    fn update_scene<H: Host + ?Sized>(&self, host: &mut H) {
        let model = host.model_mut();
        for lamp in &self.lamps {
            model.remove_light(&lamp.light);
            model.add_light(Rc::clone(&lamp.light));
        }

        if let Some(world) = host.world_mut() {
            let flagged = world.scene.invalidate_materials();
            log::trace!("Light: flagged {} materials for update", flagged);
        }
    }
}

impl Default for Light {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for Light {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn timeshift(&mut self, host: &mut dyn Host, delta_time: f32) {
        Self::timeshift(self, host, delta_time);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn lamp_change(timestamp: f64, index: usize, state: bool) -> Event {
    Event::new(EventType::LampChange, timestamp)
        .with_arg("lamp", EventArg::LampIndex(index))
        .with_arg("state", EventArg::State(state))
}
