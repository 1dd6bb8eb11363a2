//! Lamp: one light source plus its on/off transition settings

use crate::animation::{Easing, TaskId, Tween, TweenProperty};
use crate::behavior::Host;
use crate::config::{LampConfig, DEFAULT_COOL_DOWN_TIME, DEFAULT_HEAT_UP_TIME};
use crate::foundation::math::signed_toward;
use crate::scene::{LightHandle, SpotLight};
use std::rc::Rc;

/// Light source switched on and off with eased intensity transitions
///
/// The light node itself belongs to the scene graph; a lamp only ever writes
/// its `intensity` and `position.z`.
#[derive(Debug)]
pub struct Lamp {
    /// Light node driven by this lamp
    pub light: LightHandle,
    /// Curve used when switching on
    pub ease_on: Easing,
    /// Curve used when switching off
    pub ease_off: Easing,
    /// Seconds to fade out when switched off
    pub cool_down_time: f32,
    /// Seconds to fade in when switched on
    pub heat_up_time: f32,
    /// Intensity the light reaches when on
    pub intensity: f32,
    /// Last transition started, `true` = on
    pub state: bool,
    transition: Option<TaskId>,
}

impl Lamp {
    /// Wrap a light, or a default white spot light when none is given
    ///
    /// The light's current intensity becomes the lamp's "on" intensity and
    /// the light itself is switched dark.
    pub fn new(light: Option<LightHandle>) -> Self {
        let light = light.unwrap_or_else(|| SpotLight::default().into_handle());
        let intensity = std::mem::replace(&mut light.borrow_mut().intensity, 0.0);
        Self {
            light,
            ease_on: Easing::ease_out_elastic(),
            ease_off: Easing::ease_out_quint(),
            cool_down_time: DEFAULT_COOL_DOWN_TIME,
            heat_up_time: DEFAULT_HEAT_UP_TIME,
            intensity,
            state: false,
            transition: None,
        }
    }

    /// Wrap a light using configured transitions and default light
    pub fn from_config(light: Option<LightHandle>, config: &LampConfig) -> Self {
        let light = light.unwrap_or_else(|| config.default_light.build().into_handle());
        let mut lamp = Self::new(Some(light));
        lamp.apply_config(config);
        lamp
    }

    /// Copy transition durations and curves from a configuration
    pub fn apply_config(&mut self, config: &LampConfig) {
        self.heat_up_time = config.heat_up_time;
        self.cool_down_time = config.cool_down_time;
        self.ease_on = config.ease_on;
        self.ease_off = config.ease_off;
    }

    /// Put the light on the side of the host given by facing `x`
    ///
    /// Distance from the host is kept; only the sign of `position.z` changes.
    pub fn set_direction(&mut self, x: f32) {
        let mut light = self.light.borrow_mut();
        light.position.z = signed_toward(light.position.z, x);
    }

    /// Handle of the transition currently scheduled for this lamp
    pub const fn transition(&self) -> Option<TaskId> {
        self.transition
    }

    /// Start heating up, returns `false` if the lamp was already on
    pub(crate) fn start<H: Host + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.state {
            return false;
        }
        self.state = true;
        self.transition_to(host, self.intensity, self.ease_on, self.heat_up_time);
        true
    }

    /// Start cooling down, returns `false` if the lamp was already off
    pub(crate) fn stop<H: Host + ?Sized>(&mut self, host: &mut H) -> bool {
        if !self.state {
            return false;
        }
        self.state = false;
        self.transition_to(host, 0.0, self.ease_off, self.cool_down_time);
        true
    }

    fn transition_to<H: Host + ?Sized>(&mut self, host: &mut H, goal: f32, easing: Easing, duration: f32) {
        // Superseded transitions would fight over the same intensity
        if let Some(previous) = self.transition.take() {
            host.cancel(previous);
        }

        let mut tween = Tween::new(TweenProperty::Intensity, goal, easing);
        tween.add_subject(Rc::clone(&self.light));
        let task = host.do_for(
            duration,
            Box::new(move |_elapsed: f32, progress: f32| tween.update(progress)),
        );
        self.transition = Some(task);
    }
}
