//! Spot light node
//!
//! Light nodes are owned by the scene graph and shared with the behaviors
//! that animate them, so they travel as `Rc<RefCell<SpotLight>>` handles.
//! Node identity is handle identity (`Rc::ptr_eq`).

use crate::animation::{TweenProperty, TweenSubject};
use crate::foundation::math::{color_from_hex, Vec3};
use crate::scene::model::ParentSlot;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a light node
pub type LightHandle = Rc<RefCell<SpotLight>>;

/// Packed color of a default-constructed light
pub const DEFAULT_LIGHT_COLOR: u32 = 0xff_ff_ff;

/// Intensity of a default-constructed light
pub const DEFAULT_LIGHT_INTENSITY: f32 = 1.0;

/// Range of a default-constructed light
pub const DEFAULT_LIGHT_RANGE: f32 = 100.0;

/// Cone light emitted from a position toward a direction
#[derive(Debug, Clone, PartialEq)]
pub struct SpotLight {
    /// RGB color values for the light (0.0 to 1.0 range)
    pub color: Vec3,
    /// Light intensity multiplier (0.0 = no light)
    pub intensity: f32,
    /// Maximum range of the light
    pub range: f32,
    /// Position relative to the parent node
    pub position: Vec3,
    /// Direction the cone points, relative to the parent node
    pub direction: Vec3,
    /// Outer cone angle in radians
    pub angle: f32,
    /// Fraction of the cone that fades toward the edge (0.0 to 1.0)
    pub penumbra: f32,
    /// Whether this light should cast shadows
    pub cast_shadows: bool,
    pub(super) parent: ParentSlot,
}

impl SpotLight {
    /// Create a light with the given color, intensity and range
    pub fn new(color: Vec3, intensity: f32, range: f32) -> Self {
        Self {
            color,
            intensity,
            range,
            position: Vec3::new(0.0, 1.0, 0.0),
            direction: Vec3::new(0.0, -1.0, 0.0),
            angle: std::f32::consts::FRAC_PI_3,
            penumbra: 0.0,
            cast_shadows: false,
            parent: ParentSlot::default(),
        }
    }

    /// Create a light from a packed `0xRRGGBB` color
    pub fn from_hex(hex: u32, intensity: f32, range: f32) -> Self {
        Self::new(color_from_hex(hex), intensity, range)
    }

    /// Builder pattern: Set position
    #[must_use]
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Builder pattern: Set cone angle and penumbra
    #[must_use]
    pub fn with_cone(mut self, angle: f32, penumbra: f32) -> Self {
        self.angle = angle;
        self.penumbra = penumbra.clamp(0.0, 1.0);
        self
    }

    /// Whether the node is currently a child of a model
    pub fn has_parent(&self) -> bool {
        self.parent.is_set()
    }

    /// Wrap the light in a shared node handle
    pub fn into_handle(self) -> LightHandle {
        Rc::new(RefCell::new(self))
    }
}

impl Default for SpotLight {
    fn default() -> Self {
        Self::from_hex(DEFAULT_LIGHT_COLOR, DEFAULT_LIGHT_INTENSITY, DEFAULT_LIGHT_RANGE)
    }
}

impl TweenSubject for SpotLight {
    fn property(&self, property: TweenProperty) -> f32 {
        match property {
            TweenProperty::Intensity => self.intensity,
            TweenProperty::PositionX => self.position.x,
            TweenProperty::PositionY => self.position.y,
            TweenProperty::PositionZ => self.position.z,
        }
    }

    fn set_property(&mut self, property: TweenProperty, value: f32) {
        match property {
            TweenProperty::Intensity => self.intensity = value,
            TweenProperty::PositionX => self.position.x = value,
            TweenProperty::PositionY => self.position.y = value,
            TweenProperty::PositionZ => self.position.z = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_light_is_lit_white() {
        let light = SpotLight::default();
        assert_relative_eq!(light.color, Vec3::new(1.0, 1.0, 1.0));
        assert!(light.intensity > 0.0);
        assert_relative_eq!(light.range, DEFAULT_LIGHT_RANGE);
    }

    #[test]
    fn test_tween_properties_map_to_fields() {
        let mut light = SpotLight::default().with_position(Vec3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(light.property(TweenProperty::PositionZ), 3.0);

        light.set_property(TweenProperty::Intensity, 0.25);
        light.set_property(TweenProperty::PositionX, -1.0);
        assert_relative_eq!(light.intensity, 0.25);
        assert_relative_eq!(light.position, Vec3::new(-1.0, 2.0, 3.0));
    }

    #[test]
    fn test_handles_share_identity() {
        let handle = SpotLight::default().into_handle();
        let alias = Rc::clone(&handle);
        alias.borrow_mut().intensity = 7.0;
        assert!(Rc::ptr_eq(&handle, &alias));
        assert_relative_eq!(handle.borrow().intensity, 7.0);
    }
}
