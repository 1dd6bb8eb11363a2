//! Math utilities and types
//!
//! Provides the small set of vector types lamps and hosts exchange.

pub use nalgebra::{Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Convert a packed `0xRRGGBB` color into linear RGB components in `[0, 1]`
#[allow(clippy::cast_precision_loss)]
pub fn color_from_hex(hex: u32) -> Vec3 {
    let r = (hex >> 16) & 0xff;
    let g = (hex >> 8) & 0xff;
    let b = hex & 0xff;
    Vec3::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

/// Return `magnitude` with the sign of a facing value
///
/// Positive facing keeps the value positive; zero and negative facing
/// produce a non-positive result.
pub fn signed_toward(magnitude: f32, facing: f32) -> f32 {
    let distance = magnitude.abs();
    if facing > 0.0 {
        distance
    } else {
        -distance
    }
}
