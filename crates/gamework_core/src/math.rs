//! Math constants.
//!
//! Plain `const`s where the value is a scalar; vector sentinels are `const`
//! too since glam's constructors are `const fn`.

use glam::{Vec2, Vec3, Vec4};

pub use std::f32::consts::{E, PI, TAU};

pub const PI_HALF: f32 = PI * 0.5;
pub const PI2: f32 = PI * 2.0;
pub const GOLDEN_RATIO: f32 = 1.618_034;

pub const DEG2RAD: f32 = TAU / 360.0;
pub const RAD2DEG: f32 = 360.0 / TAU;

/// Smallest positive subnormal `f32` (`2^-149`).
pub const EPSILON: f32 = 1.401_298_5e-45;
pub const INFINITY: f32 = f32::INFINITY;
pub const NEG_INFINITY: f32 = f32::NEG_INFINITY;

pub const NAN_VEC2: Vec2 = Vec2::NAN;
pub const INFINITY_VEC2: Vec2 = Vec2::INFINITY;

pub const NAN_VEC3: Vec3 = Vec3::NAN;
pub const INFINITY_VEC3: Vec3 = Vec3::INFINITY;

pub const NAN_VEC4: Vec4 = Vec4::NAN;
pub const INFINITY_VEC4: Vec4 = Vec4::INFINITY;

/// Half-line in 3-D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ray {
    pub origin: Vec3,
    /// Not required to be normalised.
    pub direction: Vec3,
}

impl Ray {
    /// Ray with zero origin and zero direction.
    pub const EMPTY: Self = Self {
        origin: Vec3::ZERO,
        direction: Vec3::ZERO,
    };

    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t` along the ray.
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
