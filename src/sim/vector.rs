//! Immutable 2D point/displacement
//!
//! Thin value type over `glam::Vec2`. Every operation returns a new vector;
//! nothing mutates in place.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise sum
    #[inline]
    pub fn plus(self, other: Vector) -> Vector {
        (Vec2::from(self) + Vec2::from(other)).into()
    }

    /// Scale both components by `factor`
    #[inline]
    pub fn times(self, factor: f32) -> Vector {
        (Vec2::from(self) * factor).into()
    }

    pub fn is_finite(self) -> bool {
        Vec2::from(self).is_finite()
    }
}

impl From<Vec2> for Vector {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Vector> for Vec2 {
    #[inline]
    fn from(v: Vector) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<(f32, f32)> for Vector {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}
