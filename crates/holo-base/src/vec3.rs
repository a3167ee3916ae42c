use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::Vec4;

/// Point or direction in 3D. World space is right-handed with +Y up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

componentwise!(Vec3 { x, y, z });

impl<T: Sub<Output = T>> Sub for Vec3<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Neg<Output = T>> Neg for Vec3<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl<T> Vec3<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Homogeneous coordinates: `w = 1` for points, `w = 0` for directions.
    pub fn extend(self, w: T) -> Vec4<T> {
        Vec4::new(self.x, self.y, self.z, w)
    }
}

impl<T: Default> Vec3<T> {
    pub fn zero() -> Self {
        Self::default()
    }
}

impl<T: Mul<Output = T> + Add<Output = T> + Sub<Output = T> + Copy> Vec3<T> {
    pub fn dot(self, rhs: Self) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Right-handed cross product.
    pub fn cross(self, rhs: Self) -> Self {
        Vec3::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl Div<f32> for Vec3<f32> {
    type Output = Self;
    fn div(self, s: f32) -> Self {
        self * s.recip()
    }
}

impl Vec3<f32> {
    /// Local forward axis used by rotations (`Quat::look_rotation`).
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);

    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction, or `None` for a (near) zero or non-finite vector.
    pub fn try_normalized(self) -> Option<Self> {
        let len = self.length();
        (len.is_finite() && len >= 1e-12).then(|| self / len)
    }

    pub fn normalized(self) -> Self {
        self / self.length()
    }

    pub fn is_finite(self) -> bool {
        [self.x, self.y, self.z].iter().all(|c| c.is_finite())
    }
}
