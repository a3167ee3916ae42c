use std::fmt;
use std::ops::{Div, Mul, Neg};

use crate::Vec3;

#[derive(Clone, Copy, PartialEq)]
pub struct Quat<T> {
    pub w: T,
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quat")
            .field("w", &self.w)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

impl<T> Quat<T> {
    pub fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, x, y, z }
    }
}

impl<T: Neg<Output = T> + Copy> Quat<T> {
    pub fn conjugate(self) -> Self {
        Self {
            w: self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<T: Div<Output = T> + Copy> Div<T> for Quat<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        Self {
            w: self.w / rhs,
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

// Hamilton product
impl Mul<Quat<f32>> for Quat<f32> {
    type Output = Self;
    fn mul(self, rhs: Quat<f32>) -> Self {
        Self {
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        }
    }
}

impl Quat<f32> {
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    pub fn from_axis_angle(axis: Vec3<f32>, angle: f32) -> Self {
        let half = angle / 2.0;
        let s = half.sin();
        Self::new(half.cos(), axis.x * s, axis.y * s, axis.z * s)
    }

    /// Rotation whose columns are the given orthonormal axes.
    pub fn from_axes(x: Vec3<f32>, y: Vec3<f32>, z: Vec3<f32>) -> Self {
        let (m00, m10, m20) = (x.x, x.y, x.z);
        let (m01, m11, m21) = (y.x, y.y, y.z);
        let (m02, m12, m22) = (z.x, z.y, z.z);

        let trace = m00 + m11 + m22;
        let q = if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Self::new(0.25 * s, (m21 - m12) / s, (m02 - m20) / s, (m10 - m01) / s)
        } else if m00 > m11 && m00 > m22 {
            let s = (1.0 + m00 - m11 - m22).sqrt() * 2.0;
            Self::new((m21 - m12) / s, 0.25 * s, (m01 + m10) / s, (m02 + m20) / s)
        } else if m11 > m22 {
            let s = (1.0 + m11 - m00 - m22).sqrt() * 2.0;
            Self::new((m02 - m20) / s, (m01 + m10) / s, 0.25 * s, (m12 + m21) / s)
        } else {
            let s = (1.0 + m22 - m00 - m11).sqrt() * 2.0;
            Self::new((m10 - m01) / s, (m02 + m20) / s, (m12 + m21) / s, 0.25 * s)
        };
        q.normalized()
    }

    /// Rotation that maps +Z onto `forward` and keeps +Y as close to `up` as possible.
    ///
    /// Falls back to an arbitrary perpendicular up when `up` is parallel to
    /// `forward`, and to identity when `forward` is zero.
    pub fn look_rotation(forward: Vec3<f32>, up: Vec3<f32>) -> Self {
        let Some(f) = forward.try_normalized() else {
            return Self::identity();
        };
        let right = up.cross(f).try_normalized().or_else(|| {
            let alt = if f.x.abs() < 0.9 {
                Vec3::new(1.0, 0.0, 0.0)
            } else {
                Vec3::new(0.0, 1.0, 0.0)
            };
            alt.cross(f).try_normalized()
        });
        let Some(r) = right else {
            return Self::identity();
        };
        let u = f.cross(r);
        Self::from_axes(r, u, f)
    }

    pub fn length(self) -> f32 {
        (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn normalized(self) -> Self {
        self / self.length()
    }

    pub fn rotate(self, v: Vec3<f32>) -> Vec3<f32> {
        let qv = Quat::new(0.0, v.x, v.y, v.z);
        let rotated = self * qv * self.conjugate();
        Vec3::new(rotated.x, rotated.y, rotated.z)
    }

    pub fn forward(self) -> Vec3<f32> {
        self.rotate(Vec3::FORWARD)
    }

    pub fn up(self) -> Vec3<f32> {
        self.rotate(Vec3::UP)
    }
}
