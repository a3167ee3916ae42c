use crate::Vec3;

/// Homogeneous coordinate, also used as a matrix column.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

componentwise!(Vec4 { x, y, z, w });

impl<T> Vec4<T> {
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Drops `w` without dividing by it.
    pub fn xyz(self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl<T: Default> Vec4<T> {
    pub fn zero() -> Self {
        Self::default()
    }
}

impl Vec4<f32> {
    /// Perspective divide. `None` when `w` is (near) zero.
    pub fn project(self) -> Option<Vec3<f32>> {
        (self.w.abs() >= 1e-9).then(|| self.xyz() / self.w)
    }
}
