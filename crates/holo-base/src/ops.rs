// Component-wise operator impls shared by the vector types.
macro_rules! componentwise {
    ($ty:ident { $($f:ident),+ }) => {
        impl<T: std::ops::Add<Output = T>> std::ops::Add for $ty<T> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                $ty { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl<T: std::ops::Mul<Output = T> + Copy> std::ops::Mul<T> for $ty<T> {
            type Output = Self;
            fn mul(self, s: T) -> Self {
                $ty { $($f: self.$f * s),+ }
            }
        }
    };
}
