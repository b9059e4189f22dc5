use std::{fmt, fmt::Debug, ops::*};

use serde::{Deserialize, Serialize};

use crate::*;

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3<T> {
  pub x: T,
  pub y: T,
  pub z: T,
}

impl_vector_ops!(Vec3 { x, y, z }, 3);

impl<T: Scalar> Vec3<T> {
  #[inline]
  #[must_use]
  pub fn cross<Rhs: InnerData<Self>>(&self, b: Rhs) -> Self {
    let b = b.get_inner();
    Self {
      x: self.y * b.z - self.z * b.y,
      y: self.z * b.x - self.x * b.z,
      z: self.x * b.y - self.y * b.x,
    }
  }

  #[inline]
  pub fn max_channel(&self) -> T {
    self.x.max(self.y).max(self.z)
  }

  #[inline]
  pub fn is_finite(&self) -> bool {
    self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
  }

  /// any unit vector perpendicular to self, self should be normalized
  ///
  /// https://graphics.pixar.com/library/OrthonormalB/paper.pdf
  #[inline]
  pub fn any_perpendicular(&self) -> Self {
    let sign = T::one().copysign(self.z);
    let a = -T::one() / (sign + self.z);
    let b = self.x * self.y * a;
    Self::new(T::one() + sign * self.x * self.x * a, sign * b, -sign * self.x)
  }
}

#[test]
fn cross_is_right_handed() {
  let x = Vec3::<f32>::new(1., 0., 0.);
  let y = Vec3::<f32>::new(0., 1., 0.);
  assert_eq!(x.cross(y), Vec3::new(0., 0., 1.));
  assert_eq!(y.cross(x), Vec3::new(0., 0., -1.));
}

#[test]
fn perpendicular() {
  for n in [
    Vec3::<f32>::new(0., 0., 1.),
    Vec3::new(0., 0., -1.),
    Vec3::<f32>::new(1., 2., 3.).normalize(),
    Vec3::<f32>::new(-0.3, 0.1, -0.9).normalize(),
  ] {
    let t = n.any_perpendicular();
    assert!(t.dot(n).abs() < 1e-5);
    assert!((t.length() - 1.).abs() < 1e-5);
  }
}
