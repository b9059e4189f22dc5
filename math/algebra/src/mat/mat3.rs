use std::ops::Mul;

use serde::{Deserialize, Serialize};

use crate::*;

/// column major, `a*` is the first column
#[repr(C)]
#[rustfmt::skip]
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mat3<T> {
  pub a1: T, pub a2: T, pub a3: T,
  pub b1: T, pub b2: T, pub b3: T,
  pub c1: T, pub c2: T, pub c3: T,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Mat3<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Mat3<T> {}

impl<T> Mat3<T> {
  #[rustfmt::skip]
  #[inline]
  pub const fn new(
    a1: T, a2: T, a3: T,
    b1: T, b2: T, b3: T,
    c1: T, c2: T, c3: T,
  ) -> Self {
    Self {
      a1, a2, a3,
      b1, b2, b3,
      c1, c2, c3,
    }
  }
}

impl<T: Scalar> Mat3<T> {
  #[rustfmt::skip]
  #[inline]
  pub fn from_cols(a: Vec3<T>, b: Vec3<T>, c: Vec3<T>) -> Self {
    Self::new(
      a.x, a.y, a.z,
      b.x, b.y, b.z,
      c.x, c.y, c.z,
    )
  }

  #[rustfmt::skip]
  #[inline]
  pub fn identity() -> Self {
    let (o, l) = (T::zero(), T::one());
    Self::new(
      l, o, o,
      o, l, o,
      o, o, l,
    )
  }

  #[rustfmt::skip]
  #[inline]
  #[must_use]
  pub fn transpose(&self) -> Self {
    Mat3::new(
      self.a1, self.b1, self.c1,
      self.a2, self.b2, self.c2,
      self.a3, self.b3, self.c3,
    )
  }

  pub fn det(&self) -> T {
    let t11 = self.c3 * self.b2 - self.b3 * self.c2;
    let t12 = self.b3 * self.c1 - self.c3 * self.b1;
    let t13 = self.c2 * self.b1 - self.b2 * self.c1;
    self.a1 * t11 + self.a2 * t12 + self.a3 * t13
  }
}

impl<T: Scalar> Mul<Vec3<T>> for Mat3<T> {
  type Output = Vec3<T>;

  fn mul(self, v: Vec3<T>) -> Vec3<T> {
    Vec3 {
      x: v.x * self.a1 + v.y * self.b1 + v.z * self.c1,
      y: v.x * self.a2 + v.y * self.b2 + v.z * self.c2,
      z: v.x * self.a3 + v.y * self.b3 + v.z * self.c3,
    }
  }
}

impl<T: Scalar> Mul for Mat3<T> {
  type Output = Self;

  fn mul(self, m: Self) -> Self {
    let a = self;

    Self {
      a1: a.a1 * m.a1 + a.b1 * m.a2 + a.c1 * m.a3,
      a2: a.a2 * m.a1 + a.b2 * m.a2 + a.c2 * m.a3,
      a3: a.a3 * m.a1 + a.b3 * m.a2 + a.c3 * m.a3,

      b1: a.a1 * m.b1 + a.b1 * m.b2 + a.c1 * m.b3,
      b2: a.a2 * m.b1 + a.b2 * m.b2 + a.c2 * m.b3,
      b3: a.a3 * m.b1 + a.b3 * m.b2 + a.c3 * m.b3,

      c1: a.a1 * m.c1 + a.b1 * m.c2 + a.c1 * m.c3,
      c2: a.a2 * m.c1 + a.b2 * m.c2 + a.c2 * m.c3,
      c3: a.a3 * m.c1 + a.b3 * m.c2 + a.c3 * m.c3,
    }
  }
}

#[test]
fn transposed_basis_projects_onto_axes() {
  let t1 = Vec3::<f32>::new(0., 1., 0.);
  let t2 = Vec3::new(0., 0., 1.);
  let n = Vec3::new(1., 0., 0.);
  let m = Mat3::from_cols(t1, t2, n).transpose();

  let p = Vec3::new(3., 5., 7.);
  assert_eq!(m * p, Vec3::new(p.dot(t1), p.dot(t2), p.dot(n)));
}

#[test]
fn mul_associates_with_vector() {
  #[rustfmt::skip]
  let a = Mat3::<f32>::new(
    1., 2., 0.,
    0., 1., 3.,
    4., 0., 1.,
  );
  let b = a.transpose();
  let v = Vec3::new(1., -2., 0.5);

  assert_eq!((a * b) * v, a * (b * v));
  assert_eq!(Mat3::identity() * v, v);
  assert_eq!(a.det(), 25.);
}
