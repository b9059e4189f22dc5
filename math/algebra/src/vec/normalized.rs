use std::{marker::PhantomData, ops::*};

use crate::*;

pub type NormalizedVec3<T> = NormalizedVector<T, Vec3<T>>;

/// A direction that is known to be unit length.
#[derive(Debug, Copy, Clone, PartialEq)]
#[repr(transparent)]
pub struct NormalizedVector<T, V> {
  pub value: V,
  phantom: PhantomData<T>,
}

pub trait IntoNormalizedVector<T, V> {
  #[must_use]
  fn into_normalized(self) -> NormalizedVector<T, V>;
}

impl<T: Scalar, V: InnerProductSpace<T>> IntoNormalizedVector<T, V> for V {
  #[inline(always)]
  fn into_normalized(self) -> NormalizedVector<T, V> {
    NormalizedVector::wrap(self.normalize())
  }
}

impl<T, V> NormalizedVector<T, V> {
  /// The caller guarantees `v` is unit length.
  #[inline(always)]
  pub fn wrap(v: V) -> Self {
    Self {
      value: v,
      phantom: PhantomData,
    }
  }
}

impl<T: Scalar, V: InnerProductSpace<T>> NormalizedVector<T, V> {
  #[inline]
  #[must_use]
  pub fn normalize(&self) -> Self {
    *self
  }

  #[inline]
  pub fn length(&self) -> T {
    T::one()
  }

  #[inline]
  #[must_use]
  pub fn reverse(&self) -> Self {
    Self::wrap(self.value.reverse())
  }
}

pub trait InnerData<T> {
  fn get_inner(self) -> T;
}

impl<T, V> InnerData<V> for NormalizedVector<T, V> {
  #[inline(always)]
  fn get_inner(self) -> V {
    self.value
  }
}
impl<V> InnerData<V> for V {
  #[inline(always)]
  fn get_inner(self) -> V {
    self
  }
}

// after add / sub / mul scalar, the vector may not be normalized
impl<T, V: VectorSpace<T>, Rhs: InnerData<V>> Add<Rhs> for NormalizedVector<T, V> {
  type Output = V;
  #[inline(always)]
  fn add(self, rhs: Rhs) -> Self::Output {
    self.value + rhs.get_inner()
  }
}
impl<T, V: VectorSpace<T>, Rhs: InnerData<V>> Sub<Rhs> for NormalizedVector<T, V> {
  type Output = V;
  #[inline(always)]
  fn sub(self, rhs: Rhs) -> Self::Output {
    self.value - rhs.get_inner()
  }
}
impl<T, V: VectorSpace<T>> Mul<T> for NormalizedVector<T, V> {
  type Output = V;
  #[inline(always)]
  fn mul(self, rhs: T) -> Self::Output {
    self.value * rhs
  }
}

impl<T, V> Deref for NormalizedVector<T, V> {
  type Target = V;
  #[inline(always)]
  fn deref(&self) -> &Self::Target {
    &self.value
  }
}

#[test]
fn normalized_ops() {
  let a = Vec3::<f32>::new(3., 0., 4.).into_normalized();
  assert_eq!(a.length(), 1.);
  assert!((a.x - 0.6).abs() < 1e-6);

  let b = Vec3::new(1., 1., 1.);
  assert!((a.dot(b) - 1.4).abs() < 1e-6);
  assert!((b.dot(a) - 1.4).abs() < 1e-6);

  let c = a + b;
  assert!((c.z - 1.8).abs() < 1e-6);
  assert_eq!(a.reverse().value, -a.value);
}
