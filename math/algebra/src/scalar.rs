use std::fmt::Debug;

use num_traits::{Float, FloatConst};

pub const PI: f32 = std::f32::consts::PI;
pub const INV_PI: f32 = std::f32::consts::FRAC_1_PI;

/// The real number type every vector and matrix in this crate is built on.
pub trait Scalar: Float + FloatConst + Default + Debug + Send + Sync + 'static {
  #[inline]
  fn two() -> Self {
    Self::one() + Self::one()
  }

  /// clamp into [0, 1]
  #[inline]
  fn saturate(self) -> Self {
    self.max(Self::zero()).min(Self::one())
  }

  /// glsl's `step(edge, self)`: zero below the edge, one otherwise
  #[inline]
  fn step(self, edge: Self) -> Self {
    if self < edge {
      Self::zero()
    } else {
      Self::one()
    }
  }

  /// hermite interpolation between two edges, glsl's `smoothstep(edge0, edge1, self)`
  #[inline]
  fn smoothstep(self, edge0: Self, edge1: Self) -> Self {
    let t = ((self - edge0) / (edge1 - edge0)).saturate();
    t * t * (Self::two() + Self::one() - Self::two() * t)
  }

  #[inline]
  fn inverse_sqrt(self) -> Self {
    self.sqrt().recip()
  }
}

impl Scalar for f32 {}
impl Scalar for f64 {}

#[test]
fn step_and_smoothstep() {
  assert_eq!(0.5_f32.step(0.6), 0.);
  assert_eq!(0.6_f32.step(0.6), 1.);

  assert_eq!((-1.0_f32).smoothstep(0., 1.), 0.);
  assert_eq!(2.0_f32.smoothstep(0., 1.), 1.);
  assert!((0.5_f32.smoothstep(0., 1.) - 0.5).abs() < 1e-6);
}
