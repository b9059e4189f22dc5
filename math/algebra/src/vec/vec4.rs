use std::{fmt, fmt::Debug, ops::*};

use serde::{Deserialize, Serialize};

use crate::*;

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec4<T> {
  pub x: T,
  pub y: T,
  pub z: T,
  pub w: T,
}

impl_vector_ops!(Vec4 { x, y, z, w }, 4);

impl<T: Copy> Vec4<T> {
  #[inline]
  pub fn xy(&self) -> Vec2<T> {
    Vec2::new(self.x, self.y)
  }

  #[inline]
  pub fn zw(&self) -> Vec2<T> {
    Vec2::new(self.z, self.w)
  }
}
