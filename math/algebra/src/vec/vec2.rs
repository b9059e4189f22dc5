use std::{fmt, fmt::Debug, ops::*};

use serde::{Deserialize, Serialize};

use crate::*;

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2<T> {
  pub x: T,
  pub y: T,
}

impl_vector_ops!(Vec2 { x, y }, 2);
