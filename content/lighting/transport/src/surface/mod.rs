use std::ops::{Add, AddAssign};

use crate::*;

mod diffuse;
mod microfacet;
mod shading;
pub use diffuse::*;
pub use microfacet::*;
pub use shading::*;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentLight {
  pub color: Vec3<f32>,
  /// from surface to light source
  pub direction: Vec3<f32>,
}

/// The per fragment geometry every BRDF is evaluated against.
///
/// All directions are expected to be normalized by the caller.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LightingGeometricCtx {
  pub position: Vec3<f32>,
  pub normal: Vec3<f32>,
  /// origin from surface to the camera
  pub view_dir: Vec3<f32>,
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct LightingResult {
  pub diffuse: Vec3<f32>,
  pub specular: Vec3<f32>,
}

impl LightingResult {
  pub fn total(&self) -> Vec3<f32> {
    self.diffuse + self.specular
  }
}

impl Add for LightingResult {
  type Output = Self;

  fn add(self, rhs: Self) -> Self::Output {
    Self {
      diffuse: self.diffuse + rhs.diffuse,
      specular: self.specular + rhs.specular,
    }
  }
}

impl AddAssign for LightingResult {
  fn add_assign(&mut self, rhs: Self) {
    *self = *self + rhs;
  }
}

pub trait LightableSurfaceShading {
  fn compute_lighting_by_incident(
    &self,
    direct_light: &IncidentLight,
    ctx: &LightingGeometricCtx,
  ) -> LightingResult;
}
