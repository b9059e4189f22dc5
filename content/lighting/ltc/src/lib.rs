//! Rect area lighting by Linearly Transformed Cosines.
//!
//! Real-Time Polygonal-Light Shading with Linearly Transformed Cosines
//! https://eheitzresearch.wordpress.com/415-2/

use rendiation_algebra::*;
use rendiation_lighting_transport::*;
use serde::{Deserialize, Serialize};

mod evaluate;
mod lut;

pub use evaluate::*;
pub use lut::*;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LTCRectLight {
  /// pre calculated vertex in world space, counter-clockwise seen from the lit side.
  pub corners: [Vec3<f32>; 4],
  pub intensity: Vec3<f32>,
  #[serde(default)]
  pub double_side: bool,
}

impl LTCRectLight {
  pub fn normal(&self) -> Vec3<f32> {
    let [p0, p1, _, p3] = self.corners;
    (p1 - p0).cross(p3 - p0)
  }

  /// if the point is on the lit side of the light plane
  pub fn faces(&self, position: Vec3<f32>) -> bool {
    self.normal().dot(position - self.corners[0]) >= 0.0
  }
}

pub fn ltc_rect_light_eval(
  light: &LTCRectLight,
  shading: &PhysicalShading,
  ctx: &LightingGeometricCtx,
  lut: &LtcLut,
) -> LightingResult {
  let LightingGeometricCtx {
    position,
    normal,
    view_dir,
  } = *ctx;

  let sample = lut.sample(normal, view_dir, shading.specular.roughness);
  let specular_color = shading.specular.specular_color;

  // BRDF shadowing and Fresnel
  let fresnel =
    specular_color * sample.fresnel.x + (Vec3::one() - specular_color) * sample.fresnel.y;

  let spec = ltc_evaluate_with_sidedness(normal, view_dir, position, sample.m_inv, light);
  let diff = ltc_evaluate_with_sidedness(normal, view_dir, position, Mat3::identity(), light);

  LightingResult {
    diffuse: light.intensity * shading.diffuse * diff,
    specular: light.intensity * fresnel * spec,
  }
}

#[cfg(test)]
mod test {
  use super::*;

  pub(crate) fn square_light(double_side: bool) -> LTCRectLight {
    LTCRectLight {
      corners: [
        Vec3::new(-1., -1., 1.),
        Vec3::new(-1., 1., 1.),
        Vec3::new(1., 1., 1.),
        Vec3::new(1., -1., 1.),
      ],
      intensity: Vec3::one(),
      double_side,
    }
  }

  #[test]
  fn light_faces_downward() {
    let light = square_light(false);
    assert!(light.normal().z < 0.);
    assert!(light.faces(Vec3::zero()));
    assert!(!light.faces(Vec3::new(0., 0., 2.)));
  }

  #[test]
  fn identity_lut_lighting() {
    let light = square_light(false);
    let shading = PhysicalShading {
      diffuse: Vec3::new(0.5, 0.5, 0.5),
      specular: GGXSpecular {
        specular_color: Vec3::splat(0.04),
        roughness: 0.5,
      },
    };
    let ctx = LightingGeometricCtx {
      position: Vec3::zero(),
      normal: Vec3::new(0., 0., 1.),
      view_dir: Vec3::<f32>::new(1., 0., 1.).normalize(),
    };
    let lut = LtcLut::identity(LUT_SIZE).unwrap();

    let r = ltc_rect_light_eval(&light, &shading, &ctx, &lut);
    assert!((r.diffuse.x - 0.5 * 0.5541).abs() < 1e-3, "{}", r.diffuse);
    assert!((r.specular.x - 0.04 * 0.5541).abs() < 1e-4, "{}", r.specular);

    let behind = LightingGeometricCtx {
      position: Vec3::new(0., 0., 2.),
      ..ctx
    };
    assert_eq!(
      ltc_rect_light_eval(&light, &shading, &behind, &lut),
      LightingResult::default()
    );
  }
}
