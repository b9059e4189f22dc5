use crate::*;

/// A specular lobe. Materials pick one model, the models are interchangeable
/// but never combined.
pub trait SpecularBRDF {
  fn specular(&self, light: &IncidentLight, ctx: &LightingGeometricCtx) -> Vec3<f32>;
}

/// The saturated n⋅l and n⋅v, or None when the light or the eye sits on or
/// below the horizon.
#[inline]
fn visible_dots(light: &IncidentLight, ctx: &LightingGeometricCtx) -> Option<(f32, f32)> {
  let dot_nl = ctx.normal.dot(light.direction).saturate();
  let dot_nv = ctx.normal.dot(ctx.view_dir).saturate();
  (dot_nl > 0. && dot_nv > 0.).then_some((dot_nl, dot_nv))
}

pub fn brdf_specular_ggx(
  light: &IncidentLight,
  ctx: &LightingGeometricCtx,
  specular_color: Vec3<f32>,
  roughness: f32,
) -> Vec3<f32> {
  let Some((dot_nl, dot_nv)) = visible_dots(light, ctx) else {
    return Vec3::zero();
  };

  let alpha = roughness * roughness; // UE4's roughness

  let half_dir = (light.direction + ctx.view_dir).normalize();
  let dot_nh = ctx.normal.dot(half_dir).saturate();
  let dot_lh = light.direction.dot(half_dir).saturate();

  let f = f_schlick(specular_color, dot_lh);
  let g = g_ggx_smith_correlated(alpha, dot_nl, dot_nv);
  let d = d_ggx(alpha, dot_nh);

  f * (g * d)
}

pub fn brdf_specular_blinn_phong(
  light: &IncidentLight,
  ctx: &LightingGeometricCtx,
  specular_color: Vec3<f32>,
  shininess: f32,
) -> Vec3<f32> {
  if visible_dots(light, ctx).is_none() {
    return Vec3::zero();
  }

  let half_dir = (light.direction + ctx.view_dir).normalize();
  let dot_nh = ctx.normal.dot(half_dir).saturate();
  let dot_lh = light.direction.dot(half_dir).saturate();

  let f = f_schlick(specular_color, dot_lh);
  let g = g_blinn_phong_implicit();
  let d = d_blinn_phong(shininess, dot_nh);

  f * (g * d)
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GGXSpecular {
  /// reflectance at normal incidence
  pub specular_color: Vec3<f32>,
  /// perceptual roughness in [0, 1]
  pub roughness: f32,
}

impl SpecularBRDF for GGXSpecular {
  fn specular(&self, light: &IncidentLight, ctx: &LightingGeometricCtx) -> Vec3<f32> {
    brdf_specular_ggx(light, ctx, self.specular_color, self.roughness)
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlinnPhongSpecular {
  pub specular_color: Vec3<f32>,
  pub shininess: f32,
}

impl SpecularBRDF for BlinnPhongSpecular {
  fn specular(&self, light: &IncidentLight, ctx: &LightingGeometricCtx) -> Vec3<f32> {
    brdf_specular_blinn_phong(light, ctx, self.specular_color, self.shininess)
  }
}

impl From<GGXSpecular> for BlinnPhongSpecular {
  fn from(ggx: GGXSpecular) -> Self {
    Self {
      specular_color: ggx.specular_color,
      shininess: ggx_roughness_to_blinn_exponent(ggx.roughness),
    }
  }
}

impl From<BlinnPhongSpecular> for GGXSpecular {
  fn from(blinn: BlinnPhongSpecular) -> Self {
    Self {
      specular_color: blinn.specular_color,
      roughness: blinn_exponent_to_ggx_roughness(blinn.shininess),
    }
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn ctx(normal: Vec3<f32>, view_dir: Vec3<f32>) -> LightingGeometricCtx {
    LightingGeometricCtx {
      position: Vec3::zero(),
      normal,
      view_dir,
    }
  }

  fn light(direction: Vec3<f32>) -> IncidentLight {
    IncidentLight {
      color: Vec3::one(),
      direction,
    }
  }

  #[test]
  fn ggx_face_on_reference() {
    let z = Vec3::new(0., 0., 1.);
    let r = brdf_specular_ggx(&light(z), &ctx(z, z), Vec3::splat(0.04), 0.5);

    assert!(r.is_finite());
    assert!(r.x > 0.);
    assert_eq!(r.x, r.y);
    assert_eq!(r.y, r.z);
    // F(1) * G * D with alpha = 0.25
    assert!((r.x - 0.051135125).abs() < 1e-5, "{r}");
  }

  #[test]
  fn horizon_gives_zero_specular() {
    let n = Vec3::new(0., 0., 1.);
    let grazing = Vec3::new(1., 0., 0.);
    let below = Vec3::new(0., 0.6, -0.8);
    let up = Vec3::new(0., 0.6, 0.8);
    let color = Vec3::splat(0.04);

    for (l, v) in [(grazing, up), (up, grazing), (below, up), (up, below)] {
      assert_eq!(brdf_specular_ggx(&light(l), &ctx(n, v), color, 0.5), Vec3::zero());
      assert_eq!(brdf_specular_blinn_phong(&light(l), &ctx(n, v), color, 32.), Vec3::zero());
    }
  }

  #[test]
  fn mirror_direction_peaks() {
    let n = Vec3::new(0., 0., 1.);
    let v = Vec3::<f32>::new(0.6, 0., 0.8);
    let mirror = v.reflect(n).reverse();
    let off = Vec3::new(-0.8, 0., 0.6);
    let model = GGXSpecular {
      specular_color: Vec3::splat(0.04),
      roughness: 0.3,
    };

    let peak = model.specular(&light(mirror), &ctx(n, v));
    let side = model.specular(&light(off), &ctx(n, v));
    assert!(peak.x > side.x);

    let blinn = BlinnPhongSpecular::from(model);
    let peak = blinn.specular(&light(mirror), &ctx(n, v));
    let side = blinn.specular(&light(off), &ctx(n, v));
    assert!(peak.x > side.x);
  }

  #[test]
  fn model_conversion_keeps_color() {
    let blinn = BlinnPhongSpecular {
      specular_color: Vec3::new(0.1, 0.2, 0.3),
      shininess: 64.,
    };
    let ggx = GGXSpecular::from(blinn);
    assert_eq!(ggx.specular_color, blinn.specular_color);
    assert!((ggx.roughness - (2.0_f32 / 66.).sqrt()).abs() < 1e-6);
  }
}
