use crate::*;

/// Lambertian diffuse combined with one specular lobe.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceShading<S> {
  pub diffuse: Vec3<f32>,
  pub specular: S,
}

pub type PhysicalShading = SurfaceShading<GGXSpecular>;
pub type BlinnPhongShading = SurfaceShading<BlinnPhongSpecular>;

impl<S: SpecularBRDF> LightableSurfaceShading for SurfaceShading<S> {
  fn compute_lighting_by_incident(
    &self,
    direct_light: &IncidentLight,
    ctx: &LightingGeometricCtx,
  ) -> LightingResult {
    let dot_nl = ctx.normal.dot(direct_light.direction).saturate();
    let irradiance = direct_light.color * dot_nl;

    LightingResult {
      diffuse: irradiance * brdf_diffuse_lambert(self.diffuse),
      specular: irradiance * self.specular.specular(direct_light, ctx),
    }
  }
}

impl PhysicalShading {
  /// `radiance` is the prefiltered environment sample along the reflected view direction.
  pub fn indirect_specular(&self, ctx: &LightingGeometricCtx, radiance: Vec3<f32>) -> Vec3<f32> {
    let brdf =
      brdf_specular_ggx_environment(ctx, self.specular.specular_color, self.specular.roughness);
    radiance * brdf
  }
}
