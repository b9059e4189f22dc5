use crate::*;

/// Analytic approximation of the pre-integrated GGX environment BRDF, no lookup texture needed.
///
/// ref: https://www.unrealengine.com/blog/physically-based-shading-on-mobile - environmentBRDF for GGX on mobile
pub fn brdf_specular_ggx_environment(
  ctx: &LightingGeometricCtx,
  specular_color: Vec3<f32>,
  roughness: f32,
) -> Vec3<f32> {
  const C0: Vec4<f32> = Vec4::new(-1., -0.0275, -0.572, 0.022);
  const C1: Vec4<f32> = Vec4::new(1., 0.0425, 1.04, -0.04);

  let dot_nv = ctx.normal.dot(ctx.view_dir).saturate();

  let r = C0 * roughness + C1;
  let a004 = (r.x * r.x).min((-9.28 * dot_nv).exp2()) * r.x + r.y;
  let ab = Vec2::new(-1.04, 1.04) * a004 + r.zw();

  specular_color * ab.x + Vec3::splat(ab.y)
}
