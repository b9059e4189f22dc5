use crate::*;

/// lower bound of the geometry term denominators
pub const EPSILON: f32 = 1e-6;

/// Schlick fresnel, using the optimized variant presented by Epic at SIGGRAPH '13
/// https://cdn2.unrealengine.com/Resources/files/2013SiggraphPresentationsNotes-26915738.pdf
#[inline]
pub fn f_schlick(specular_color: Vec3<f32>, dot_lh: f32) -> Vec3<f32> {
  let fresnel = ((-5.55473 * dot_lh - 6.98316) * dot_lh).exp2();
  (Vec3::one() - specular_color) * fresnel + specular_color
}

/// Original approximation by Christophe Schlick '94
pub fn f_schlick_reference(specular_color: Vec3<f32>, dot_lh: f32) -> Vec3<f32> {
  let fresnel = (1.0 - dot_lh).powi(5);
  (Vec3::one() - specular_color) * fresnel + specular_color
}

/// Microfacet Models for Refraction through Rough Surfaces - equation (34)
///
/// alpha is "roughness squared" in Disney's reparameterization.
/// geometry term (normalized) = G(l)⋅G(v) / 4(n⋅l)(n⋅v)
#[inline]
pub fn g_ggx_smith(alpha: f32, dot_nl: f32, dot_nv: f32) -> f32 {
  let a2 = alpha * alpha;
  let gl = dot_nl + (a2 + (1.0 - a2) * dot_nl * dot_nl).sqrt();
  let gv = dot_nv + (a2 + (1.0 - a2) * dot_nv * dot_nv).sqrt();
  1.0 / (gl * gv).max(EPSILON)
}

/// Moving Frostbite to Physically Based Rendering 2.0 - page 12, listing 2
/// https://seblagarde.files.wordpress.com/2015/07/course_notes_moving_frostbite_to_pbr_v32.pdf
#[inline]
pub fn g_ggx_smith_correlated(alpha: f32, dot_nl: f32, dot_nv: f32) -> f32 {
  let a2 = alpha * alpha;
  // dot_nl and dot_nv are explicitly swapped. This is not a mistake.
  let gv = dot_nl * (a2 + (1.0 - a2) * dot_nv * dot_nv).sqrt();
  let gl = dot_nv * (a2 + (1.0 - a2) * dot_nl * dot_nl).sqrt();
  0.5 / (gv + gl).max(EPSILON)
}

/// Microfacet Models for Refraction through Rough Surfaces - equation (33)
#[inline]
pub fn d_ggx(alpha: f32, dot_nh: f32) -> f32 {
  let a2 = alpha * alpha;
  // dot_nh²(a2 - 1) + 1, with 1 - dot_nh² factored so the peak keeps its precision for tiny a2
  let denom = (1.0 - dot_nh) * (1.0 + dot_nh) + dot_nh * dot_nh * a2;
  // only the exact zero at alpha = 0, dot_nh = 1 is guarded
  INV_PI * a2 / (denom * denom).max(f32::MIN_POSITIVE)
}

/// geometry term is (n⋅l)(n⋅v) / 4(n⋅l)(n⋅v)
#[inline]
pub fn g_blinn_phong_implicit() -> f32 {
  0.25
}

#[inline]
pub fn d_blinn_phong(shininess: f32, dot_nh: f32) -> f32 {
  INV_PI * (shininess * 0.5 + 1.0) * dot_nh.powf(shininess)
}

// source: http://simonstechblog.blogspot.ca/2011/12/microfacet-brdf.html
// the two conversions are fitted independently and only roughly invert each other

pub fn ggx_roughness_to_blinn_exponent(ggx_roughness: f32) -> f32 {
  2.0 / (ggx_roughness + 0.0001).powi(2) - 2.0
}

pub fn blinn_exponent_to_ggx_roughness(blinn_exponent: f32) -> f32 {
  (2.0 / (blinn_exponent + 2.0)).sqrt()
}
