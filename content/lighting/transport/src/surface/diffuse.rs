use crate::*;

pub fn brdf_diffuse_lambert(diffuse_color: Vec3<f32>) -> Vec3<f32> {
  diffuse_color * INV_PI
}

#[test]
fn lambert_white_is_inv_pi() {
  let r = brdf_diffuse_lambert(Vec3::one());
  assert_eq!(r, Vec3::splat(INV_PI));
  assert_eq!(brdf_diffuse_lambert(Vec3::zero()), Vec3::zero());
}
