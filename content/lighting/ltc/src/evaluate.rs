use crate::*;

/// Real-Time Area Lighting: a Journey from Research to Production (p.102)
/// An approximation of the form factor of a horizon-clipped rectangle.
pub fn ltc_clipped_sphere_form_factor(f: Vec3<f32>) -> f32 {
  let l = f.length();
  ((l * l + f.z) / (l + 1.0)).max(0.0)
}

/// The vector form factor of one edge of a spherical polygon.
pub fn ltc_edge_vector_form_factor(v1: Vec3<f32>, v2: Vec3<f32>) -> Vec3<f32> {
  let x = v1.dot(v2);
  let y = x.abs();

  // rational polynomial approximation to theta / sin( theta ) / 2PI
  let a = 0.8543985 + (0.4965155 + 0.0145206 * y) * y;
  let b = 3.4175940 + (4.1616724 + y) * y;
  let v = a / b;

  let theta_sin_theta = if x > 0.0 {
    v
  } else {
    0.5 * (1.0 - x * x).max(1e-7).inverse_sqrt() - v
  };

  v1.cross(v2) * theta_sin_theta
}

/// Integrates the clamped cosine distribution transformed by `m_inv` over the rect.
///
/// `rect_coords` must wind counter-clockwise seen from the lit side, points
/// behind the light plane receive nothing. Pass the identity for a diffuse response.
pub fn ltc_evaluate(
  n: Vec3<f32>,
  v: Vec3<f32>,
  p: Vec3<f32>,
  m_inv: Mat3<f32>,
  rect_coords: &[Vec3<f32>; 4],
) -> Vec3<f32> {
  // bail if point is on back side of plane of light
  let v1 = rect_coords[1] - rect_coords[0];
  let v2 = rect_coords[3] - rect_coords[0];
  let light_normal = v1.cross(v2);
  if light_normal.dot(p - rect_coords[0]) < 0.0 {
    return Vec3::zero();
  }

  // construct orthonormal basis around N
  let t1 = tangent_toward(n, v);
  // negated from the paper, the basis mirrors the polygon to keep its winding
  let t2 = -n.cross(t1);

  // rotate area light in (T1, T2, N) basis
  let m = m_inv * Mat3::from_cols(*t1, t2, n).transpose();

  // transform the rect and project it onto the sphere
  let coords = rect_coords.map(|corner| (m * (corner - p)).normalize());

  let mut vector_form_factor = Vec3::zero();
  for (i, &corner) in coords.iter().enumerate() {
    vector_form_factor += ltc_edge_vector_form_factor(corner, coords[(i + 1) % 4]);
  }

  // adjust for horizon clipping
  Vec3::splat(ltc_clipped_sphere_form_factor(vector_form_factor))
}

/// [ltc_evaluate] that lights the back side too when the light is double sided.
pub fn ltc_evaluate_with_sidedness(
  n: Vec3<f32>,
  v: Vec3<f32>,
  p: Vec3<f32>,
  m_inv: Mat3<f32>,
  light: &LTCRectLight,
) -> Vec3<f32> {
  if light.faces(p) {
    ltc_evaluate(n, v, p, m_inv, &light.corners)
  } else if light.double_side {
    let [p0, p1, p2, p3] = light.corners;
    ltc_evaluate(n, v, p, m_inv, &[p0, p3, p2, p1])
  } else {
    Vec3::zero()
  }
}

/// the view direction projected into the tangent plane, any tangent when viewing along the normal
fn tangent_toward(n: Vec3<f32>, v: Vec3<f32>) -> NormalizedVec3<f32> {
  let t = v - n * v.dot(n);
  if t.length2() > 1e-12 {
    t.into_normalized()
  } else {
    NormalizedVec3::wrap(n.any_perpendicular())
  }
}
