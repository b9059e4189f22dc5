//! The sun disc term of the sky dome. The atmospheric scattering that produces
//! the base sky color is provided by the caller.

use rendiation_algebra::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // any missing field will be set to the struct's default
pub struct SunDiscParams {
  /// from the viewer toward the sun
  pub direction: Vec3<f32>,
  /// angular radius of the hard disc, in radians
  pub angular_size: f32,
  /// exponential falloff rate of the glow around the disc, per radian
  pub bloom: f32,
  pub luminance: f32,
  /// display gamma the output is encoded for
  pub gamma: f32,
}

impl Default for SunDiscParams {
  fn default() -> Self {
    Self {
      direction: Vec3::new(0., 1., 0.),
      angular_size: 0.02,
      bloom: 40.,
      luminance: 1.,
      gamma: 2.2,
    }
  }
}

#[derive(Debug, Error, PartialEq)]
pub enum SkyConfigError {
  #[error("sun direction {0} can not be normalized")]
  InvalidDirection(Vec3<f32>),
  #[error("sun angular size must be finite and non negative, got {0}")]
  InvalidAngularSize(f32),
  #[error("sun bloom must be finite and non negative, got {0}")]
  InvalidBloom(f32),
  #[error("sun luminance must be finite and non negative, got {0}")]
  InvalidLuminance(f32),
  #[error("display gamma must be finite and positive, got {0}")]
  InvalidGamma(f32),
}

fn finite_non_negative(v: f32) -> bool {
  v.is_finite() && v >= 0.
}

impl SunDiscParams {
  /// checks the params loaded from a config, evaluation itself never fails
  pub fn validate(&self) -> Result<(), SkyConfigError> {
    if !self.direction.is_finite() || self.direction.length2() == 0. {
      return Err(SkyConfigError::InvalidDirection(self.direction));
    }
    if !finite_non_negative(self.angular_size) {
      return Err(SkyConfigError::InvalidAngularSize(self.angular_size));
    }
    if !finite_non_negative(self.bloom) {
      return Err(SkyConfigError::InvalidBloom(self.bloom));
    }
    if !finite_non_negative(self.luminance) {
      return Err(SkyConfigError::InvalidLuminance(self.luminance));
    }
    if !self.gamma.is_finite() || self.gamma <= 0. {
      return Err(SkyConfigError::InvalidGamma(self.gamma));
    }
    log::debug!("sun disc params accepted: {self:?}");
    Ok(())
  }
}

/// Adds the sun disc and its glow onto the pre shaded sky color and encodes
/// the result for display.
///
/// `view_dir` is the interpolated direction from the eye through the fragment,
/// it does not need to be normalized.
pub fn sun_disc_fragment(
  sky_color: Vec3<f32>,
  view_dir: Vec3<f32>,
  params: &SunDiscParams,
) -> Vec3<f32> {
  let view: NormalizedVec3<f32> = view_dir.into_normalized();
  let sun: NormalizedVec3<f32> = params.direction.into_normalized();

  let distance = view.dot(sun).clamp(-1., 1.).acos();

  let glow = (-distance * params.bloom).exp();
  let disc = params.angular_size.step(distance);
  let mut sun_intensity = glow.max(disc);
  sun_intensity *= sun_intensity;

  let color = sky_color + Vec3::splat(sun_intensity * params.luminance);
  linear_to_gamma(color, params.gamma)
}

pub fn linear_to_gamma(color: Vec3<f32>, gamma: f32) -> Vec3<f32> {
  let inv_gamma = gamma.recip();
  color.map(|c| c.max(0.).powf(inv_gamma))
}

#[cfg(test)]
mod test {
  use super::*;

  fn sky() -> Vec3<f32> {
    Vec3::new(0.2, 0.4, 0.8)
  }

  #[test]
  fn looking_at_the_sun() {
    let params = SunDiscParams::default();
    let r = sun_disc_fragment(sky(), params.direction * 3., &params);
    let expect = linear_to_gamma(sky() + Vec3::one(), 2.2);
    assert!((r - expect).map(|c| c.abs()).max_channel() < 1e-5, "{r}");
  }

  #[test]
  fn hard_disc_edge() {
    let params = SunDiscParams {
      bloom: 1000.,
      ..Default::default()
    };
    let at_angle = |angle: f32| Vec3::new(angle.sin(), angle.cos(), 0.);
    let inside = at_angle(params.angular_size * 0.9);
    let outside = at_angle(params.angular_size * 1.5);

    let lit = sun_disc_fragment(Vec3::zero(), inside, &params);
    assert!((lit.x - 1.).abs() < 1e-5, "{lit}");

    let dark = sun_disc_fragment(Vec3::zero(), outside, &params);
    assert!(dark.x < 1e-2, "{dark}");
  }

  #[test]
  fn far_from_the_sun_is_only_sky() {
    let params = SunDiscParams::default();
    let r = sun_disc_fragment(sky(), Vec3::new(0., -1., 0.), &params);
    assert!((r - linear_to_gamma(sky(), 2.2)).map(|c| c.abs()).max_channel() < 1e-6);
  }

  #[test]
  fn gamma_encode() {
    let r = linear_to_gamma(Vec3::new(0.25, 1., -1.), 2.);
    assert!((r - Vec3::new(0.5, 1., 0.)).map(|c| c.abs()).max_channel() < 1e-6, "{r}");
  }

  #[test]
  fn params_validation() {
    assert_eq!(SunDiscParams::default().validate(), Ok(()));

    let zero_dir = SunDiscParams {
      direction: Vec3::zero(),
      ..Default::default()
    };
    assert!(matches!(zero_dir.validate(), Err(SkyConfigError::InvalidDirection(_))));

    let bad_gamma = SunDiscParams {
      gamma: 0.,
      ..Default::default()
    };
    assert_eq!(bad_gamma.validate(), Err(SkyConfigError::InvalidGamma(0.)));

    let bad_bloom = SunDiscParams {
      bloom: f32::NAN,
      ..Default::default()
    };
    assert!(matches!(bad_bloom.validate(), Err(SkyConfigError::InvalidBloom(_))));
  }

  #[test]
  fn partial_config_fills_defaults() {
    let params: SunDiscParams = serde_json::from_str(r#"{ "luminance": 4.0 }"#).unwrap();
    assert_eq!(params.luminance, 4.);
    assert_eq!(params.gamma, SunDiscParams::default().gamma);

    let json = serde_json::to_string(&SunDiscParams::default()).unwrap();
    let back: SunDiscParams = serde_json::from_str(&json).unwrap();
    assert_eq!(back, SunDiscParams::default());
  }
}
