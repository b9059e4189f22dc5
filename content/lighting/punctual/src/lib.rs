use rendiation_algebra::*;
use rendiation_lighting_transport::*;
use serde::{Deserialize, Serialize};

/// How the intensity of point and spot lights decays over distance.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceFalloff {
  /// inverse power law, windowed to zero at the cutoff distance
  #[default]
  PhysicallyCorrect,
  /// artist friendly linear ramp raised to the decay exponent
  Legacy,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)] // any missing field will be set to the struct's default
pub struct PunctualLightingConfig {
  pub falloff: DistanceFalloff,
}

/// Punctual lights are defined as parameterized, infinitely small points that
/// emit light in well-defined directions and intensities.
pub trait PunctualLight {
  /// None if the light does not reach the shading point.
  fn compute_incident_light(
    &self,
    ctx: &LightingGeometricCtx,
    config: &PunctualLightingConfig,
  ) -> Option<IncidentLight>;
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
  /// in lx
  pub illuminance: Vec3<f32>,
  /// from light source to scene
  pub direction: Vec3<f32>,
}

impl PunctualLight for DirectionalLight {
  fn compute_incident_light(
    &self,
    _ctx: &LightingGeometricCtx,
    _config: &PunctualLightingConfig,
  ) -> Option<IncidentLight> {
    IncidentLight {
      color: self.illuminance,
      direction: self.direction.reverse().normalize(),
    }
    .into()
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
  /// in cd
  pub luminance_intensity: Vec3<f32>,
  pub position: Vec3<f32>,
  /// zero or negative means infinite range
  pub cutoff_distance: f32,
  pub decay: f32,
}

impl PunctualLight for PointLight {
  fn compute_incident_light(
    &self,
    ctx: &LightingGeometricCtx,
    config: &PunctualLightingConfig,
  ) -> Option<IncidentLight> {
    let (direction, distance) = direction_and_distance(self.position, ctx.position)?;
    let factor = punctual_light_intensity_to_irradiance_factor(
      distance,
      self.cutoff_distance,
      self.decay,
      config.falloff,
    );

    (factor > 0.).then(|| IncidentLight {
      color: self.luminance_intensity * factor,
      direction,
    })
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotLight {
  pub luminance_intensity: Vec3<f32>,
  pub position: Vec3<f32>,
  /// from light source to the spot target
  pub direction: Vec3<f32>,
  pub cutoff_distance: f32,
  pub decay: f32,
  /// cosine of the outer cone half angle
  pub half_cone_cos: f32,
  /// cosine of the angle the penumbra starts fading in, larger than `half_cone_cos`
  pub half_penumbra_cos: f32,
}

impl PunctualLight for SpotLight {
  fn compute_incident_light(
    &self,
    ctx: &LightingGeometricCtx,
    config: &PunctualLightingConfig,
  ) -> Option<IncidentLight> {
    let (direction, distance) = direction_and_distance(self.position, ctx.position)?;

    let angle_cos = direction.reverse().dot(self.direction.normalize());
    if angle_cos <= self.half_cone_cos {
      return None;
    }
    let angle_factor = angle_cos.smoothstep(self.half_cone_cos, self.half_penumbra_cos);

    let distance_factor = punctual_light_intensity_to_irradiance_factor(
      distance,
      self.cutoff_distance,
      self.decay,
      config.falloff,
    );

    let intensity_factor = distance_factor * angle_factor;
    (intensity_factor > 0.).then(|| IncidentLight {
      color: self.luminance_intensity * intensity_factor,
      direction,
    })
  }
}

/// unit direction from the surface to the light, and the distance between them
fn direction_and_distance(light: Vec3<f32>, surface: Vec3<f32>) -> Option<(Vec3<f32>, f32)> {
  let to_light = light - surface;
  let distance = to_light.length();
  (distance > 0.).then(|| (to_light / distance, distance))
}

/// based upon Frostbite 3 Moving to Physically-based Rendering
/// page 32, equation 26: E[window1]
/// https://seblagarde.files.wordpress.com/2015/07/course_notes_moving_frostbite_to_pbr_v32.pdf
/// this is intended to be used on spot and point lights who are represented as luminous intensity
/// but who must be converted to illuminance for surface lighting calculation
pub fn punctual_light_intensity_to_irradiance_factor(
  light_distance: f32,
  cutoff_distance: f32,
  decay_exponent: f32,
  falloff: DistanceFalloff,
) -> f32 {
  match falloff {
    DistanceFalloff::PhysicallyCorrect => {
      let mut distance_falloff = 1.0 / light_distance.powf(decay_exponent).max(0.01);
      if cutoff_distance > 0.0 {
        let ratio = light_distance / cutoff_distance;
        let cutoff = (1.0 - ratio.powi(4)).saturate();
        distance_falloff *= cutoff * cutoff;
      }
      distance_falloff
    }
    DistanceFalloff::Legacy => {
      if cutoff_distance > 0.0 && decay_exponent > 0.0 {
        (-light_distance / cutoff_distance + 1.0)
          .saturate()
          .powf(decay_exponent)
      } else {
        1.0
      }
    }
  }
}
