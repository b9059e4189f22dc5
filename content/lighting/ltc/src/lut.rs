use half::f16;
use thiserror::Error;

use crate::*;

pub const LUT_SIZE: usize = 64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LtcLutError {
  #[error("lut size must be at least one texel")]
  Empty,
  #[error("a {0}x{0} lut is too large to address")]
  TooLarge(usize),
  #[error("a {size}x{size} lut of {texel_bytes} byte texels needs {expected} bytes, got {actual}")]
  ByteLength {
    size: usize,
    texel_bytes: usize,
    expected: usize,
    actual: usize,
  },
  #[error("a {size}x{size} lut needs {expected} texels, got {actual}")]
  TexelCount {
    size: usize,
    expected: usize,
    actual: usize,
  },
  #[error("ltc lut size mismatch, ltc_1 is {ltc_1} and ltc_2 is {ltc_2}")]
  SizeMismatch { ltc_1: usize, ltc_2: usize },
}

/// A square rgba table, sampled with bilinear filtering and clamp to edge addressing.
///
/// Rows are indexed by uv.y.
#[derive(Debug, Clone, PartialEq)]
pub struct LutTable {
  size: usize,
  texels: Vec<Vec4<f32>>,
}

fn texel_count(size: usize) -> Result<usize, LtcLutError> {
  if size == 0 {
    return Err(LtcLutError::Empty);
  }
  size.checked_mul(size).ok_or(LtcLutError::TooLarge(size))
}

impl LutTable {
  pub fn new(size: usize, texels: Vec<Vec4<f32>>) -> Result<Self, LtcLutError> {
    let expected = texel_count(size)?;
    if texels.len() != expected {
      return Err(LtcLutError::TexelCount {
        size,
        expected,
        actual: texels.len(),
      });
    }

    let non_finite = texels
      .iter()
      .filter(|t| !(t.x.is_finite() && t.y.is_finite() && t.z.is_finite() && t.w.is_finite()))
      .count();
    if non_finite > 0 {
      log::warn!("ltc lut contains {non_finite} non finite texels");
    }

    Ok(Self { size, texels })
  }

  pub fn filled(size: usize, value: Vec4<f32>) -> Result<Self, LtcLutError> {
    Self::new(size, vec![value; texel_count(size)?])
  }

  /// texels stored as little endian `[f32; 4]`
  pub fn from_f32_bytes(size: usize, bytes: &[u8]) -> Result<Self, LtcLutError> {
    const TEXEL: usize = std::mem::size_of::<[f32; 4]>();
    check_byte_length(size, TEXEL, bytes)?;
    let texels = bytes
      .chunks_exact(TEXEL)
      .map(|c| {
        let bits = bytemuck::pod_read_unaligned::<[u32; 4]>(c);
        Vec4::from(bits.map(|b| f32::from_bits(u32::from_le(b))))
      })
      .collect();
    Self::new(size, texels)
  }

  /// texels stored as little endian `[f16; 4]`, the layout the lut fitting tool writes
  pub fn from_f16_bytes(size: usize, bytes: &[u8]) -> Result<Self, LtcLutError> {
    const TEXEL: usize = std::mem::size_of::<[f16; 4]>();
    check_byte_length(size, TEXEL, bytes)?;
    let texels = bytes
      .chunks_exact(TEXEL)
      .map(|c| {
        let bits = bytemuck::pod_read_unaligned::<[u16; 4]>(c);
        Vec4::from(bits.map(|b| f16::from_bits(u16::from_le(b)).to_f32()))
      })
      .collect();
    Self::new(size, texels)
  }

  pub fn size(&self) -> usize {
    self.size
  }

  fn texel(&self, x: usize, y: usize) -> Vec4<f32> {
    self.texels[y * self.size + x]
  }

  pub fn sample(&self, uv: Vec2<f32>) -> Vec4<f32> {
    let size = self.size as f32;
    let max = (self.size - 1) as f32;
    let x = (uv.x * size - 0.5).clamp(0., max);
    let y = (uv.y * size - 0.5).clamp(0., max);

    let (x0, y0) = (x.floor() as usize, y.floor() as usize);
    let (x1, y1) = ((x0 + 1).min(self.size - 1), (y0 + 1).min(self.size - 1));
    let (fx, fy) = (x - x0 as f32, y - y0 as f32);

    let top = self.texel(x0, y0) * (1. - fx) + self.texel(x1, y0) * fx;
    let bottom = self.texel(x0, y1) * (1. - fx) + self.texel(x1, y1) * fx;
    top * (1. - fy) + bottom * fy
  }
}

fn check_byte_length(size: usize, texel_bytes: usize, bytes: &[u8]) -> Result<(), LtcLutError> {
  let expected = texel_count(size)?
    .checked_mul(texel_bytes)
    .ok_or(LtcLutError::TooLarge(size))?;
  if bytes.len() != expected {
    return Err(LtcLutError::ByteLength {
      size,
      texel_bytes,
      expected,
      actual: bytes.len(),
    });
  }
  Ok(())
}

/// The lookup tables indexed by (roughness, sqrt(1 - n⋅v)).
///
/// `ltc_1` holds the four non trivial coefficients of the inverse transform,
/// `ltc_2` holds the fresnel scale and bias in x and y.
#[derive(Debug, Clone, PartialEq)]
pub struct LtcLut {
  ltc_1: LutTable,
  ltc_2: LutTable,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LtcLutSample {
  pub m_inv: Mat3<f32>,
  /// scale applied to the specular color and bias applied to its complement
  pub fresnel: Vec2<f32>,
}

impl LtcLut {
  pub fn new(ltc_1: LutTable, ltc_2: LutTable) -> Result<Self, LtcLutError> {
    if ltc_1.size() != ltc_2.size() {
      return Err(LtcLutError::SizeMismatch {
        ltc_1: ltc_1.size(),
        ltc_2: ltc_2.size(),
      });
    }
    log::info!("ltc lut ready, {0}x{0} texels", ltc_1.size());
    Ok(Self { ltc_1, ltc_2 })
  }

  /// A lut whose transform is always the identity and whose fresnel passes the
  /// specular color through, the specular lobe degenerates to the clamped cosine.
  pub fn identity(size: usize) -> Result<Self, LtcLutError> {
    Ok(Self {
      ltc_1: LutTable::filled(size, Vec4::new(1., 0., 0., 1.))?,
      ltc_2: LutTable::filled(size, Vec4::new(1., 0., 0., 0.))?,
    })
  }

  pub fn size(&self) -> usize {
    self.ltc_1.size()
  }

  pub fn sample(&self, n: Vec3<f32>, v: Vec3<f32>, roughness: f32) -> LtcLutSample {
    let uv = texel_center_uv(n, v, roughness, self.size());
    let t1 = self.ltc_1.sample(uv);
    let t2 = self.ltc_2.sample(uv);

    LtcLutSample {
      m_inv: Mat3::from_cols(
        Vec3::new(t1.x, 0., t1.y),
        Vec3::new(0., 1., 0.),
        Vec3::new(t1.z, 0., t1.w),
      ),
      fresnel: t2.xy(),
    }
  }
}

/// lut coordinate for the default 64x64 tables
pub fn ltc_uv(n: Vec3<f32>, v: Vec3<f32>, roughness: f32) -> Vec2<f32> {
  texel_center_uv(n, v, roughness, LUT_SIZE)
}

/// remaps (roughness, sqrt(1 - n⋅v)) so [0, 1] spans the first to the last texel center
fn texel_center_uv(n: Vec3<f32>, v: Vec3<f32>, roughness: f32, size: usize) -> Vec2<f32> {
  let size = size as f32;
  let scale = (size - 1.) / size;
  let bias = 0.5 / size;

  let dot_nv = n.dot(v).saturate();
  let uv = Vec2::new(roughness, (1.0 - dot_nv).sqrt());
  uv * scale + Vec2::splat(bias)
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn uv_maps_onto_texel_centers() {
    const LUT_BIAS: f32 = 0.5 / LUT_SIZE as f32;
    let n = Vec3::new(0., 0., 1.);
    let uv = ltc_uv(n, n, 0.);
    assert_eq!(uv, Vec2::splat(LUT_BIAS));

    let grazing = ltc_uv(n, Vec3::new(1., 0., 0.), 1.);
    assert!((grazing.x - (1. - LUT_BIAS)).abs() < 1e-6);
    assert!((grazing.y - (1. - LUT_BIAS)).abs() < 1e-6);
  }

  #[test]
  fn bilinear_sampling() {
    let texels = vec![
      Vec4::splat(0.),
      Vec4::splat(1.),
      Vec4::splat(2.),
      Vec4::splat(3.),
    ];
    let table = LutTable::new(2, texels).unwrap();

    // texel centers
    assert_eq!(table.sample(Vec2::new(0.25, 0.25)), Vec4::splat(0.));
    assert_eq!(table.sample(Vec2::new(0.75, 0.75)), Vec4::splat(3.));
    // clamp to edge
    assert_eq!(table.sample(Vec2::new(-1., 0.)), Vec4::splat(0.));
    assert_eq!(table.sample(Vec2::new(2., 2.)), Vec4::splat(3.));
    // center of the table
    assert_eq!(table.sample(Vec2::splat(0.5)), Vec4::splat(1.5));
  }

  #[test]
  fn table_construction_checks_sizes() {
    assert_eq!(LutTable::new(0, vec![]), Err(LtcLutError::Empty));
    assert!(matches!(
      LutTable::new(2, vec![Vec4::zero()]),
      Err(LtcLutError::TexelCount { actual: 1, .. })
    ));
    assert!(matches!(
      LutTable::from_f32_bytes(2, &[0; 63]),
      Err(LtcLutError::ByteLength { expected: 64, actual: 63, .. })
    ));

    let small = LutTable::filled(2, Vec4::zero()).unwrap();
    let large = LutTable::filled(4, Vec4::zero()).unwrap();
    assert_eq!(
      LtcLut::new(small, large),
      Err(LtcLutError::SizeMismatch { ltc_1: 2, ltc_2: 4 })
    );
  }

  #[test]
  fn oversized_tables_are_rejected() {
    let huge = 1 << (usize::BITS / 2);
    assert_eq!(LutTable::from_f16_bytes(huge, &[0; 8]), Err(LtcLutError::TooLarge(huge)));
    assert_eq!(LutTable::from_f32_bytes(huge, &[0; 16]), Err(LtcLutError::TooLarge(huge)));
    assert_eq!(LutTable::new(huge, vec![]), Err(LtcLutError::TooLarge(huge)));
    assert_eq!(LutTable::filled(huge, Vec4::zero()), Err(LtcLutError::TooLarge(huge)));
    assert!(LtcLut::identity(huge).is_err());

    // size * size fits but the byte count does not
    let wide = 1 << (usize::BITS / 2 - 1);
    assert_eq!(LutTable::from_f32_bytes(wide, &[]), Err(LtcLutError::TooLarge(wide)));
    assert_eq!(LutTable::from_f16_bytes(0, &[]), Err(LtcLutError::Empty));
  }

  #[test]
  fn decode_little_endian_half_and_single_precision() {
    let values = [[0.5_f32, 1., -2., 0.25]; 4];
    let bytes: Vec<u8> = values.iter().flatten().flat_map(|v| v.to_le_bytes()).collect();
    let table = LutTable::from_f32_bytes(2, &bytes).unwrap();
    assert_eq!(table.sample(Vec2::splat(0.5)), Vec4::new(0.5, 1., -2., 0.25));

    let half_bytes: Vec<u8> = values
      .iter()
      .flatten()
      .flat_map(|v| f16::from_f32(*v).to_le_bytes())
      .collect();
    let half_table = LutTable::from_f16_bytes(2, &half_bytes).unwrap();
    assert_eq!(half_table, table);

    // 0.5 is 0x3f000000
    assert_eq!(&bytes[..4], &[0x00, 0x00, 0x00, 0x3f]);
  }

  #[test]
  fn sample_builds_inverse_matrix() {
    let ltc_1 = LutTable::filled(LUT_SIZE, Vec4::new(2., 3., 4., 5.)).unwrap();
    let ltc_2 = LutTable::filled(LUT_SIZE, Vec4::new(0.7, 0.2, 0., 0.)).unwrap();
    let lut = LtcLut::new(ltc_1, ltc_2).unwrap();

    let n = Vec3::new(0., 0., 1.);
    let sample = lut.sample(n, n, 0.5);
    assert_eq!(sample.m_inv * Vec3::new(1., 0., 0.), Vec3::new(2., 0., 3.));
    assert_eq!(sample.m_inv * Vec3::new(0., 1., 0.), Vec3::new(0., 1., 0.));
    assert_eq!(sample.m_inv * Vec3::new(0., 0., 1.), Vec3::new(4., 0., 5.));
    assert_eq!(sample.fresnel, Vec2::new(0.7, 0.2));

    let identity = LtcLut::identity(LUT_SIZE).unwrap().sample(n, n, 0.5);
    assert_eq!(identity.m_inv, Mat3::identity());
  }
}
