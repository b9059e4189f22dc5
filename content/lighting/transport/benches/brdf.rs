use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rendiation_algebra::*;
use rendiation_lighting_transport::*;

fn criterion_benchmark(c: &mut Criterion) {
  let ctx = LightingGeometricCtx {
    position: Vec3::zero(),
    normal: Vec3::new(0., 0., 1.),
    view_dir: Vec3::new(0., 0.6, 0.8),
  };
  let light = IncidentLight {
    color: Vec3::one(),
    direction: Vec3::new(0.6, 0., 0.8),
  };

  c.bench_function("ggx specular", |b| {
    b.iter(|| brdf_specular_ggx(black_box(&light), black_box(&ctx), Vec3::splat(0.04), 0.5))
  });

  c.bench_function("blinn phong specular", |b| {
    b.iter(|| brdf_specular_blinn_phong(black_box(&light), black_box(&ctx), Vec3::splat(0.04), 32.))
  });

  c.bench_function("ggx environment", |b| {
    b.iter(|| brdf_specular_ggx_environment(black_box(&ctx), Vec3::splat(0.04), 0.5))
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
