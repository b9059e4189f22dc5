mod dimension;
mod normalized;
mod vec2;
mod vec3;
mod vec4;

pub use dimension::*;
pub use normalized::*;
pub use vec2::*;
pub use vec3::*;
pub use vec4::*;
