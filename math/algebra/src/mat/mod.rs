mod mat3;

pub use mat3::*;
