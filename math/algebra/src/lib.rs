#[macro_use]
mod marcos;

mod mat;
mod scalar;
mod vec;

pub use mat::*;
pub use num_traits::{Float, One, Zero};
pub use scalar::*;
pub use vec::*;
