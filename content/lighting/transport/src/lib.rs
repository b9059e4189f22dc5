use rendiation_algebra::*;
use serde::{Deserialize, Serialize};

mod surface;
pub use surface::*;
