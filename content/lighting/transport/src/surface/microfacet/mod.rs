mod environment;
mod specular;
mod terms;
pub use environment::*;
pub use specular::*;
pub use terms::*;
