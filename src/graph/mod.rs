pub mod builder;
pub mod readiness;

pub use builder::*;
pub use readiness::*;
