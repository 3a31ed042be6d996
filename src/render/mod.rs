pub mod english;
pub mod step_text;

pub use english::*;
pub use step_text::*;
