pub mod analyze;
pub mod image;

pub use analyze::*;
pub use image::*;
