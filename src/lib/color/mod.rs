#[allow(clippy::module_inception)]
pub mod color;
pub mod hex;
pub mod hsv;

pub use color::Color;
pub use hsv::Hsv;
