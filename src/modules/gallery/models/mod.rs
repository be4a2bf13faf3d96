pub mod image;
pub mod slider_settings;

pub use image::{Orientation, ProductImage};
pub use slider_settings::{ResponsiveSetting, SliderSettings};
