pub mod models;
pub mod services;

pub use models::{Orientation, ProductImage, ResponsiveSetting, SliderSettings};
pub use services::{SliderOptions, ThumbnailEvent, ThumbnailSlider};
