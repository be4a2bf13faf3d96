pub mod slider;
pub mod thumbnail_slider;

pub use slider::SliderOptions;
pub use thumbnail_slider::{FallbackThumbnail, ThumbnailEvent, ThumbnailSlider, MAX_VISIBLE_ITEMS};
