use serde::Serialize;
use tracing::debug;

use crate::core::{AppError, Result};
use crate::modules::gallery::models::{Orientation, ProductImage, ResponsiveSetting, SliderSettings};

/// Most thumbnails shown at once, whatever the caller asks for
pub const MAX_VISIBLE_ITEMS: usize = 4;

const SLIDE_WIDTH: u32 = 82;
const MOBILE_BREAKPOINT: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "index", rename_all = "camelCase")]
pub enum ThumbnailEvent {
    ThumbnailClicked(usize),
}

/// Static thumbnail rendered before the carousel is available
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackThumbnail<'a> {
    pub image: &'a ProductImage,
    pub width_class: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct ThumbnailSlider {
    images: Vec<ProductImage>,
    orientation: Orientation,
    max_visible_items: usize,
}

impl ThumbnailSlider {
    pub fn new(images: Vec<ProductImage>) -> Self {
        Self {
            images,
            orientation: Orientation::default(),
            max_visible_items: MAX_VISIBLE_ITEMS,
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_max_visible_items(mut self, max_visible_items: usize) -> Self {
        self.max_visible_items = max_visible_items;
        self
    }

    pub fn images(&self) -> &[ProductImage] {
        &self.images
    }

    pub fn visible_items(&self) -> usize {
        self.max_visible_items.min(MAX_VISIBLE_ITEMS)
    }

    pub fn settings(&self) -> SliderSettings {
        let vertical = self.orientation.is_vertical();

        SliderSettings {
            speed: 500,
            infinite: Some(false),
            dots: false,
            arrows: true,
            slide_width: Some(SLIDE_WIDTH),
            slides_to_show: self.visible_items(),
            slides_to_scroll: 1,
            vertical,
            vertical_swiping: vertical,
            responsive: vec![ResponsiveSetting {
                breakpoint: MOBILE_BREAKPOINT,
                dots: true,
                arrows: false,
                slides_to_show: 1,
                vertical: false,
                vertical_swiping: false,
            }],
        }
    }

    pub fn ssr_fallback(&self) -> Vec<FallbackThumbnail<'_>> {
        let visible = self.visible_items();
        let width_class = width_class(visible);

        self.images
            .iter()
            .take(visible)
            .map(|image| FallbackThumbnail { image, width_class })
            .collect()
    }

    pub fn click(&self, index: usize) -> Result<ThumbnailEvent> {
        if index >= self.images.len() {
            return Err(AppError::validation(format!(
                "Thumbnail index {} out of range ({} images)",
                index,
                self.images.len()
            )));
        }

        debug!("Thumbnail {} clicked", index);
        Ok(ThumbnailEvent::ThumbnailClicked(index))
    }
}

/// Width class splitting a row into `items_per_page` equal columns
fn width_class(items_per_page: usize) -> Option<&'static str> {
    match items_per_page {
        5 => Some("w-20"),
        4 => Some("w-25"),
        3 => Some("w-third"),
        _ => None,
    }
}
