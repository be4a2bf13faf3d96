use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use crate::core::{AppError, Result};
use crate::modules::sku::models::SkuItem;

/// Highest first-seller price across `items`, or zero for an empty list
pub fn max_sku_price(items: &[SkuItem]) -> Decimal {
    items
        .iter()
        .filter_map(SkuItem::offer)
        .map(|offer| offer.price)
        .fold(Decimal::ZERO, Decimal::max)
}

/// Drop a leading `http:`/`https:` so images load over the page's protocol
pub fn strip_url(url: &str) -> &str {
    url.strip_prefix("https:")
        .or_else(|| url.strip_prefix("http:"))
        .unwrap_or(url)
}

/// Event handed back to the host when the shopper picks a SKU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "index", rename_all = "camelCase")]
pub enum SkuSelectorEvent {
    SkuSelected(usize),
}

/// One selectable SKU thumbnail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkuOption {
    /// Position of the SKU in the input list
    pub index: usize,
    pub image_url: String,
    pub image_label: Option<String>,
    pub is_available: bool,
    pub price: Option<Decimal>,
    pub max_price: Decimal,
}

/// Specification of the selected SKU with its category names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecGroup {
    pub title: String,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkuSelectorView {
    pub title: String,
    pub options: Vec<SkuOption>,
    pub selected_index: usize,
    pub spec_groups: Vec<SpecGroup>,
}

/// SKU selector state: the SKU list plus the shopper's current choice
#[derive(Debug, Clone)]
pub struct SkuSelector {
    title: String,
    items: Vec<SkuItem>,
    default_index: usize,
    selected_index: Option<usize>,
}

impl SkuSelector {
    pub fn new(title: impl Into<String>, items: Vec<SkuItem>) -> Self {
        Self {
            title: title.into(),
            items,
            default_index: 0,
            selected_index: None,
        }
    }

    pub fn with_default_index(mut self, default_index: usize) -> Self {
        self.default_index = default_index;
        self
    }

    pub fn items(&self) -> &[SkuItem] {
        &self.items
    }

    /// The shopper's choice, or the default index until one is made
    pub fn selected_index(&self) -> usize {
        self.selected_index.unwrap_or(self.default_index)
    }

    pub fn selected_item(&self) -> Option<&SkuItem> {
        self.items.get(self.selected_index())
    }

    /// Record a selection and return the event for the host to dispatch
    pub fn select(&mut self, index: usize) -> Result<SkuSelectorEvent> {
        if index >= self.items.len() {
            return Err(AppError::validation(format!(
                "SKU index {} out of range ({} items)",
                index,
                self.items.len()
            )));
        }

        info!("SKU {} selected ({})", index, self.items[index].name);
        self.selected_index = Some(index);
        Ok(SkuSelectorEvent::SkuSelected(index))
    }

    /// Thumbnails for every SKU that has at least one image
    pub fn options(&self) -> Vec<SkuOption> {
        let max_price = max_sku_price(&self.items);

        self.items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                let image = item.first_image()?;
                Some(SkuOption {
                    index,
                    image_url: strip_url(&image.image_url).to_string(),
                    image_label: image.image_label.clone(),
                    is_available: item.is_available(),
                    price: item.offer().map(|offer| offer.price),
                    max_price,
                })
            })
            .collect()
    }

    /// Spec groups of the selected SKU; empty if it is out of range or has none
    pub fn spec_groups(&self) -> Vec<SpecGroup> {
        let Some(specs) = self.selected_item().and_then(|item| item.specs.as_ref()) else {
            return Vec::new();
        };

        specs
            .iter()
            .map(|spec| SpecGroup {
                title: spec.name.clone(),
                categories: spec
                    .categories
                    .iter()
                    .map(|category| category.name.clone())
                    .collect(),
            })
            .collect()
    }

    pub fn view(&self) -> SkuSelectorView {
        let view = SkuSelectorView {
            title: self.title.clone(),
            options: self.options(),
            selected_index: self.selected_index(),
            spec_groups: self.spec_groups(),
        };
        debug!(
            "SKU selector view: {} options, {} spec groups",
            view.options.len(),
            view.spec_groups.len()
        );
        view
    }
}
