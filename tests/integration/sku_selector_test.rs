// Integration tests for the SKU selector view model and selection events

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::TestDataFactory;
use rust_decimal_macros::dec;
use serde_json::json;
use storefront::sku::{max_sku_price, SkuItem, SkuSelector, SkuSelectorEvent};

fn items() -> Vec<SkuItem> {
    let mut blue = TestDataFactory::sku_item("Blue", "https://cdn.example.com/blue.jpg", 59.9, 3);
    blue.specs = serde_json::from_value(json!([
        {"name": "Size", "categories": [{"name": "S"}, {"name": "M"}]},
        {"name": "Fit", "categories": [{"name": "Slim"}]}
    ]))
    .unwrap();

    vec![
        blue,
        TestDataFactory::sku_item("Red", "http://cdn.example.com/red.jpg", 79.9, 0),
        serde_json::from_value(json!({
            "name": "No image",
            "images": [],
            "sellers": [{"commertialOffer": {"Price": 99.9, "AvailableQuantity": 1}}]
        }))
        .unwrap(),
    ]
}

#[test]
fn test_max_price_includes_items_without_images() {
    assert_eq!(max_sku_price(&items()), dec!(99.9));
}

#[test]
fn test_options_skip_items_without_images() {
    let selector = SkuSelector::new("Color", items());
    let options = selector.options();

    assert_eq!(options.len(), 2);
    assert_eq!(options[0].image_url, "//cdn.example.com/blue.jpg");
    assert_eq!(options[0].image_label.as_deref(), Some("Blue"));
    assert!(options[0].is_available);
    assert_eq!(options[1].image_url, "//cdn.example.com/red.jpg");
    assert!(!options[1].is_available);
    assert!(options.iter().all(|o| o.max_price == dec!(99.9)));
}

#[test]
fn test_default_index_until_selection() {
    let mut selector = SkuSelector::new("Color", items()).with_default_index(1);
    assert_eq!(selector.selected_index(), 1);
    assert!(selector.spec_groups().is_empty());

    let event = selector.select(0).unwrap();
    assert_eq!(event, SkuSelectorEvent::SkuSelected(0));
    assert_eq!(selector.selected_index(), 0);

    let groups = selector.spec_groups();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].title, "Size");
    assert_eq!(groups[0].categories, vec!["S", "M"]);
    assert_eq!(groups[1].categories, vec!["Slim"]);
}

#[test]
fn test_default_index_out_of_range_has_no_specs() {
    let selector = SkuSelector::new("Color", items()).with_default_index(7);
    assert!(selector.selected_item().is_none());
    assert!(selector.view().spec_groups.is_empty());
}

#[test]
fn test_view_and_event_serialize() {
    let mut selector = SkuSelector::new("Color", items());
    let event = selector.select(1).unwrap();

    assert_eq!(
        serde_json::to_value(event).unwrap(),
        json!({"type": "skuSelected", "index": 1})
    );

    let view = serde_json::to_value(selector.view()).unwrap();
    assert_eq!(view["title"], "Color");
    assert_eq!(view["selectedIndex"], 1);
    assert_eq!(view["options"].as_array().unwrap().len(), 2);
}
