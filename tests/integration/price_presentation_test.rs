// Integration tests for the product price component: payload validation,
// line composition and text rendering.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::TestDataFactory;
use rust_decimal_macros::dec;
use serde_json::json;
use storefront::core::messages::PRICING_SAVINGS;
use storefront::core::MessageCatalog;
use storefront::pricing::{PriceDisplayOptions, PriceInfo, PriceInput, PricePayload, PricePresenter};

fn all_lines() -> PriceDisplayOptions {
    PriceDisplayOptions {
        show_list_price: true,
        show_labels: true,
        show_installments: true,
        show_savings: true,
    }
}

#[test]
fn test_catalog_payload_to_rendered_lines() {
    let payload = TestDataFactory::price_payload(
        120.0,
        100.0,
        json!([
            {"NumberOfInstallments": 1, "Value": 100.0, "InterestRate": 0},
            {"NumberOfInstallments": 4, "Value": 25.0, "InterestRate": 0},
            {"NumberOfInstallments": 10, "Value": 11.5, "InterestRate": 1.99}
        ]),
    );
    let input: PriceInput = serde_json::from_value(payload).unwrap();
    let info = input.validate().unwrap();

    let presentation = PricePresenter::present(&info, &all_lines(), &TestDataFactory::usd());
    let lines = presentation.render(&MessageCatalog::new());

    assert_eq!(
        lines,
        vec![
            "From $120.00",
            "To $100.00",
            "4 × $25.00 interest-free",
            "Save $20.00",
        ]
    );
}

#[test]
fn test_equal_prices_suppress_from_line() {
    let info = PriceInfo::new(dec!(100), dec!(100));
    let presentation = PricePresenter::present(&info, &all_lines(), &TestDataFactory::usd());

    assert!(presentation.list_price.is_none());
    assert!(presentation.savings.is_none());
    assert_eq!(presentation.selling_price.formatted, "$100.00");
}

#[test]
fn test_hidden_list_price_keeps_savings() {
    let info = PriceInfo::new(dec!(150), dec!(100));
    let options = PriceDisplayOptions {
        show_list_price: false,
        show_savings: true,
        ..Default::default()
    };

    let presentation = PricePresenter::present(&info, &options, &TestDataFactory::usd());
    assert!(presentation.list_price.is_none());
    assert_eq!(presentation.savings.unwrap().formatted, "$50.00");
}

#[test]
fn test_selling_above_list_renders_negative_savings() {
    let info = PriceInfo::new(dec!(80), dec!(100));
    let options = PriceDisplayOptions {
        show_savings: true,
        ..Default::default()
    };

    let presentation = PricePresenter::present(&info, &options, &TestDataFactory::usd());
    let savings = presentation.savings.as_ref().unwrap();

    assert_eq!(savings.amount, dec!(-20));
    assert_eq!(savings.formatted, "-$20.00");
    assert_eq!(
        presentation.render(&MessageCatalog::new()).last().unwrap(),
        "Save -$20.00"
    );
}

#[test]
fn test_no_installments_means_no_installment_line() {
    let info = PriceInfo::new(dec!(100), dec!(90));
    let presentation = PricePresenter::present(&info, &all_lines(), &TestDataFactory::usd());

    assert!(presentation.installment.is_none());
    assert_eq!(presentation.render(&MessageCatalog::new()).len(), 3);
}

#[test]
fn test_installments_hidden_by_default() {
    let info = PriceInfo::new(dec!(100), dec!(100))
        .with_installments(vec![TestDataFactory::installment(3, dec!(33.34), false)]);

    let presentation =
        PricePresenter::present(&info, &PriceDisplayOptions::default(), &TestDataFactory::usd());
    assert!(presentation.installment.is_none());
}

#[test]
fn test_localized_catalog_and_currency() {
    let info = PriceInfo::new(dec!(1299.90), dec!(999.90))
        .with_installments(vec![TestDataFactory::installment(10, dec!(99.99), false)]);
    let catalog = MessageCatalog::new()
        .with_message("pricing.from", "De")
        .with_message("pricing.to", "Por")
        .with_message(
            "pricing.installment-display",
            "{installments}{times} de {installmentPrice}",
        )
        .with_message("pricing.interest-free", "sem juros")
        .with_message(PRICING_SAVINGS, "Economize {savings}");

    let presentation = PricePresenter::present(&info, &all_lines(), &TestDataFactory::brl());

    assert_eq!(
        presentation.render(&catalog),
        vec![
            "De R$ 1.299,90",
            "Por R$ 999,90",
            "10× de R$ 99,99 sem juros",
            "Economize R$ 300,00",
        ]
    );
}

#[test]
fn test_malformed_installment_is_rejected_before_formatting() {
    let payload = TestDataFactory::price_payload(
        100.0,
        100.0,
        json!([{"NumberOfInstallments": 3}]),
    );
    let input: PriceInput = serde_json::from_value(payload).unwrap();

    let err = input.validate().unwrap_err();
    assert!(err.is_contract_violation());
    assert_eq!(
        err.to_string(),
        "Contract violation: Installments[0].Value is required"
    );
}

#[test]
fn test_presentation_serializes_for_renderer() {
    let info = PriceInfo::new(dec!(120), dec!(100));
    let presentation =
        PricePresenter::present(&info, &PriceDisplayOptions::default(), &TestDataFactory::usd());

    let json = serde_json::to_value(&presentation).unwrap();
    assert_eq!(json["listPrice"]["labelId"], "pricing.from");
    assert_eq!(json["listPrice"]["formatted"], "$120.00");
    assert_eq!(json["sellingPrice"]["formatted"], "$100.00");
    assert!(json["installment"].is_null());
}

#[test]
fn test_json_payload_uses_its_own_options() {
    let document = json!({
        "price": TestDataFactory::price_payload(
            50.0,
            40.0,
            json!([{"NumberOfInstallments": 2, "Value": 20.0, "InterestRate": 0}]),
        ),
        "options": {"showInstallments": true, "showSavings": true, "showLabels": false}
    });
    let payload = PricePayload::from_json(&document.to_string()).unwrap();

    let presentation = PricePresenter::present_payload(&payload, &TestDataFactory::usd()).unwrap();
    let lines = presentation.render(&MessageCatalog::new());

    assert_eq!(lines, vec!["$50.00", "$40.00", "2 × $20.00 interest-free", "Save $10.00"]);
}

#[test]
fn test_json_payload_without_price_is_a_contract_violation() {
    let payload = PricePayload::from_json(r#"{"price": {"ListPrice": 10}}"#).unwrap();

    let err = PricePresenter::present_payload(&payload, &TestDataFactory::usd()).unwrap_err();
    assert!(err.is_contract_violation());
}
