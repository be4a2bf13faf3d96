use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::installment_selector::select_installment;
use crate::core::messages::{
    PRICING_FROM, PRICING_INSTALLMENT_DISPLAY, PRICING_INTEREST_FREE, PRICING_SAVINGS, PRICING_TO,
};
use crate::core::{format_amount, CurrencyConfig, MessageFormatter, Result};
use crate::modules::pricing::models::{PriceDisplayOptions, PriceInfo, PricePayload};

const TIMES: &str = "×";

/// A single formatted price with its optional label message id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceLine {
    pub label_id: Option<&'static str>,
    pub amount: Decimal,
    pub formatted: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallmentLine {
    pub number_of_installments: u32,
    pub value: Decimal,
    pub formatted_value: String,
    pub interest_free: bool,
}

/// Savings line; the amount is not clamped and may be negative
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsLine {
    pub amount: Decimal,
    pub formatted: String,
}

/// Display contract for the product price component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePresentation {
    /// "from" line, struck through by the renderer
    pub list_price: Option<PriceLine>,
    /// "to" line, always present
    pub selling_price: PriceLine,
    pub installment: Option<InstallmentLine>,
    pub savings: Option<SavingsLine>,
    pub show_labels: bool,
}

/// Composes the price lines for one render
pub struct PricePresenter;

impl PricePresenter {
    /// Validate `payload` and present it with its own display options
    pub fn present_payload(
        payload: &PricePayload,
        currency: &CurrencyConfig,
    ) -> Result<PricePresentation> {
        let info = payload.price.validate()?;
        Ok(Self::present(&info, &payload.options, currency))
    }

    pub fn present(
        info: &PriceInfo,
        options: &PriceDisplayOptions,
        currency: &CurrencyConfig,
    ) -> PricePresentation {
        let label = |id: &'static str| options.show_labels.then_some(id);
        let different_prices = info.has_different_prices();

        let list_price = (options.show_list_price && different_prices).then(|| PriceLine {
            label_id: label(PRICING_FROM),
            amount: info.list_price,
            formatted: format_amount(info.list_price, currency),
        });

        let selling_price = PriceLine {
            label_id: label(PRICING_TO),
            amount: info.selling_price,
            formatted: format_amount(info.selling_price, currency),
        };

        let installment = if options.show_installments {
            select_installment(Some(info.installments.as_slice())).map(|selected| InstallmentLine {
                number_of_installments: selected.number_of_installments,
                value: selected.value,
                formatted_value: format_amount(selected.value, currency),
                interest_free: selected.is_interest_free(),
            })
        } else {
            None
        };

        let savings = (options.show_savings && different_prices).then(|| {
            let amount = info.savings();
            SavingsLine {
                amount,
                formatted: format_amount(amount, currency),
            }
        });

        debug!(
            "Presented price in {} (list line: {}, installment line: {}, savings line: {})",
            currency,
            list_price.is_some(),
            installment.is_some(),
            savings.is_some()
        );

        PricePresentation {
            list_price,
            selling_price,
            installment,
            savings,
            show_labels: options.show_labels,
        }
    }
}

impl PricePresentation {
    /// Render each present line to text, in display order
    pub fn render(&self, messages: &dyn MessageFormatter) -> Vec<String> {
        let mut lines = Vec::with_capacity(4);

        if let Some(line) = &self.list_price {
            lines.push(render_price_line(line, messages));
        }

        lines.push(render_price_line(&self.selling_price, messages));

        if let Some(installment) = &self.installment {
            let count = installment.number_of_installments.to_string();
            let mut text = if self.show_labels {
                messages.format_message(
                    PRICING_INSTALLMENT_DISPLAY,
                    &[
                        ("installments", count.as_str()),
                        ("installmentPrice", installment.formatted_value.as_str()),
                        ("times", TIMES),
                    ],
                )
            } else {
                format!("{} {} {}", count, TIMES, installment.formatted_value)
            };

            if installment.interest_free {
                text.push(' ');
                text.push_str(&messages.format_message(PRICING_INTEREST_FREE, &[]));
            }
            lines.push(text);
        }

        if let Some(savings) = &self.savings {
            lines.push(
                messages.format_message(PRICING_SAVINGS, &[("savings", savings.formatted.as_str())]),
            );
        }

        lines
    }
}

fn render_price_line(line: &PriceLine, messages: &dyn MessageFormatter) -> String {
    match line.label_id {
        Some(id) => format!("{} {}", messages.format_message(id, &[]), line.formatted),
        None => line.formatted.clone(),
    }
}
