use std::collections::HashMap;

use crate::core::traits::MessageFormatter;

pub const PRICING_FROM: &str = "pricing.from";
pub const PRICING_TO: &str = "pricing.to";
pub const PRICING_INSTALLMENT_DISPLAY: &str = "pricing.installment-display";
pub const PRICING_INTEREST_FREE: &str = "pricing.interest-free";
pub const PRICING_SAVINGS: &str = "pricing.savings";
pub const SHIPPING_LABEL: &str = "shipping.label";

const DEFAULT_MESSAGES: &[(&str, &str)] = &[
    (PRICING_FROM, "From"),
    (PRICING_TO, "To"),
    (
        PRICING_INSTALLMENT_DISPLAY,
        "{installments} {times} {installmentPrice}",
    ),
    (PRICING_INTEREST_FREE, "interest-free"),
    (PRICING_SAVINGS, "Save {savings}"),
    (SHIPPING_LABEL, "Shipping"),
];

/// In-memory message catalog with English defaults.
///
/// Unknown ids render as the id itself so a missing translation is visible
/// rather than silently blank.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    /// Catalog holding the default English messages
    pub fn new() -> Self {
        let messages = DEFAULT_MESSAGES
            .iter()
            .map(|(id, text)| (id.to_string(), text.to_string()))
            .collect();
        Self { messages }
    }

    /// Catalog with no messages at all
    pub fn empty() -> Self {
        Self {
            messages: HashMap::new(),
        }
    }

    /// Override or add a message
    pub fn with_message(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.messages.insert(id.into(), text.into());
        self
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.messages.get(id).map(String::as_str)
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageFormatter for MessageCatalog {
    fn format_message(&self, id: &str, values: &[(&str, &str)]) -> String {
        interpolate(self.get(id).unwrap_or(id), values)
    }
}

/// Substitute `{name}` placeholders in one scan of `template`.
///
/// Substituted values are never rescanned. Unknown or unterminated
/// placeholders are kept as written.
fn interpolate(template: &str, values: &[(&str, &str)]) -> String {
    let mut text = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        text.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let Some(end) = after.find('}') else {
            text.push_str(&rest[start..]);
            return text;
        };

        let name = &after[..end];
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => text.push_str(value),
            None => {
                text.push('{');
                text.push_str(name);
                text.push('}');
            }
        }
        rest = &after[end + 1..];
    }

    text.push_str(rest);
    text
}
