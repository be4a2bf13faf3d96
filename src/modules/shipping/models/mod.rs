pub mod quote;
pub mod request;

pub use quote::{LogisticsInfo, ShippingQuote, Sla};
pub use request::{ShippingItem, ShippingRequest};
