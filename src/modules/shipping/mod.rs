pub mod models;
pub mod services;

pub use models::{LogisticsInfo, ShippingItem, ShippingQuote, ShippingRequest, Sla};
pub use services::{
    format_zipcode, GraphqlShippingEstimator, ShippingCommand, ShippingEstimator, ShippingEvent,
    ShippingSimulator,
};
