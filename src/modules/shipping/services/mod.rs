pub mod estimator_trait;
pub mod graphql_estimator;
pub mod simulator;
pub mod zipcode;

pub use estimator_trait::ShippingEstimator;
pub use graphql_estimator::GraphqlShippingEstimator;
pub use simulator::{ShippingCommand, ShippingEvent, ShippingSimulator};
pub use zipcode::{format_zipcode, is_complete_zipcode};
