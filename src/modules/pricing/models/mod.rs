pub mod installment;
pub mod price_info;

pub use installment::{Installment, RawInstallment};
pub use price_info::{PriceDisplayOptions, PriceInfo, PriceInput, PricePayload};
