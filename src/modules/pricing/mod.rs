pub mod models;
pub mod services;

pub use models::{
    Installment, PriceDisplayOptions, PriceInfo, PriceInput, PricePayload, RawInstallment,
};
pub use services::{
    select_installment, InstallmentLine, PriceLine, PricePresentation, PricePresenter, SavingsLine,
};
