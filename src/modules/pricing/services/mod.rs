pub mod installment_selector;
pub mod price_presenter;

pub use installment_selector::select_installment;
pub use price_presenter::{InstallmentLine, PriceLine, PricePresentation, PricePresenter, SavingsLine};
