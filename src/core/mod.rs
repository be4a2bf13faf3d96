pub mod currency;
pub mod error;
pub mod messages;
pub mod traits;

pub use currency::{format_amount, CurrencyConfig};
pub use error::{AppError, Result};
pub use messages::MessageCatalog;
pub use traits::MessageFormatter;
