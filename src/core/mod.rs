pub mod inventory;
pub mod ledger;
pub mod seed;
pub mod store;
pub mod validators;

pub use crate::domain::model::{ComponentKind, Quantity, SaleOutcome};
pub use crate::domain::ports::{ConfigProvider, LedgerStore};
pub use crate::utils::error::Result;
