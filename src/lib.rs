pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::inventory::{
    add_stock, check_quantity, list_by_prefix, parse_quantity, sell_stock,
};
pub use crate::core::ledger::{merge_ledgers, Ledger};
pub use crate::core::store::{Inventory, InventoryOptions};
pub use crate::core::validators::{normalize_suffix, validate_cpu, validate_gpu};
pub use adapters::{MemoryStore, TextFile, TextFileStore};
pub use app::menu::{MenuExit, MenuSession};
pub use config::StoreConfig;
pub use domain::model::{ComponentKind, Quantity, SaleOutcome};
pub use domain::ports::{ConfigProvider, LedgerStore};
pub use utils::error::{Result, StoreError};
