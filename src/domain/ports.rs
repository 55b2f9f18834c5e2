use crate::core::ledger::Ledger;
use crate::utils::error::Result;

/// Backing storage for a ledger. A store that has never been written loads as empty.
pub trait LedgerStore {
    fn load(&self) -> Result<Ledger>;
    fn save(&self, ledger: &Ledger) -> Result<()>;
    fn describe(&self) -> String;
}

pub trait ConfigProvider {
    fn inventory_path(&self) -> &str;
    fn seed_if_missing(&self) -> bool;
    fn lowercase_suffix(&self) -> bool;
}
