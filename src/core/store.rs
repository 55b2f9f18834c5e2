use crate::core::inventory::{add_stock, check_quantity, list_by_prefix, sell_stock};
use crate::core::ledger::{merge_ledgers, Ledger};
use crate::core::validators::normalize_suffix;
use crate::core::LedgerStore;
use crate::domain::model::{ComponentKind, Quantity, SaleOutcome};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryOptions {
    /// Lower-case the trailing letters of new names before validating them.
    pub lowercase_suffix: bool,
}

impl Default for InventoryOptions {
    fn default() -> Self {
        Self {
            lowercase_suffix: true,
        }
    }
}

impl InventoryOptions {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            lowercase_suffix: config.lowercase_suffix(),
        }
    }
}

/// One editing session over a ledger store.
///
/// Changes stay in memory until [`Inventory::save`] is called.
pub struct Inventory<S: LedgerStore> {
    store: S,
    ledger: Ledger,
    options: InventoryOptions,
    dirty: bool,
}

impl<S: LedgerStore> Inventory<S> {
    pub fn open(store: S, options: InventoryOptions) -> Result<Self> {
        let ledger = store.load()?;
        Ok(Self {
            store,
            ledger,
            options,
            dirty: false,
        })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn cpus(&self) -> Vec<&str> {
        self.list(ComponentKind::Cpu)
    }

    pub fn gpus(&self) -> Vec<&str> {
        self.list(ComponentKind::Gpu)
    }

    pub fn list(&self, kind: ComponentKind) -> Vec<&str> {
        list_by_prefix(&self.ledger, |name| kind.looks_like(name))
    }

    /// Name as it will be validated and stored. Surrounding whitespace is kept.
    pub fn prepare_name(&self, raw_name: &str) -> String {
        if self.options.lowercase_suffix {
            normalize_suffix(raw_name)
        } else {
            raw_name.to_string()
        }
    }

    /// Returns the stored name and its new stock level.
    pub fn add_component(
        &mut self,
        kind: ComponentKind,
        raw_name: &str,
        quantity: Quantity,
    ) -> Result<(String, Quantity)> {
        let name = self.prepare_name(raw_name);
        let total = add_stock(&mut self.ledger, kind, &name, quantity)?;
        self.dirty = true;
        Ok((name, total))
    }

    pub fn sell(&mut self, name: &str, quantity: Quantity) -> Result<SaleOutcome> {
        let outcome = sell_stock(&mut self.ledger, name, quantity)?;
        if outcome.is_sold() {
            self.dirty = true;
        }
        Ok(outcome)
    }

    pub fn check(&self, name: &str) -> Option<Quantity> {
        check_quantity(&self.ledger, name)
    }

    /// Adds every quantity from `other` into this session's ledger.
    pub fn merge_from(&mut self, other: &Ledger) {
        if other.is_empty() {
            return;
        }
        self.ledger = merge_ledgers(&self.ledger, other);
        self.dirty = true;
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.ledger)?;
        self.dirty = false;
        Ok(())
    }
}
