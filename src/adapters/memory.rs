use crate::core::ledger::Ledger;
use crate::core::LedgerStore;
use crate::utils::error::Result;
use std::cell::RefCell;

/// Keeps the serialized ledger in memory. `None` behaves like a missing file.
#[derive(Debug, Default)]
pub struct MemoryStore {
    content: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: RefCell::new(Some(content.into())),
        }
    }

    pub fn content(&self) -> Option<String> {
        self.content.borrow().clone()
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> Result<Ledger> {
        match self.content.borrow().as_deref() {
            Some(text) => Ledger::parse(text),
            None => Ok(Ledger::new()),
        }
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        *self.content.borrow_mut() = Some(ledger.serialize());
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
