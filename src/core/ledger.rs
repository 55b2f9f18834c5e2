use crate::domain::model::Quantity;
use crate::utils::error::{Result, StoreError};
use serde::Serialize;
use std::collections::BTreeMap;

/// In-memory stock ledger: component name to quantity.
///
/// Names are kept in ascending order. The on-disk format does not depend on
/// that order; it only makes listings and saved files deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ledger {
    entries: BTreeMap<String, Quantity>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the `name:quantity` line format.
    ///
    /// Blank lines and lines without `:` are skipped. Each remaining line is
    /// split on its first `:`; a quantity that is not a non-negative integer
    /// fails the whole parse with [`StoreError::MalformedEntry`]. When a name
    /// repeats, the last line wins.
    pub fn parse(text: &str) -> Result<Self> {
        let mut ledger = Ledger::new();
        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let Some((name, quantity)) = line.split_once(':') else {
                tracing::debug!("Skipping line {} without separator", index + 1);
                continue;
            };
            let quantity: Quantity =
                quantity
                    .trim()
                    .parse()
                    .map_err(|_| StoreError::MalformedEntry {
                        line_number: index + 1,
                        line: line.to_string(),
                    })?;
            if ledger.entries.insert(name.to_string(), quantity).is_some() {
                tracing::warn!(
                    "Duplicate entry for '{}' on line {}, keeping the later one",
                    name,
                    index + 1
                );
            }
        }
        Ok(ledger)
    }

    /// Renders every entry as `name:quantity\n`.
    pub fn serialize(&self) -> String {
        self.entries
            .iter()
            .map(|(name, quantity)| format!("{}:{}\n", name, quantity))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<Quantity> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, quantity: Quantity) -> Option<Quantity> {
        self.entries.insert(name.into(), quantity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Quantity)> {
        self.entries.iter().map(|(name, quantity)| (name.as_str(), *quantity))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_units(&self) -> Quantity {
        self.entries.values().fold(0, |acc, q| acc.saturating_add(*q))
    }
}

impl<N: Into<String>> FromIterator<(N, Quantity)> for Ledger {
    fn from_iter<I: IntoIterator<Item = (N, Quantity)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(n, q)| (n.into(), q)).collect(),
        }
    }
}

/// Sums two ledgers key by key into a new ledger. Neither input changes.
pub fn merge_ledgers(a: &Ledger, b: &Ledger) -> Ledger {
    let mut combined = a.clone();
    for (name, quantity) in b.iter() {
        let slot = combined.entries.entry(name.to_string()).or_insert(0);
        *slot = slot.saturating_add(quantity);
    }
    tracing::debug!(
        "Merged ledgers of {} and {} entries into {}",
        a.len(),
        b.len(),
        combined.len()
    );
    combined
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger(entries: &[(&str, Quantity)]) -> Ledger {
        entries.iter().map(|(n, q)| (*n, *q)).collect()
    }

    #[test]
    fn parse_skips_blank_and_separatorless_lines() {
        let parsed = Ledger::parse("Ryzen 5600X:10\n\nheader line\n  RTX 3060:5  \n").unwrap();
        assert_eq!(parsed, ledger(&[("Ryzen 5600X", 10), ("RTX 3060", 5)]));
    }

    #[test]
    fn parse_rejects_non_integer_quantity() {
        let err = Ledger::parse("RTX 3060:5\nRyzen 5600X:abc\n").unwrap_err();
        match err {
            StoreError::MalformedEntry { line_number, line } => {
                assert_eq!(line_number, 2);
                assert_eq!(line, "Ryzen 5600X:abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_negative_quantity() {
        assert!(matches!(
            Ledger::parse("RTX 3060:-1"),
            Err(StoreError::MalformedEntry { .. })
        ));
    }

    #[test]
    fn parse_splits_on_first_colon() {
        // "b:3" is not a number, so the line is malformed rather than truncated.
        assert!(matches!(
            Ledger::parse("a:b:3"),
            Err(StoreError::MalformedEntry { .. })
        ));
    }

    #[test]
    fn parse_last_duplicate_wins() {
        let parsed = Ledger::parse("RTX 3060:5\nRTX 3060:2\n").unwrap();
        assert_eq!(parsed.get("RTX 3060"), Some(2));
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn serialize_writes_one_line_per_entry() {
        let l = ledger(&[("RTX 3060", 5), ("Ryzen 5600X", 10)]);
        assert_eq!(l.serialize(), "RTX 3060:5\nRyzen 5600X:10\n");
        assert_eq!(Ledger::new().serialize(), "");
    }

    #[test]
    fn merge_sums_quantities() {
        let a = ledger(&[("Ryzen 5600X", 10)]);
        let b = ledger(&[("Ryzen 5600X", 10)]);
        assert_eq!(merge_ledgers(&a, &b), ledger(&[("Ryzen 5600X", 20)]));
    }

    #[test]
    fn merge_treats_absence_as_zero_and_keeps_inputs() {
        let a = ledger(&[("RTX 3060", 1), ("RTX 3070", 2)]);
        let b = ledger(&[("RTX 3070", 3), ("RX 6600 XT", 4)]);
        let merged = merge_ledgers(&a, &b);
        assert_eq!(
            merged,
            ledger(&[("RTX 3060", 1), ("RTX 3070", 5), ("RX 6600 XT", 4)])
        );
        assert_eq!(a.get("RTX 3070"), Some(2));
        assert_eq!(b.len(), 2);
    }
}
