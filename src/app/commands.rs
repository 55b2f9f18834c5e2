use crate::adapters::TextFileStore;
use crate::app::menu::write_outcome;
use crate::config::cli::Command;
use crate::core::inventory::parse_quantity;
use crate::core::ledger::Ledger;
use crate::core::store::Inventory;
use crate::core::{ComponentKind, LedgerStore};
use crate::utils::error::Result;
use crate::utils::paint::Painter;
use std::io::Write;

/// Runs one non-interactive command. Mutating commands save before returning.
///
/// `Menu` and `Seed` are handled by the binary and are no-ops here.
pub fn execute<S: LedgerStore, W: Write>(
    inventory: &mut Inventory<S>,
    command: &Command,
    out: &mut W,
    painter: &Painter,
) -> Result<()> {
    match command {
        Command::Menu | Command::Seed => {}
        Command::List { kind, json } => list(inventory, *kind, *json, out)?,
        Command::Add {
            kind,
            name,
            quantity,
        } => {
            let quantity = parse_quantity(quantity)?;
            let (stored, total) = inventory.add_component(*kind, name, quantity)?;
            inventory.save()?;
            writeln!(out, "Added {} units of {} (now {})", quantity, stored, total)?;
        }
        Command::Sell { name, quantity } => {
            let quantity = parse_quantity(quantity)?;
            let outcome = inventory.sell(name, quantity)?;
            if outcome.is_sold() {
                inventory.save()?;
            }
            write_outcome(out, painter, &outcome)?;
        }
        Command::Check { name } => {
            let shown = match inventory.check(name) {
                Some(quantity) => quantity.to_string(),
                None => painter.warning("Component not found"),
            };
            writeln!(out, "Available quantity: {}", shown)?;
        }
        Command::Merge { other, save } => {
            let other_store = TextFileStore::open(other)?;
            let other_ledger = other_store.load()?;
            inventory.merge_from(&other_ledger);
            writeln!(
                out,
                "Merged {} entries from {} ({} units in stock)",
                other_ledger.len(),
                other,
                inventory.ledger().total_units()
            )?;
            if *save {
                inventory.save()?;
                let saved = format!("Inventory saved to {}", inventory.store().describe());
                writeln!(out, "{}", painter.info(&saved))?;
            }
        }
    }
    Ok(())
}

fn list<S: LedgerStore, W: Write>(
    inventory: &Inventory<S>,
    kind: Option<ComponentKind>,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let kinds: Vec<ComponentKind> = match kind {
        Some(kind) => vec![kind],
        None => ComponentKind::ALL.to_vec(),
    };

    if json {
        let selected: Ledger = kinds
            .iter()
            .flat_map(|k| inventory.list(*k))
            .map(|name| (name, inventory.check(name).unwrap_or(0)))
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&selected)?)?;
        return Ok(());
    }

    for kind in kinds {
        writeln!(out, "Available {}s:", kind)?;
        for name in inventory.list(kind) {
            writeln!(out, "- {} (Stock: {})", name, inventory.check(name).unwrap_or(0))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;
    use crate::core::store::InventoryOptions;
    use crate::utils::error::StoreError;

    fn inventory(content: &str) -> Inventory<MemoryStore> {
        Inventory::open(MemoryStore::with_content(content), InventoryOptions::default()).unwrap()
    }

    fn exec(inventory: &mut Inventory<MemoryStore>, command: Command) -> Result<String> {
        let mut out = Vec::new();
        execute(inventory, &command, &mut out, &Painter::plain())?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_add_saves_immediately() {
        let mut inv = inventory("");
        let output = exec(
            &mut inv,
            Command::Add {
                kind: ComponentKind::Gpu,
                name: "RTX 4090".to_string(),
                quantity: "2".to_string(),
            },
        )
        .unwrap();
        assert_eq!(output, "Added 2 units of RTX 4090 (now 2)\n");
        assert_eq!(inv.store().content().as_deref(), Some("RTX 4090:2\n"));
    }

    #[test]
    fn test_add_rejects_bad_quantity() {
        let mut inv = inventory("");
        let err = exec(
            &mut inv,
            Command::Add {
                kind: ComponentKind::Gpu,
                name: "RTX 4090".to_string(),
                quantity: "-2".to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::InvalidQuantity { .. }));
        assert_eq!(inv.store().content(), Some(String::new()));
    }

    #[test]
    fn test_sell_missing_does_not_save() {
        let mut inv = inventory("RTX 3060:5");
        let output = exec(
            &mut inv,
            Command::Sell {
                name: "Missing".to_string(),
                quantity: "1".to_string(),
            },
        )
        .unwrap();
        assert!(output.contains("- RTX 3060 (Stock: 5)"));
        assert_eq!(inv.store().content().as_deref(), Some("RTX 3060:5"));
    }

    #[test]
    fn test_list_json_filters_by_kind() {
        let mut inv = inventory("Ryzen 5600X:10\nRTX 3060:5\nMystery:1");
        let output = exec(
            &mut inv,
            Command::List {
                kind: Some(ComponentKind::Gpu),
                json: true,
            },
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value, serde_json::json!({"RTX 3060": 5}));
    }

    #[test]
    fn test_merge_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let other = dir.path().join("delivery.txt");
        std::fs::write(&other, "Ryzen 5600X:10\nRTX 3060:2\n").unwrap();

        let mut inv = inventory("Ryzen 5600X:10");
        let output = exec(
            &mut inv,
            Command::Merge {
                other: other.display().to_string(),
                save: true,
            },
        )
        .unwrap();

        assert!(output.starts_with("Merged 2 entries from"));
        assert!(output.contains("(22 units in stock)"));
        assert!(output.contains("Inventory saved to <memory>"));
        assert_eq!(
            inv.store().content().as_deref(),
            Some("RTX 3060:2\nRyzen 5600X:20\n")
        );
    }

    #[test]
    fn test_list_text() {
        let mut inv = inventory("Ryzen 5600X:10\nRTX 3060:5");
        let output = exec(&mut inv, Command::List { kind: None, json: false }).unwrap();
        assert_eq!(
            output,
            "Available CPUs:\n- Ryzen 5600X (Stock: 10)\nAvailable GPUs:\n- RTX 3060 (Stock: 5)\n"
        );
    }
}
