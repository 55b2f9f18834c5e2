use crate::core::ledger::Ledger;
use crate::domain::model::{ComponentKind, Quantity, SaleOutcome};
use crate::utils::error::{Result, StoreError};

/// Parses a user-supplied amount. Zero, negatives and non-numbers are rejected.
pub fn parse_quantity(input: &str) -> Result<Quantity> {
    let trimmed = input.trim();
    match trimmed.parse::<i128>() {
        Ok(value) if value <= 0 => {
            Err(StoreError::invalid_quantity(trimmed, "amount must be positive"))
        }
        Ok(value) => Quantity::try_from(value)
            .map_err(|_| StoreError::invalid_quantity(trimmed, "amount is too large")),
        Err(_) => Err(StoreError::invalid_quantity(trimmed, "amount must be an integer")),
    }
}

fn ensure_positive(quantity: Quantity) -> Result<()> {
    if quantity == 0 {
        return Err(StoreError::invalid_quantity("0", "amount must be positive"));
    }
    Ok(())
}

/// Adds `quantity` units of `name`, creating the entry if needed.
///
/// `name` is checked against the grammar for `kind` as given; any suffix
/// normalization is the caller's job. Returns the new stock level.
pub fn add_stock(
    ledger: &mut Ledger,
    kind: ComponentKind,
    name: &str,
    quantity: Quantity,
) -> Result<Quantity> {
    ensure_positive(quantity)?;
    if !kind.validate(name) {
        tracing::warn!("Rejected {} name '{}'", kind, name);
        return Err(StoreError::InvalidName {
            kind,
            name: name.to_string(),
        });
    }

    let current = ledger.get(name).unwrap_or(0);
    let total = current.checked_add(quantity).ok_or_else(|| {
        StoreError::invalid_quantity(quantity.to_string(), "stock level would overflow")
    })?;
    ledger.insert(name, total);
    tracing::debug!("Added {} x '{}' (now {})", quantity, name, total);
    Ok(total)
}

/// The `NotFound` outcome for `name`, listing everything currently in stock.
pub fn not_found(ledger: &Ledger, name: &str) -> SaleOutcome {
    SaleOutcome::NotFound {
        name: name.to_string(),
        available: ledger.iter().map(|(n, q)| (n.to_string(), q)).collect(),
    }
}

/// Sells `quantity` units of `name`.
///
/// Unknown names and over-sells are reported as outcomes and leave the
/// ledger untouched.
pub fn sell_stock(ledger: &mut Ledger, name: &str, quantity: Quantity) -> Result<SaleOutcome> {
    ensure_positive(quantity)?;

    let Some(stock) = ledger.get(name) else {
        tracing::debug!("Sell request for unknown component '{}'", name);
        return Ok(not_found(ledger, name));
    };

    if stock < quantity {
        tracing::debug!("Cannot sell {} x '{}', only {} left", quantity, name, stock);
        return Ok(SaleOutcome::InsufficientStock {
            name: name.to_string(),
            requested: quantity,
            available: stock,
        });
    }

    let remaining = stock - quantity;
    ledger.insert(name, remaining);
    tracing::debug!("Sold {} x '{}' ({} left)", quantity, name, remaining);
    Ok(SaleOutcome::Sold {
        name: name.to_string(),
        quantity,
        remaining,
    })
}

pub fn check_quantity(ledger: &Ledger, name: &str) -> Option<Quantity> {
    ledger.get(name)
}

/// Names for which `predicate` holds, in ledger order.
pub fn list_by_prefix<F>(ledger: &Ledger, predicate: F) -> Vec<&str>
where
    F: Fn(&str) -> bool,
{
    ledger.names().filter(|name| predicate(name)).collect()
}
