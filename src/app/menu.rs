use crate::core::inventory::{not_found, parse_quantity};
use crate::core::store::Inventory;
use crate::core::{ComponentKind, LedgerStore, SaleOutcome};
use crate::utils::error::{Result, StoreError};
use crate::utils::paint::Painter;
use std::io::{BufRead, Write};

const RULE: &str = "========================================";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    /// Option 6: the ledger was saved.
    Saved,
    /// Input ran out before the user chose to exit. Nothing was saved.
    EndOfInput,
}

/// The six-option interactive store menu.
pub struct MenuSession<R: BufRead, W: Write, S: LedgerStore> {
    inventory: Inventory<S>,
    input: R,
    output: W,
    painter: Painter,
}

impl<R: BufRead, W: Write, S: LedgerStore> MenuSession<R, W, S> {
    pub fn new(inventory: Inventory<S>, input: R, output: W, painter: Painter) -> Self {
        Self {
            inventory,
            input,
            output,
            painter,
        }
    }

    pub fn into_parts(self) -> (Inventory<S>, W) {
        (self.inventory, self.output)
    }

    pub fn run(&mut self) -> Result<MenuExit> {
        let source = format!("Inventory: {}", self.inventory.store().describe());
        writeln!(self.output, "{}", self.painter.info(&source))?;

        loop {
            self.print_banner()?;

            let Some(choice) = self.prompt("\nEnter your choice (1-6): ")? else {
                if self.inventory.is_dirty() {
                    tracing::warn!("⚠️ Input closed with unsaved changes, nothing written");
                }
                return Ok(MenuExit::EndOfInput);
            };

            let finished = match choice.trim() {
                "1" => self.show_stock(ComponentKind::Cpu).map(|_| false)?,
                "2" => self.show_stock(ComponentKind::Gpu).map(|_| false)?,
                "3" => self.add_component()?,
                "4" => self.sell_component()?,
                "5" => self.check_quantity()?,
                "6" => {
                    self.inventory.save()?;
                    writeln!(self.output, "Inventory saved. Exiting store.")?;
                    return Ok(MenuExit::Saved);
                }
                other => {
                    tracing::debug!("Unknown menu choice '{}'", other);
                    let line = self
                        .painter
                        .error("Invalid choice. Please enter a number between 1-6.");
                    writeln!(self.output, "{}", line)?;
                    false
                }
            };

            if finished {
                return Ok(MenuExit::EndOfInput);
            }
        }
    }

    fn print_banner(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}", RULE)?;
        writeln!(self.output, "{}", self.painter.success("PC Component Store Inventory System"))?;
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "1. CPU Components")?;
        writeln!(self.output, "2. GPU Components")?;
        writeln!(self.output, "3. Add New Component")?;
        writeln!(self.output, "4. Sell Component")?;
        writeln!(self.output, "5. Check Component Quantity")?;
        writeln!(self.output, "6. Exit Store")?;
        Ok(())
    }

    /// `None` once input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn show_stock(&mut self, kind: ComponentKind) -> Result<()> {
        writeln!(self.output, "\nAvailable {}s:", kind)?;
        for name in self.inventory.list(kind) {
            let quantity = self.inventory.check(name).unwrap_or(0);
            writeln!(self.output, "- {} (Stock: {})", name, quantity)?;
        }
        Ok(())
    }

    /// Returns `true` when input ran out mid-dialog.
    fn add_component(&mut self) -> Result<bool> {
        let Some(answer) = self.prompt("Add CPU or GPU? ")? else {
            return Ok(true);
        };
        let Some(kind) = ComponentKind::parse(&answer) else {
            let line = self.painter.error("Invalid component type. Please enter 'CPU' or 'GPU'");
            writeln!(self.output, "{}", line)?;
            return Ok(false);
        };

        let name = loop {
            let text = format!("Enter {} name ({}): ", kind, kind.name_hint());
            let Some(raw) = self.prompt(&text)? else {
                return Ok(true);
            };
            let name = self.inventory.prepare_name(&raw);
            if kind.validate(&name) {
                break name;
            }
            let line = self
                .painter
                .error(&format!("Invalid {} format. Examples: {}", kind, kind.examples()));
            writeln!(self.output, "{}", line)?;
        };

        let Some(quantity) = self.read_quantity("Enter amount to add: ")? else {
            return Ok(true);
        };

        match self.inventory.add_component(kind, &name, quantity) {
            Ok((stored, _)) => {
                writeln!(self.output, "Added {} units of {}", quantity, stored)?;
            }
            Err(e @ StoreError::InvalidQuantity { .. }) => {
                writeln!(self.output, "{}", self.painter.error(&e.user_friendly_message()))?;
            }
            Err(e) => return Err(e),
        }
        Ok(false)
    }

    fn sell_component(&mut self) -> Result<bool> {
        let Some(name) = self.prompt("Enter component to sell: ")? else {
            return Ok(true);
        };

        if self.inventory.check(&name).is_none() {
            let outcome = not_found(self.inventory.ledger(), &name);
            self.print_outcome(&outcome)?;
            return Ok(false);
        }

        let Some(quantity) =
            self.read_quantity(&format!("How many units of {} do you want to sell? ", name))?
        else {
            return Ok(true);
        };

        let outcome = self.inventory.sell(&name, quantity)?;
        self.print_outcome(&outcome)?;
        Ok(false)
    }

    fn check_quantity(&mut self) -> Result<bool> {
        let Some(name) = self.prompt("Enter component name: ")? else {
            return Ok(true);
        };
        let shown = match self.inventory.check(&name) {
            Some(quantity) => quantity.to_string(),
            None => self.painter.warning("Component not found"),
        };
        writeln!(self.output, "Available quantity: {}", shown)?;
        Ok(false)
    }

    /// Re-prompts until a positive integer is entered.
    fn read_quantity(&mut self, text: &str) -> Result<Option<u64>> {
        loop {
            let Some(raw) = self.prompt(text)? else {
                return Ok(None);
            };
            match parse_quantity(&raw) {
                Ok(quantity) => return Ok(Some(quantity)),
                Err(StoreError::InvalidQuantity { reason, .. }) => {
                    let message = format!("Amount {}.", reason.trim_start_matches("amount "));
                    let line = self.painter.error(&message);
                    writeln!(self.output, "{}", line)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn print_outcome(&mut self, outcome: &SaleOutcome) -> Result<()> {
        write_outcome(&mut self.output, &self.painter, outcome)
    }
}

/// Renders a sale outcome the way both the menu and the `sell` command show it.
pub fn write_outcome<W: Write>(
    out: &mut W,
    painter: &Painter,
    outcome: &SaleOutcome,
) -> Result<()> {
    match outcome {
        SaleOutcome::Sold { .. } => writeln!(out, "{}", outcome)?,
        SaleOutcome::NotFound { name, available } => {
            let header = format!("{} not found in inventory. Available components:", name);
            writeln!(out, "{}", painter.warning(&header))?;
            for (item, quantity) in available {
                writeln!(out, "- {} (Stock: {})", item, quantity)?;
            }
            writeln!(out, "{}", outcome)?;
        }
        SaleOutcome::InsufficientStock { .. } => {
            writeln!(out, "{}", painter.warning(&outcome.to_string()))?;
        }
    }
    Ok(())
}
