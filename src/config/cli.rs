use crate::config::toml_config::StoreConfig;
use crate::domain::model::ComponentKind;
use crate::utils::paint::ColorMode;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "pc-stock")]
#[command(about = "CPU and GPU stock ledger for a small computer-parts shop")]
pub struct CliConfig {
    /// Path to TOML configuration file (defaults to ./pc-stock.toml when present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Inventory file, overrides the configuration
    #[arg(short, long)]
    pub inventory: Option<String>,

    /// Do not create a starter inventory when the file is missing
    #[arg(long)]
    pub no_seed: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Interactive menu (default)
    Menu,
    /// List stock, optionally for one component family
    List {
        #[arg(long, value_enum)]
        kind: Option<ComponentKind>,
        /// Print the ledger as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add units of a CPU or GPU and save
    Add {
        #[arg(value_enum)]
        kind: ComponentKind,
        name: String,
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },
    /// Sell units of a component and save
    Sell {
        name: String,
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },
    /// Show the quantity of one component
    Check { name: String },
    /// Add the quantities of another inventory file
    Merge {
        other: String,
        /// Write the merged ledger back to the inventory file
        #[arg(long)]
        save: bool,
    },
    /// Write the starter inventory if the file does not exist
    Seed,
}

impl CliConfig {
    /// Command-line flags take precedence over the configuration file.
    pub fn apply_overrides(&self, config: &mut StoreConfig) {
        if let Some(path) = &self.inventory {
            config.set_inventory_path(path.clone());
            tracing::debug!("🔧 Inventory path overridden to: {}", path);
        }
        if self.no_seed {
            config.set_seed_if_missing(false);
        }
        if self.no_color {
            config.set_color(ColorMode::Never);
        }
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Menu)
    }
}
