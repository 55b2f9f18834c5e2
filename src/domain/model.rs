use serde::{Deserialize, Serialize};
use std::fmt;

/// Units in stock for one component.
pub type Quantity = u64;

/// The grammar family a component name is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Cpu,
    Gpu,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 2] = [ComponentKind::Cpu, ComponentKind::Gpu];

    /// Case-insensitive parse of `"cpu"` / `"gpu"`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cpu" => Some(ComponentKind::Cpu),
            "gpu" => Some(ComponentKind::Gpu),
            _ => None,
        }
    }

    pub fn validate(self, name: &str) -> bool {
        match self {
            ComponentKind::Cpu => crate::core::validators::validate_cpu(name),
            ComponentKind::Gpu => crate::core::validators::validate_gpu(name),
        }
    }

    /// Loose shape check used for display. Does not run the strict grammar.
    pub fn looks_like(self, name: &str) -> bool {
        let prefixes: &[&str] = match self {
            ComponentKind::Cpu => &["Ryzen", "Core"],
            ComponentKind::Gpu => &["RTX", "GTX", "RX"],
        };
        prefixes.iter().any(|p| name.starts_with(p))
    }

    pub fn examples(self) -> &'static str {
        match self {
            ComponentKind::Cpu => "'Ryzen 5600X', 'Core i5-12400K'",
            ComponentKind::Gpu => "'RTX 3060', 'RX 6800 XT'",
        }
    }

    pub fn name_hint(self) -> &'static str {
        match self {
            ComponentKind::Cpu => "Ryzen XXXX or Core iX-XXXX",
            ComponentKind::Gpu => "RTX/GTX XXXX or RX XXXX XT",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentKind::Cpu => write!(f, "CPU"),
            ComponentKind::Gpu => write!(f, "GPU"),
        }
    }
}

/// Result of a sell request. Only `Sold` mutates the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SaleOutcome {
    Sold {
        name: String,
        quantity: Quantity,
        remaining: Quantity,
    },
    NotFound {
        name: String,
        available: Vec<(String, Quantity)>,
    },
    InsufficientStock {
        name: String,
        requested: Quantity,
        available: Quantity,
    },
}

impl SaleOutcome {
    pub fn is_sold(&self) -> bool {
        matches!(self, SaleOutcome::Sold { .. })
    }
}

impl fmt::Display for SaleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaleOutcome::Sold { name, quantity, .. } => write!(f, "Sold {} {}", quantity, name),
            SaleOutcome::NotFound { .. } => {
                write!(f, "Component not found. Please check the list above.")
            }
            SaleOutcome::InsufficientStock {
                name, available, ..
            } => write!(f, "Not enough stock for {}. Available: {}", name, available),
        }
    }
}
