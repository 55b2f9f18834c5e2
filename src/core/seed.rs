use crate::adapters::TextFile;
use crate::utils::error::Result;

/// Starter stock written when no inventory file exists yet.
pub const SEED_ENTRIES: [&str; 12] = [
    "Ryzen 5600X:10",
    "Ryzen 5800X:8",
    "Ryzen 5950X:5",
    "Core i5-12400:12",
    "Core i7-12700K:7",
    "Core i9-12900KS:3",
    "RTX 3060:15",
    "RTX 3070:9",
    "RTX 3080:6",
    "RX 6600 XT:11",
    "RX 6800 XT:8",
    "RX 6900 XT:4",
];

/// Writes the seed entries unless the file already exists. Returns whether it wrote.
pub fn ensure_seeded(file: &TextFile) -> Result<bool> {
    if file.exists() {
        tracing::debug!("{} already exists, skipping seed", file.path().display());
        return Ok(false);
    }
    TextFile::create_from_lines(&SEED_ENTRIES, file.path())?;
    tracing::info!("🌱 Seeded {} with {} entries", file.path().display(), SEED_ENTRIES.len());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ledger::Ledger;
    use crate::domain::model::ComponentKind;
    use tempfile::TempDir;

    #[test]
    fn seed_parses_into_three_of_each_family() {
        let ledger = Ledger::parse(&SEED_ENTRIES.join("\n")).unwrap();
        assert_eq!(ledger.len(), 12);
        let cpus = ledger.names().filter(|n| ComponentKind::Cpu.looks_like(n)).count();
        let gpus = ledger.names().filter(|n| ComponentKind::Gpu.looks_like(n)).count();
        assert_eq!((cpus, gpus), (6, 6));
    }

    #[test]
    fn ensure_seeded_only_writes_once() {
        let dir = TempDir::new().unwrap();
        let file = TextFile::new(dir.path().join("inventory.txt")).unwrap();

        assert!(ensure_seeded(&file).unwrap());
        std::fs::write(file.path(), "RTX 3060:1").unwrap();
        assert!(!ensure_seeded(&file).unwrap());
        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "RTX 3060:1");
    }
}
