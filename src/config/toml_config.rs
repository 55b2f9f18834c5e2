use crate::core::ConfigProvider;
use crate::utils::error::{Result, StoreError};
use crate::utils::paint::ColorMode;
use crate::utils::validation::{validate_extension, validate_one_of, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const DEFAULT_CONFIG_FILE: &str = "pc-stock.toml";
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.txt";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    pub inventory: Option<InventoryConfig>,
    pub validation: Option<ValidationConfig>,
    pub display: Option<DisplayConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryConfig {
    pub path: Option<String>,
    pub seed_if_missing: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub lowercase_suffix: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
}

impl StoreConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content)
            .map_err(|e| StoreError::config(format!("TOML parsing error: {}", e)))
    }

    /// The config file `load` reads: `explicit` when given, otherwise the
    /// default file if present.
    pub fn source(explicit: Option<&str>) -> Option<String> {
        match explicit {
            Some(path) => Some(path.to_string()),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Some(DEFAULT_CONFIG_FILE.to_string())
            }
            None => None,
        }
    }

    /// Loads `source(explicit)` (an explicit path must exist), otherwise
    /// built-in defaults. Does not log; callers report `source` themselves.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match Self::source(explicit) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        ENV_VAR
            .get_or_init(|| Regex::new(r"\$\{([^}]+)\}").unwrap())
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn set_inventory_path(&mut self, path: impl Into<String>) {
        self.inventory.get_or_insert_with(Default::default).path = Some(path.into());
    }

    pub fn set_seed_if_missing(&mut self, seed: bool) {
        self.inventory.get_or_insert_with(Default::default).seed_if_missing = Some(seed);
    }

    pub fn set_color(&mut self, mode: ColorMode) {
        self.display.get_or_insert_with(Default::default).color = Some(mode.as_str().to_string());
    }

    pub fn color_mode(&self) -> ColorMode {
        self.display
            .as_ref()
            .and_then(|d| d.color.as_deref())
            .and_then(ColorMode::parse)
            .unwrap_or_default()
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }
}

impl ConfigProvider for StoreConfig {
    fn inventory_path(&self) -> &str {
        self.inventory
            .as_ref()
            .and_then(|i| i.path.as_deref())
            .unwrap_or(DEFAULT_INVENTORY_FILE)
    }

    fn seed_if_missing(&self) -> bool {
        self.inventory
            .as_ref()
            .and_then(|i| i.seed_if_missing)
            .unwrap_or(true)
    }

    fn lowercase_suffix(&self) -> bool {
        self.validation
            .as_ref()
            .and_then(|v| v.lowercase_suffix)
            .unwrap_or(true)
    }
}

impl Validate for StoreConfig {
    fn validate(&self) -> Result<()> {
        validate_path(self.inventory_path())?;
        validate_extension(self.inventory_path(), "txt")?;

        if let Some(color) = self.display.as_ref().and_then(|d| d.color.as_deref()) {
            validate_one_of("display.color", color, &ColorMode::NAMES)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[inventory]
path = "stock/shop.txt"
seed_if_missing = false

[validation]
lowercase_suffix = false

[display]
color = "never"

[logging]
verbose = true
"#;

        let config = StoreConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.inventory_path(), "stock/shop.txt");
        assert!(!config.seed_if_missing());
        assert!(!config.lowercase_suffix());
        assert_eq!(config.color_mode(), ColorMode::Never);
        assert!(config.verbose());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = StoreConfig::from_toml_str("").unwrap();
        assert_eq!(config.inventory_path(), DEFAULT_INVENTORY_FILE);
        assert!(config.seed_if_missing());
        assert!(config.lowercase_suffix());
        assert_eq!(config.color_mode(), ColorMode::Auto);
        assert!(!config.verbose());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PC_STOCK_TEST_INVENTORY", "from-env.txt");

        let toml_content = r#"
[inventory]
path = "${PC_STOCK_TEST_INVENTORY}"
"#;

        let config = StoreConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.inventory_path(), "from-env.txt");

        std::env::remove_var("PC_STOCK_TEST_INVENTORY");
    }

    #[test]
    fn test_config_validation() {
        let config = StoreConfig::from_toml_str("[inventory]\npath = \"stock.csv\"\n").unwrap();
        assert!(config.validate().is_err());

        let config = StoreConfig::from_toml_str("[display]\ncolor = \"loud\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = StoreConfig::from_toml_str("[inventory\npath = 1").unwrap_err();
        assert!(matches!(err, StoreError::ConfigError { .. }));
    }

    #[test]
    fn test_overrides() {
        let mut config = StoreConfig::default();
        config.set_inventory_path("other.txt");
        config.set_seed_if_missing(false);
        config.set_color(ColorMode::Always);
        assert_eq!(config.inventory_path(), "other.txt");
        assert!(!config.seed_if_missing());
        assert_eq!(config.color_mode(), ColorMode::Always);
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[inventory]\npath = \"file-test.txt\"\n")
            .unwrap();

        let config = StoreConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.inventory_path(), "file-test.txt");
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        assert!(StoreConfig::load(Some("/nonexistent/pc-stock.toml")).is_err());
    }

    #[test]
    fn test_explicit_source_is_reported() {
        assert_eq!(
            StoreConfig::source(Some("custom.toml")).as_deref(),
            Some("custom.toml")
        );
    }
}
