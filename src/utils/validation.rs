use crate::utils::error::{Result, StoreError};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(StoreError::InvalidPath {
            path: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(StoreError::InvalidPath {
            path: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_extension(path: &str, allowed_extension: &str) -> Result<()> {
    match Path::new(path).extension().and_then(|ext| ext.to_str()) {
        Some(extension) if extension == allowed_extension => Ok(()),
        Some(extension) => Err(StoreError::InvalidPath {
            path: path.to_string(),
            reason: format!(
                "Unsupported file extension: {}. File must be a .{} file",
                extension, allowed_extension
            ),
        }),
        None => Err(StoreError::InvalidPath {
            path: path.to_string(),
            reason: format!("File must be a .{} file", allowed_extension),
        }),
    }
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(StoreError::config(format!(
            "{} = '{}' is not supported. Valid values: {}",
            field_name,
            value,
            allowed.join(", ")
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("inventory.txt").is_ok());
        assert!(validate_path("").is_err());
        assert!(validate_path("   ").is_err());
        assert!(validate_path("bad\0.txt").is_err());
    }

    #[test]
    fn test_validate_extension() {
        assert!(validate_extension("inventory.txt", "txt").is_ok());
        assert!(validate_extension("dir/stock.txt", "txt").is_ok());
        assert!(validate_extension("inventory.csv", "txt").is_err());
        assert!(validate_extension("inventory", "txt").is_err());
        assert!(validate_extension(".txt", "txt").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("display.color", "auto", &["auto", "never"]).is_ok());
        assert!(validate_one_of("display.color", "loud", &["auto", "never"]).is_err());
    }
}
