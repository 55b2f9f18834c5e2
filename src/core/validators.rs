use regex::Regex;
use std::sync::OnceLock;

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).unwrap())
}

fn ryzen() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"^Ryzen \d{4}X$")
}

fn intel() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"^Core i[3579]-\d{4,5}[kfst]?$")
}

fn nvidia() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"^(RTX|GTX) \d{4}$")
}

fn amd_gpu() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"^RX \d{4} XT$")
}

fn trailing_letters() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"[A-Za-z]+$")
}

/// `Ryzen <4 digits>X` or `Core i{3,5,7,9}-<4-5 digits>` with an optional
/// lower-case `k`, `f`, `s` or `t` suffix.
pub fn validate_cpu(name: &str) -> bool {
    ryzen().is_match(name) || intel().is_match(name)
}

/// `RTX|GTX <4 digits>` or `RX <4 digits> XT`.
pub fn validate_gpu(name: &str) -> bool {
    nvidia().is_match(name) || amd_gpu().is_match(name)
}

/// Lower-cases the trailing run of ASCII letters.
///
/// Applied to every candidate name regardless of kind, so upper-case suffixes
/// required by a grammar (`Ryzen 5600X`, `RX 6800 XT`) stop matching once
/// normalized.
pub fn normalize_suffix(name: &str) -> String {
    match trailing_letters().find(name) {
        Some(m) => format!("{}{}", &name[..m.start()], m.as_str().to_ascii_lowercase()),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_grammar() {
        assert!(validate_cpu("Ryzen 5600X"));
        assert!(!validate_cpu("Ryzen5600X"));
        assert!(!validate_cpu("Ryzen 5600x"));
        assert!(!validate_cpu("Ryzen 560X"));
        assert!(validate_cpu("Core i5-12400"));
        assert!(validate_cpu("Core i5-12400k"));
        assert!(validate_cpu("Core i3-1200t"));
        assert!(!validate_cpu("Core i5-12400K"));
        assert!(!validate_cpu("Core i5 12400"));
        assert!(!validate_cpu("Core i4-12400"));
        assert!(!validate_cpu("Core i9-12900ks"));
        assert!(!validate_cpu("Core i7-123456"));
        assert!(!validate_cpu("Invalid"));
    }

    #[test]
    fn test_gpu_grammar() {
        assert!(validate_gpu("RTX 3060"));
        assert!(validate_gpu("GTX 1080"));
        assert!(validate_gpu("RX 6800 XT"));
        assert!(!validate_gpu("RTX3060"));
        assert!(!validate_gpu("RX6800XT"));
        assert!(!validate_gpu("RX 6800 xt"));
        assert!(!validate_gpu("RTX 3060 Ti"));
        assert!(!validate_gpu("Invalid"));
    }

    #[test]
    fn test_normalize_suffix() {
        assert_eq!(normalize_suffix("Core i5-12400K"), "Core i5-12400k");
        assert_eq!(normalize_suffix("Core i9-12900KS"), "Core i9-12900ks");
        assert_eq!(normalize_suffix("RTX 3060"), "RTX 3060");
        assert_eq!(normalize_suffix("RX 6800 XT"), "RX 6800 xt");
        assert_eq!(normalize_suffix("Invalid"), "invalid");
        assert_eq!(normalize_suffix(""), "");
    }

    #[test]
    fn test_normalization_breaks_uppercase_suffixes() {
        assert!(!validate_gpu(&normalize_suffix("RX 6800 XT")));
        assert!(!validate_cpu(&normalize_suffix("Ryzen 5600X")));
        assert!(validate_cpu(&normalize_suffix("Core i7-12700K")));
    }
}
