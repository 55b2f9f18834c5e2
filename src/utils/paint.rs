use crossterm::style::Stylize;
use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Success,
    Warning,
    Error,
    Info,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub const NAMES: [&'static str; 3] = ["auto", "always", "never"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        }
    }

    /// Auto colors only when stdout is a terminal.
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Auto => std::io::stdout().is_terminal(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Applies semantic colors to menu output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(mode: ColorMode) -> Self {
        Self {
            enabled: mode.enabled(),
        }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn paint(&self, color: SemanticColor, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        match color {
            SemanticColor::Success => format!("{}", text.green()),
            SemanticColor::Warning => format!("{}", text.yellow()),
            SemanticColor::Error => format!("{}", text.red()),
            SemanticColor::Info => format!("{}", text.blue()),
        }
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(SemanticColor::Success, text)
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(SemanticColor::Warning, text)
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(SemanticColor::Error, text)
    }

    pub fn info(&self, text: &str) -> String {
        self.paint(SemanticColor::Info, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_painter_leaves_text_alone() {
        let painter = Painter::plain();
        assert_eq!(painter.warning("Component not found"), "Component not found");
    }

    #[test]
    fn always_mode_wraps_in_escape_codes() {
        let painter = Painter::new(ColorMode::Always);
        let painted = painter.success("PC Component Store");
        assert!(painted.contains("PC Component Store"));
        // crossterm drops escape codes entirely when NO_COLOR is set.
        if std::env::var_os("NO_COLOR").is_none() {
            assert!(painted.starts_with('\u{1b}'));
            assert_ne!(painter.error("x"), painter.info("x"));
        }
    }

    #[test]
    fn color_mode_names_round_trip() {
        for name in ColorMode::NAMES {
            assert_eq!(ColorMode::parse(name).unwrap().as_str(), name);
        }
        assert_eq!(ColorMode::parse("loud"), None);
    }
}
