use crate::core::ledger::Ledger;
use crate::core::LedgerStore;
use crate::utils::error::Result;
use crate::utils::validation::{validate_extension, validate_path};
use std::fmt;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A `.txt` file on local disk. The suffix is checked once, at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFile {
    path: PathBuf,
}

impl TextFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let display = path.as_ref().to_string_lossy();
        validate_path(&display)?;
        validate_extension(&display, "txt")?;
        Ok(Self {
            path: path.as_ref().to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Whole file contents, or `None` when the file does not exist.
    pub fn read_to_string(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Trimmed lines. A missing file has no lines.
    pub fn read_lines(&self) -> Result<Vec<String>> {
        Ok(self
            .read_to_string()?
            .map(|content| content.lines().map(|l| l.trim().to_string()).collect())
            .unwrap_or_default())
    }

    /// Replaces the file through a temporary sibling and a rename.
    ///
    /// An existing target keeps its permissions, and a symlinked target is
    /// written through so the link itself survives.
    pub fn write_atomic(&self, content: &str) -> Result<()> {
        let target = match fs::symlink_metadata(&self.path) {
            Ok(meta) if meta.file_type().is_symlink() => fs::canonicalize(&self.path)?,
            _ => self.path.clone(),
        };
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut temp = NamedTempFile::new_in(&dir)?;
        temp.write_all(content.as_bytes())?;
        temp.flush()?;
        match fs::metadata(&target) {
            Ok(meta) => temp.as_file().set_permissions(meta.permissions())?,
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        temp.persist(&target).map_err(|e| e.error)?;
        Ok(())
    }

    /// This file's lines followed by `other`'s, newline separated.
    pub fn concatenate_contents(&self, other: &TextFile) -> Result<String> {
        Ok(format!(
            "{}\n{}",
            self.read_lines()?.join("\n"),
            other.read_lines()?.join("\n")
        ))
    }

    pub fn concat_files(files: &[TextFile]) -> Result<String> {
        let contents = files
            .iter()
            .map(|f| f.read_lines().map(|lines| lines.join("\n")))
            .collect::<Result<Vec<_>>>()?;
        Ok(contents.join("\n"))
    }

    /// Writes `lines` joined by newlines (no trailing newline) and returns the handle.
    pub fn create_from_lines<S: AsRef<str>, P: AsRef<Path>>(lines: &[S], path: P) -> Result<Self> {
        let file = Self::new(path)?;
        let content = lines
            .iter()
            .map(|line| line.as_ref())
            .collect::<Vec<&str>>()
            .join("\n");
        file.write_atomic(&content)?;
        Ok(file)
    }
}

impl fmt::Display for TextFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextFile for {}", self.path.display())
    }
}

/// Ledger persisted as `name:quantity` lines in a text file.
#[derive(Debug, Clone)]
pub struct TextFileStore {
    file: TextFile,
}

impl TextFileStore {
    pub fn new(file: TextFile) -> Self {
        Self { file }
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(TextFile::new(path)?))
    }

    pub fn file(&self) -> &TextFile {
        &self.file
    }
}

impl LedgerStore for TextFileStore {
    fn load(&self) -> Result<Ledger> {
        let Some(content) = self.file.read_to_string()? else {
            tracing::info!(
                "📭 {} does not exist yet, starting with an empty ledger",
                self.file.path().display()
            );
            return Ok(Ledger::new());
        };
        let ledger = Ledger::parse(&content)?;
        tracing::info!("📂 Loaded {} entries from {}", ledger.len(), self.file.path().display());
        Ok(ledger)
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        self.file.write_atomic(&ledger.serialize())?;
        tracing::info!("💾 Saved {} entries to {}", ledger.len(), self.file.path().display());
        Ok(())
    }

    fn describe(&self) -> String {
        self.file.path().display().to_string()
    }
}
