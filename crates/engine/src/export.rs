use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A rendered text report together with the name it is downloaded under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedReport {
    pub filename: String,
    pub contents: String,
}

impl ExportedReport {
    /// Writes the report into `dir`, replacing any previous download of the
    /// same name, and returns the written path.
    pub fn write_to(&self, dir: &Path) -> io::Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.filename);
        fs::write(&path, &self.contents)?;
        tracing::info!(path = %path.display(), bytes = self.contents.len(), "Report written.");
        Ok(path)
    }
}
