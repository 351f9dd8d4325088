//! File-system collaborators that generated artifacts are written to.

use std::{
    collections::{BTreeMap, BTreeSet},
    fs::{self, Permissions},
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::{GenerationError, Result};

/// Destination for generated output.
///
/// Directory creation must be idempotent and writes must replace the
/// whole file.
pub trait Sink {
    /// Create a directory and all of its parents.
    fn create_dir_all(&mut self, dir: &Path) -> Result<()>;

    /// Check whether a file already exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Write `content` to `path`, replacing any previous content.
    fn write(&mut self, path: &Path, content: &str) -> Result<()>;
}

/// Sink backed by the local file system.
///
/// Files are written to a temporary file in the target directory and then
/// renamed into place, so readers never observe a half-written artifact.
/// The replacement keeps the permissions of the file it replaces; new files
/// get `0o644` on unix.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSink;

impl FsSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for FsSink {
    fn create_dir_all(&mut self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir).map_err(|e| GenerationError::create_dir(dir, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn write(&mut self, path: &Path, content: &str) -> Result<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| GenerationError::write(path, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| GenerationError::write(path, e))?;
        if let Some(permissions) = target_permissions(path) {
            tmp.as_file()
                .set_permissions(permissions)
                .map_err(|e| GenerationError::write(path, e))?;
        }
        tmp.persist(path)
            .map_err(|e| GenerationError::write(path, e.error))?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(())
    }
}

fn target_permissions(path: &Path) -> Option<Permissions> {
    match fs::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(_) => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;

    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}

/// In-memory sink, used for previews and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the content written to `path`, if any.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    /// All written files, ordered by path.
    pub fn files(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.files
            .iter()
            .map(|(path, content)| (path.as_path(), content.as_str()))
    }

    /// Whether `dir` was created.
    pub fn has_dir(&self, dir: impl AsRef<Path>) -> bool {
        self.dirs.contains(dir.as_ref())
    }
}

impl Sink for MemorySink {
    fn create_dir_all(&mut self, dir: &Path) -> Result<()> {
        self.dirs.insert(dir.to_path_buf());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn write(&mut self, path: &Path, content: &str) -> Result<()> {
        self.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
