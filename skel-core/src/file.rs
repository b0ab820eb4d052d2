use std::{
    fs,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use eyre::Result;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, returning the full path written.
    fn write(&self, base: &Path) -> io::Result<PathBuf> {
        let path = self.path(base);
        write_file(&path, &self.render())?;
        Ok(path)
    }
}

/// Write `content` to `path`, creating parent directories as needed.
///
/// The content goes through a buffered writer that is flushed before
/// returning. If writing fails after the file was created, the partial
/// file is removed.
pub fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    let written = writer
        .write_all(content.as_bytes())
        .and_then(|()| writer.flush());

    if let Err(err) = written {
        drop(writer);
        if let Err(remove_err) = fs::remove_file(path) {
            tracing::debug!(
                path = %path.display(),
                error = %remove_err,
                "could not remove partial file"
            );
        }
        return Err(err);
    }
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Remove a file. Returns `false` if it did not exist.
pub fn remove_file(path: &Path) -> io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "removed file");
            Ok(true)
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

/// Remove `dir` and its ancestors while they are empty, stopping at `base`.
pub fn remove_empty_dirs(dir: &Path, base: &Path) -> Result<()> {
    if dir == base || !dir.starts_with(base) {
        return Ok(());
    }

    if fs::read_dir(dir)?.next().is_none() {
        fs::remove_dir(dir)?;
        if let Some(parent) = dir.parent() {
            remove_empty_dirs(parent, base)?;
        }
    }

    Ok(())
}
