use std::path::{Path, PathBuf};

use skelgen_model::DeclarationModel;

use super::{Error, Result};

/// A declaration model file, as exported by the front end.
pub struct ModelFile {
    path: PathBuf,
    model: DeclarationModel,
}

impl ModelFile {
    /// Open and parse a JSON model file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let model = Self::parse(&content, &path.display().to_string())?;
        tracing::debug!(
            path = %path.display(),
            classes = model.top_level_count(),
            "loaded declaration model"
        );
        Ok(Self { path, model })
    }

    /// Parse a model from a string with a filename for error reporting.
    pub fn parse(content: &str, filename: &str) -> Result<DeclarationModel> {
        serde_json::from_str(content).map_err(|e| Error::model(e, content, filename))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_model(self) -> DeclarationModel {
        self.model
    }
}
