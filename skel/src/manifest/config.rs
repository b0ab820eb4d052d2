use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use super::{Error, Result};

/// File name looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE: &str = "skel.toml";

/// Root of skel.toml
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub stubs: StubsConfig,
}

/// The `[stubs]` table
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct StubsConfig {
    /// Output directory for generated stubs
    pub output: PathBuf,
    /// Render generics; `false` renders erased types
    pub generics: bool,
    /// Defer classes whose super class is not resolved
    pub require_super_resolved: bool,
}

impl Default for StubsConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("build/stubs"),
            generics: true,
            require_super_resolved: false,
        }
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE)
    }
}

impl Config {
    /// Parse a skel.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e, content, filename))
    }

    /// Parse the skel.toml file at `path`
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Load the explicit config file, or `./skel.toml` if present, or defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!("no {} found, using defaults", CONFIG_FILE);
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.stubs.output, PathBuf::from("build/stubs"));
        assert!(config.stubs.generics);
        assert!(!config.stubs.require_super_resolved);
    }

    #[test]
    fn test_partial_table() {
        let config: Config = r#"
            [stubs]
            output = "out/java"
            generics = false
        "#
        .parse()
        .unwrap();

        assert_eq!(config.stubs.output, PathBuf::from("out/java"));
        assert!(!config.stubs.generics);
        assert!(!config.stubs.require_super_resolved);
    }

    #[test]
    fn test_unknown_key_is_rejected_with_span() {
        let src = "[stubs]\ngenerix = false\n";
        let err = src.parse::<Config>().unwrap_err();

        match *err {
            Error::Config { span, .. } => {
                let span = span.expect("toml errors carry a span");
                assert!(src[span.offset()..].starts_with("generix"));
            }
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = Config::load(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("skel.toml");
        std::fs::write(&path, "[stubs]\nrequire_super_resolved = true\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(config.stubs.require_super_resolved);
    }
}
