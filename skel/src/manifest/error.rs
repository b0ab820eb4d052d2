use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for loading input files (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse skel.toml")]
    #[diagnostic(
        code(skel::config_error),
        help("valid keys under [stubs] are: output, generics, require_super_resolved")
    )]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse declaration model")]
    #[diagnostic(code(skel::model_error))]
    Model {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid JSON here")]
        span: SourceSpan,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a config error from a toml error with source context
    pub fn config(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a model error, pointing at the line and column serde_json reports
    pub fn model(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let offset = offset_of(src, source.line(), source.column());
        Box::new(Error::Model {
            src: NamedSource::new(filename, src.to_string()),
            span: SourceSpan::from(offset..offset),
            source,
        })
    }
}

/// Byte offset of a 1-based line and column, clamped to the source.
fn offset_of(src: &str, line: usize, column: usize) -> usize {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(src.len())
}
