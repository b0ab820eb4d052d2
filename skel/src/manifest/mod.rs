//! Input files: the optional skel.toml and the JSON declaration model.
//!
//! Both report failures as [`miette`] diagnostics pointing into the file.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod model;

pub use config::{Config, StubsConfig};
pub use error::{Error, Result};
pub use model::ModelFile;
