//! Configuration loading.
//!
//! `defaults/kswrap.default.toml` is embedded into the binary so that docs and runtime
//! behavior stay in sync. Callers layer user files and CLI overrides on top of those
//! defaults via [`Loader`] before deserializing into [`KsWrapConfig`].

use crate::annotate::{AnnotateOptions, WrapOptions};
use crate::classify::ClassifyOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/kswrap.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct KsWrapConfig {
    pub classify: ClassifyOptions,
    pub annotate: AnnotateOptions,
    pub encoding: EncodingConfig,
}

/// Default encoding labels for reading and writing scripts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EncodingConfig {
    pub input: String,
    pub output: String,
}

impl KsWrapConfig {
    /// The options consumed by the line processor.
    pub fn wrap_options(&self) -> WrapOptions {
        WrapOptions {
            classify: self.classify.clone(),
            annotate: self.annotate.clone(),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Override the input and/or output encoding labels (the `--ie`/`--oe` flags).
    pub fn with_encodings(
        mut self,
        input: Option<&str>,
        output: Option<&str>,
    ) -> Result<Self, ConfigError> {
        if let Some(label) = input {
            self = self.set_override("encoding.input", label)?;
        }
        if let Some(label) = output {
            self = self.set_override("encoding.output", label)?;
        }
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<KsWrapConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<KsWrapConfig, ConfigError> {
    Loader::new().build()
}
