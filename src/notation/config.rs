//! Configuration for the opnote front ends.
//!
//! `defaults/opnote.default.toml` is embedded into the binary and always forms the bottom layer.
//! User files and command-line settings are layered on top by [`Loader`], and the result is
//! deserialized into [`OpnoteConfig`].

use crate::notation::parsing::ParseOptions;
use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_TOML: &str = include_str!("../../defaults/opnote.default.toml");

/// Top-level configuration consumed by opnote applications.
#[derive(Debug, Clone, Deserialize)]
pub struct OpnoteConfig {
    pub parser: ParserConfig,
    pub output: OutputConfig,
}

/// Mirrors the knobs exposed by the parser.
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    pub default_label_name: String,
}

impl From<&ParserConfig> for ParseOptions {
    fn from(config: &ParserConfig) -> Self {
        ParseOptions {
            default_label_name: config.default_label_name.clone(),
        }
    }
}

/// Which registered format a document is written in, and how.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl OpnoteConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.parser.default_label_name.trim().is_empty() {
            return Err(ConfigError::Message(
                "parser.default_label_name must not be empty".to_string(),
            ));
        }
        if self.output.format.trim().is_empty() {
            return Err(ConfigError::Message(
                "output.format must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Layers user files and command-line settings over the embedded defaults.
///
/// Files apply in the order they were added; the typed settings apply last.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    files: Vec<PathBuf>,
    format: Option<String>,
    default_label_name: Option<String>,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer a TOML file. A missing file is an error at [`Loader::build`].
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    /// Select the output format, as `--format` does.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Rename the label used when the notation declares none.
    pub fn with_default_label_name(mut self, name: impl Into<String>) -> Self {
        self.default_label_name = Some(name.into());
        self
    }

    pub fn build(self) -> Result<OpnoteConfig, ConfigError> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        for path in &self.files {
            builder = builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(true),
            );
        }
        if let Some(format) = self.format {
            builder = builder.set_override("output.format", format)?;
        }
        if let Some(name) = self.default_label_name {
            builder = builder.set_override("parser.default_label_name", name)?;
        }

        let config: OpnoteConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        log::debug!(
            "configuration from {} file(s): format={}, default label '{}'",
            self.files.len(),
            config.output.format,
            config.parser.default_label_name
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "{contents}").expect("write config");
        file
    }

    #[test]
    fn loads_default_config() {
        let config = Loader::new().build().expect("defaults to deserialize");
        assert_eq!(config.parser.default_label_name, "옵션");
        assert_eq!(config.output.format, "json");
        assert!(config.output.pretty);
    }

    #[test]
    fn typed_settings_override_files() {
        let file = config_file("[output]\nformat = \"yaml\"");
        let config = Loader::new()
            .with_file(file.path())
            .with_format("tag")
            .with_default_label_name("Option")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "tag");
        assert_eq!(config.parser.default_label_name, "Option");
    }

    #[test]
    fn layers_user_file() {
        let file = config_file("[parser]\ndefault_label_name = \"Option\"");
        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.parser.default_label_name, "Option");
        assert_eq!(config.output.format, "json");
        assert_eq!(
            ParseOptions::from(&config.parser).default_label_name,
            "Option"
        );
    }

    #[test]
    fn later_files_win() {
        let first = config_file("[output]\nformat = \"yaml\"\npretty = false");
        let second = config_file("[output]\nformat = \"tag\"");
        let config = Loader::new()
            .with_file(first.path())
            .with_file(second.path())
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "tag");
        assert!(!config.output.pretty);
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = Loader::new().with_file("/nonexistent/opnote.toml").build();
        assert!(result.is_err());
    }

    #[test]
    fn rejects_empty_default_label_name() {
        let err = Loader::new()
            .with_default_label_name("  ")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("default_label_name"));
    }
}
