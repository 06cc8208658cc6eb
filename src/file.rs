//! TOML import/export for configuration trees.
//!
//! A config is serialized as a `[[section]]` array of tables, each with a
//! `type`, an optional `name`, and a `[[section.option]]` array of
//! name/value pairs. The array form keeps duplicate names and insertion
//! order intact, which plain TOML tables would not.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::context::Context;
use crate::tree::{ConfigId, TreeError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("required config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to deserialize config: {0}")]
    DeserializeError(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("config file name is not valid UTF-8 or has no stem: {0}")]
    InvalidFileName(PathBuf),

    #[error(transparent)]
    Tree(#[from] TreeError),
}

#[derive(Debug, Serialize, Deserialize)]
struct ConfigDoc {
    #[serde(default, rename = "section")]
    sections: Vec<SectionDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SectionDoc {
    #[serde(rename = "type")]
    ty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, rename = "option")]
    options: Vec<OptionDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct OptionDoc {
    name: String,
    value: String,
}

impl Context {
    /// Parses `text` as TOML and builds a config tree named `name`.
    ///
    /// Atomic like the creation calls: if any section or option fails
    /// validation, the partially-built config is dropped before the error
    /// propagates and the context is left unchanged.
    pub fn import_str(&mut self, name: &str, text: &str) -> Result<ConfigId, LoadError> {
        let doc: ConfigDoc = toml::from_str(text)?;
        self.build_config(name, doc)
    }

    /// Loads a config tree from a TOML file, naming it after the file stem.
    ///
    /// Returns `Ok(None)` if the file doesn't exist and `required` is false;
    /// a missing required file is an error.
    pub fn load_file(
        &mut self,
        path: impl AsRef<Path>,
        required: bool,
    ) -> Result<Option<ConfigId>, LoadError> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| LoadError::InvalidFileName(path.to_path_buf()))?
            .to_owned();

        match std::fs::read_to_string(path) {
            Ok(contents) => {
                let doc: ConfigDoc =
                    toml::from_str(&contents).map_err(|e| LoadError::ParseError {
                        path: path.to_path_buf(),
                        source: e,
                    })?;
                self.build_config(&name, doc).map(Some)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if required {
                    Err(LoadError::FileNotFound(path.to_path_buf()))
                } else {
                    Ok(None)
                }
            }
            Err(e) => Err(LoadError::ReadError {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    /// Serializes `cfg` to pretty TOML in the `[[section]]` document form.
    pub fn export_str(&self, cfg: ConfigId) -> Result<String, LoadError> {
        let config = self.config(cfg).ok_or(TreeError::StaleConfig)?;
        let doc = ConfigDoc {
            sections: config
                .sections()
                .map(|section| SectionDoc {
                    ty: section.ty().to_owned(),
                    name: section.name().map(str::to_owned),
                    options: section
                        .options()
                        .map(|option| OptionDoc {
                            name: option.name().to_owned(),
                            value: option.value().to_owned(),
                        })
                        .collect(),
                })
                .collect(),
        };
        Ok(toml::to_string_pretty(&doc)?)
    }

    /// Builds a tree from a parsed document, dropping the partial config if
    /// any entity fails validation.
    fn build_config(&mut self, name: &str, doc: ConfigDoc) -> Result<ConfigId, LoadError> {
        let cfg = self.alloc_config(name)?;
        match self.populate(cfg, doc) {
            Ok(()) => Ok(cfg),
            Err(e) => {
                self.drop_config(cfg);
                Err(e)
            }
        }
    }

    fn populate(&mut self, cfg: ConfigId, doc: ConfigDoc) -> Result<(), LoadError> {
        for section in doc.sections {
            let sec = self.add_section(cfg, &section.ty, section.name.as_deref())?;
            for option in section.options {
                self.add_option(sec, &option.name, &option.value)?;
            }
        }
        Ok(())
    }
}
