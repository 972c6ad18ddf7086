use crate::core::models::atom::{AtomName, AtomNameError};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid atom name in selection: {0}")]
    InvalidAtomName(#[from] AtomNameError),
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// Which atoms a selection copy keeps, and how large the copy may grow.
///
/// Loadable from TOML:
///
/// ```toml
/// atom_names = ["N", "CA", "C", "O"]
/// node_limit = 5000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectionConfig {
    pub atom_names: Vec<AtomName>,
    #[serde(default)]
    pub node_limit: Option<usize>,
}

impl SelectionConfig {
    /// Backbone atoms `N`, `CA`, `C`, `O`.
    pub fn backbone() -> Self {
        Self {
            atom_names: vec![AtomName::N, AtomName::CA, AtomName::C, AtomName::O],
            node_limit: None,
        }
    }

    /// Alpha carbons only.
    pub fn ca_only() -> Self {
        Self {
            atom_names: vec![AtomName::CA],
            node_limit: None,
        }
    }

    /// Reads a selection from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Toml`] if it is not a valid selection, including
    /// unknown keys and invalid atom names. Both carry `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path.to_string_lossy())
    }

    /// Parses a selection from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if the text is not a valid selection.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, "<string>")
    }

    fn parse(content: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Toml {
            path: origin.to_string(),
            source: e,
        })
    }
}

/// Builds a [`SelectionConfig`] step by step. Atom names are validated by
/// [`SelectionConfigBuilder::build`].
#[derive(Default)]
pub struct SelectionConfigBuilder {
    atom_names: Option<Vec<String>>,
    node_limit: Option<usize>,
}

impl SelectionConfigBuilder {
    /// Starts an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one atom name to the selection.
    pub fn atom_name(mut self, name: &str) -> Self {
        self.atom_names
            .get_or_insert_with(Vec::new)
            .push(name.to_string());
        self
    }

    /// Adds several atom names, keeping their order.
    pub fn atom_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.atom_names
            .get_or_insert_with(Vec::new)
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Bounds the number of records a selection copy may hold.
    pub fn node_limit(mut self, limit: usize) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Validates the collected atom names and produces the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingParameter`] if no atom names were given
    /// and [`ConfigError::InvalidAtomName`] if one of them is not a valid
    /// token.
    pub fn build(self) -> Result<SelectionConfig, ConfigError> {
        let atom_names = self
            .atom_names
            .ok_or(ConfigError::MissingParameter("atom_names"))?
            .iter()
            .map(|name| AtomName::new(name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SelectionConfig {
            atom_names,
            node_limit: self.node_limit,
        })
    }
}
