//! Run configuration (`mechtree.toml`)
//!
//! ```toml
//! [paths]
//! src = "src"
//! out = "out"
//!
//! [roots]
//! Firepower = "0"
//! Survival = "64"
//! ```

use crate::error::{Error, Result};
use crate::formats::external::NodeRef;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given
pub const CONFIG_FILE: &str = "mechtree.toml";

/// Root node of each skill tree category, in display order
pub const DEFAULT_ROOTS: [(&str, u32); 7] = [
    ("Firepower", 0),
    ("Survival", 64),
    ("Mobility", 117),
    ("Jump Jets", 156),
    ("Operations", 161),
    ("Sensors", 195),
    ("Auxiliary", 215),
];

fn default_src() -> PathBuf {
    PathBuf::from("src")
}

fn default_out() -> PathBuf {
    PathBuf::from("out")
}

fn default_roots() -> IndexMap<String, NodeRef> {
    DEFAULT_ROOTS
        .iter()
        .map(|(name, id)| ((*name).to_string(), NodeRef::from(*id)))
        .collect()
}

/// The full run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathSettings,
    /// Category name -> root variant id
    #[serde(default = "default_roots")]
    pub roots: IndexMap<String, NodeRef>,
}

/// Input and output directories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSettings {
    /// Directory holding the game's XML files
    #[serde(default = "default_src")]
    pub src: PathBuf,
    /// Directory for JSON output (and the external link/category files)
    #[serde(default = "default_out")]
    pub out: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            src: default_src(),
            out: default_out(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: PathSettings::default(),
            roots: default_roots(),
        }
    }
}

impl Config {
    /// Load a config file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, else `mechtree.toml` if present, else defaults
    ///
    /// # Errors
    /// Returns an error if an explicitly given file is missing, or if any
    /// config file found is invalid.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(CONFIG_FILE).is_file() => Self::load(Path::new(CONFIG_FILE)),
            None => Ok(Self::default()),
        }
    }

    /// Path of a file in the source directory
    pub fn source_path(&self, file: &str) -> PathBuf {
        self.paths.src.join(file)
    }

    /// Path of a file in the output directory
    pub fn output_path(&self, file: &str) -> PathBuf {
        self.paths.out.join(file)
    }
}
