//! Project configuration loaded from `.specify/config.toml`.
//!
//! The file is optional. Missing, empty, or syntactically invalid
//! configuration falls back to defaults with a warning; an invalid config is
//! never a reason to abort a provisioning run.
//!
//! ```toml
//! template = ".specify/templates/spec-template.md"
//! specs-dir = "specs"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_RELATIVE_PATH: &str = ".specify/config.toml";

/// Paths the provisioning pass reads and writes, relative to the source
/// directory.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Relative path of the spec template to copy into new feature
    /// directories
    #[serde(default = "default_template")]
    pub template: String,

    /// Name of the directory holding numbered feature directories
    #[serde(rename = "specs-dir", default = "default_specs_dir")]
    pub specs_dir: String,
}

fn default_template() -> String {
    ".specify/templates/spec-template.md".to_string()
}

fn default_specs_dir() -> String {
    "specs".to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            template: default_template(),
            specs_dir: default_specs_dir(),
        }
    }
}

impl ProjectConfig {
    /// Loads configuration from `.specify/config.toml` under the source
    /// directory, falling back to defaults when the file is missing, empty,
    /// or fails to parse.
    ///
    /// # Errors
    /// Only returns an error when the file exists but cannot be read (e.g.
    /// permission denied).
    pub fn load_from_source(source: &Path) -> Result<Self> {
        let config_path = source.join(CONFIG_RELATIVE_PATH);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        match toml::from_str::<ProjectConfig>(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                eprintln!("Warning: Invalid TOML syntax in {}:", config_path.display());
                eprintln!("  {}", e);
                eprintln!("  Using default configuration.");
                Ok(Self::default())
            }
        }
    }
}
