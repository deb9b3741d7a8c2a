use crate::chapters::{ImageRole, Labels, DEFAULT_TOC_TITLE, DEFAULT_URL_DESCRIPTION};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration loaded from ~/.config/podchap/config.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsConfig,
    #[serde(default)]
    pub labels: LabelsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// External programs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// sox binary used for probing and concatenation
    #[serde(default = "default_sox")]
    pub sox: PathBuf,
}

fn default_sox() -> PathBuf {
    PathBuf::from("sox")
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self { sox: default_sox() }
    }
}

/// Fixed text written into every tag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelsConfig {
    #[serde(default = "default_toc_title")]
    pub toc_title: String,
    #[serde(default = "default_url_description")]
    pub url_description: String,
    #[serde(default)]
    pub image_role: ImageRole,
}

fn default_toc_title() -> String {
    DEFAULT_TOC_TITLE.to_string()
}

fn default_url_description() -> String {
    DEFAULT_URL_DESCRIPTION.to_string()
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            toc_title: default_toc_title(),
            url_description: default_url_description(),
            image_role: ImageRole::default(),
        }
    }
}

/// Configuration for the build command
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Directory the combined episode is written to when the manifest names no output
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default path (~/.config/podchap/config.toml)
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("podchap").join("config.toml"))
    }

    /// Get the sox binary, with CLI override taking precedence
    pub fn sox(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.tools.sox.clone())
    }

    pub fn labels(&self) -> Labels {
        Labels {
            toc_title: self.labels.toc_title.clone(),
            url_description: self.labels.url_description.clone(),
            image_role: self.labels.image_role,
        }
    }
}
