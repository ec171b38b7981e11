use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Converter configuration for outline2json
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Marker strings delimiting the front matter
    pub markers: MarkerConfig,
    /// JSON output formatting
    pub output: OutputConfig,
}

/// Literal strings the front matter extractors look for.
///
/// These are compared as plain text (exact or prefix match), never as patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Text preceding `v<version> "<codename>"` on the title line
    pub title_prefix: String,
    /// Line that opens the table of contents
    pub toc_start: String,
    /// Prefix of the separator line that closes the table of contents
    pub toc_end: String,
    /// Full text of the known foreword heading
    pub foreword_heading: String,
    /// Prefix accepted for any other foreword heading
    pub foreword_prefix: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Spaces per indentation level in the JSON output
    pub indent_width: usize,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        MarkerConfig {
            title_prefix: "EOTS".to_string(),
            toc_start: "Table of Contents".to_string(),
            toc_end: "_".repeat(40),
            foreword_heading: "Foreword: The Evolution to Apex Predator - Philosophy of EOTS v2.5"
                .to_string(),
            foreword_prefix: "Foreword:".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig { indent_width: 4 }
    }
}

impl ConverterConfig {
    /// Load configuration from the config directory
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::get_config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        // Return defaults if no config found
        Ok(ConverterConfig::default())
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: ConverterConfig = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to the config directory, returning where it went
    pub fn save(&self) -> Result<Option<PathBuf>> {
        match Self::get_config_path() {
            Some(config_path) => {
                self.save_to(&config_path)?;
                Ok(Some(config_path))
            }
            None => Ok(None),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the path to the config file
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("outline2json").join("config.toml"))
    }

    /// Initialize default config file
    pub fn init_default() -> Result<Option<PathBuf>> {
        ConverterConfig::default().save()
    }
}
