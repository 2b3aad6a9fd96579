use crate::error::{Result, TacError};
use crate::model::FormatDefaults;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Application configuration, stored in `<config-dir>/config.json`.
///
/// Passed explicitly into the store and the CLI; there is no global mutable
/// configuration state. Every field carries a serde default so config files
/// written by older versions keep loading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TacConfig {
    /// Default font family for paragraphs without an override
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Default font size in points
    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// Default line spacing multiplier
    #[serde(default = "default_line_spacing")]
    pub line_spacing: f64,

    /// Default first-line indent in centimeters
    #[serde(default)]
    pub first_indent: f64,

    /// Default block-quote indent in centimeters
    #[serde(default = "default_quote_indent")]
    pub quote_indent: f64,

    /// Rename the previous file to `.bak` before each overwrite
    #[serde(default = "default_backup_files")]
    pub backup_files: bool,
}

fn default_font_family() -> String {
    "Liberation Sans".to_string()
}

fn default_font_size() -> u32 {
    12
}

fn default_line_spacing() -> f64 {
    1.5
}

fn default_quote_indent() -> f64 {
    4.0
}

fn default_backup_files() -> bool {
    true
}

impl Default for TacConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_size: default_font_size(),
            line_spacing: default_line_spacing(),
            first_indent: 0.0,
            quote_indent: default_quote_indent(),
            backup_files: default_backup_files(),
        }
    }
}

impl TacConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TacError::Io)?;
        let config: TacConfig = serde_json::from_str(&content).map_err(TacError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TacError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TacError::Serialization)?;
        fs::write(config_path, content).map_err(TacError::Io)?;
        Ok(())
    }

    /// Project the formatting fields into the model's default table.
    pub fn format_defaults(&self) -> FormatDefaults {
        FormatDefaults {
            font_family: self.font_family.clone(),
            font_size: self.font_size,
            line_spacing: self.line_spacing,
            first_indent: self.first_indent,
            quote_indent: self.quote_indent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = TacConfig::default();
        assert_eq!(config.font_family, "Liberation Sans");
        assert_eq!(config.font_size, 12);
        assert!(config.backup_files);
    }

    #[test]
    fn test_load_missing_config_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = TacConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, TacConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();

        let mut config = TacConfig::default();
        config.font_size = 14;
        config.backup_files = false;
        config.save(dir.path()).unwrap();

        let loaded = TacConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("config.json"), r#"{"font_size": 10}"#).unwrap();

        let loaded = TacConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.font_size, 10);
        assert_eq!(loaded.font_family, "Liberation Sans");
        assert!(loaded.backup_files);
    }

    #[test]
    fn test_format_defaults_projection() {
        let mut config = TacConfig::default();
        config.quote_indent = 2.0;
        let defaults = config.format_defaults();
        assert_eq!(defaults.quote_indent, 2.0);
        assert_eq!(defaults.font_size, 12);
    }
}
