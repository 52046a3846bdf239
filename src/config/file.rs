//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::{AppConfig, ConfigOverrides};
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".iphone-monitor.yaml",
    ".iphone-monitor.yml",
    "iphone-monitor.yaml",
    "iphone-monitor.yml",
];

/// Directory name under the user config directory.
const CONFIG_DIR_NAME: &str = "iphone-monitor";

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/iphone-monitor/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path
        && path.exists()
    {
        return Some(path.to_path_buf());
    }

    if let Ok(cwd) = std::env::current_dir()
        && let Some(path) = find_config_in_dir(&cwd)
    {
        return Some(path);
    }

    if let Some(git_root) = find_git_root()
        && let Some(path) = find_config_in_dir(&git_root)
    {
        return Some(path);
    }

    if let Some(path) = user_config_dir().and_then(|dir| find_config_in_dir(&dir)) {
        return Some(path);
    }

    if let Some(home) = dirs::home_dir()
        && let Some(path) = find_config_in_dir(&home)
    {
        return Some(path);
    }

    None
}

/// `<config_dir>/iphone-monitor`, if the platform has a config directory.
#[must_use]
pub fn user_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    /// File not found
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// IO error reading file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl From<ConfigFileError> for crate::error::CatalogError {
    fn from(err: ConfigFileError) -> Self {
        Self::config(err.to_string())
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Layer command-line values over this config.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(source) = &overrides.feed {
            self.feed.source = Some(source.clone());
        }

        if let Some(carriers) = &overrides.carriers {
            self.defaults.carriers.clone_from(carriers);
        }
        if let Some(mode) = overrides.pricing_mode {
            self.defaults.pricing_mode = mode;
        }
        if let Some(sort) = overrides.sort {
            self.defaults.sort = sort;
        }

        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if let Some(file) = &overrides.output_file {
            self.output.file = Some(file.clone());
        }
        if overrides.no_color {
            self.output.no_color = true;
        }
    }

    /// Load from file and apply CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.apply_overrides(overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content from the defaults.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# iphone-monitor configuration
# Place this file at .iphone-monitor.yaml in your project root or ~/.config/iphone-monitor/

{}",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# iphone-monitor configuration file
# ==================================
#
# Place it at:
#   - .iphone-monitor.yaml in your project root
#   - ~/.config/iphone-monitor/iphone-monitor.yaml for global config
#
# CLI arguments always override file settings.

# Listing feed: file path, directory (resolves to data.json) or http(s) base URL
# feed:
#   source: https://example.github.io/iphone-monitor/

# Initial filter selection
defaults:
  # Carriers: Rakuten, ahamo, UQ mobile, au, SoftBank, docomo
  carriers:
    - Rakuten
    - ahamo
    - UQ mobile
    - au
    - SoftBank
    - docomo
  # recurring (monthly) or one-time
  pricing_mode: recurring
  # price-ascending, price-descending, model-newest
  sort: price-ascending

# Output configuration
output:
  # Format: auto, tui, json, summary, table
  format: auto
  # Output file path (omit for stdout)
  # file: catalog.json
  # Disable colored output
  no_color: false

# TUI settings
tui:
  # Theme: dark, light, high-contrast
  theme: dark
  mouse_enabled: true
"
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PricingMode, SortKey};
    use crate::config::Validatable;
    use crate::model::Carrier;
    use crate::reports::ReportFormat;

    #[test]
    fn test_find_config_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_config_in_dir(dir.path()).is_none());

        std::fs::write(dir.path().join("iphone-monitor.yml"), "tui:\n  theme: light\n").unwrap();
        assert_eq!(
            find_config_in_dir(dir.path()),
            Some(dir.path().join("iphone-monitor.yml"))
        );

        // Dotfile wins over the plain name.
        std::fs::write(dir.path().join(".iphone-monitor.yaml"), "").unwrap();
        assert_eq!(
            find_config_in_dir(dir.path()),
            Some(dir.path().join(".iphone-monitor.yaml"))
        );
    }

    #[test]
    fn test_explicit_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.yaml");
        std::fs::write(&path, "").unwrap();
        assert_eq!(discover_config_file(Some(&path)), Some(path));
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".iphone-monitor.yaml");
        std::fs::write(
            &path,
            "feed:\n  source: https://example.com/\ndefaults:\n  carriers: [au, docomo]\n  pricing_mode: one-time\n  sort: model-newest\n",
        )
        .unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.feed.source.as_deref(), Some("https://example.com/"));
        assert_eq!(config.defaults.carriers, vec![Carrier::Au, Carrier::Docomo]);
        assert_eq!(config.defaults.pricing_mode, PricingMode::OneTime);
        assert_eq!(config.defaults.sort, SortKey::ModelNewest);
        assert_eq!(config.tui.theme, "dark");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config_file(Path::new("/nonexistent/.iphone-monitor.yaml")).unwrap_err();
        assert!(matches!(err, ConfigFileError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "defaults:\n  carriers: [povo]\n").unwrap();
        assert!(matches!(
            load_config_file(&path),
            Err(ConfigFileError::Parse(_))
        ));
    }

    #[test]
    fn test_absent_flags_keep_file_values() {
        let mut config = AppConfig::default();
        config.feed.source = Some("file.json".to_string());
        config.defaults.sort = SortKey::ModelNewest;

        config.apply_overrides(&ConfigOverrides {
            format: Some(ReportFormat::Json),
            no_color: true,
            ..ConfigOverrides::default()
        });
        assert_eq!(config.feed.source.as_deref(), Some("file.json"));
        assert_eq!(config.defaults.sort, SortKey::ModelNewest);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.output.no_color);
    }

    #[test]
    fn test_flags_equal_to_defaults_still_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".iphone-monitor.yaml");
        std::fs::write(
            &path,
            "defaults:\n  carriers: [au]\n  pricing_mode: one-time\n  sort: model-newest\noutput:\n  format: json\n",
        )
        .unwrap();

        let overrides = ConfigOverrides {
            carriers: Some(Carrier::ALL.to_vec()),
            pricing_mode: Some(PricingMode::Recurring),
            sort: Some(SortKey::PriceAscending),
            format: Some(ReportFormat::Auto),
            ..ConfigOverrides::default()
        };
        let (config, loaded_from) = AppConfig::from_file_with_overrides(Some(&path), &overrides);

        assert_eq!(loaded_from, Some(path));
        assert_eq!(config.defaults.pricing_mode, PricingMode::Recurring);
        assert_eq!(config.defaults.sort, SortKey::PriceAscending);
        assert_eq!(config.defaults.carriers, Carrier::ALL.to_vec());
        assert_eq!(config.output.format, ReportFormat::Auto);
    }

    #[test]
    fn test_no_overrides_keeps_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".iphone-monitor.yaml");
        std::fs::write(&path, "defaults:\n  pricing_mode: one-time\n").unwrap();

        let (config, _) =
            AppConfig::from_file_with_overrides(Some(&path), &ConfigOverrides::default());
        assert_eq!(config.defaults.pricing_mode, PricingMode::OneTime);
    }

    #[test]
    fn test_example_configs_parse_and_validate() {
        for text in [generate_example_config(), generate_full_example_config()] {
            let config: AppConfig = serde_yaml::from_str(&text).unwrap();
            assert!(config.is_valid());
            assert_eq!(config.defaults.carriers.len(), 6);
        }
    }
}
