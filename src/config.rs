// Settings file for the terminal front end

use crate::filter::Filter;
use crate::render::RenderOptions;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// User settings, read from `config.yaml`; every field is optional
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Header title on the dashboard
    pub title: String,
    /// Filter tab selected at startup
    pub default_filter: Filter,
    /// strftime pattern for task creation dates
    pub date_format: String,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        let render = RenderOptions::default();
        Self {
            title: render.title,
            default_filter: Filter::All,
            date_format: render.date_format,
            color: render.color,
        }
    }
}

impl Config {
    /// `<config dir>/todoc/config.yaml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("todoc").join("config.yaml"))
    }

    /// Load settings from a file; a missing file yields the defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = ?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: Config =
            serde_yaml::from_str(&content).with_context(|| format!("Failed to parse config file {:?}", path))?;

        debug!(path = ?path, ?config, "Loaded config");
        Ok(config)
    }

    /// Load from an explicit path, or from `default_path()` when none is given
    ///
    /// A missing explicit file still yields the defaults, but is reported.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    warn!(path = ?path, "Config file given on the command line does not exist, using defaults");
                }
                Self::load(path)
            }
            None => match Self::default_path() {
                Some(path) => Self::load(path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Command-line flags win over the settings file
    pub fn with_overrides(mut self, filter: Option<Filter>, no_color: bool) -> Self {
        if let Some(filter) = filter {
            self.default_filter = filter;
        }
        if no_color {
            self.color = false;
        }
        self
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            title: self.title.clone(),
            date_format: self.date_format.clone(),
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(temp.path().join("missing.yaml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.title, "TodoC");
        assert_eq!(config.default_filter, Filter::All);
        assert!(config.color);
    }

    #[test]
    fn test_load_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "title: Chores\ndefault_filter: in_progress\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.title, "Chores");
        assert_eq!(config.default_filter, Filter::InProgress);
        assert_eq!(config.date_format, "%d/%m/%Y %H:%M");
        assert!(config.color);
    }

    #[test]
    fn test_load_invalid_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "default_filter: archived\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse config file"));
    }

    #[test]
    fn test_render_options_from_config() {
        let config = Config {
            color: false,
            ..Config::default()
        };
        let options = config.render_options();
        assert!(!options.color);
        assert_eq!(options.title, "TodoC");
    }

    #[test]
    fn test_default_path_ends_with_app_dir() {
        if let Some(path) = Config::default_path() {
            assert!(path.ends_with("todoc/config.yaml"));
        }
    }

    #[test]
    fn test_resolve_missing_explicit_path_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("typo.yaml");

        let config = Config::resolve(Some(path.as_path())).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_resolve_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "color: false\n").unwrap();

        let config = Config::resolve(Some(path.as_path())).unwrap();
        assert!(!config.color);
    }

    #[test]
    fn test_overrides_win_over_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "default_filter: completed\ncolor: true\n").unwrap();

        let config = Config::load(&path)
            .unwrap()
            .with_overrides(Some(Filter::InProgress), true);
        assert_eq!(config.default_filter, Filter::InProgress);
        assert!(!config.color);
        assert!(!config.render_options().color);
    }

    #[test]
    fn test_no_overrides_keep_file_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "default_filter: completed\ncolor: true\n").unwrap();

        let config = Config::load(&path).unwrap().with_overrides(None, false);
        assert_eq!(config.default_filter, Filter::Completed);
        assert!(config.color);
    }
}
