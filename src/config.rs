use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

use crate::hit_test::Tolerances;
use crate::rough::RoughOptions;
use crate::stroke::StrokeOptions;

/// Environment variable naming a config file to load instead of the default.
pub const CONFIG_ENV: &str = "ROUGHBOARD_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "roughboard.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Style {
    pub stroke_color: [f32; 4],
    pub background: [f32; 4],
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke_color: [0.0, 0.0, 0.0, 1.0],
            background: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "roughboard".to_string(),
            width: 1280,
            height: 800,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub hit: Tolerances,
    pub rough: RoughOptions,
    pub stroke: StrokeOptions,
    pub style: Style,
    pub window: WindowConfig,
    /// Oldest undo steps are dropped past this many snapshots.
    pub history_limit: Option<usize>,
}

impl Config {
    /// Reads the file named by `ROUGHBOARD_CONFIG`, else `roughboard.json` in
    /// the working directory, else falls back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        // No filesystem or environment in the browser.
        if cfg!(target_arch = "wasm32") {
            return Ok(Self::default());
        }

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::from_path(path);
        }

        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.exists() {
            Self::from_path(path)
        } else {
            log::info!("No {} found, using default settings", DEFAULT_CONFIG_FILE);
            Ok(Self::default())
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = Config::from_json(
            r#"{
                "hit": { "handle": 8.0 },
                "stroke": { "size": 12.0, "simulate_pressure": false },
                "history_limit": 100
            }"#,
        )
        .unwrap();

        assert_eq!(config.hit.handle, 8.0);
        assert_eq!(config.hit.line, Tolerances::default().line);
        assert_eq!(config.stroke.size, 12.0);
        assert!(!config.stroke.simulate_pressure);
        assert_eq!(config.stroke.thinning, StrokeOptions::default().thinning);
        assert_eq!(config.history_limit, Some(100));
        assert_eq!(config.rough, RoughOptions::default());
        assert_eq!(config.window.title, "roughboard");
    }

    #[test]
    fn test_from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "window": {{ "title": "sketch", "width": 640 }} }}"#).unwrap();

        let config = Config::from_path(file.path()).unwrap();
        assert_eq!(config.window.title, "sketch");
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 800);
    }

    #[test]
    fn test_errors_name_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = Config::from_path(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains(&file.path().display().to_string()));

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let err = Config::from_path(&missing).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}
