//! Scene configuration: map parameters, starting state, trace presentation.
//!
//! Loaded from a JSON or YAML file chosen by extension. Every field has a
//! default, so a partial file (or no file at all) still yields a runnable
//! configuration.

use orbitmap_common::{Color, Complex};
use orbitmap_kernel::MapParams;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Errors from configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported config format: {0:?} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),
}

/// Trajectory presentation settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Number of segments to sample.
    pub count: u32,
    /// Color of the first segment, RGB in [0, 1].
    pub start_color: [f32; 3],
    /// Color of the last segment, RGB in [0, 1].
    pub end_color: [f32; 3],
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            count: 128,
            start_color: [1.0, 0.0, 0.0],
            end_color: [0.0, 0.0, 1.0],
        }
    }
}

impl TraceConfig {
    /// The endpoint colors as `(start, end)`.
    pub fn colors(&self) -> (Color, Color) {
        (Color::from(self.start_color), Color::from(self.end_color))
    }
}

/// Scene configuration: the map's parameters plus starting state and
/// presentation. Constant for the lifetime of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Real exponent of the power map.
    pub exponent: f32,
    /// Squared-magnitude escape threshold.
    pub max_dist_sq: f32,
    /// The additive constant `c` as `[re, im]`.
    pub c: [f32; 2],
    /// Starting value as `[re, im]`.
    pub z_start: [f32; 2],
    /// Trajectory sampling and coloring.
    pub trace: TraceConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            exponent: 2.0,
            max_dist_sq: 99_999.0,
            c: [0.0, 0.0],
            z_start: [0.0, 0.0],
            trace: TraceConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Load from a `.json`, `.yaml`, or `.yml` file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let config = match ext {
            "json" => serde_json::from_str(&text)?,
            "yaml" | "yml" => serde_yaml::from_str(&text)?,
            other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
        };
        tracing::info!(path = %path.display(), "loaded scene config");
        Ok(config)
    }

    /// The map parameters this configuration describes.
    pub fn map_params(&self) -> MapParams {
        MapParams {
            c: Complex::from(self.c),
            exponent: self.exponent,
            max_dist_sq: self.max_dist_sq,
        }
    }

    /// The configured starting value.
    pub fn start(&self) -> Complex {
        Complex::from(self.z_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_behavior() {
        let config = SceneConfig::default();
        assert_eq!(config.exponent, 2.0);
        assert_eq!(config.max_dist_sq, 99_999.0);
        assert_eq!(config.start(), Complex::ZERO);
        assert_eq!(config.map_params().c, Complex::ZERO);
        assert_eq!(config.trace.count, 128);
        assert_eq!(config.trace.colors(), (Color::RED, Color::BLUE));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: SceneConfig =
            serde_json::from_str(r#"{"exponent": 3.0, "c": [0.25, -0.1]}"#).unwrap();
        assert_eq!(config.exponent, 3.0);
        assert_eq!(config.map_params().c, Complex::new(0.25, -0.1));
        assert_eq!(config.max_dist_sq, 99_999.0);
        assert_eq!(config.trace.count, 128);
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let config: SceneConfig = serde_yaml::from_str("z_start: [0.5, 0.0]\ntrace:\n  count: 32\n").unwrap();
        assert_eq!(config.start(), Complex::real(0.5));
        assert_eq!(config.trace.count, 32);
        assert_eq!(config.exponent, 2.0);
    }

    #[test]
    fn json_round_trip() {
        let config = SceneConfig {
            exponent: 2.5,
            c: [0.3, 0.4],
            ..SceneConfig::default()
        };
        let text = serde_json::to_string(&config).unwrap();
        let back: SceneConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn load_rejects_unknown_extension() {
        let path = std::env::temp_dir().join("orbitmap_config_test.toml");
        fs::write(&path, "exponent = 2.0").unwrap();
        let err = SceneConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn load_reads_json_file() {
        let path = std::env::temp_dir().join("orbitmap_config_test.json");
        fs::write(&path, r#"{"max_dist_sq": 4.0}"#).unwrap();
        let config = SceneConfig::load(&path).unwrap();
        assert_eq!(config.max_dist_sq, 4.0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = SceneConfig::load(Path::new("/nonexistent/orbitmap.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
