//! Tunable animation, highlight and camera settings with TOML preset
//! support.
//!
//! All sub-structs use `#[serde(default)]` so a preset only needs to name
//! the values it overrides.

mod animation;
mod camera;
mod highlight;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
pub use highlight::HighlightOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SemivizError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Smoothing and effect step sizes.
    pub animation: AnimationOptions,
    /// Highlight pulse shape.
    pub highlight: HighlightOptions,
    /// Initial camera.
    pub camera: CameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, SemivizError> {
        toml::from_str(content)
            .map_err(|e| SemivizError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, SemivizError> {
        let content = std::fs::read_to_string(path).map_err(SemivizError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), SemivizError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SemivizError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SemivizError::Io)?;
        }
        std::fs::write(path, content).map_err(SemivizError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[highlight]
duration_ms = 800
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.highlight.duration_ms, 800);
        assert_eq!(opts.highlight.tick_interval_ms, 40);
        assert_eq!(opts.animation.scale_smoothing, 0.14);
        assert_eq!(opts.camera.fovy, 45.0);
    }

    #[test]
    fn bad_toml_is_an_options_error() {
        assert!(matches!(
            Options::from_toml("[animation]\nscale_smoothing = \"fast\""),
            Err(SemivizError::OptionsParse(_))
        ));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir()
            .join(format!("semiviz-options-test-{}", std::process::id()));
        let path = dir.join("preset.toml");
        let mut opts = Options::default();
        opts.animation.idle_rotation_step = 0.01;
        opts.save(&path).unwrap();
        assert_eq!(Options::load(&path).unwrap(), opts);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("animation"));
        assert!(props.contains_key("highlight"));
        assert!(props.contains_key("camera"));

        let highlight = &props["highlight"]["properties"];
        assert!(highlight.get("amplitude").is_some());
        assert!(highlight.get("frequency").is_none());
    }
}
