use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Per-frame smoothing factors and effect step sizes.
///
/// Each smoothing factor is the fraction of the remaining distance to the
/// target covered per frame.
pub struct AnimationOptions {
    /// Smoothing factor for the channel length.
    #[schemars(title = "Length Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub scale_smoothing: f32,
    /// Smoothing factor for the channel glow intensity.
    #[schemars(title = "Glow Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub emissive_smoothing: f32,
    /// Smoothing factor for the channel glow color.
    #[schemars(title = "Color Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub color_smoothing: f32,
    /// Smoothing factor for the channel fade.
    #[schemars(title = "Fade Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub opacity_smoothing: f32,
    /// Opacity the channel fades toward when it should disappear.
    #[schemars(skip)]
    pub hidden_opacity: f32,
    /// Radians added to the idle rotation each frame.
    #[schemars(title = "Idle Spin", range(min = 0.0, max = 0.05), extend("step" = 0.001))]
    pub idle_rotation_step: f32,
    /// Opacity added per frame by the legacy fade-in.
    #[schemars(skip)]
    pub fade_in_step: f32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            scale_smoothing: 0.14,
            emissive_smoothing: 0.12,
            color_smoothing: 0.12,
            opacity_smoothing: 0.12,
            hidden_opacity: 0.0,
            idle_rotation_step: 0.002,
            fade_in_step: 0.02,
        }
    }
}
