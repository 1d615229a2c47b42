use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Highlight", inline)]
#[serde(default)]
/// Timing and shape of the highlight pulse.
pub struct HighlightOptions {
    /// Milliseconds between pulse updates.
    #[schemars(skip)]
    pub tick_interval_ms: u64,
    /// Total pulse length in milliseconds.
    #[schemars(title = "Pulse Length (ms)", range(min = 200, max = 5000), extend("step" = 100))]
    pub duration_ms: u64,
    /// Angular frequency of the oscillation in radians per millisecond.
    #[schemars(skip)]
    pub frequency: f32,
    /// Peak deviation of emissive intensity from its resting value.
    #[schemars(title = "Pulse Strength", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub amplitude: f32,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            tick_interval_ms: 40,
            duration_ms: 1600,
            frequency: 0.006,
            amplitude: 0.6,
        }
    }
}

impl HighlightOptions {
    /// Time between pulse updates.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Total pulse length.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}
