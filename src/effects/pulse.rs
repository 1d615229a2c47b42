//! Highlight pulse: a short oscillation of a layer's emissive intensity.

use web_time::Duration;

use crate::host::TimerTask;
use crate::options::HighlightOptions;
use crate::scene::{DeviceScene, LayerKind};

/// Timer task pulsing one layer's glow around a fixed base.
#[derive(Debug, Clone)]
pub struct HighlightPulse {
    layer: LayerKind,
    base: f32,
    frequency: f32,
    amplitude: f32,
}

impl HighlightPulse {
    /// Pulse `layer` around `base`, which is restored exactly on expiry.
    #[must_use]
    pub fn new(layer: LayerKind, base: f32, options: &HighlightOptions) -> Self {
        Self {
            layer,
            base,
            frequency: options.frequency,
            amplitude: options.amplitude,
        }
    }

    /// Emissive intensity at timeline time `now`, never negative.
    #[must_use]
    pub fn intensity_at(&self, now: Duration) -> f32 {
        let phase = now.as_secs_f64() * 1000.0 * f64::from(self.frequency);
        (self.base + phase.sin() as f32 * self.amplitude).max(0.0)
    }

    fn set(&self, scene: &mut DeviceScene, intensity: f32) {
        if let Some(layer) =
            scene.layers.as_mut().and_then(|l| l.get_mut(self.layer))
        {
            layer.material.emissive_intensity = intensity;
        }
    }
}

impl TimerTask<DeviceScene> for HighlightPulse {
    fn tick(&mut self, scene: &mut DeviceScene, now: Duration) {
        let intensity = self.intensity_at(now);
        self.set(scene, intensity);
    }

    fn expire(&mut self, scene: &mut DeviceScene) {
        log::debug!("Highlight on {} expired", self.layer.name());
        self.set(scene, self.base);
    }
}
