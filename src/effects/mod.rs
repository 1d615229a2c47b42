//! Time-based visual effects layered over the smoothing pipeline.
//!
//! Highlights run as host timers on their own fixed tick; idle rotation and
//! the legacy fade-in run as per-frame updaters. The [`EffectScheduler`]
//! owns the bookkeeping that keeps these effects from stacking: one pulse
//! per layer, one rotation, one fade.

mod fade;
mod pulse;
mod rotation;

pub use fade::FadeIn;
pub use pulse::HighlightPulse;
pub use rotation::IdleRotation;
use rustc_hash::FxHashMap;

use crate::host::{RenderHost, TimerHandle, UpdaterKind};
use crate::options::{AnimationOptions, HighlightOptions};
use crate::scene::{DeviceScene, LayerKind};

#[derive(Debug, Clone, Copy)]
struct ActivePulse {
    handle: TimerHandle,
    base: f32,
}

/// Starts, restarts and cancels effects on a device host.
#[derive(Debug, Clone, Default)]
pub struct EffectScheduler {
    highlight: HighlightOptions,
    animation: AnimationOptions,
    pulses: FxHashMap<LayerKind, ActivePulse>,
}

impl EffectScheduler {
    /// Scheduler using the given highlight and animation settings.
    #[must_use]
    pub fn new(highlight: HighlightOptions, animation: AnimationOptions) -> Self {
        Self {
            highlight,
            animation,
            pulses: FxHashMap::default(),
        }
    }

    /// Pulse one layer's glow for the configured duration.
    ///
    /// A pulse already running on the same layer is cancelled first and the
    /// new one keeps its base, so repeated triggers never drift the
    /// resting intensity. Returns `false` when the layer does not exist.
    pub fn highlight(
        &mut self,
        host: &mut RenderHost<DeviceScene>,
        kind: LayerKind,
    ) -> bool {
        self.prune(host);
        let previous = self.pulses.remove(&kind);
        if let Some(previous) = previous {
            let _ = host.timers_mut().cancel(previous.handle);
        }
        let Some(layer) = host
            .scene_mut()
            .layers
            .as_mut()
            .and_then(|l| l.get_mut(kind))
        else {
            return false;
        };
        let base = previous.map_or(layer.material.emissive_intensity, |p| p.base);
        layer.material.emissive_intensity = base;

        let pulse = HighlightPulse::new(kind, base, &self.highlight);
        let handle = host.timers_mut().set_interval(
            self.highlight.tick_interval(),
            Some(self.highlight.duration()),
            pulse,
        );
        let _ = self.pulses.insert(kind, ActivePulse { handle, base });
        log::debug!("Highlighting {}", kind.name());
        true
    }

    /// Highlight every named layer. Unknown or absent layers are skipped.
    pub fn highlight_names(
        &mut self,
        host: &mut RenderHost<DeviceScene>,
        names: &[String],
    ) {
        for name in names {
            let kind = host
                .scene_mut()
                .layers
                .as_mut()
                .and_then(|l| l.by_name_mut(name))
                .map(|layer| layer.kind);
            match kind {
                Some(kind) => {
                    let _ = self.highlight(host, kind);
                }
                None => log::debug!("Cannot highlight {name:?}: no such layer"),
            }
        }
    }

    /// Stop every running pulse and restore each layer's base intensity.
    pub fn cancel_pulses(&mut self, host: &mut RenderHost<DeviceScene>) {
        for (kind, pulse) in self.pulses.drain() {
            if !host.timers_mut().cancel(pulse.handle) {
                continue;
            }
            if let Some(layer) = host
                .scene_mut()
                .layers
                .as_mut()
                .and_then(|l| l.get_mut(kind))
            {
                layer.material.emissive_intensity = pulse.base;
            }
        }
    }

    /// Layers with a pulse still running.
    #[must_use]
    pub fn active_pulses(&self, host: &RenderHost<DeviceScene>) -> usize {
        self.pulses
            .values()
            .filter(|p| host.timers().is_active(p.handle))
            .count()
    }

    /// Start the idle spin unless it is already running.
    pub fn start_idle_rotation(
        &self,
        host: &mut RenderHost<DeviceScene>,
    ) -> bool {
        host.updaters_mut().register(
            UpdaterKind::IdleRotation,
            IdleRotation::new(self.animation.idle_rotation_step),
        )
    }

    /// Stop the idle spin. Returns whether it was running.
    pub fn stop_idle_rotation(
        &self,
        host: &mut RenderHost<DeviceScene>,
    ) -> bool {
        host.updaters_mut().unregister(UpdaterKind::IdleRotation)
    }

    /// Restart the channel fade-in from fully transparent.
    pub fn fade_in(&self, host: &mut RenderHost<DeviceScene>) {
        if let Some(channel) = host
            .scene_mut()
            .layers
            .as_mut()
            .and_then(|l| l.channel.as_mut())
        {
            channel.material.opacity = 0.0;
            channel.visible = true;
        }
        let _ = host.updaters_mut().unregister(UpdaterKind::FadeIn);
        let _ = host.updaters_mut().register(
            UpdaterKind::FadeIn,
            FadeIn::new(self.animation.fade_in_step),
        );
    }

    /// Stop a running fade-in. Returns whether one was running.
    pub fn stop_fade_in(&self, host: &mut RenderHost<DeviceScene>) -> bool {
        host.updaters_mut().unregister(UpdaterKind::FadeIn)
    }

    /// Stop everything this scheduler started.
    pub fn stop_all(&mut self, host: &mut RenderHost<DeviceScene>) {
        self.cancel_pulses(host);
        let _ = self.stop_idle_rotation(host);
        let _ = self.stop_fade_in(host);
    }

    fn prune(&mut self, host: &RenderHost<DeviceScene>) {
        self.pulses.retain(|_, p| host.timers().is_active(p.handle));
    }
}
