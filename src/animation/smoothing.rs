//! Exponential smoothing of the channel's visual state.
//!
//! Every frame each animated value covers a fixed fraction of its remaining
//! distance to the target: `current += (target - current) * alpha`. No
//! velocity is stored, so a retargeted value simply heads for the new
//! target from wherever it is.

use glam::Vec3;

use crate::device::VisualTargetState;
use crate::options::AnimationOptions;
use crate::scene::Layer;

/// Below this opacity a fading channel may be hidden.
pub const VISIBILITY_CUTOFF: f32 = 0.01;

/// Move `current` a fraction `alpha` of the way to `target`.
#[inline]
#[must_use]
pub fn smooth(current: f32, target: f32, alpha: f32) -> f32 {
    current + (target - current) * alpha
}

/// Component-wise [`smooth`] for colors.
#[inline]
#[must_use]
pub fn smooth_color(current: Vec3, target: Vec3, alpha: f32) -> Vec3 {
    current.lerp(target, alpha)
}

/// The channel's current interpolated values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedVisualState {
    /// Channel length factor along x.
    pub scale_x: f32,
    /// Emissive intensity.
    pub emissive_intensity: f32,
    /// Emissive color.
    pub emissive_color: Vec3,
    /// Material opacity.
    pub opacity: f32,
}

impl AnimatedVisualState {
    /// Read the values currently shown by `layer`.
    #[must_use]
    pub fn capture(layer: &Layer) -> Self {
        Self {
            scale_x: layer.scale.x,
            emissive_intensity: layer.material.emissive_intensity,
            emissive_color: layer.material.emissive,
            opacity: layer.material.opacity,
        }
    }

    /// Advance one frame toward `target`.
    pub fn step(
        &mut self,
        target: &VisualTargetState,
        options: &AnimationOptions,
    ) {
        self.scale_x =
            smooth(self.scale_x, target.scale_x, options.scale_smoothing);
        self.emissive_intensity = smooth(
            self.emissive_intensity,
            target.emissive_intensity,
            options.emissive_smoothing,
        );
        self.emissive_color = smooth_color(
            self.emissive_color,
            target.color.to_rgb(),
            options.color_smoothing,
        );
        let opacity_target = if target.channel_visible {
            1.0
        } else {
            options.hidden_opacity
        };
        self.opacity =
            smooth(self.opacity, opacity_target, options.opacity_smoothing);
    }

    /// Write the values back to `layer`. The layer stays visible while it
    /// is still fading or while the target wants it shown.
    pub fn apply(&self, layer: &mut Layer, channel_visible: bool) {
        layer.scale.x = self.scale_x;
        layer.material.emissive_intensity = self.emissive_intensity;
        layer.material.emissive = self.emissive_color;
        layer.material.opacity = self.opacity;
        layer.visible = self.opacity > VISIBILITY_CUTOFF || channel_visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{DeviceState, MAX_EMISSIVE};
    use crate::scene::LayerKind;

    #[test]
    fn smooth_covers_fixed_fraction() {
        assert!((smooth(0.0, 1.0, 0.12) - 0.12).abs() < 1e-7);
        assert!((smooth(1.0, 0.0, 0.14) - 0.86).abs() < 1e-7);
        assert_eq!(smooth(0.3, 0.3, 0.12), 0.3);
    }

    #[test]
    fn converges_monotonically_within_bound() {
        let alpha = 0.12_f32;
        let target = 1.0_f32;
        let mut current = 0.0_f32;
        let mut gap = (target - current).abs();
        // (1 - alpha)^n < 1e-3 needs n >= ln(1e-3) / ln(0.88), about 54
        let bound = (1e-3_f32.ln() / (1.0 - alpha).ln()).ceil() as usize;
        let mut steps = 0;
        while gap >= 1e-3 {
            current = smooth(current, target, alpha);
            let next_gap = (target - current).abs();
            assert!(next_gap < gap, "not monotonic at step {steps}");
            assert!(current <= target, "overshoot at step {steps}");
            gap = next_gap;
            steps += 1;
            assert!(steps <= bound, "no convergence within {bound} steps");
        }
        assert!(steps <= 55);
    }

    #[test]
    fn small_gap_converges_within_fifty_steps() {
        let mut current = 0.5_f32;
        for _ in 0..50 {
            current = smooth(current, 0.0, 0.12);
        }
        assert!(current < 1e-3);
    }

    #[test]
    fn step_moves_every_channel_toward_target() {
        let layer = Layer::new(LayerKind::Channel);
        let mut state = AnimatedVisualState::capture(&layer);
        let target = DeviceState::On {
            channel_length: 0.4,
            normalized_current: 1.0,
        }
        .target();
        let before = state;
        state.step(&target, &AnimationOptions::default());

        assert!(state.scale_x < before.scale_x && state.scale_x > 0.4);
        assert!(state.emissive_intensity > before.emissive_intensity);
        assert!(state.emissive_intensity < MAX_EMISSIVE);
        assert!(state.opacity > before.opacity && state.opacity < 1.0);
        let goal = target.color.to_rgb();
        assert!(
            state.emissive_color.distance(goal)
                < before.emissive_color.distance(goal)
        );
    }

    #[test]
    fn fading_channel_stays_visible_until_cutoff() {
        let mut layer = Layer::new(LayerKind::Channel);
        let mut state = AnimatedVisualState::capture(&layer);
        let target = DeviceState::Off.target();
        let options = AnimationOptions::default();

        state.step(&target, &options);
        state.apply(&mut layer, target.channel_visible);
        assert!(layer.visible);

        let mut frames = 1;
        while layer.visible {
            state.step(&target, &options);
            state.apply(&mut layer, target.channel_visible);
            frames += 1;
            assert!(frames < 200);
        }
        assert!(layer.material.opacity <= VISIBILITY_CUTOFF);
    }

    #[test]
    fn demanded_visibility_overrides_low_opacity() {
        let mut layer = Layer::new(LayerKind::Channel);
        layer.material.opacity = 0.0;
        let state = AnimatedVisualState::capture(&layer);
        state.apply(&mut layer, true);
        assert!(layer.visible);
        state.apply(&mut layer, false);
        assert!(!layer.visible);
    }
}
