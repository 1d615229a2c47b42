//! Device state machine and the animation target it maps to.

use crate::util::color::Hsl;

/// Glow color of the channel at rest and for the legacy "on" state.
pub const RESTING_GLOW: Hsl = Hsl::new(0.4, 1.0, 0.5);

/// Peak emissive intensity at full normalized current.
pub const MAX_EMISSIVE: f32 = 4.0;

/// Smallest visual channel length factor (deep saturation).
pub const MIN_CHANNEL_LENGTH: f64 = 0.05;

/// Target the animation driver converges toward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualTargetState {
    /// Channel length factor along x, in [0.05, 1].
    pub scale_x: f32,
    /// Channel emissive intensity, in [0, 4].
    pub emissive_intensity: f32,
    /// Channel emissive color.
    pub color: Hsl,
    /// Whether the channel should fade in (true) or out (false).
    pub channel_visible: bool,
    /// Whether the depletion region is shown.
    pub depletion_visible: bool,
}

impl Default for VisualTargetState {
    fn default() -> Self {
        Self {
            scale_x: 1.0,
            emissive_intensity: 0.0,
            color: RESTING_GLOW,
            channel_visible: false,
            depletion_visible: false,
        }
    }
}

/// Conduction state of the device.
///
/// Transitions are level-triggered: the state is recomputed from scratch on
/// every parameter update, so re-entering a state yields the same target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeviceState {
    /// No inversion channel; the depletion region is shown.
    Off,
    /// Channel formed.
    On {
        /// Visual channel length factor in [0.05, 1].
        channel_length: f64,
        /// Drain current relative to its saturation value, in [0, 1].
        normalized_current: f64,
    },
}

impl DeviceState {
    /// Whether a channel is formed.
    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On { .. })
    }

    /// Animation target for this state.
    #[must_use]
    pub fn target(self) -> VisualTargetState {
        match self {
            Self::Off => VisualTargetState {
                depletion_visible: true,
                ..VisualTargetState::default()
            },
            Self::On {
                channel_length,
                normalized_current,
            } => VisualTargetState {
                scale_x: channel_length as f32,
                // sqrt lifts low currents into visible range
                emissive_intensity: normalized_current.sqrt() as f32
                    * MAX_EMISSIVE,
                color: current_glow(normalized_current),
                channel_visible: true,
                depletion_visible: false,
            },
        }
    }
}

/// Green at zero current, through yellow, to red at full current.
#[must_use]
pub fn current_glow(normalized_current: f64) -> Hsl {
    Hsl::new(0.35 - normalized_current as f32 * 0.25, 1.0, 0.5)
}

/// Named animations carried by older content that predates the voltage
/// model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyAnimation {
    /// Show the device switched off.
    OffState,
    /// Show the channel forming, with a fade-in.
    OnState,
    /// Slowly spin the whole device.
    RotateIdle,
}

impl LegacyAnimation {
    /// Parse a content animation name. Unknown names yield `None`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "off-state" => Some(Self::OffState),
            "on-state" => Some(Self::OnState),
            "rotate-idle" => Some(Self::RotateIdle),
            _ => None,
        }
    }

    /// Device state the animation stands for, if it names one.
    #[must_use]
    pub fn device_state(self) -> Option<DeviceState> {
        match self {
            Self::OffState => Some(DeviceState::Off),
            Self::OnState => Some(DeviceState::On {
                channel_length: 1.0,
                normalized_current: 0.0,
            }),
            Self::RotateIdle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_target_shows_depletion_only() {
        let t = DeviceState::Off.target();
        assert!(!t.channel_visible);
        assert!(t.depletion_visible);
        assert_eq!(t.emissive_intensity, 0.0);
        assert_eq!(t.scale_x, 1.0);
    }

    #[test]
    fn full_current_glows_red_at_peak() {
        let t = DeviceState::On {
            channel_length: 0.5,
            normalized_current: 1.0,
        }
        .target();
        assert_eq!(t.emissive_intensity, MAX_EMISSIVE);
        assert!((t.color.h - 0.1).abs() < 1e-6);
        assert_eq!(t.scale_x, 0.5);
    }

    #[test]
    fn legacy_names() {
        assert_eq!(
            LegacyAnimation::parse("on-state"),
            Some(LegacyAnimation::OnState)
        );
        assert_eq!(LegacyAnimation::parse("spin"), None);
        assert!(LegacyAnimation::OnState.device_state().unwrap().is_on());
        assert!(LegacyAnimation::RotateIdle.device_state().is_none());
    }
}
