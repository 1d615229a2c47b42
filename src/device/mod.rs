//! Device state resolution.
//!
//! Turns the UI's live parameter map into an [`OperatingPoint`], a
//! [`DeviceState`] and finally the [`VisualTargetState`] the animation
//! driver converges toward. Everything here is pure apart from the two
//! immediate visibility helpers, which touch layers directly.

mod params;
mod resolver;
mod state;

pub use params::{ElectricalParameters, ParamValue, ParameterMap};
pub use resolver::{
    apply_depletion, apply_static_visibility, device_state, drain_current,
    normalized_current, resolve, OperatingPoint, Region,
};
pub use state::{
    current_glow, DeviceState, LegacyAnimation, VisualTargetState,
    MAX_EMISSIVE, MIN_CHANNEL_LENGTH, RESTING_GLOW,
};
