//! The transistor visualization component.
//!
//! [`TransistorViz`] ties the pieces together for one device view: it
//! builds the layers on a [`RenderHost`], attaches the smoothing updater,
//! resolves the declared state and live parameters into animation targets,
//! and owns the transient effects it starts. Every mutation goes through
//! the host handle passed in; the component keeps no scene references of
//! its own.

mod lifecycle;
mod scene_sync;

use crate::content::VisualizationState;
use crate::device::{
    device_state, DeviceState, ElectricalParameters, OperatingPoint,
    ParamValue, ParameterMap,
};
use crate::effects::EffectScheduler;
use crate::host::RenderHost;
use crate::options::Options;
use crate::scene::DeviceScene;

/// One device visualization bound to a declared state and a live parameter
/// map.
#[derive(Debug, Clone)]
pub struct TransistorViz {
    state: VisualizationState,
    params: ParameterMap,
    options: Options,
    effects: EffectScheduler,
    mounted: bool,
}

impl TransistorViz {
    /// Component for `state` with no live parameters yet.
    #[must_use]
    pub fn new(state: VisualizationState, options: Options) -> Self {
        let effects = EffectScheduler::new(
            options.highlight.clone(),
            options.animation.clone(),
        );
        Self {
            state,
            params: ParameterMap::default(),
            options,
            effects,
            mounted: false,
        }
    }

    /// The declared visualization state.
    #[must_use]
    pub fn state(&self) -> &VisualizationState {
        &self.state
    }

    /// The live parameter map.
    #[must_use]
    pub fn parameters(&self) -> &ParameterMap {
        &self.params
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Whether the component is mounted on a host.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Replace the declared state. When mounted, static visibility,
    /// camera, highlights, targets and legacy animations are all
    /// re-applied.
    pub fn set_state(
        &mut self,
        host: &mut RenderHost<DeviceScene>,
        state: VisualizationState,
    ) {
        self.state = state;
        if self.mounted {
            self.apply_state(host);
        }
    }

    /// Replace the whole parameter map. Only the animation target changes;
    /// the last write before a frame wins.
    pub fn set_parameters(
        &mut self,
        host: &mut RenderHost<DeviceScene>,
        params: ParameterMap,
    ) {
        self.params = params;
        if self.mounted {
            self.update_targets(host);
        }
    }

    /// Set one parameter, as a slider or toggle does.
    pub fn set_parameter(
        &mut self,
        host: &mut RenderHost<DeviceScene>,
        key: &str,
        value: impl Into<ParamValue>,
    ) {
        let _ = self.params.insert(key.to_owned(), value.into());
        if self.mounted {
            self.update_targets(host);
        }
    }

    /// Operating point for the current parameters, for UI readouts.
    #[must_use]
    pub fn operating_point(&self) -> OperatingPoint {
        OperatingPoint::from_parameters(&ElectricalParameters::from_map(
            &self.params,
        ))
    }

    /// Device state the current state and parameters resolve to.
    #[must_use]
    pub fn device_state(&self) -> DeviceState {
        device_state(&self.state, &self.params)
    }
}
