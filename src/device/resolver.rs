//! Maps declared visualization state and live electrical parameters to a
//! device state and its animation target.
//!
//! The current model is the long-channel square law, used as a visual
//! analogy rather than a simulation:
//!
//! - cutoff, `Vov <= 0`: no channel
//! - triode, `Vds < Vov`: `Id = k (Vov Vds - Vds^2 / 2)`
//! - saturation, `Vds >= Vov`: `Id = k Vov^2 / 2`
//!
//! `Id` is normalized against the saturation current for the same overdrive
//! so that the channel glow reads the same across devices with different
//! `k`.

use super::params::{ElectricalParameters, ParameterMap};
use super::state::{
    DeviceState, LegacyAnimation, VisualTargetState, MIN_CHANNEL_LENGTH,
};
use crate::content::VisualizationState;
use crate::scene::DeviceLayers;

/// Floor on `Vov^2` in the normalization denominator.
const MIN_VOV_SQUARED: f64 = 0.01;

/// Operating region of the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Below threshold.
    Cutoff,
    /// Linear region, `Vds < Vov`.
    Triode,
    /// Pinched-off channel, `Vds >= Vov`.
    Saturation,
}

/// Derived quantities for one set of parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    /// Gate-to-source voltage.
    pub vgs: f64,
    /// Drain-to-source voltage.
    pub vds: f64,
    /// Overdrive voltage.
    pub vov: f64,
    /// Drain current estimate (zero in cutoff).
    pub id: f64,
    /// Drain current relative to saturation, in [0, 1].
    pub normalized_id: f64,
    /// Operating region.
    pub region: Region,
}

impl OperatingPoint {
    /// Evaluate the square-law model.
    #[must_use]
    pub fn from_parameters(params: &ElectricalParameters) -> Self {
        let vgs = params.vgs();
        let vds = params.vds();
        let vov = params.vov();

        // NaN overdrive reads as cutoff
        if vov.is_nan() || vov <= 0.0 {
            return Self {
                vgs,
                vds,
                vov,
                id: 0.0,
                normalized_id: 0.0,
                region: Region::Cutoff,
            };
        }

        let region = if vds < vov {
            Region::Triode
        } else {
            Region::Saturation
        };
        let id = drain_current(params.k, vov, vds);
        Self {
            vgs,
            vds,
            vov,
            id,
            normalized_id: normalized_current(id, params.k, vov),
            region,
        }
    }

    /// Visual channel length factor: 1 until pinch-off, then `Vov / Vds`.
    #[must_use]
    pub fn channel_length(&self) -> f64 {
        match self.region {
            Region::Cutoff | Region::Triode => 1.0,
            Region::Saturation => {
                let ratio = self.vov / self.vds;
                if ratio.is_finite() {
                    ratio.clamp(MIN_CHANNEL_LENGTH, 1.0)
                } else {
                    1.0
                }
            }
        }
    }

    /// Device state this operating point falls into.
    #[must_use]
    pub fn device_state(&self) -> DeviceState {
        match self.region {
            Region::Cutoff => DeviceState::Off,
            Region::Triode | Region::Saturation => DeviceState::On {
                channel_length: self.channel_length(),
                normalized_current: self.normalized_id,
            },
        }
    }
}

/// Square-law drain current for a conducting device.
#[must_use]
pub fn drain_current(k: f64, vov: f64, vds: f64) -> f64 {
    if vds < vov {
        k * (vov * vds - 0.5 * vds * vds)
    } else {
        0.5 * k * vov * vov
    }
}

/// `Id` relative to the saturation current, clamped to [0, 1]. Degenerate
/// inputs (zero `k`, overflow) read as no current.
#[must_use]
pub fn normalized_current(id: f64, k: f64, vov: f64) -> f64 {
    let n = id / (0.5 * k * (vov * vov).max(MIN_VOV_SQUARED));
    if n.is_finite() {
        n.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Device state for a visualization state and its live parameters.
///
/// Sections without electrical parameters may still name a legacy on/off
/// animation; that name then decides the state. Otherwise the voltage model
/// decides.
#[must_use]
pub fn device_state(
    state: &VisualizationState,
    params: &ParameterMap,
) -> DeviceState {
    if !ElectricalParameters::present_in(params) {
        let legacy = state
            .animation
            .as_deref()
            .and_then(LegacyAnimation::parse)
            .and_then(LegacyAnimation::device_state);
        if let Some(legacy) = legacy {
            return legacy;
        }
    }
    let electrical = ElectricalParameters::from_map(params);
    OperatingPoint::from_parameters(&electrical).device_state()
}

/// Animation target for a visualization state and its live parameters.
#[must_use]
pub fn resolve(
    state: &VisualizationState,
    params: &ParameterMap,
) -> VisualTargetState {
    device_state(state, params).target()
}

/// Show exactly the static layers the state lists and hide the rest.
/// Channel and depletion are left to the animation pipeline; unknown names
/// are ignored.
pub fn apply_static_visibility(
    state: &VisualizationState,
    layers: &mut DeviceLayers,
) {
    for layer in layers.iter_mut().filter(|l| !l.kind.is_dynamic()) {
        layer.visible = false;
    }
    for name in state.layers.iter().flatten() {
        match layers.by_name_mut(name) {
            Some(layer) if !layer.kind.is_dynamic() => layer.visible = true,
            Some(_) => {}
            None => log::debug!("Ignoring unknown layer {name:?}"),
        }
    }
}

/// Toggle the depletion region immediately; it is boolean and never faded.
pub fn apply_depletion(target: &VisualTargetState, layers: &mut DeviceLayers) {
    if let Some(depletion) = layers.depletion.as_mut() {
        depletion.visible = target.depletion_visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::ParamValue;
    use crate::scene::geometry::build_mosfet;

    fn params(vg: f64, vd: f64, vs: f64) -> ParameterMap {
        [("Vg", vg), ("Vd", vd), ("Vs", vs)]
            .into_iter()
            .map(|(k, v)| (k.to_owned(), ParamValue::Number(v)))
            .collect()
    }

    fn point(vg: f64, vd: f64) -> OperatingPoint {
        OperatingPoint::from_parameters(&ElectricalParameters {
            vg,
            vd,
            ..ElectricalParameters::default()
        })
    }

    #[test]
    fn cutoff_regardless_of_drain() {
        for vd in [-5.0, 0.0, 0.3, 5.0, 100.0] {
            let t = resolve(&VisualizationState::default(), &params(0.7, vd, 0.0));
            assert!(!t.channel_visible);
            assert!(t.depletion_visible);
            assert_eq!(t.emissive_intensity, 0.0);
            assert_eq!(t.scale_x, 1.0);
        }
    }

    #[test]
    fn gate_off_scenario() {
        let op = point(0.0, 5.0);
        assert!((op.vov + 0.7).abs() < 1e-12);
        assert_eq!(op.region, Region::Cutoff);
        let t = resolve(&VisualizationState::default(), &params(0.0, 5.0, 0.0));
        assert_eq!(t, DeviceState::Off.target());
    }

    #[test]
    fn triode_scenario() {
        let op = point(5.0, 0.2);
        assert_eq!(op.region, Region::Triode);
        assert!((op.vov - 4.3).abs() < 1e-12);
        assert!((op.id - 1.008).abs() < 1e-9);
        assert!((op.normalized_id - 0.090_86).abs() < 1e-4);

        let t = resolve(&VisualizationState::default(), &params(5.0, 0.2, 0.0));
        assert!(t.channel_visible);
        assert!(!t.depletion_visible);
        assert_eq!(t.scale_x, 1.0);
        assert!((t.emissive_intensity - 1.2057).abs() < 1e-3);
    }

    #[test]
    fn saturation_shrinks_channel() {
        let op = point(2.7, 4.0);
        assert_eq!(op.region, Region::Saturation);
        assert!((op.channel_length() - 0.5).abs() < 1e-12);
        assert!((op.normalized_id - 1.0).abs() < 1e-12);

        // deep saturation clamps at the floor
        let deep = point(0.71, 50.0);
        assert_eq!(deep.channel_length(), MIN_CHANNEL_LENGTH);
    }

    #[test]
    fn pinch_off_boundary_is_saturation() {
        let op = OperatingPoint::from_parameters(&ElectricalParameters {
            vg: 3.0,
            vd: 2.0,
            vth: 1.0,
            ..ElectricalParameters::default()
        });
        assert_eq!(op.region, Region::Saturation);
        assert!((op.channel_length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn normalized_current_stays_bounded() {
        let values = [
            -1e300, -1e6, -5.0, -1e-9, 0.0, 1e-12, 1e-3, 0.7, 5.0, 1e6, 1e300,
        ];
        for &vg in &values {
            for &vd in &values {
                for &k in &[-2.0, 0.0, 1e-12, 1.2, 1e300] {
                    let op = OperatingPoint::from_parameters(
                        &ElectricalParameters {
                            vg,
                            vd,
                            k,
                            ..ElectricalParameters::default()
                        },
                    );
                    assert!(
                        (0.0..=1.0).contains(&op.normalized_id),
                        "vg={vg} vd={vd} k={k} -> {}",
                        op.normalized_id
                    );
                    let t = op.device_state().target();
                    assert!(t.scale_x.is_finite());
                    assert!((0.05..=1.0).contains(&t.scale_x));
                    assert!((0.0..=4.0).contains(&t.emissive_intensity));
                }
            }
        }
    }

    #[test]
    fn tiny_overdrive_does_not_blow_up() {
        let op = point(0.7 + 1e-12, 1e-13);
        assert!(op.normalized_id.is_finite());
        assert!((0.0..=1.0).contains(&op.normalized_id));
    }

    #[test]
    fn resolve_is_idempotent() {
        let state = VisualizationState::default();
        let p = params(3.3, 1.1, 0.2);
        assert_eq!(resolve(&state, &p), resolve(&state, &p));
    }

    #[test]
    fn legacy_name_applies_without_parameters() {
        let state = VisualizationState {
            animation: Some("on-state".to_owned()),
            ..VisualizationState::default()
        };
        assert!(resolve(&state, &ParameterMap::default()).channel_visible);
        // with live voltages the model wins
        assert!(!resolve(&state, &params(0.0, 1.0, 0.0)).channel_visible);
    }

    #[test]
    fn static_visibility_follows_layer_list() {
        let mut layers = build_mosfet();
        let _ = layers.ensure_channel();
        layers.channel.as_mut().unwrap().visible = true;
        let state = VisualizationState {
            layers: Some(vec![
                "gate".to_owned(),
                "channel".to_owned(),
                "via".to_owned(),
            ]),
            ..VisualizationState::default()
        };
        apply_static_visibility(&state, &mut layers);
        assert!(layers.gate.visible);
        assert!(!layers.substrate.visible);
        assert!(!layers.drain.visible);
        // animator-owned layer untouched
        assert!(layers.channel.as_ref().unwrap().visible);
    }

    #[test]
    fn listed_dynamic_layers_stay_with_the_animator() {
        let mut layers = build_mosfet();
        let _ = layers.ensure_channel();
        let state = VisualizationState {
            layers: Some(vec!["channel".to_owned(), "depletion".to_owned()]),
            ..VisualizationState::default()
        };
        apply_static_visibility(&state, &mut layers);
        // hidden channel is not forced on; absent depletion is skipped
        assert!(!layers.channel.as_ref().unwrap().visible);
        assert!(layers.depletion.is_none());
        assert!(layers.iter().all(|l| !l.visible));
    }

    #[test]
    fn missing_layer_list_hides_all_static_layers() {
        let mut layers = build_mosfet();
        apply_static_visibility(&VisualizationState::default(), &mut layers);
        assert!(layers.iter().all(|l| !l.visible));
    }

    #[test]
    fn depletion_toggles_immediately() {
        let mut layers = build_mosfet();
        apply_depletion(&DeviceState::Off.target(), &mut layers);
        assert!(layers.depletion.is_none());

        let _ = layers.ensure_depletion();
        apply_depletion(&DeviceState::Off.target(), &mut layers);
        assert!(layers.depletion.as_ref().unwrap().visible);
    }
}
