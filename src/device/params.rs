//! Electrical parameters and the live parameter map.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A single control value as delivered by the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Toggle state.
    Bool(bool),
    /// Slider value.
    Number(f64),
    /// Free-form text, parsed as a number on demand.
    Text(String),
}

impl ParamValue {
    /// Numeric reading of the value. Booleans read as 1/0; text is parsed.
    /// Non-numeric or non-finite values yield `None`.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            Self::Bool(b) => f64::from(u8::from(*b)),
            Self::Number(x) => *x,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for ParamValue {
    fn from(x: f64) -> Self {
        Self::Number(x)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Live control values keyed by control id.
pub type ParameterMap = FxHashMap<String, ParamValue>;

/// Terminal voltages and model constants of the device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectricalParameters {
    /// Gate voltage.
    pub vg: f64,
    /// Drain voltage.
    pub vd: f64,
    /// Source voltage.
    pub vs: f64,
    /// Threshold voltage.
    pub vth: f64,
    /// Transconductance parameter.
    pub k: f64,
}

impl Default for ElectricalParameters {
    fn default() -> Self {
        Self {
            vg: 0.0,
            vd: 0.0,
            vs: 0.0,
            vth: Self::DEFAULT_VTH,
            k: Self::DEFAULT_K,
        }
    }
}

const KEYS: [&str; 5] = ["Vg", "Vd", "Vs", "Vth", "k"];

impl ElectricalParameters {
    /// Threshold voltage used when the map has none.
    pub const DEFAULT_VTH: f64 = 0.7;
    /// Transconductance used when the map has none.
    pub const DEFAULT_K: f64 = 1.2;

    /// Read parameters from a control map. Keys match exactly, then in
    /// lower case, then in upper case. Missing or non-numeric entries fall
    /// back to the defaults.
    #[must_use]
    pub fn from_map(map: &ParameterMap) -> Self {
        let d = Self::default();
        Self {
            vg: lookup(map, "Vg").unwrap_or(d.vg),
            vd: lookup(map, "Vd").unwrap_or(d.vd),
            vs: lookup(map, "Vs").unwrap_or(d.vs),
            vth: lookup(map, "Vth").unwrap_or(d.vth),
            k: lookup(map, "k").unwrap_or(d.k),
        }
    }

    /// Whether the map carries any electrical key at all, i.e. whether the
    /// section is driven by the continuous voltage model.
    #[must_use]
    pub fn present_in(map: &ParameterMap) -> bool {
        KEYS.iter().any(|key| {
            candidates(key).iter().any(|k| map.contains_key(k.as_str()))
        })
    }

    /// Gate-to-source voltage.
    #[must_use]
    pub fn vgs(&self) -> f64 {
        self.vg - self.vs
    }

    /// Drain-to-source voltage.
    #[must_use]
    pub fn vds(&self) -> f64 {
        self.vd - self.vs
    }

    /// Overdrive voltage, `Vgs - Vth`.
    #[must_use]
    pub fn vov(&self) -> f64 {
        self.vgs() - self.vth
    }
}

fn candidates(key: &str) -> [String; 3] {
    [key.to_owned(), key.to_lowercase(), key.to_uppercase()]
}

fn lookup(map: &ParameterMap, key: &str) -> Option<f64> {
    candidates(key)
        .iter()
        .find_map(|k| map.get(k.as_str()))
        .and_then(ParamValue::as_number)
}
