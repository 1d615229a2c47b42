//! Static MOSFET cross-section geometry.
//!
//! Every layer is an axis-aligned box. Dimensions are in scene units with
//! the substrate top surface at y = 0; source and drain sit at the two ends
//! of the channel along x.

use glam::Vec3;

use super::{DeviceLayers, Layer, LayerKind};

/// Box dimensions (width, height, depth) of a layer.
#[must_use]
pub fn layer_size(kind: LayerKind) -> Vec3 {
    match kind {
        LayerKind::Substrate => Vec3::new(8.0, 1.0, 4.0),
        LayerKind::Oxide => Vec3::new(3.0, 0.1, 4.0),
        LayerKind::Gate => Vec3::new(3.0, 0.4, 4.0),
        LayerKind::Source | LayerKind::Drain => Vec3::new(1.5, 0.8, 4.0),
        LayerKind::Channel => Vec3::new(3.0, 0.2, 4.0),
        LayerKind::Depletion => Vec3::new(3.0, 0.3, 4.0),
    }
}

/// Center position of a layer.
#[must_use]
pub fn layer_position(kind: LayerKind) -> Vec3 {
    match kind {
        LayerKind::Substrate => Vec3::new(0.0, -0.5, 0.0),
        LayerKind::Oxide => Vec3::new(0.0, 0.05, 0.0),
        LayerKind::Gate => Vec3::new(0.0, 0.3, 0.0),
        LayerKind::Source => Vec3::new(-3.0, -0.1, 0.0),
        LayerKind::Drain => Vec3::new(3.0, -0.1, 0.0),
        LayerKind::Channel => Vec3::new(0.0, -0.05, 0.0),
        LayerKind::Depletion => Vec3::new(0.0, -0.15, 0.0),
    }
}

/// Build the always-present part of the device. Channel and depletion
/// layers are added on demand with [`DeviceLayers::ensure_channel`] and
/// [`DeviceLayers::ensure_depletion`].
#[must_use]
pub fn build_mosfet() -> DeviceLayers {
    DeviceLayers {
        substrate: Layer::new(LayerKind::Substrate),
        oxide: Layer::new(LayerKind::Oxide),
        gate: Layer::new(LayerKind::Gate),
        source: Layer::new(LayerKind::Source),
        drain: Layer::new(LayerKind::Drain),
        channel: None,
        depletion: None,
    }
}
