//! Device scene: named visual layers plus the animation target buffer.
//!
//! The [`DeviceScene`] is the explicit mutable handle the render host passes
//! to every per-frame updater. UI-side code writes the resolved
//! [`VisualTargetState`] into it; the smoothing updater reads it once per
//! frame and moves the channel layer toward it.

pub mod geometry;
mod material;

use glam::Vec3;
pub use material::Material;

use crate::device::VisualTargetState;

// ---------------------------------------------------------------------------
// LayerKind
// ---------------------------------------------------------------------------

/// Identity of a device layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayerKind {
    /// p-type silicon body.
    Substrate,
    /// Thin gate insulator.
    Oxide,
    /// Polysilicon gate electrode.
    Gate,
    /// n+ source well.
    Source,
    /// n+ drain well.
    Drain,
    /// Inversion channel, animated by the smoothing updater.
    Channel,
    /// Depletion region, toggled immediately by the resolver.
    Depletion,
}

impl LayerKind {
    /// Every layer in build order.
    pub const ALL: [Self; 7] = [
        Self::Substrate,
        Self::Oxide,
        Self::Gate,
        Self::Source,
        Self::Drain,
        Self::Channel,
        Self::Depletion,
    ];

    /// Lowercase layer name as used in section content.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Substrate => "substrate",
            Self::Oxide => "oxide",
            Self::Gate => "gate",
            Self::Source => "source",
            Self::Drain => "drain",
            Self::Channel => "channel",
            Self::Depletion => "depletion",
        }
    }

    /// Parse a layer name. Unknown names yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Whether the layer is driven by the animation pipeline rather than by
    /// the static layer list of a visualization state.
    #[must_use]
    pub fn is_dynamic(self) -> bool {
        matches!(self, Self::Channel | Self::Depletion)
    }
}

// ---------------------------------------------------------------------------
// Layer
// ---------------------------------------------------------------------------

/// A single box-shaped visual object with mutable presentation state.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Which part of the device this is.
    pub kind: LayerKind,
    /// Box dimensions at unit scale.
    pub size: Vec3,
    /// Center position.
    pub position: Vec3,
    /// Non-uniform scale.
    pub scale: Vec3,
    /// Euler XYZ orientation in radians.
    pub rotation: Vec3,
    /// Whether the layer is drawn.
    pub visible: bool,
    /// Surface material.
    pub material: Material,
}

impl Layer {
    /// Build a layer with its palette material and rest transform. Dynamic
    /// layers start hidden.
    #[must_use]
    pub fn new(kind: LayerKind) -> Self {
        Self {
            kind,
            size: geometry::layer_size(kind),
            position: geometry::layer_position(kind),
            scale: Vec3::ONE,
            rotation: Vec3::ZERO,
            visible: !kind.is_dynamic(),
            material: Material::for_layer(kind),
        }
    }
}

// ---------------------------------------------------------------------------
// DeviceLayers
// ---------------------------------------------------------------------------

/// The device's part hierarchy. Channel and depletion are optional and
/// created lazily; the rest always exist.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceLayers {
    /// Silicon body.
    pub substrate: Layer,
    /// Gate insulator.
    pub oxide: Layer,
    /// Gate electrode.
    pub gate: Layer,
    /// Source well.
    pub source: Layer,
    /// Drain well.
    pub drain: Layer,
    /// Inversion channel, if built.
    pub channel: Option<Layer>,
    /// Depletion region, if built.
    pub depletion: Option<Layer>,
}

impl DeviceLayers {
    /// Look up a layer by kind.
    #[must_use]
    pub fn get(&self, kind: LayerKind) -> Option<&Layer> {
        match kind {
            LayerKind::Substrate => Some(&self.substrate),
            LayerKind::Oxide => Some(&self.oxide),
            LayerKind::Gate => Some(&self.gate),
            LayerKind::Source => Some(&self.source),
            LayerKind::Drain => Some(&self.drain),
            LayerKind::Channel => self.channel.as_ref(),
            LayerKind::Depletion => self.depletion.as_ref(),
        }
    }

    /// Mutable lookup by kind.
    pub fn get_mut(&mut self, kind: LayerKind) -> Option<&mut Layer> {
        match kind {
            LayerKind::Substrate => Some(&mut self.substrate),
            LayerKind::Oxide => Some(&mut self.oxide),
            LayerKind::Gate => Some(&mut self.gate),
            LayerKind::Source => Some(&mut self.source),
            LayerKind::Drain => Some(&mut self.drain),
            LayerKind::Channel => self.channel.as_mut(),
            LayerKind::Depletion => self.depletion.as_mut(),
        }
    }

    /// Mutable lookup by content name. Unknown or absent layers yield
    /// `None`.
    pub fn by_name_mut(&mut self, name: &str) -> Option<&mut Layer> {
        LayerKind::from_name(name).and_then(|kind| self.get_mut(kind))
    }

    /// Add the channel layer if it does not exist yet.
    pub fn ensure_channel(&mut self) -> &mut Layer {
        self.channel
            .get_or_insert_with(|| Layer::new(LayerKind::Channel))
    }

    /// Add the depletion layer if it does not exist yet.
    pub fn ensure_depletion(&mut self) -> &mut Layer {
        self.depletion
            .get_or_insert_with(|| Layer::new(LayerKind::Depletion))
    }

    /// Present layers in build order.
    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        [
            Some(&self.substrate),
            Some(&self.oxide),
            Some(&self.gate),
            Some(&self.source),
            Some(&self.drain),
            self.channel.as_ref(),
            self.depletion.as_ref(),
        ]
        .into_iter()
        .flatten()
    }

    /// Present layers in build order, mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Layer> {
        [
            Some(&mut self.substrate),
            Some(&mut self.oxide),
            Some(&mut self.gate),
            Some(&mut self.source),
            Some(&mut self.drain),
            self.channel.as_mut(),
            self.depletion.as_mut(),
        ]
        .into_iter()
        .flatten()
    }
}

// ---------------------------------------------------------------------------
// DeviceScene
// ---------------------------------------------------------------------------

/// Mutable state shared between UI-driven updates and the frame loop.
#[derive(Debug, Clone, Default)]
pub struct DeviceScene {
    /// Device layers; `None` until the visualization is mounted.
    pub layers: Option<DeviceLayers>,
    /// Latest resolved animation target. Overwritten wholesale on every
    /// parameter change, read once per frame.
    pub targets: VisualTargetState,
}

impl DeviceScene {
    /// Empty scene with no layers and resting targets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the device layers (scene teardown).
    pub fn clear(&mut self) {
        self.layers = None;
    }
}
