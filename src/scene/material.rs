//! Phong-style surface materials for the device layers.

use glam::Vec3;

use super::LayerKind;
use crate::util::color::hex_rgb;

/// Surface material of a single layer.
///
/// Mirrors the parameters of a Phong material in a WebGL scene graph:
/// diffuse color, specular highlight, emissive glow and alpha.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Diffuse color.
    pub color: Vec3,
    /// Specular highlight color.
    pub specular: Vec3,
    /// Specular exponent.
    pub shininess: f32,
    /// Emissive (self-lit) color.
    pub emissive: Vec3,
    /// Multiplier applied to [`Self::emissive`].
    pub emissive_intensity: f32,
    /// Alpha in [0, 1]; only honored when [`Self::transparent`] is set.
    pub opacity: f32,
    /// Whether the material is alpha-blended.
    pub transparent: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            specular: hex_rgb(0x11_11_11),
            shininess: 30.0,
            emissive: Vec3::ZERO,
            emissive_intensity: 1.0,
            opacity: 1.0,
            transparent: false,
        }
    }
}

impl Material {
    fn translucent(color: u32, opacity: f32, shininess: f32) -> Self {
        Self {
            color: hex_rgb(color),
            shininess,
            opacity,
            transparent: true,
            ..Self::default()
        }
    }

    /// Palette entry for a layer.
    #[must_use]
    pub fn for_layer(kind: LayerKind) -> Self {
        match kind {
            LayerKind::Substrate => Self::translucent(0x4a_90_e2, 0.7, 30.0),
            LayerKind::Oxide => Self::translucent(0xff_6b_6b, 0.5, 50.0),
            LayerKind::Gate => Self {
                color: hex_rgb(0xff_d9_3d),
                specular: hex_rgb(0xff_aa_00),
                shininess: 80.0,
                ..Self::default()
            },
            LayerKind::Source | LayerKind::Drain => {
                Self::translucent(0x6b_cf_7f, 0.8, 40.0)
            }
            LayerKind::Channel => Self {
                emissive: hex_rgb(0x95_e1_d3),
                emissive_intensity: 0.3,
                ..Self::translucent(0x95_e1_d3, 0.6, 30.0)
            },
            LayerKind::Depletion => Self::translucent(0x9b_59_b6, 0.4, 30.0),
        }
    }

}
