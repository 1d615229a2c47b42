//! Color conversions shared by the material palette and the device state
//! resolver.
//!
//! Colors are carried as linear `Vec3` RGB triples in [0, 1]. Targets that
//! sweep through hues (green → yellow → red with rising drain current) are
//! expressed in HSL and converted once when applied.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Hue/saturation/lightness triple, each component in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue as a fraction of a full turn.
    pub h: f32,
    /// Saturation.
    pub s: f32,
    /// Lightness.
    pub l: f32,
}

impl Hsl {
    /// Construct from raw components.
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Convert to RGB. Hue wraps; saturation and lightness are clamped.
    pub fn to_rgb(self) -> Vec3 {
        let h = self.h.rem_euclid(1.0);
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        if s == 0.0 {
            return Vec3::splat(l);
        }

        let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        Vec3::new(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    }
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Unpack a `0xRRGGBB` literal into an RGB triple.
pub fn hex_rgb(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    Vec3::new(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-4
    }

    #[test]
    fn primary_hues() {
        assert!(close(Hsl::new(0.0, 1.0, 0.5).to_rgb(), Vec3::X));
        assert!(close(Hsl::new(1.0 / 3.0, 1.0, 0.5).to_rgb(), Vec3::Y));
        assert!(close(Hsl::new(2.0 / 3.0, 1.0, 0.5).to_rgb(), Vec3::Z));
    }

    #[test]
    fn green_accent_matches_hex() {
        // #00ff66 is the resting channel glow
        let from_hsl = Hsl::new(0.4, 1.0, 0.5).to_rgb();
        assert!(close(from_hsl, hex_rgb(0x00ff66)));
    }

    #[test]
    fn zero_saturation_is_grey() {
        assert_eq!(Hsl::new(0.7, 0.0, 0.25).to_rgb(), Vec3::splat(0.25));
    }

    #[test]
    fn hue_wraps() {
        let a = Hsl::new(0.1, 1.0, 0.5).to_rgb();
        let b = Hsl::new(1.1, 1.0, 0.5).to_rgb();
        assert!(close(a, b));
    }

    #[test]
    fn hex_unpacks_channels() {
        assert!(close(hex_rgb(0xff0000), Vec3::X));
        assert!(close(hex_rgb(0x00ff00), Vec3::Y));
        assert!(close(hex_rgb(0x0000ff), Vec3::Z));
    }
}
