use glam::{Mat4, Vec3};

use crate::content::CameraPosition;
use crate::options::CameraOptions;

/// Where the camera sits and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Look-at target.
    pub target: Vec3,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 5.0, 10.0),
            target: Vec3::ZERO,
        }
    }
}

impl From<CameraPosition> for CameraPose {
    fn from(c: CameraPosition) -> Self {
        Self {
            position: Vec3::from_array(c.position),
            target: Vec3::from_array(c.target),
        }
    }
}

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default())
    }
}

impl Camera {
    /// Build from configured defaults.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self {
            eye: Vec3::from_array(options.position),
            target: Vec3::from_array(options.target),
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Current pose.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.eye,
            target: self.target,
        }
    }

    /// Move the camera.
    pub fn set_pose(&mut self, pose: CameraPose) {
        self.eye = pose.position;
        self.target = pose.target;
    }

    /// Follow a viewport resize. Degenerate sizes are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// View matrix.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }
}
