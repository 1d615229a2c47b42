//! Idle rotation: a slow spin of every layer about the vertical axis.

use crate::error::FrameError;
use crate::host::{FrameInfo, FrameUpdater, UpdateFlow};
use crate::scene::DeviceScene;

/// Per-frame updater adding a fixed angle to every layer's yaw.
#[derive(Debug, Clone)]
pub struct IdleRotation {
    angle: f32,
    step: f32,
}

impl IdleRotation {
    /// Spin by `step` radians per frame.
    #[must_use]
    pub fn new(step: f32) -> Self {
        Self { angle: 0.0, step }
    }
}

impl FrameUpdater<DeviceScene> for IdleRotation {
    fn update(
        &mut self,
        scene: &mut DeviceScene,
        _frame: &FrameInfo,
    ) -> Result<UpdateFlow, FrameError> {
        let layers = scene.layers.as_mut().ok_or(FrameError::MissingLayers)?;
        self.angle += self.step;
        for layer in layers.iter_mut() {
            layer.rotation.y = self.angle;
        }
        Ok(UpdateFlow::Continue)
    }
}
