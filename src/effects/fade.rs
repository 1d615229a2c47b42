//! Legacy channel fade-in.

use crate::error::FrameError;
use crate::host::{FrameInfo, FrameUpdater, UpdateFlow};
use crate::scene::{DeviceScene, LayerKind};

/// Per-frame updater raising channel opacity by a fixed step until fully
/// opaque, then removing itself.
#[derive(Debug, Clone)]
pub struct FadeIn {
    step: f32,
}

impl FadeIn {
    /// Fade in by `step` opacity per frame.
    #[must_use]
    pub fn new(step: f32) -> Self {
        Self { step }
    }
}

impl FrameUpdater<DeviceScene> for FadeIn {
    fn update(
        &mut self,
        scene: &mut DeviceScene,
        _frame: &FrameInfo,
    ) -> Result<UpdateFlow, FrameError> {
        let channel = scene
            .layers
            .as_mut()
            .ok_or(FrameError::MissingLayers)?
            .channel
            .as_mut()
            .ok_or(FrameError::MissingLayer(LayerKind::Channel))?;
        let material = &mut channel.material;
        material.opacity = (material.opacity + self.step).min(1.0);
        if material.opacity < 1.0 {
            Ok(UpdateFlow::Continue)
        } else {
            Ok(UpdateFlow::Finished)
        }
    }
}
