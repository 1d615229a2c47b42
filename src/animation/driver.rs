//! Per-frame driver that moves the channel toward the resolved target.

use super::smoothing::AnimatedVisualState;
use crate::error::FrameError;
use crate::host::{FrameInfo, FrameUpdater, RenderHost, UpdateFlow, UpdaterKind};
use crate::options::AnimationOptions;
use crate::scene::{DeviceScene, LayerKind};

/// The smoothing updater.
///
/// Reads [`DeviceScene::targets`] every frame, advances the channel's
/// animated state one step and writes it back. Depletion visibility is
/// mirrored from the target as-is.
#[derive(Debug, Clone)]
pub struct ChannelSmoother {
    options: AnimationOptions,
}

impl ChannelSmoother {
    /// Smoother with the given factors.
    #[must_use]
    pub fn new(options: AnimationOptions) -> Self {
        Self { options }
    }
}

impl FrameUpdater<DeviceScene> for ChannelSmoother {
    fn update(
        &mut self,
        scene: &mut DeviceScene,
        _frame: &FrameInfo,
    ) -> Result<UpdateFlow, FrameError> {
        let target = scene.targets;
        let layers = scene.layers.as_mut().ok_or(FrameError::MissingLayers)?;
        let channel = layers
            .channel
            .as_mut()
            .ok_or(FrameError::MissingLayer(LayerKind::Channel))?;
        let depletion = layers
            .depletion
            .as_mut()
            .ok_or(FrameError::MissingLayer(LayerKind::Depletion))?;

        let mut state = AnimatedVisualState::capture(channel);
        state.step(&target, &self.options);
        state.apply(channel, target.channel_visible);

        depletion.visible = target.depletion_visible;
        Ok(UpdateFlow::Continue)
    }
}

/// Register the smoothing updater unless one is already running. Returns
/// whether it was added.
pub fn attach(
    host: &mut RenderHost<DeviceScene>,
    options: &AnimationOptions,
) -> bool {
    host.updaters_mut()
        .register(UpdaterKind::Smoothing, ChannelSmoother::new(options.clone()))
}

/// Remove the smoothing updater. Returns whether one was running.
pub fn detach(host: &mut RenderHost<DeviceScene>) -> bool {
    host.updaters_mut().unregister(UpdaterKind::Smoothing)
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;
    use crate::device::DeviceState;
    use crate::host::Camera;
    use crate::scene::geometry::build_mosfet;

    const FRAME: Duration = Duration::from_millis(16);

    fn host_with_layers() -> RenderHost<DeviceScene> {
        let mut scene = DeviceScene::new();
        let mut layers = build_mosfet();
        let _ = layers.ensure_channel();
        let _ = layers.ensure_depletion();
        scene.layers = Some(layers);
        RenderHost::new(scene, Camera::default())
    }

    fn channel(host: &RenderHost<DeviceScene>) -> &crate::scene::Layer {
        host.scene()
            .layers
            .as_ref()
            .and_then(|l| l.channel.as_ref())
            .unwrap()
    }

    #[test]
    fn attach_is_idempotent() {
        let mut host = host_with_layers();
        let options = AnimationOptions::default();
        assert!(attach(&mut host, &options));
        assert!(!attach(&mut host, &options));
        assert_eq!(host.updaters().len(), 1);
        assert!(detach(&mut host));
        assert!(!detach(&mut host));
    }

    #[test]
    fn channel_converges_to_on_target() {
        let mut host = host_with_layers();
        assert!(attach(&mut host, &AnimationOptions::default()));
        let target = DeviceState::On {
            channel_length: 0.5,
            normalized_current: 0.25,
        }
        .target();
        host.scene_mut().targets = target;

        for _ in 0..120 {
            let _ = host.frame(FRAME);
        }
        let ch = channel(&host);
        assert!((ch.scale.x - 0.5).abs() < 1e-3);
        assert!((ch.material.emissive_intensity - 2.0).abs() < 1e-3);
        assert!((ch.material.opacity - 1.0).abs() < 1e-3);
        assert!(ch.material.emissive.distance(target.color.to_rgb()) < 1e-3);
        assert!(ch.visible);
        let depletion = host.scene().layers.as_ref().unwrap().depletion.as_ref();
        assert!(!depletion.unwrap().visible);
    }

    #[test]
    fn one_updater_means_one_step_per_frame() {
        let mut host = host_with_layers();
        let options = AnimationOptions::default();
        // remount twice: still a single smoothing step per frame
        let _ = attach(&mut host, &options);
        let _ = attach(&mut host, &options);
        host.scene_mut().targets = DeviceState::On {
            channel_length: 0.0,
            normalized_current: 0.0,
        }
        .target();
        let _ = host.frame(FRAME);
        assert!((channel(&host).scale.x - 0.86).abs() < 1e-6);
    }

    #[test]
    fn missing_layers_are_tolerated() {
        let mut host = RenderHost::new(DeviceScene::new(), Camera::default());
        assert!(attach(&mut host, &AnimationOptions::default()));
        let _ = host.frame(FRAME);
        // the failing updater stays registered for the next frame
        assert!(host.updaters().contains(UpdaterKind::Smoothing));
    }
}
