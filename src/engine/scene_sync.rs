use super::TransistorViz;
use crate::device::{
    apply_depletion, apply_static_visibility, resolve, LegacyAnimation,
};
use crate::host::{CameraPose, RenderHost};
use crate::scene::DeviceScene;

impl TransistorViz {
    /// Push the whole declared state into the scene.
    pub(super) fn apply_state(&mut self, host: &mut RenderHost<DeviceScene>) {
        if let Some(camera) = self.state.camera {
            host.set_camera_pose(CameraPose::from(camera));
        }
        if let Some(layers) = host.scene_mut().layers.as_mut() {
            apply_static_visibility(&self.state, layers);
        }
        if let Some(highlights) = &self.state.highlights {
            self.effects.highlight_names(host, highlights);
        }
        self.update_targets(host);
        self.run_legacy_animation(host);
    }

    /// Re-resolve the animation target. Depletion toggles now; the channel
    /// follows over the next frames.
    pub(super) fn update_targets(&self, host: &mut RenderHost<DeviceScene>) {
        let scene = host.scene_mut();
        scene.targets = resolve(&self.state, &self.params);
        if let Some(layers) = scene.layers.as_mut() {
            apply_depletion(&scene.targets, layers);
        }
    }

    fn run_legacy_animation(&self, host: &mut RenderHost<DeviceScene>) {
        let Some(name) = self.state.animation.as_deref() else {
            return;
        };
        match LegacyAnimation::parse(name) {
            Some(LegacyAnimation::OnState) => {
                if self.device_state().is_on() {
                    self.effects.fade_in(host);
                }
            }
            Some(LegacyAnimation::RotateIdle) => {
                if self.effects.start_idle_rotation(host) {
                    log::debug!("Started idle rotation");
                }
            }
            Some(LegacyAnimation::OffState) => {}
            None => log::debug!("Ignoring unknown animation {name:?}"),
        }
    }
}
