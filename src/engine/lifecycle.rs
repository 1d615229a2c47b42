use super::TransistorViz;
use crate::animation;
use crate::host::RenderHost;
use crate::scene::geometry::build_mosfet;
use crate::scene::DeviceScene;

impl TransistorViz {
    /// Attach to `host`: build the device layers if the scene has none,
    /// add the dynamic layers, register the smoothing updater and apply the
    /// declared state.
    ///
    /// Safe to call repeatedly; registrations are keyed, so a remount never
    /// adds a second smoother or spinner.
    pub fn mount(&mut self, host: &mut RenderHost<DeviceScene>) {
        let scene = host.scene_mut();
        let layers = scene.layers.get_or_insert_with(build_mosfet);
        layers.ensure_channel().material.transparent = true;
        let _ = layers.ensure_depletion();

        if !animation::attach(host, &self.options.animation) {
            log::debug!("Smoothing updater already attached");
        }
        self.mounted = true;
        log::info!("Mounted transistor visualization");
        self.apply_state(host);
    }

    /// Detach from `host`: remove every updater and timer this component
    /// started and restore highlighted layers. The layers themselves stay
    /// until the scene is cleared.
    pub fn unmount(&mut self, host: &mut RenderHost<DeviceScene>) {
        let _ = animation::detach(host);
        self.effects.stop_all(host);
        self.mounted = false;
        log::info!("Unmounted transistor visualization");
    }
}
