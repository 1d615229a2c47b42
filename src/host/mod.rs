//! Render host: the continuously running frame loop.
//!
//! The host owns the scene handle `S`, the camera, a typed registry of
//! per-frame updaters and a queue of periodic timers. Each call to
//! [`RenderHost::frame`] advances the timeline by the frame's delta time,
//! fires due timers, then runs every updater once, in registration order,
//! with exclusive access to the scene. Nothing here knows about devices;
//! the host is generic over whatever scene it drives.

mod camera;
mod registry;
mod timers;

pub use camera::{Camera, CameraPose};
pub use registry::{FrameUpdater, UpdateFlow, UpdaterKind, UpdaterRegistry};
pub use timers::{TimerHandle, TimerQueue, TimerTask};
use web_time::Duration;

/// Timing of the frame being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInfo {
    /// 1-based frame counter.
    pub index: u64,
    /// Time since the previous frame.
    pub dt: Duration,
    /// Time since the host started.
    pub elapsed: Duration,
}

/// Frame loop host for a scene of type `S`.
#[derive(Debug)]
pub struct RenderHost<S> {
    scene: S,
    camera: Camera,
    updaters: UpdaterRegistry<S>,
    timers: TimerQueue<S>,
    frame_index: u64,
    elapsed: Duration,
}

impl<S> RenderHost<S> {
    /// Host driving `scene` through `camera`.
    pub fn new(scene: S, camera: Camera) -> Self {
        Self {
            scene,
            camera,
            updaters: UpdaterRegistry::new(),
            timers: TimerQueue::new(),
            frame_index: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// The scene.
    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Mutable scene access for UI-driven updates between frames.
    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    /// The camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Move the camera to a new pose.
    pub fn set_camera_pose(&mut self, pose: CameraPose) {
        self.camera.set_pose(pose);
    }

    /// Follow a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }

    /// Per-frame updater registry.
    pub fn updaters(&self) -> &UpdaterRegistry<S> {
        &self.updaters
    }

    /// Mutable per-frame updater registry.
    pub fn updaters_mut(&mut self) -> &mut UpdaterRegistry<S> {
        &mut self.updaters
    }

    /// Timer queue.
    pub fn timers(&self) -> &TimerQueue<S> {
        &self.timers
    }

    /// Mutable timer queue.
    pub fn timers_mut(&mut self) -> &mut TimerQueue<S> {
        &mut self.timers
    }

    /// Time since the host started.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of frames run so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_index
    }

    /// Run one frame `dt` after the previous one.
    pub fn frame(&mut self, dt: Duration) -> FrameInfo {
        self.elapsed += dt;
        self.frame_index += 1;
        let info = FrameInfo {
            index: self.frame_index,
            dt,
            elapsed: self.elapsed,
        };

        self.timers.advance(self.elapsed, &mut self.scene);
        self.updaters.run(&mut self.scene, &info);
        log::trace!(
            "frame {} ({} updaters, {} timers)",
            info.index,
            self.updaters.len(),
            self.timers.len()
        );
        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FrameError;

    struct Bump;

    impl TimerTask<Vec<&'static str>> for Bump {
        fn tick(&mut self, scene: &mut Vec<&'static str>, _now: Duration) {
            scene.push("timer");
        }
    }

    #[test]
    fn frame_runs_timers_then_updaters() {
        let mut host = RenderHost::new(Vec::new(), Camera::default());
        assert!(host.updaters_mut().register(
            UpdaterKind::Smoothing,
            |s: &mut Vec<&'static str>,
             _: &FrameInfo|
             -> Result<UpdateFlow, FrameError> {
                s.push("updater");
                Ok(UpdateFlow::Continue)
            },
        ));
        let _ = host.timers_mut().set_interval(
            Duration::from_millis(10),
            None,
            Bump,
        );

        let info = host.frame(Duration::from_millis(16));
        assert_eq!(info.index, 1);
        assert_eq!(host.scene(), &vec!["timer", "updater"]);

        let info = host.frame(Duration::from_millis(16));
        assert_eq!(info.index, 2);
        assert_eq!(info.elapsed, Duration::from_millis(32));
        assert_eq!(host.scene().len(), 5);
    }

    #[test]
    fn camera_pose_is_settable() {
        let mut host = RenderHost::new((), Camera::default());
        let pose = CameraPose {
            position: glam::Vec3::new(3.0, 3.0, 3.0),
            target: glam::Vec3::ONE,
        };
        host.set_camera_pose(pose);
        assert_eq!(host.camera().pose(), pose);
    }
}
