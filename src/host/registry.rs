//! Typed registry of per-frame updaters.
//!
//! Each updater is stored under an [`UpdaterKind`]; at most one updater per
//! kind can be active, so repeated setup calls never stack duplicates.
//! Updaters run in registration order.

use std::fmt;

use super::FrameInfo;
use crate::error::FrameError;

/// Identity key of a per-frame updater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdaterKind {
    /// Channel smoothing toward the resolved target.
    Smoothing,
    /// Slow whole-device spin.
    IdleRotation,
    /// Legacy channel fade-in.
    FadeIn,
}

/// What an updater wants after a successful frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateFlow {
    /// Keep running next frame.
    Continue,
    /// Remove from the registry.
    Finished,
}

/// A callback run once per displayed frame with mutable access to the
/// scene.
pub trait FrameUpdater<S> {
    /// Advance one frame.
    fn update(
        &mut self,
        scene: &mut S,
        frame: &FrameInfo,
    ) -> Result<UpdateFlow, FrameError>;
}

impl<S, F> FrameUpdater<S> for F
where
    F: FnMut(&mut S, &FrameInfo) -> Result<UpdateFlow, FrameError>,
{
    fn update(
        &mut self,
        scene: &mut S,
        frame: &FrameInfo,
    ) -> Result<UpdateFlow, FrameError> {
        self(scene, frame)
    }
}

struct Entry<S> {
    kind: UpdaterKind,
    updater: Box<dyn FrameUpdater<S>>,
}

/// Ordered set of updaters keyed by kind.
pub struct UpdaterRegistry<S> {
    entries: Vec<Entry<S>>,
}

impl<S> Default for UpdaterRegistry<S> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<S> fmt::Debug for UpdaterRegistry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.kinds()).finish()
    }
}

impl<S> UpdaterRegistry<S> {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an updater unless one of the same kind is already active.
    /// Returns whether it was added.
    pub fn register(
        &mut self,
        kind: UpdaterKind,
        updater: impl FrameUpdater<S> + 'static,
    ) -> bool {
        if self.contains(kind) {
            log::debug!("Updater {kind:?} already registered");
            return false;
        }
        self.entries.push(Entry {
            kind,
            updater: Box::new(updater),
        });
        log::debug!("Registered updater {kind:?}");
        true
    }

    /// Remove the updater of the given kind. Returns whether one was
    /// present.
    pub fn unregister(&mut self, kind: UpdaterKind) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.kind != kind);
        let removed = self.entries.len() != before;
        if removed {
            log::debug!("Unregistered updater {kind:?}");
        }
        removed
    }

    /// Whether an updater of this kind is active.
    #[must_use]
    pub fn contains(&self, kind: UpdaterKind) -> bool {
        self.entries.iter().any(|e| e.kind == kind)
    }

    /// Active kinds in run order.
    pub fn kinds(&self) -> impl Iterator<Item = UpdaterKind> + '_ {
        self.entries.iter().map(|e| e.kind)
    }

    /// Number of active updaters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no updater is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run every updater once, in order. Failures are logged and skipped;
    /// finished updaters are dropped.
    pub fn run(&mut self, scene: &mut S, frame: &FrameInfo) {
        self.entries.retain_mut(|entry| {
            match entry.updater.update(scene, frame) {
                Ok(UpdateFlow::Continue) => true,
                Ok(UpdateFlow::Finished) => {
                    log::debug!("Updater {:?} finished", entry.kind);
                    false
                }
                Err(e) => {
                    log::warn!(
                        "Updater {:?} failed on frame {}: {e}",
                        entry.kind,
                        frame.index
                    );
                    true
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;
    use crate::scene::LayerKind;

    fn frame(index: u64) -> FrameInfo {
        FrameInfo {
            index,
            dt: Duration::from_millis(16),
            elapsed: Duration::from_millis(16 * index),
        }
    }

    fn counter(
        step: u32,
    ) -> impl FnMut(&mut Vec<u32>, &FrameInfo) -> Result<UpdateFlow, FrameError>
    {
        move |log: &mut Vec<u32>, _: &FrameInfo| {
            log.push(step);
            Ok(UpdateFlow::Continue)
        }
    }

    #[test]
    fn duplicate_kind_is_rejected() {
        let mut registry = UpdaterRegistry::new();
        assert!(registry.register(UpdaterKind::Smoothing, counter(1)));
        assert!(!registry.register(UpdaterKind::Smoothing, counter(2)));
        assert_eq!(registry.len(), 1);

        let mut log = Vec::new();
        registry.run(&mut log, &frame(1));
        assert_eq!(log, vec![1]);
    }

    #[test]
    fn runs_in_registration_order() {
        let mut registry = UpdaterRegistry::new();
        assert!(registry.register(UpdaterKind::IdleRotation, counter(2)));
        assert!(registry.register(UpdaterKind::Smoothing, counter(1)));
        let mut log = Vec::new();
        registry.run(&mut log, &frame(1));
        assert_eq!(log, vec![2, 1]);
    }

    #[test]
    fn unregister_removes_once() {
        let mut registry: UpdaterRegistry<Vec<u32>> = UpdaterRegistry::new();
        assert!(registry.register(UpdaterKind::Smoothing, counter(1)));
        assert!(registry.unregister(UpdaterKind::Smoothing));
        assert!(!registry.unregister(UpdaterKind::Smoothing));
        assert!(registry.is_empty());
    }

    #[test]
    fn failing_updater_does_not_block_siblings() {
        let mut registry = UpdaterRegistry::new();
        assert!(registry.register(
            UpdaterKind::FadeIn,
            |_: &mut Vec<u32>, _: &FrameInfo| -> Result<UpdateFlow, FrameError> {
                Err(FrameError::MissingLayer(LayerKind::Channel))
            },
        ));
        assert!(registry.register(UpdaterKind::Smoothing, counter(7)));

        let mut log = Vec::new();
        registry.run(&mut log, &frame(1));
        registry.run(&mut log, &frame(2));
        assert_eq!(log, vec![7, 7]);
        // a failure is not a removal
        assert!(registry.contains(UpdaterKind::FadeIn));
    }

    #[test]
    fn finished_updater_is_dropped() {
        let mut registry = UpdaterRegistry::new();
        assert!(registry.register(
            UpdaterKind::FadeIn,
            |log: &mut Vec<u32>, f: &FrameInfo| -> Result<UpdateFlow, FrameError> {
                log.push(0);
                Ok(if f.index >= 2 {
                    UpdateFlow::Finished
                } else {
                    UpdateFlow::Continue
                })
            },
        ));
        let mut log = Vec::new();
        for i in 1..=4 {
            registry.run(&mut log, &frame(i));
        }
        assert_eq!(log.len(), 2);
        assert!(!registry.contains(UpdaterKind::FadeIn));
    }
}
