//! Periodic timers decoupled from the frame loop.
//!
//! A timer fires on its own fixed period regardless of frame rate: a slow
//! frame catches up by firing every tick it missed, a fast frame may fire
//! none. Each tick receives its scheduled time, not the frame time.

use std::fmt;

use web_time::Duration;

/// Shortest accepted timer period.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A periodic task with optional expiry.
pub trait TimerTask<S> {
    /// Called once per elapsed period with the tick's scheduled time.
    fn tick(&mut self, scene: &mut S, now: Duration);

    /// Called once when the timer reaches its lifetime. Not called on
    /// cancellation.
    fn expire(&mut self, _scene: &mut S) {}
}

/// Handle used to cancel a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

struct Timer<S> {
    handle: TimerHandle,
    period: Duration,
    next_due: Duration,
    expires_at: Option<Duration>,
    task: Box<dyn TimerTask<S>>,
}

/// Active timers on the host's timeline.
pub struct TimerQueue<S> {
    timers: Vec<Timer<S>>,
    now: Duration,
    next_id: u64,
}

impl<S> Default for TimerQueue<S> {
    fn default() -> Self {
        Self {
            timers: Vec::new(),
            now: Duration::ZERO,
            next_id: 0,
        }
    }
}

impl<S> fmt::Debug for TimerQueue<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerQueue")
            .field("active", &self.timers.len())
            .field("now", &self.now)
            .finish()
    }
}

impl<S> TimerQueue<S> {
    /// Empty queue at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current time on the queue's timeline.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Fire `task` every `period`, starting one period from now. With a
    /// `lifetime`, the timer stops and [`TimerTask::expire`] runs once that
    /// much time has passed.
    pub fn set_interval(
        &mut self,
        period: Duration,
        lifetime: Option<Duration>,
        task: impl TimerTask<S> + 'static,
    ) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        let period = period.max(MIN_PERIOD);
        self.timers.push(Timer {
            handle,
            period,
            next_due: self.now + period,
            expires_at: lifetime.map(|l| self.now + l),
            task: Box::new(task),
        });
        handle
    }

    /// Drop a timer without running its expiry. Returns whether it was
    /// still active.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.handle != handle);
        self.timers.len() != before
    }

    /// Whether the timer has neither expired nor been cancelled.
    #[must_use]
    pub fn is_active(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|t| t.handle == handle)
    }

    /// Number of active timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Whether no timer is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Move the timeline to `now`, firing every due tick and expiring
    /// timers whose lifetime has passed.
    pub fn advance(&mut self, now: Duration, scene: &mut S) {
        self.now = self.now.max(now);
        let now = self.now;
        self.timers.retain_mut(|timer| {
            while timer.next_due <= now
                && timer.expires_at.is_none_or(|end| timer.next_due < end)
            {
                timer.task.tick(scene, timer.next_due);
                timer.next_due += timer.period;
            }
            match timer.expires_at {
                Some(end) if now >= end => {
                    timer.task.expire(scene);
                    false
                }
                _ => true,
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Log {
        ticks: Vec<u128>,
        expired: bool,
    }

    struct Recorder;

    impl TimerTask<Log> for Recorder {
        fn tick(&mut self, scene: &mut Log, now: Duration) {
            scene.ticks.push(now.as_millis());
        }

        fn expire(&mut self, scene: &mut Log) {
            scene.expired = true;
        }
    }

    #[test]
    fn ticks_on_schedule_independent_of_frames() {
        let mut queue = TimerQueue::new();
        let mut log = Log::default();
        let _ = queue.set_interval(Duration::from_millis(40), None, Recorder);

        queue.advance(Duration::from_millis(100), &mut log);
        assert_eq!(log.ticks, vec![40, 80]);
        queue.advance(Duration::from_millis(110), &mut log);
        assert_eq!(log.ticks, vec![40, 80]);
        queue.advance(Duration::from_millis(120), &mut log);
        assert_eq!(log.ticks, vec![40, 80, 120]);
    }

    #[test]
    fn expires_after_lifetime() {
        let mut queue = TimerQueue::new();
        let mut log = Log::default();
        let handle = queue.set_interval(
            Duration::from_millis(40),
            Some(Duration::from_millis(100)),
            Recorder,
        );
        queue.advance(Duration::from_millis(99), &mut log);
        assert!(queue.is_active(handle));
        assert!(!log.expired);

        queue.advance(Duration::from_millis(500), &mut log);
        assert_eq!(log.ticks, vec![40, 80]);
        assert!(log.expired);
        assert!(!queue.is_active(handle));
    }

    #[test]
    fn cancel_skips_expiry() {
        let mut queue = TimerQueue::new();
        let mut log = Log::default();
        let handle = queue.set_interval(
            Duration::from_millis(40),
            Some(Duration::from_millis(100)),
            Recorder,
        );
        assert!(queue.cancel(handle));
        assert!(!queue.cancel(handle));
        queue.advance(Duration::from_millis(500), &mut log);
        assert!(log.ticks.is_empty());
        assert!(!log.expired);
        assert!(queue.is_empty());
    }

    #[test]
    fn schedule_is_relative_to_creation_time() {
        let mut queue = TimerQueue::new();
        let mut log = Log::default();
        queue.advance(Duration::from_millis(1000), &mut log);
        let _ = queue.set_interval(Duration::from_millis(40), None, Recorder);
        queue.advance(Duration::from_millis(1050), &mut log);
        assert_eq!(log.ticks, vec![1040]);
    }

    #[test]
    fn zero_period_is_clamped() {
        let mut queue = TimerQueue::new();
        let mut log = Log::default();
        let _ = queue.set_interval(Duration::ZERO, None, Recorder);
        queue.advance(Duration::from_millis(3), &mut log);
        assert_eq!(log.ticks.len(), 3);
        assert_eq!(queue.len(), 1);
    }
}
