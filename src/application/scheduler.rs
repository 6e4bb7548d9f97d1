use crate::domain::Universe;

/// Playback state of the simulation
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Playback {
    Playing,
    Paused,
}

/// Default target rate in generations per second
pub const DEFAULT_RATE: f32 = 10.0;

/// Floor applied when computing the inter-cycle delay. A non-positive
/// target rate clamps here, stretching the delay past fifteen minutes:
/// effectively suspended, never a division by zero.
const MIN_RATE: f32 = 0.001;

/// Scheduler drives repeated (tick, render) cycles at the requested
/// cadence. It owns the play/pause state machine, the pending-cycle
/// deadline, and the achieved-rate measurement.
///
/// The host frame loop calls [`poll`](Self::poll) once per frame with the
/// current monotonic time; a cycle fires when the deadline has passed.
/// The universe is passed in by reference on every poll rather than
/// captured, so replacing the instance between cycles (randomize) means
/// the next cycle ticks the replacement.
pub struct Scheduler {
    playback: Playback,
    target_rate: f32,
    achieved_rate: f32,
    /// Pending cycle deadline in host-clock seconds. This is the
    /// cancellable timer handle: pause takes it, at most once.
    deadline: Option<f64>,
    /// Host-clock time of the most recently completed cycle
    last_cycle_at: Option<f64>,
}

impl Scheduler {
    /// Create a scheduler that is already playing, with its first cycle
    /// due immediately
    pub fn new(now: f64) -> Self {
        Self {
            playback: Playback::Playing,
            target_rate: DEFAULT_RATE,
            achieved_rate: 0.0,
            deadline: Some(now),
            last_cycle_at: None,
        }
    }

    pub const fn playback(&self) -> Playback {
        self.playback
    }

    pub const fn is_playing(&self) -> bool {
        matches!(self.playback, Playback::Playing)
    }

    pub const fn target_rate(&self) -> f32 {
        self.target_rate
    }

    /// Set the target rate. Takes effect when the next cycle schedules
    /// its successor; no pause/resume needed.
    pub fn set_target_rate(&mut self, rate: f32) {
        self.target_rate = rate;
    }

    /// Rate measured over the most recently completed cycle. Overwritten
    /// each cycle, zero while paused.
    pub const fn achieved_rate(&self) -> f32 {
        self.achieved_rate
    }

    /// Whether a cycle is currently scheduled
    pub const fn has_pending_cycle(&self) -> bool {
        self.deadline.is_some()
    }

    /// Seconds between cycles for the current target rate
    fn cycle_delay(&self) -> f64 {
        1.0 / f64::from(self.target_rate.max(MIN_RATE))
    }

    /// Begin scheduling cycles. No-op when already playing.
    pub fn resume(&mut self, now: f64) {
        if self.playback == Playback::Paused {
            self.playback = Playback::Playing;
            self.deadline = Some(now);
        }
    }

    /// Stop scheduling and cancel the pending cycle. Idempotent: pausing
    /// an already-paused scheduler does nothing.
    pub fn pause(&mut self) {
        if self.playback == Playback::Playing {
            self.playback = Playback::Paused;
            self.deadline.take();
            self.achieved_rate = 0.0;
        }
    }

    pub fn toggle(&mut self, now: f64) {
        match self.playback {
            Playback::Playing => self.pause(),
            Playback::Paused => self.resume(now),
        }
    }

    /// Run one cycle if playing and the deadline has passed. Returns
    /// whether a tick fired; the caller redraws afterwards either way,
    /// so a fired tick is always rendered in the same frame.
    pub fn poll(&mut self, now: f64, universe: &mut Universe) -> bool {
        if self.playback != Playback::Playing {
            return false;
        }
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }

        // Reschedule before ticking, reading the target rate live, so a
        // rate change between cycles shapes the very next interval.
        self.deadline = Some(now + self.cycle_delay());

        universe.tick();

        // Wall-clock interval since the previous cycle, scheduled delay
        // included. Not an average: each cycle overwrites it.
        self.achieved_rate = match self.last_cycle_at {
            Some(prev) if now > prev => (1.0 / (now - prev)) as f32,
            _ => 0.0,
        };
        self.last_cycle_at = Some(now);

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn universe() -> Universe {
        Universe::new(8, 8)
    }

    #[test]
    fn test_starts_playing_with_immediate_cycle() {
        let mut scheduler = Scheduler::new(0.0);
        assert_eq!(scheduler.playback(), Playback::Playing);
        assert!(scheduler.has_pending_cycle());
        assert!(scheduler.poll(0.0, &mut universe()));
    }

    #[test]
    fn test_cycle_waits_for_deadline_then_reschedules() {
        let mut scheduler = Scheduler::new(0.0);
        let mut u = universe();

        assert!(scheduler.poll(0.0, &mut u));
        // Default rate 10/s: next cycle due at 0.1
        assert!(!scheduler.poll(0.05, &mut u));
        assert!(!scheduler.poll(0.099, &mut u));
        assert!(scheduler.poll(0.1, &mut u));
    }

    #[test]
    fn test_rate_change_applies_on_next_cycle_without_restart() {
        let mut scheduler = Scheduler::new(0.0);
        let mut u = universe();

        assert!(scheduler.poll(0.0, &mut u));
        scheduler.set_target_rate(50.0);

        // The already-pending cycle keeps its old deadline...
        assert!(!scheduler.poll(0.05, &mut u));
        assert!(scheduler.poll(0.1, &mut u));
        // ...and the one it schedules uses the new rate (20ms)
        assert!(scheduler.poll(0.12, &mut u));
    }

    #[test]
    fn test_pause_cancels_pending_cycle() {
        let mut scheduler = Scheduler::new(0.0);
        let mut u = universe();
        assert!(scheduler.poll(0.0, &mut u));

        scheduler.pause();
        assert_eq!(scheduler.playback(), Playback::Paused);
        assert!(!scheduler.has_pending_cycle());
        assert_eq!(scheduler.achieved_rate(), 0.0);

        // No tick fires after the pause returns, however long we wait
        assert!(!scheduler.poll(100.0, &mut u));
    }

    #[test]
    fn test_pause_is_idempotent() {
        let mut scheduler = Scheduler::new(0.0);
        scheduler.pause();
        scheduler.pause();
        assert_eq!(scheduler.playback(), Playback::Paused);
        assert!(!scheduler.has_pending_cycle());

        scheduler.resume(1.0);
        scheduler.resume(2.0);
        // First resume wins; the second must not push the deadline out
        assert!(scheduler.poll(1.0, &mut universe()));
    }

    #[test]
    fn test_resume_schedules_a_cycle() {
        let mut scheduler = Scheduler::new(0.0);
        let mut u = universe();
        scheduler.pause();

        scheduler.resume(5.0);
        assert!(scheduler.is_playing());
        assert!(!scheduler.poll(4.9, &mut u));
        assert!(scheduler.poll(5.0, &mut u));
    }

    #[test]
    fn test_toggle_flips_both_ways() {
        let mut scheduler = Scheduler::new(0.0);
        scheduler.toggle(0.0);
        assert_eq!(scheduler.playback(), Playback::Paused);
        scheduler.toggle(1.0);
        assert_eq!(scheduler.playback(), Playback::Playing);
    }

    #[test]
    fn test_achieved_rate_measures_last_interval() {
        let mut scheduler = Scheduler::new(0.0);
        let mut u = universe();

        assert!(scheduler.poll(0.0, &mut u));
        assert_eq!(scheduler.achieved_rate(), 0.0); // no previous cycle yet

        assert!(scheduler.poll(0.1, &mut u));
        assert!((scheduler.achieved_rate() - 10.0).abs() < 1e-3);

        // A late frame is measured as-is, not averaged away
        assert!(scheduler.poll(0.35, &mut u));
        assert!((scheduler.achieved_rate() - 4.0).abs() < 1e-3);
    }

    #[test]
    fn test_non_positive_rate_suspends_without_panicking() {
        let mut scheduler = Scheduler::new(0.0);
        let mut u = universe();
        scheduler.set_target_rate(0.0);

        assert!(scheduler.poll(0.0, &mut u));
        // Clamped to MIN_RATE: the next deadline is ~1000s out
        assert!(!scheduler.poll(60.0, &mut u));
        assert!(!scheduler.poll(999.0, &mut u));

        scheduler.set_target_rate(-5.0);
        assert!(scheduler.poll(1000.0, &mut u));
        assert!(scheduler.achieved_rate().is_finite());
    }

    #[test]
    fn test_poll_ticks_exactly_once_per_cycle() {
        let mut scheduler = Scheduler::new(0.0);
        let mut u = universe();
        u.set_cells(&[(2, 1), (2, 2), (2, 3)]); // blinker

        assert!(scheduler.poll(0.0, &mut u));
        assert!(u.get(1, 2).unwrap().is_alive()); // rotated once

        assert!(!scheduler.poll(0.05, &mut u));
        assert!(u.get(1, 2).unwrap().is_alive()); // unchanged between cycles
    }
}
