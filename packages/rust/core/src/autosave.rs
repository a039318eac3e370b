//! Save-after-quiet-period policy for the wizard's background auto-save.
//!
//! The browser original debounced saves behind a timer; here the policy is
//! explicit and driven by an injectable [`Clock`] so tests are
//! deterministic. The app's tick loop calls [`AutosaveTimer::due`] and, when
//! it fires, persists the wizard's in-progress snapshot fire-and-forget.

use std::time::Duration;

use chrono::{DateTime, Utc};

/// Time source seam. Production uses [`SystemClock`]; tests use a manual
/// clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// The quiet period an edit must survive before it is saved.
#[derive(Debug, Clone, Copy)]
pub struct AutosavePolicy {
    pub quiet: Duration,
}

impl AutosavePolicy {
    pub fn new(quiet: Duration) -> Self {
        Self { quiet }
    }

    pub fn from_millis(quiet_ms: u64) -> Self {
        Self::new(Duration::from_millis(quiet_ms))
    }
}

impl Default for AutosavePolicy {
    fn default() -> Self {
        Self::from_millis(1000)
    }
}

/// Tracks the last edit and answers "has the quiet period elapsed?".
#[derive(Debug)]
pub struct AutosaveTimer {
    policy: AutosavePolicy,
    last_edit: Option<DateTime<Utc>>,
}

impl AutosaveTimer {
    pub fn new(policy: AutosavePolicy) -> Self {
        Self {
            policy,
            last_edit: None,
        }
    }

    /// Record an edit; restarts the quiet period.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_edit = Some(now);
    }

    /// Whether a save is due: an edit is pending and the quiet period has
    /// fully elapsed since the latest one.
    pub fn due(&self, now: DateTime<Utc>) -> bool {
        self.last_edit.is_some_and(|edit| {
            now.signed_duration_since(edit)
                .to_std()
                .map(|elapsed| elapsed >= self.policy.quiet)
                .unwrap_or(false)
        })
    }

    /// Clear the pending edit after a save (or a discard).
    pub fn reset(&mut self) {
        self.last_edit = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn no_edit_means_never_due() {
        let timer = AutosaveTimer::new(AutosavePolicy::default());
        assert!(!timer.due(at(10_000)));
    }

    #[test]
    fn due_after_quiet_period() {
        let mut timer = AutosaveTimer::new(AutosavePolicy::from_millis(1000));
        timer.touch(at(0));
        assert!(!timer.due(at(999)));
        assert!(timer.due(at(1000)));
        assert!(timer.due(at(5000)));
    }

    #[test]
    fn new_edits_restart_the_quiet_period() {
        let mut timer = AutosaveTimer::new(AutosavePolicy::from_millis(1000));
        timer.touch(at(0));
        timer.touch(at(800));
        assert!(!timer.due(at(1500)));
        assert!(timer.due(at(1800)));
    }

    #[test]
    fn reset_clears_the_pending_save() {
        let mut timer = AutosaveTimer::new(AutosavePolicy::from_millis(1000));
        timer.touch(at(0));
        timer.reset();
        assert!(!timer.due(at(10_000)));
    }

    #[test]
    fn clock_moving_backwards_is_not_due() {
        let mut timer = AutosaveTimer::new(AutosavePolicy::from_millis(1000));
        timer.touch(at(5000));
        assert!(!timer.due(at(0)));
    }
}
