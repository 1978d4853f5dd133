use std::time::{Duration, Instant};

/// Trailing-edge debounce with caller-supplied time.
///
/// Each trigger replaces the pending value and restarts the delay; the value
/// is released by the first poll at or after its deadline.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn trigger(&mut self, value: T, now: Instant) {
        self.pending = Some((now + self.delay, value));
    }

    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.deadline().is_some_and(|deadline| now >= deadline) {
            self.pending.take().map(|(_, value)| value)
        } else {
            None
        }
    }

    /// Drops the pending value, if any. Returns whether one was dropped.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn value_is_held_until_delay_elapses() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.trigger("a", start);

        assert_eq!(debouncer.poll(start + Duration::from_millis(299)), None);
        assert_eq!(debouncer.poll(start + DELAY), Some("a"));
        assert_eq!(debouncer.poll(start + DELAY * 2), None);
    }

    #[test]
    fn retrigger_restarts_delay_and_keeps_latest() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.trigger("a", start);
        debouncer.trigger("ab", start + Duration::from_millis(200));

        assert_eq!(debouncer.poll(start + Duration::from_millis(400)), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(500)),
            Some("ab")
        );
    }

    #[test]
    fn cancel_discards_pending_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.trigger(1, start);

        assert!(debouncer.cancel());
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(start + DELAY), None);
        assert!(!debouncer.cancel());
    }

    #[test]
    fn deadline_tracks_latest_trigger() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        assert!(debouncer.deadline().is_none());
        debouncer.trigger((), start);

        assert_eq!(debouncer.deadline(), Some(start + DELAY));
    }
}
