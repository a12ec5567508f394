use std::time::Duration;

use bevy::prelude::*;

use crate::constants::SEARCH_DEBOUNCE_MS;

/// Holds raw search keystrokes and releases them after a quiet period.
///
/// The buffer updates immediately for display. Every edit restarts the timer.
#[derive(Resource, Debug, Clone)]
pub struct SearchDebounce {
    pub buffer: String,
    delay: Duration,
    /// Time since the last edit, `None` when nothing is waiting
    since_edit: Option<Duration>,
}

impl Default for SearchDebounce {
    fn default() -> Self {
        Self::new(Duration::from_millis(SEARCH_DEBOUNCE_MS))
    }
}

impl SearchDebounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            buffer: String::new(),
            delay,
            since_edit: None,
        }
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_pending(&self) -> bool {
        self.since_edit.is_some()
    }

    pub fn input(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.since_edit = Some(Duration::ZERO);
    }

    /// Call after editing `buffer` in place.
    pub fn touch(&mut self) {
        self.since_edit = Some(Duration::ZERO);
    }

    /// Advance the timer, returning the buffer once the delay has passed.
    pub fn tick(&mut self, delta: Duration) -> Option<String> {
        let elapsed = self.since_edit? + delta;
        if elapsed >= self.delay {
            self.since_edit = None;
            Some(self.buffer.clone())
        } else {
            self.since_edit = Some(elapsed);
            None
        }
    }

    /// Empty the buffer and drop any pending commit.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.since_edit = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_commits_after_quiet_period() {
        let mut debounce = SearchDebounce::new(ms(300));
        debounce.input("anka");

        assert_eq!(debounce.tick(ms(100)), None);
        assert_eq!(debounce.tick(ms(199)), None);
        assert_eq!(debounce.tick(ms(1)), Some("anka".to_string()));
        assert!(!debounce.is_pending());
    }

    #[test]
    fn test_not_committed_immediately() {
        let mut debounce = SearchDebounce::new(ms(300));
        debounce.input("a");

        assert_eq!(debounce.tick(Duration::ZERO), None);
        assert_eq!(debounce.buffer, "a");
    }

    #[test]
    fn test_keystroke_restarts_timer() {
        let mut debounce = SearchDebounce::new(ms(300));
        debounce.input("a");
        assert_eq!(debounce.tick(ms(250)), None);

        debounce.input("an");
        assert_eq!(debounce.tick(ms(250)), None);
        assert_eq!(debounce.tick(ms(50)), Some("an".to_string()));
    }

    #[test]
    fn test_commits_once() {
        let mut debounce = SearchDebounce::new(ms(300));
        debounce.input("x");

        assert!(debounce.tick(ms(300)).is_some());
        assert_eq!(debounce.tick(ms(300)), None);
    }

    #[test]
    fn test_idle_never_commits() {
        let mut debounce = SearchDebounce::default();

        assert_eq!(debounce.tick(ms(1000)), None);
    }

    #[test]
    fn test_clear_drops_pending() {
        let mut debounce = SearchDebounce::new(ms(300));
        debounce.input("abc");
        debounce.clear();

        assert!(debounce.buffer.is_empty());
        assert_eq!(debounce.tick(ms(500)), None);
    }

    #[test]
    fn test_clearing_search_is_debounced_too() {
        let mut debounce = SearchDebounce::new(ms(300));
        debounce.input("ist");
        assert_eq!(debounce.tick(ms(300)), Some("ist".to_string()));

        // The clear button empties the box and commits "" like any other edit
        debounce.input("");
        assert_eq!(debounce.tick(ms(299)), None);
        assert_eq!(debounce.tick(ms(1)), Some(String::new()));
    }

    #[test]
    fn test_touch_after_in_place_edit() {
        let mut debounce = SearchDebounce::new(ms(300));
        debounce.buffer.push_str("iz");
        debounce.touch();

        assert_eq!(debounce.tick(ms(300)), Some("iz".to_string()));
    }
}
