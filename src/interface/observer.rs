//! User-visible notifications.
//!
//! The engine reports every outcome a player should see (draws, damage,
//! knockouts, status ticks, the winner) and every refused action through a
//! `GameObserver`. Observers are fire-and-forget.

/// Notification severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// Receiver of game notifications.
pub trait GameObserver {
    /// State transition or outcome.
    fn info(&mut self, text: &str);

    /// Refused action or invalid selection.
    fn warn(&mut self, text: &str);

    /// Unrecoverable condition.
    fn error(&mut self, text: &str);

    fn log(&mut self, level: LogLevel, text: &str) {
        match level {
            LogLevel::Info => self.info(text),
            LogLevel::Warn => self.warn(text),
            LogLevel::Error => self.error(text),
        }
    }
}

/// Forwards notifications to `tracing` under the `tcg::game` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl GameObserver for TracingObserver {
    fn info(&mut self, text: &str) {
        tracing::info!(target: "tcg::game", "{text}");
    }

    fn warn(&mut self, text: &str) {
        tracing::warn!(target: "tcg::game", "{text}");
    }

    fn error(&mut self, text: &str) {
        tracing::error!(target: "tcg::game", "{text}");
    }
}

/// Keeps every notification in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    entries: Vec<(LogLevel, String)>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[(LogLevel, String)] {
        &self.entries
    }

    /// Messages at one level, in order.
    pub fn messages(&self, level: LogLevel) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |(l, _)| *l == level)
            .map(|(_, text)| text.as_str())
    }

    /// Whether any message contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|(_, text)| text.contains(needle))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl GameObserver for RecordingObserver {
    fn info(&mut self, text: &str) {
        self.entries.push((LogLevel::Info, text.to_string()));
    }

    fn warn(&mut self, text: &str) {
        self.entries.push((LogLevel::Warn, text.to_string()));
    }

    fn error(&mut self, text: &str) {
        self.entries.push((LogLevel::Error, text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_observer() {
        let mut observer = RecordingObserver::new();
        observer.info("drew a card");
        observer.warn("bench is full");
        observer.log(LogLevel::Error, "broken");

        assert_eq!(observer.entries().len(), 3);
        assert_eq!(observer.messages(LogLevel::Warn).collect::<Vec<_>>(), vec!["bench is full"]);
        assert!(observer.contains("drew"));
        assert!(!observer.contains("attack"));

        observer.clear();
        assert!(observer.entries().is_empty());
    }

    #[test]
    fn test_tracing_observer_without_subscriber() {
        let mut observer = TracingObserver;
        observer.info("no subscriber installed");
        observer.warn("still fine");
    }
}
