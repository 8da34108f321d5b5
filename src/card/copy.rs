use std::time::Duration;

/// How long the "copied" tick stays on a card.
pub const COPY_FEEDBACK: Duration = Duration::from_secs(3);

/// Per-card clipboard feedback.
///
/// Every copy bumps the generation; a reset only applies if it carries the
/// current one, so a second copy restarts the window instead of being cut
/// short by the first timer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyIndicator {
    copied: Option<String>,
    failure: Option<String>,
    generation: u64,
}

impl CopyIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_copied(&mut self, text: impl Into<String>) -> u64 {
        self.copied = Some(text.into());
        self.failure = None;
        self.generation += 1;
        self.generation
    }

    /// Swaps the tick for an error notice, unless a newer copy has happened.
    pub fn mark_failed(&mut self, generation: u64, message: impl Into<String>) {
        if generation == self.generation {
            self.copied = None;
            self.failure = Some(message.into());
        }
    }

    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.copied = None;
        self.failure = None;
        true
    }

    pub fn is_copied(&self, text: &str) -> bool {
        self.copied.as_deref() == Some(text)
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }
}
