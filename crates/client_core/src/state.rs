//! UI-state model owned by the controller.

use std::time::Duration;

use shared::domain::{FeedbackKind, Target};

pub const MAX_CHARS: usize = 500;
pub const COPY_ACK_WINDOW: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub text: String,
    pub target: Target,
}

impl InputState {
    /// Displayed length, in characters rather than bytes.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
    Completed(RequestOutcome),
}

impl RequestState {
    pub fn is_in_flight(self) -> bool {
        self == RequestState::InFlight
    }
}

#[derive(Debug, Clone, Default)]
pub struct OutputState {
    pub output: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FeedbackState {
    available: bool,
    given: Option<FeedbackKind>,
}

impl FeedbackState {
    /// Fresh affordance for a newly produced output.
    pub fn reset_for_output(&mut self) {
        self.available = true;
        self.given = None;
    }

    pub fn withdraw(&mut self) {
        self.available = false;
        self.given = None;
    }

    pub fn can_give(&self) -> bool {
        self.available && self.given.is_none()
    }

    pub fn record(&mut self, kind: FeedbackKind) {
        self.given = Some(kind);
    }

    pub fn given(&self) -> Option<FeedbackKind> {
        self.given
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CopyState {
    pub pending: bool,
    pub generation: u64,
    /// Output sequence number the pending or last copy was started for.
    pub source: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_count_counts_characters_not_bytes() {
        let input = InputState {
            text: "안녕하세요".to_string(),
            target: Target::Upward,
        };
        assert_eq!(input.char_count(), 5);
    }

    #[test]
    fn feedback_is_one_shot_until_next_output() {
        let mut feedback = FeedbackState::default();
        assert!(!feedback.can_give());

        feedback.reset_for_output();
        assert!(feedback.can_give());
        feedback.record(FeedbackKind::Negative);
        assert!(!feedback.can_give());
        assert_eq!(feedback.given(), Some(FeedbackKind::Negative));

        feedback.reset_for_output();
        assert!(feedback.can_give());
    }
}
