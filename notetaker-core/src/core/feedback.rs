//! Transient status messages with token-guarded expiry.
//!
//! Each message gets a fresh [`FeedbackToken`]. The UI schedules an expiry
//! for that token after [`FEEDBACK_TTL`]; when it fires, the message is only
//! cleared if it is still the one the token was issued for.

use std::time::Duration;

/// How long a feedback message stays visible.
pub const FEEDBACK_TTL: Duration = Duration::from_secs(2);

/// Visual weight of a feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Normal,
    Highlight,
    Error,
}

/// Identifies one scheduled message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeedbackToken(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub message: String,
    pub kind: FeedbackKind,
    pub token: FeedbackToken,
}

/// The single feedback slot.
#[derive(Debug, Default)]
pub struct FeedbackSlot {
    current: Option<Feedback>,
    issued: u64,
}

impl FeedbackSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Feedback> {
        self.current.as_ref()
    }

    /// Replaces any visible message and returns the token its expiry must carry.
    pub fn show(&mut self, message: impl Into<String>, kind: FeedbackKind) -> FeedbackToken {
        self.issued += 1;
        let token = FeedbackToken(self.issued);
        self.current = Some(Feedback {
            message: message.into(),
            kind,
            token,
        });
        token
    }

    /// Clears the message if `token` still identifies it. Returns whether
    /// anything was cleared.
    pub fn expire(&mut self, token: FeedbackToken) -> bool {
        match &self.current {
            Some(feedback) if feedback.token == token => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expire_clears_matching_message() {
        let mut slot = FeedbackSlot::new();
        let token = slot.show("Note added successfully!", FeedbackKind::Normal);

        assert_eq!(slot.current().unwrap().message, "Note added successfully!");
        assert!(slot.expire(token));
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_stale_expiry_does_not_clear_newer_message() {
        let mut slot = FeedbackSlot::new();
        let first = slot.show("Note added successfully!", FeedbackKind::Normal);
        let second = slot.show("Note pinned successfully!", FeedbackKind::Highlight);

        assert_ne!(first, second);
        assert!(!slot.expire(first));
        assert_eq!(slot.current().unwrap().kind, FeedbackKind::Highlight);
        assert!(slot.expire(second));
    }

    #[test]
    fn test_expire_twice_is_noop() {
        let mut slot = FeedbackSlot::new();
        let token = slot.show("x", FeedbackKind::Normal);
        assert!(slot.expire(token));
        assert!(!slot.expire(token));
    }
}
