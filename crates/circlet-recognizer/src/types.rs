//! Shared state and verdict enums for the recognizer.

/// Where the recognizer is in the gesture lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecognizerState {
    /// No active path; waiting for a press.
    Idle,
    /// A press has armed collection; samples are being appended.
    Collecting,
}

/// Per-attempt outcome reported to the host.
///
/// Hosts drive side effects (firing an application-level "gesture
/// performed" notification) strictly off [`Verdict::Accepted`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// No terminal verdict yet; the attempt is still collecting.
    Pending,
    /// The released stroke was recognized as a circle.
    Accepted,
    /// The attempt was rejected at evaluation or cancelled by timeout.
    Cancelled,
}

impl Verdict {
    /// True once the attempt has concluded; a fresh press is required to
    /// start over.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Verdict::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_pending_is_non_terminal() {
        assert!(!Verdict::Pending.is_terminal());
        assert!(Verdict::Accepted.is_terminal());
        assert!(Verdict::Cancelled.is_terminal());
    }
}
