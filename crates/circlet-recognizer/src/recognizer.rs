//! The press/sample/release state machine that owns the point buffer.

use circlet_geometry::Point;
use smallvec::SmallVec;

use crate::config::RecognizerConfig;
use crate::evaluate::is_circle;
use crate::types::{RecognizerState, Verdict};

/// Inline capacity for the sample buffer; strokes longer than this spill
/// to the heap, bounded by the pre-reservation made at press.
const INLINE_SAMPLES: usize = 32;

/// Accumulates pointer samples between a press and a release (or
/// timeout) and classifies the released stroke as a circle.
///
/// One instance is reused across many gesture attempts; the path and
/// state are cleared when a new attempt is armed and on [`reset`].
/// Events must be delivered from a single thread: each one is processed
/// to completion before the next is accepted.
///
/// [`reset`]: CircleRecognizer::reset
pub struct CircleRecognizer {
    config: RecognizerConfig,
    state: RecognizerState,
    path: SmallVec<[Point; INLINE_SAMPLES]>,
    press_uptime_ms: u64,
}

impl CircleRecognizer {
    pub fn new(config: RecognizerConfig) -> Self {
        Self {
            config,
            state: RecognizerState::Idle,
            path: SmallVec::new(),
            press_uptime_ms: 0,
        }
    }

    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    pub fn state(&self) -> RecognizerState {
        self.state
    }

    pub fn sample_count(&self) -> usize {
        self.path.len()
    }

    /// Arms collection for a new attempt at the given host uptime.
    ///
    /// A press while already collecting is a caller contract violation;
    /// the in-flight attempt is discarded and a fresh one starts.
    pub fn press(&mut self, uptime_ms: u64) -> Verdict {
        if self.state == RecognizerState::Collecting {
            log::warn!(
                "press delivered while collecting ({} samples); restarting attempt",
                self.path.len()
            );
        }

        self.path.clear();
        self.path.reserve(self.config.sample_capacity());
        self.press_uptime_ms = uptime_ms;
        self.state = RecognizerState::Collecting;
        log::debug!(
            "idle -> collecting at {uptime_ms} ms, deadline {} ms",
            self.config.deadline_after(uptime_ms)
        );
        Verdict::Pending
    }

    /// Uptime at which the current attempt expires, if one is active.
    /// Hosts arm their timeout off this and deliver
    /// [`timeout_elapsed`] when it fires.
    ///
    /// [`timeout_elapsed`]: CircleRecognizer::timeout_elapsed
    pub fn deadline_ms(&self) -> Option<u64> {
        (self.state == RecognizerState::Collecting)
            .then(|| self.config.deadline_after(self.press_uptime_ms))
    }

    /// Appends one pointer position to the active path.
    ///
    /// Ignored while idle. Non-finite coordinates are the host's to
    /// filter; if one slips through it is dropped rather than poisoning
    /// the attempt.
    pub fn sample(&mut self, point: Point) -> Verdict {
        if self.state != RecognizerState::Collecting {
            log::warn!("sample delivered while idle; ignoring");
            return Verdict::Pending;
        }
        if !point.is_finite() {
            log::warn!("dropping non-finite sample ({}, {})", point.x, point.y);
            return Verdict::Pending;
        }

        log::trace!("sample {} at ({}, {})", self.path.len(), point.x, point.y);
        self.path.push(point);
        Verdict::Pending
    }

    /// Ends the stroke and evaluates it. The single evaluation per
    /// attempt happens here.
    pub fn release(&mut self) -> Verdict {
        if self.state != RecognizerState::Collecting {
            log::warn!("release delivered while idle; ignoring");
            return Verdict::Pending;
        }

        let verdict = if is_circle(&self.path, &self.config) {
            Verdict::Accepted
        } else {
            Verdict::Cancelled
        };
        self.finish(verdict)
    }

    /// Cancels the attempt because the host's duration timer fired.
    pub fn timeout_elapsed(&mut self) -> Verdict {
        if self.state != RecognizerState::Collecting {
            log::warn!("timeout delivered while idle; ignoring");
            return Verdict::Pending;
        }

        log::debug!("gesture timed out after {} samples", self.path.len());
        self.finish(Verdict::Cancelled)
    }

    /// Forces Idle with an empty buffer, from any state.
    pub fn reset(&mut self) {
        self.path.clear();
        self.state = RecognizerState::Idle;
    }

    fn finish(&mut self, verdict: Verdict) -> Verdict {
        log::debug!(
            "collecting -> idle ({verdict:?}) after {} samples",
            self.path.len()
        );
        self.path.clear();
        self.state = RecognizerState::Idle;
        verdict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognizer() -> CircleRecognizer {
        CircleRecognizer::new(RecognizerConfig::default())
    }

    #[test]
    fn test_starts_idle() {
        let recognizer = recognizer();
        assert_eq!(recognizer.state(), RecognizerState::Idle);
        assert_eq!(recognizer.deadline_ms(), None);
    }

    #[test]
    fn test_press_arms_collection() {
        let mut recognizer = recognizer();
        assert_eq!(recognizer.press(500), Verdict::Pending);
        assert_eq!(recognizer.state(), RecognizerState::Collecting);
        assert_eq!(recognizer.deadline_ms(), Some(1_500));
    }

    #[test]
    fn test_release_with_empty_path_cancels() {
        let mut recognizer = recognizer();
        recognizer.press(0);
        assert_eq!(recognizer.release(), Verdict::Cancelled);
        assert_eq!(recognizer.state(), RecognizerState::Idle);
    }

    #[test]
    fn test_release_with_single_point_cancels() {
        let mut recognizer = recognizer();
        recognizer.press(0);
        recognizer.sample(Point::new(10.0, 10.0));
        assert_eq!(recognizer.release(), Verdict::Cancelled);
    }

    #[test]
    fn test_timeout_cancels_and_returns_to_idle() {
        let mut recognizer = recognizer();
        recognizer.press(0);
        recognizer.sample(Point::new(1.0, 1.0));
        assert_eq!(recognizer.timeout_elapsed(), Verdict::Cancelled);
        assert_eq!(recognizer.state(), RecognizerState::Idle);
        assert_eq!(recognizer.sample_count(), 0);
    }

    #[test]
    fn test_sample_while_idle_is_ignored() {
        let mut recognizer = recognizer();
        assert_eq!(recognizer.sample(Point::new(1.0, 1.0)), Verdict::Pending);
        assert_eq!(recognizer.state(), RecognizerState::Idle);
        assert_eq!(recognizer.sample_count(), 0);
    }

    #[test]
    fn test_release_while_idle_is_ignored() {
        let mut recognizer = recognizer();
        assert_eq!(recognizer.release(), Verdict::Pending);
        assert_eq!(recognizer.timeout_elapsed(), Verdict::Pending);
    }

    #[test]
    fn test_double_press_restarts_attempt() {
        let mut recognizer = recognizer();
        recognizer.press(0);
        recognizer.sample(Point::new(1.0, 1.0));
        recognizer.sample(Point::new(2.0, 2.0));
        recognizer.press(100);
        assert_eq!(recognizer.sample_count(), 0);
        assert_eq!(recognizer.deadline_ms(), Some(1_100));
    }

    #[test]
    fn test_non_finite_sample_dropped() {
        let mut recognizer = recognizer();
        recognizer.press(0);
        recognizer.sample(Point::new(f32::NAN, 0.0));
        recognizer.sample(Point::new(0.0, f32::INFINITY));
        assert_eq!(recognizer.sample_count(), 0);
    }

    #[test]
    fn test_reset_from_any_state_forces_idle() {
        let mut recognizer = recognizer();
        recognizer.reset();
        assert_eq!(recognizer.state(), RecognizerState::Idle);

        recognizer.press(0);
        recognizer.sample(Point::new(1.0, 1.0));
        recognizer.reset();
        assert_eq!(recognizer.state(), RecognizerState::Idle);
        assert_eq!(recognizer.sample_count(), 0);

        // A fresh empty attempt after reset always cancels.
        recognizer.press(0);
        assert_eq!(recognizer.release(), Verdict::Cancelled);
    }
}
