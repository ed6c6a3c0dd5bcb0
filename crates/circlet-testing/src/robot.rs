//! Black-box driver for exercising a recognizer with synthetic strokes.

use circlet_geometry::Point;
use circlet_recognizer::{CircleRecognizer, RecognizerConfig, Verdict};

/// Headless harness that wraps a [`CircleRecognizer`] to enable black-box
/// robot style tests against whole gesture attempts.
///
/// The robot exposes the recognizer's event surface (press, feed,
/// release, timeout, reset) plus convenience drivers that run a complete
/// attempt from a point slice and return the verdict.
pub struct GestureRobot {
    recognizer: CircleRecognizer,
}

impl GestureRobot {
    /// Creates a robot around a fresh recognizer with the given config.
    pub fn new(config: RecognizerConfig) -> Self {
        Self {
            recognizer: CircleRecognizer::new(config),
        }
    }

    /// Arms a new attempt at uptime zero.
    pub fn press(&mut self) -> Verdict {
        self.recognizer.press(0)
    }

    /// Arms a new attempt at an explicit uptime.
    pub fn press_at(&mut self, uptime_ms: u64) -> Verdict {
        self.recognizer.press(uptime_ms)
    }

    /// Delivers every point in order; returns the last verdict.
    pub fn feed(&mut self, points: &[Point]) -> Verdict {
        let mut verdict = Verdict::Pending;
        for point in points {
            verdict = self.recognizer.sample(*point);
        }
        verdict
    }

    /// Ends the stroke and evaluates it.
    pub fn release(&mut self) -> Verdict {
        self.recognizer.release()
    }

    /// Delivers the host-side duration timeout.
    pub fn timeout(&mut self) -> Verdict {
        self.recognizer.timeout_elapsed()
    }

    /// Forces the recognizer back to idle.
    pub fn reset(&mut self) {
        self.recognizer.reset();
    }

    /// Convenience driver: press, feed every point, release.
    pub fn perform(&mut self, points: &[Point]) -> Verdict {
        self.press();
        self.feed(points);
        self.release()
    }

    /// Convenience driver for the timeout path: press, feed every point,
    /// then deliver the timeout instead of a release.
    pub fn perform_timed_out(&mut self, points: &[Point]) -> Verdict {
        self.press();
        self.feed(points);
        self.timeout()
    }

    /// Read access to the wrapped recognizer for state assertions.
    pub fn recognizer(&self) -> &CircleRecognizer {
        &self.recognizer
    }
}
