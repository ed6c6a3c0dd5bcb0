//! Tuning parameters for circle recognition.
//!
//! The default thresholds are empirically tuned for hand-drawn strokes
//! and are configuration, not law: the undershoot band is tight (a
//! genuine circle should nearly close) while the overshoot band is
//! generous (natural hand motion overtravels past the starting point
//! before the release is seen).

use std::f32::consts::{FRAC_PI_4, PI};
use std::fmt;

/// Samples-per-second estimate used to pre-size the point buffer when an
/// attempt is armed. Typical pointer hardware reports at 60-125 Hz.
pub(crate) const ASSUMED_SAMPLE_RATE_HZ: f32 = 120.0;

/// Immutable per-instance parameters for a [`CircleRecognizer`].
///
/// [`CircleRecognizer`]: crate::CircleRecognizer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecognizerConfig {
    /// Maximum time in seconds from press to completion. The host arms
    /// its timer from this; must be positive.
    pub duration: f32,
    /// Maximum tolerated direction reversals before a stroke is rejected
    /// as a zigzag.
    pub max_inflections: u32,
    /// How far short of one full revolution (radians) the angular sweep
    /// may fall and still be accepted.
    pub undershoot_tolerance: f32,
    /// How far past one full revolution (radians) the angular sweep may
    /// run and still be accepted.
    pub overshoot_tolerance: f32,
    /// Magnitude an analog control must cross for the trigger to count
    /// as pressed. An explicit field rather than a process-wide default.
    pub press_point: f32,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            duration: 1.0,
            max_inflections: 5,
            undershoot_tolerance: FRAC_PI_4,
            overshoot_tolerance: PI,
            press_point: 0.5,
        }
    }
}

impl RecognizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duration(mut self, seconds: f32) -> Self {
        self.duration = seconds;
        self
    }

    pub fn with_max_inflections(mut self, max_inflections: u32) -> Self {
        self.max_inflections = max_inflections;
        self
    }

    pub fn with_undershoot_tolerance(mut self, radians: f32) -> Self {
        self.undershoot_tolerance = radians;
        self
    }

    pub fn with_overshoot_tolerance(mut self, radians: f32) -> Self {
        self.overshoot_tolerance = radians;
        self
    }

    pub fn with_press_point(mut self, press_point: f32) -> Self {
        self.press_point = press_point;
        self
    }

    /// Checks the parameter ranges the recognizer relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.duration > 0.0) || !self.duration.is_finite() {
            return Err(ConfigError::NonPositiveDuration(self.duration));
        }
        if !self.undershoot_tolerance.is_finite() || self.undershoot_tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(self.undershoot_tolerance));
        }
        if !self.overshoot_tolerance.is_finite() || self.overshoot_tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(self.overshoot_tolerance));
        }
        if !self.press_point.is_finite() || self.press_point <= 0.0 {
            return Err(ConfigError::InvalidPressPoint(self.press_point));
        }
        Ok(())
    }

    /// Uptime in milliseconds at which an attempt armed at
    /// `press_uptime_ms` expires. Hosts arm their timeout off this.
    pub fn deadline_after(&self, press_uptime_ms: u64) -> u64 {
        press_uptime_ms + (self.duration * 1000.0) as u64
    }

    /// Whether an analog control magnitude counts as pressed.
    pub fn is_actuated(&self, magnitude: f32) -> bool {
        magnitude >= self.press_point
    }

    /// Expected sample count for one attempt at the assumed sample rate.
    pub(crate) fn sample_capacity(&self) -> usize {
        (self.duration * ASSUMED_SAMPLE_RATE_HZ).ceil() as usize
    }
}

/// Rejected [`RecognizerConfig`] parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    NonPositiveDuration(f32),
    InvalidTolerance(f32),
    InvalidPressPoint(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveDuration(value) => {
                write!(f, "gesture duration must be positive, got {value}")
            }
            ConfigError::InvalidTolerance(value) => {
                write!(f, "traversal tolerance must be finite and non-negative, got {value}")
            }
            ConfigError::InvalidPressPoint(value) => {
                write!(f, "press point must be finite and positive, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert_eq!(RecognizerConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let config = RecognizerConfig::default().with_duration(0.0);
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveDuration(0.0)));
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let config = RecognizerConfig::default().with_undershoot_tolerance(-0.1);
        assert_eq!(config.validate(), Err(ConfigError::InvalidTolerance(-0.1)));
    }

    #[test]
    fn test_deadline_from_press_uptime() {
        let config = RecognizerConfig::default().with_duration(1.5);
        assert_eq!(config.deadline_after(2_000), 3_500);
    }

    #[test]
    fn test_actuation_against_press_point() {
        let config = RecognizerConfig::default().with_press_point(0.75);
        assert!(config.is_actuated(0.75));
        assert!(config.is_actuated(1.0));
        assert!(!config.is_actuated(0.5));
    }
}
