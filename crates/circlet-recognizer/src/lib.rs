//! Recognition of a "circle" gesture drawn by a pointer.
//!
//! A host input layer delivers a press, a stream of 2D samples while the
//! trigger is held, and either a release or a timeout. At release the
//! accumulated path is classified as a circle or rejected as noise (too
//! few points, excessive direction reversals, or an angular sweep too far
//! from one full revolution).
//!
//! # Usage
//! ```ignore
//! let mut recognizer = CircleRecognizer::new(RecognizerConfig::default());
//! recognizer.press(uptime_ms);
//! for point in samples {
//!     recognizer.sample(point);
//! }
//! match recognizer.release() {
//!     Verdict::Accepted => fire_gesture(),
//!     _ => {}
//! }
//! ```
//!
//! The recognizer owns no clock: the host arms a timer off
//! [`CircleRecognizer::deadline_ms`] and delivers
//! [`CircleRecognizer::timeout_elapsed`] when it fires.

pub mod config;
pub mod evaluate;
pub mod recognizer;
pub mod types;

pub use circlet_geometry::{Point, Rect};
pub use config::{ConfigError, RecognizerConfig};
pub use recognizer::CircleRecognizer;
pub use types::{RecognizerState, Verdict};
