//! Testing utilities for the circle recognizer: deterministic synthetic
//! strokes and a black-box robot that drives a recognizer through whole
//! gesture attempts.

pub mod robot;
pub mod stroke;

pub use robot::GestureRobot;
pub use stroke::{arc_stroke, circle_stroke, line_stroke, zigzag_stroke};
