//! Pure geometry for circle-gesture recognition: points, bounding
//! rectangles, and pivot angles. Stateless, no dependencies.

pub mod angle;
pub mod geometry;

pub use angle::{angle_between, sign_of};
pub use geometry::{bounding_rect, Point, Rect};
