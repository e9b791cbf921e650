pub mod geometry;
pub mod svg;
pub mod view;

pub use geometry::{Point, Slice, label_rotation, polar_to_cartesian};
pub use view::draw;

// The diagram lives in a fixed 100-unit square; the cairo view scales it to
// whatever the drawing area allocates.
pub const VIEWBOX: f64 = 100.0;
pub const CENTER_X: f64 = 50.0;
pub const CENTER_Y: f64 = 50.0;
pub const PIZZA_RADIUS: f64 = 48.0;
pub const LABEL_OFFSET: f64 = 30.0; // distance from center along the wedge bisector
pub const LABEL_FONT_SIZE: f64 = 4.0;
pub const SLICE_STROKE_WIDTH: f64 = 0.5;
pub const RING_WIDTH: f64 = 4.0;
