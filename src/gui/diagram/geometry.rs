use super::{CENTER_X, CENTER_Y, PIZZA_RADIUS};
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Angles are in degrees, measured clockwise from 12 o'clock, the usual
/// pie-chart orientation.
pub fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> Point {
    let rad = (angle_deg - 90.0) * PI / 180.0;
    Point::new(cx + radius * rad.cos(), cy + radius * rad.sin())
}

/// One wedge of the pizza diagram: slice `index` of `total` equal slices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub start_angle: f64,
    pub end_angle: f64,
    pub start: Point,
    pub end: Point,
}

impl Slice {
    pub fn new(index: usize, total: usize) -> Self {
        debug_assert!(total >= 1 && index < total);

        let span = 360.0 / total as f64;
        let start_angle = index as f64 * span;
        let end_angle = (index + 1) as f64 * span;

        Self {
            start_angle,
            end_angle,
            start: polar_to_cartesian(CENTER_X, CENTER_Y, PIZZA_RADIUS, start_angle),
            end: polar_to_cartesian(CENTER_X, CENTER_Y, PIZZA_RADIUS, end_angle),
        }
    }

    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// SVG large-arc flag: set when the wedge covers more than half the
    /// circle, i.e. only when a single slice spans the whole pizza.
    pub fn large_arc(&self) -> bool {
        self.span() > 180.0
    }

    /// Closed SVG path: center, out to the start point, clockwise arc to the
    /// end point, back to center.
    pub fn path_data(&self) -> String {
        format!(
            "M{cx},{cy} L{sx:.2},{sy:.2} A{r},{r} 0 {large},1 {ex:.2},{ey:.2} Z",
            cx = CENTER_X,
            cy = CENTER_Y,
            sx = self.start.x,
            sy = self.start.y,
            r = PIZZA_RADIUS,
            large = self.large_arc() as u8,
            ex = self.end.x,
            ey = self.end.y,
        )
    }
}

/// Rotation in degrees, about the diagram center, that carries a top-centered
/// label onto the bisector of slice `index`, keeping it upright relative to
/// the wedge.
pub fn label_rotation(index: usize, total: usize) -> f64 {
    (index as f64 + 0.5) * (360.0 / total as f64)
}
