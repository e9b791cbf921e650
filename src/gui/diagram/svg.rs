//! Standalone SVG rendering of the pizza diagram.
//!
//! The on-screen widget paints through cairo ([`super::view`]); this module
//! produces the equivalent `<svg>` document as a string, which the app offers
//! on the clipboard for embedding elsewhere. Pure function, no I/O.

use super::geometry::{Slice, label_rotation};
use super::{
    CENTER_X, CENTER_Y, LABEL_FONT_SIZE, LABEL_OFFSET, PIZZA_RADIUS, RING_WIDTH,
    SLICE_STROKE_WIDTH, VIEWBOX,
};
use crate::order::Order;
use std::fmt::Write;
use thiserror::Error;

pub const BASE_FILL: &str = "#FEF3C7";
pub const WEDGE_STROKE: &str = "#FCD34D";
pub const LABEL_FILL: &str = "#4B5563";
pub const RING_STROKE: &str = "#D97706";

#[derive(Debug, Error)]
pub enum SvgError {
    #[error("failed to write SVG markup: {0}")]
    Fmt(#[from] std::fmt::Error),
}

pub fn render(order: &Order) -> Result<String, SvgError> {
    let mut out = String::new();

    writeln!(
        out,
        r#"<svg viewBox="0 0 {VIEWBOX} {VIEWBOX}" xmlns="http://www.w3.org/2000/svg">"#
    )?;
    writeln!(
        out,
        r#"  <circle cx="{CENTER_X}" cy="{CENTER_Y}" r="{PIZZA_RADIUS}" fill="{BASE_FILL}"/>"#
    )?;

    let flavors = order.flavors();
    let total = flavors.len();
    for (index, flavor) in flavors.iter().enumerate() {
        // a single flavor fills the whole pizza, no dividing lines
        if total > 1 {
            writeln!(
                out,
                r#"  <path d="{d}" fill="{BASE_FILL}" stroke="{WEDGE_STROKE}" stroke-width="{SLICE_STROKE_WIDTH}"/>"#,
                d = Slice::new(index, total).path_data(),
            )?;
        }
        writeln!(
            out,
            r#"  <text x="{CENTER_X}" y="{CENTER_Y}" text-anchor="middle" fill="{LABEL_FILL}" font-size="{LABEL_FONT_SIZE}" font-weight="bold" transform="rotate({rot:.1}, {CENTER_X}, {CENTER_Y}) translate(0, -{LABEL_OFFSET})">{flavor}</text>"#,
            rot = label_rotation(index, total),
        )?;
    }

    if order.border().has_ring() {
        writeln!(
            out,
            r#"  <circle cx="{CENTER_X}" cy="{CENTER_Y}" r="{PIZZA_RADIUS}" fill="none" stroke="{RING_STROKE}" stroke-width="{RING_WIDTH}"/>"#
        )?;
    }
    writeln!(out, "</svg>")?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Border, Flavor, Size};
    use crate::order::SizeDirection;

    fn wedge_count(svg: &str) -> usize {
        svg.matches("<path ").count()
    }

    fn has_ring(svg: &str) -> bool {
        svg.contains(RING_STROKE)
    }

    #[test]
    fn empty_order_renders_just_the_base() {
        let svg = render(&Order::new()).unwrap();
        assert_eq!(wedge_count(&svg), 0);
        assert!(!svg.contains("<text"));
        assert!(!has_ring(&svg));
    }

    #[test]
    fn single_flavor_has_a_label_but_no_dividing_wedge() {
        let mut order = Order::new();
        order.toggle_flavor(Flavor::Portuguesa);

        let svg = render(&order).unwrap();
        assert_eq!(wedge_count(&svg), 0);
        assert!(svg.contains(">Portuguesa</text>"));
    }

    #[test]
    fn ring_tracks_the_border_sentinel() {
        let mut order = Order::new();
        assert!(!has_ring(&render(&order).unwrap()));

        order.set_border(Border::Catupiry);
        assert!(has_ring(&render(&order).unwrap()));

        order.set_border(Border::SemBorda);
        assert!(!has_ring(&render(&order).unwrap()));
    }

    #[test]
    fn full_scenario_two_wedges_cheddar_ring_size_g() {
        let mut order = Order::new();
        order.toggle_flavor(Flavor::Margherita);
        order.toggle_flavor(Flavor::Pepperoni);
        order.set_border(Border::Cheddar);
        order.change_size(SizeDirection::Next);

        assert_eq!(order.flavors(), [Flavor::Margherita, Flavor::Pepperoni]);
        assert_eq!(order.border(), Border::Cheddar);
        assert_eq!(order.size_index(), 2);
        assert_eq!(order.size(), Size::G);

        let svg = render(&order).unwrap();
        assert_eq!(wedge_count(&svg), 2);
        assert!(svg.contains(">Margherita</text>"));
        assert!(svg.contains(">Pepperoni</text>"));
        assert!(has_ring(&svg));

        // two equal halves, labels on opposite bisectors
        assert!(svg.contains("rotate(90.0, 50, 50) translate(0, -30)"));
        assert!(svg.contains("rotate(270.0, 50, 50) translate(0, -30)"));
    }
}
