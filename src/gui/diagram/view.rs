use super::geometry::{Slice, label_rotation};
use super::{
    CENTER_X, CENTER_Y, LABEL_FONT_SIZE, LABEL_OFFSET, PIZZA_RADIUS, RING_WIDTH,
    SLICE_STROKE_WIDTH, VIEWBOX,
};
use crate::gui::theme::{ThemeColors, set_source};
use crate::order::Order;
use cairo::Context;
use std::f64::consts::PI;

/// Paints the whole diagram for the current order: base circle, one wedge per
/// flavor (none when only one flavor covers the pizza), rotated labels, and
/// the crust ring unless the border is "Sem Borda".
pub fn draw(
    cr: &Context,
    order: &Order,
    colors: &ThemeColors,
    width: i32,
    height: i32,
) -> Result<(), cairo::Error> {
    let scale = f64::from(width.min(height)) / VIEWBOX;

    cr.save()?;
    // center the square viewbox inside the allocated area
    cr.translate(
        (f64::from(width) - VIEWBOX * scale) / 2.0,
        (f64::from(height) - VIEWBOX * scale) / 2.0,
    );
    cr.scale(scale, scale);

    draw_base(cr, colors)?;

    let flavors = order.flavors();
    let total = flavors.len();
    for (index, flavor) in flavors.iter().enumerate() {
        if total > 1 {
            draw_wedge(cr, &Slice::new(index, total), colors)?;
        }
        draw_label(cr, &flavor.to_string(), label_rotation(index, total), colors)?;
    }

    if order.border().has_ring() {
        draw_ring(cr, colors)?;
    }

    cr.restore()
}

// Diagram angles run clockwise from 12 o'clock; cairo measures from 3 o'clock.
fn cairo_angle(angle_deg: f64) -> f64 {
    (angle_deg - 90.0) * PI / 180.0
}

fn draw_base(cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
    set_source(cr, colors.base);
    cr.arc(CENTER_X, CENTER_Y, PIZZA_RADIUS, 0.0, 2.0 * PI);
    cr.fill()
}

fn draw_wedge(cr: &Context, slice: &Slice, colors: &ThemeColors) -> Result<(), cairo::Error> {
    cr.move_to(CENTER_X, CENTER_Y);
    cr.line_to(slice.start.x, slice.start.y);
    cr.arc(
        CENTER_X,
        CENTER_Y,
        PIZZA_RADIUS,
        cairo_angle(slice.start_angle),
        cairo_angle(slice.end_angle),
    );
    cr.close_path();

    set_source(cr, colors.base);
    cr.fill_preserve()?;
    set_source(cr, colors.wedge_stroke);
    cr.set_line_width(SLICE_STROKE_WIDTH);
    cr.stroke()
}

fn draw_label(
    cr: &Context,
    text: &str,
    rotation_deg: f64,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    cr.save()?;
    // same transform as the SVG output: rotate about the center, then push
    // the label outward along the wedge bisector
    cr.translate(CENTER_X, CENTER_Y);
    cr.rotate(rotation_deg.to_radians());
    cr.translate(0.0, -LABEL_OFFSET);

    set_source(cr, colors.label);
    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
    cr.set_font_size(LABEL_FONT_SIZE);

    let ext = cr.text_extents(text)?;
    cr.move_to(-ext.width() / 2.0, ext.height() / 2.0);
    cr.show_text(text)?;

    cr.restore()
}

fn draw_ring(cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
    set_source(cr, colors.ring);
    cr.set_line_width(RING_WIDTH);
    cr.arc(CENTER_X, CENTER_Y, PIZZA_RADIUS, 0.0, 2.0 * PI);
    cr.stroke()
}
