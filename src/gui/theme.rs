use gtk::gdk;
use gtk4 as gtk;
use palette::Srgba;

/// Fixed product palette for the diagram; the dough cream and amber crust
/// match the chip styling below.
pub struct ThemeColors {
    pub base: Srgba<f64>,
    pub wedge_stroke: Srgba<f64>,
    pub label: Srgba<f64>,
    pub ring: Srgba<f64>,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            base: Srgba::new(0.996, 0.953, 0.780, 1.0),
            wedge_stroke: Srgba::new(0.988, 0.827, 0.302, 1.0),
            label: Srgba::new(0.294, 0.333, 0.388, 1.0),
            ring: Srgba::new(0.851, 0.467, 0.024, 1.0),
        }
    }
}

pub fn set_source(cr: &cairo::Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.chip {
    background-color: #E5E7EB;
    color: #374151;
    border-radius: 999px;
    padding: 2px 14px;
    font-size: 13px;
}
.chip-selected {
    background-color: #EAB308;
    color: white;
}
.title {
    font-weight: bold;
    font-size: 18px;
}
.section-label {
    font-weight: 600;
    font-size: 12px;
}
.size-label {
    font-weight: bold;
    min-width: 24px;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
