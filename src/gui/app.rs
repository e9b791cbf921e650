use crate::catalog::{Border, Flavor};
use crate::gui::diagram::{self, svg};
use crate::gui::theme::{self, ThemeColors};
use crate::order::{Order, SizeDirection};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use strum::IntoEnumIterator;

pub struct AppModel {
    pub order: Rc<RefCell<Order>>,
    flavor_chips: Vec<(Flavor, gtk::Button)>,
    border_chips: Vec<(Border, gtk::Button)>,
    drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    ToggleFlavor(Flavor),
    SetBorder(Border),
    ChangeSize(SizeDirection),
    CopySvg,
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = Order;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        gtk::ApplicationWindow {
            set_title: Some("Monte sua Pizza"),
            set_default_size: (420, 640),

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    match key {
                        gtk::gdk::Key::Left => {
                            sender.input(AppMsg::ChangeSize(SizeDirection::Previous));
                            glib::Propagation::Stop
                        }
                        gtk::gdk::Key::Right => {
                            sender.input(AppMsg::ChangeSize(SizeDirection::Next));
                            glib::Propagation::Stop
                        }
                        _ => glib::Propagation::Proceed,
                    }
                }
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 10,
                set_margin_all: 16,

                gtk::Label {
                    set_label: "Monte sua Pizza",
                    add_css_class: "title",
                    set_halign: gtk::Align::Start,
                },

                gtk::Label {
                    set_label: "Sabores (até 3):",
                    add_css_class: "section-label",
                    set_halign: gtk::Align::Start,
                },
                #[name = "flavor_box"]
                gtk::FlowBox {
                    set_selection_mode: gtk::SelectionMode::None,
                    set_column_spacing: 6,
                    set_row_spacing: 6,
                    set_max_children_per_line: 4,
                },

                gtk::Label {
                    set_label: "Borda:",
                    add_css_class: "section-label",
                    set_halign: gtk::Align::Start,
                },
                #[name = "border_box"]
                gtk::FlowBox {
                    set_selection_mode: gtk::SelectionMode::None,
                    set_column_spacing: 6,
                    set_row_spacing: 6,
                    set_max_children_per_line: 4,
                },

                gtk::Label {
                    set_label: "Tamanho:",
                    add_css_class: "section-label",
                    set_halign: gtk::Align::Start,
                },
                gtk::Box {
                    set_orientation: gtk::Orientation::Horizontal,
                    set_spacing: 8,
                    set_halign: gtk::Align::Start,

                    gtk::Button {
                        set_label: "‹",
                        connect_clicked[sender] => move |_| {
                            sender.input(AppMsg::ChangeSize(SizeDirection::Previous));
                        }
                    },
                    gtk::Label {
                        add_css_class: "size-label",
                        #[watch]
                        set_label: &model.order.borrow().size().to_string(),
                    },
                    gtk::Button {
                        set_label: "›",
                        connect_clicked[sender] => move |_| {
                            sender.input(AppMsg::ChangeSize(SizeDirection::Next));
                        }
                    },
                },

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_content_width: 384,
                    set_content_height: 384,
                    set_hexpand: true,
                    set_vexpand: true,
                },

                gtk::Button {
                    set_label: "Copiar SVG",
                    set_halign: gtk::Align::Start,
                    connect_clicked[sender] => move |_| {
                        sender.input(AppMsg::CopySvg);
                    }
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        theme::load_css();

        let model = AppModel {
            order: Rc::new(RefCell::new(init)),
            flavor_chips: Vec::new(),
            border_chips: Vec::new(),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        for flavor in Flavor::iter() {
            let chip = make_chip(&flavor.to_string());
            let chip_sender = sender.clone();
            chip.connect_clicked(move |_| chip_sender.input(AppMsg::ToggleFlavor(flavor)));
            widgets.flavor_box.insert(&chip, -1);
            model.flavor_chips.push((flavor, chip));
        }

        for border in Border::iter() {
            let chip = make_chip(&border.to_string());
            let chip_sender = sender.clone();
            chip.connect_clicked(move |_| chip_sender.input(AppMsg::SetBorder(border)));
            widgets.border_box.insert(&chip, -1);
            model.border_chips.push((border, chip));
        }

        model.sync_chips();

        let order_draw = model.order.clone();
        let colors = ThemeColors::default();
        widgets
            .drawing_area
            .set_draw_func(move |_, cr, width, height| {
                if let Err(e) = diagram::draw(cr, &order_draw.borrow(), &colors, width, height) {
                    log::error!("Drawing error: {}", e);
                }
            });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::ToggleFlavor(flavor) => {
                let changed = self.order.borrow_mut().toggle_flavor(flavor);
                if changed {
                    self.sync_chips();
                    self.drawing_area.queue_draw();
                } else {
                    log::debug!("Flavor limit reached, ignoring {}", flavor);
                }
            }
            AppMsg::SetBorder(border) => {
                self.order.borrow_mut().set_border(border);
                self.sync_chips();
                self.drawing_area.queue_draw();
            }
            AppMsg::ChangeSize(direction) => {
                self.order.borrow_mut().change_size(direction);
            }
            AppMsg::CopySvg => match svg::render(&self.order.borrow()) {
                Ok(markup) => {
                    if let Some(display) = gdk4::Display::default() {
                        display.clipboard().set_text(&markup);
                    }
                }
                Err(e) => log::error!("SVG render failed: {}", e),
            },
        }
    }
}

impl AppModel {
    /// Re-derives every chip's highlight from the order; chips hold no
    /// selection state of their own.
    fn sync_chips(&self) {
        let order = self.order.borrow();
        for (flavor, chip) in &self.flavor_chips {
            set_chip_selected(chip, order.has_flavor(*flavor));
        }
        for (border, chip) in &self.border_chips {
            set_chip_selected(chip, order.border() == *border);
        }
    }
}

fn make_chip(label: &str) -> gtk::Button {
    let chip = gtk::Button::with_label(label);
    chip.add_css_class("chip");
    chip
}

fn set_chip_selected(chip: &gtk::Button, selected: bool) {
    if selected {
        chip.add_css_class("chip-selected");
    } else {
        chip.remove_css_class("chip-selected");
    }
}
