use pizzaiolo::gui::app::AppModel;
use pizzaiolo::order::Order;
use relm4::prelude::*;

fn main() {
    env_logger::init();

    let app = RelmApp::new("org.pizzaiolo.builder");

    app.run::<AppModel>(Order::new());
}
