use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, DrawingArea, Orientation, Frame, ScrolledWindow, TextView};
use gtk4::Box as GtkBox;
use std::cell::RefCell;
use std::rc::Rc;

use bohrview::state::AppState;
use bohrview::{menu, panels, rendering, utils};

fn main() {
    let app = Application::builder()
        .application_id("com.example.bohrview")
        .build();

    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &Application) {
    // Console first, so config and dataset messages have somewhere to go.
    let console_view = TextView::builder()
        .editable(false).cursor_visible(false).monospace(true)
        .left_margin(10).right_margin(10).top_margin(10).bottom_margin(10)
        .build();
    if let Err(e) = utils::logger::init(&console_view) {
        eprintln!("Logger already installed: {}", e);
    }

    let mut initial_state = AppState::new();
    let msg = initial_state.load_config();
    log::info!("{}", msg);

    if let Err(e) = initial_state.show_configured_element() {
        log::error!("No element could be shown: {}", e);
    }
    let state = Rc::new(RefCell::new(initial_state));

    let window = ApplicationWindow::builder()
        .application(app)
        .title("BohrView - Bohr Model Viewer")
        .default_width(1000)
        .default_height(760)
        .build();

    // 1. TOP LEVEL: Vertical Box (Menu on top, Main Content below)
    let root_vbox = GtkBox::new(Orientation::Vertical, 0);
    window.set_child(Some(&root_vbox));

    // 2. MAIN CONTENT: Horizontal Box (Sidebar | Right_Panel)
    let main_hbox = GtkBox::new(Orientation::Horizontal, 0);

    // --- Right Panel (Drawing + Console) ---
    let right_vbox = GtkBox::new(Orientation::Vertical, 0);
    right_vbox.set_hexpand(true);

    let drawing_area = DrawingArea::new();
    drawing_area.set_vexpand(true);

    let info_frame = Frame::new(None);
    let scroll_win = ScrolledWindow::builder()
        .min_content_height(140)
        .child(&console_view)
        .build();
    info_frame.set_child(Some(&scroll_win));

    right_vbox.append(&drawing_area);
    right_vbox.append(&info_frame);

    // --- Left Panel (Sidebar) ---
    let (sidebar_widget, element_spin) = panels::sidebar::build(state.clone(), &drawing_area);
    main_hbox.append(&sidebar_widget);
    main_hbox.append(&right_vbox);

    // 3. Menu Bar
    let menu_bar = menu::build_menu_and_actions(app, &window, state.clone(), &drawing_area, &element_spin);

    root_vbox.append(&menu_bar);
    root_vbox.append(&main_hbox);

    // Drawing + frame clock
    rendering::setup_drawing(&drawing_area, state.clone());

    if let Some(diagram) = state.borrow().diagram() {
        log::info!("\n{}", utils::report::element_summary(diagram));
    }

    window.present();
}
