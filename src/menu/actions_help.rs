use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, AboutDialog, License};

pub fn setup(app: &Application, window: &ApplicationWindow) {

    // --- ABOUT ACTION ---
    let about_action = gtk4::gio::SimpleAction::new("about", None);
    let win_weak = window.downgrade();

    about_action.connect_activate(move |_, _| {
        if let Some(win) = win_weak.upgrade() {
            let dialog = AboutDialog::builder()
                .transient_for(&win)
                .modal(true)
                .program_name("bohrview")
                .version(env!("CARGO_PKG_VERSION"))
                .comments("Animated Bohr model diagrams, written in Rust and GTK4.\n\nSpace pauses, Page Up/Down steps through the elements, Ctrl+R shuffles the orbits.")
                .license_type(License::MitX11)
                .logo_icon_name("applications-science")
                .build();

            dialog.present();
        }
    });
    app.add_action(&about_action);
}
