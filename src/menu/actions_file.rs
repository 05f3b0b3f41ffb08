use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, FileChooserAction, FileChooserNative, FileFilter, ResponseType};
use std::cell::RefCell;
use std::rc::Rc;

use crate::config::ExportFormat;
use crate::state::AppState;

pub fn setup(app: &Application, window: &ApplicationWindow, state: Rc<RefCell<AppState>>) {
    // --- EXPORT FRAME ACTION ---
    let export_action = gtk4::gio::SimpleAction::new("export", None);
    let win_weak = window.downgrade();
    let state_weak = Rc::downgrade(&state);

    export_action.connect_activate(move |_, _| {
        let win = match win_weak.upgrade() { Some(w) => w, None => return };
        let st_rc = match state_weak.upgrade() { Some(s) => s, None => return };
        let state_weak_inner = state_weak.clone();

        let dialog = FileChooserNative::new(Some("Export Frame"), Some(&win), FileChooserAction::Save, Some("Export"), Some("Cancel"));

        let filter_svg = FileFilter::new(); filter_svg.set_name(Some("SVG Image (*.svg)")); filter_svg.add_pattern("*.svg"); dialog.add_filter(&filter_svg);
        let filter_png = FileFilter::new(); filter_png.set_name(Some("PNG Image (*.png)")); filter_png.add_pattern("*.png"); dialog.add_filter(&filter_png);
        let filter_pdf = FileFilter::new(); filter_pdf.set_name(Some("PDF Document (*.pdf)")); filter_pdf.add_pattern("*.pdf"); dialog.add_filter(&filter_pdf);

        let (format, symbol) = {
            let st = st_rc.borrow();
            let symbol = st.current_record().map(|r| r.symbol.clone()).unwrap_or_else(|| "atom".to_string());
            (st.config.default_export_format, symbol)
        };
        match format {
            ExportFormat::Svg => dialog.set_filter(&filter_svg),
            ExportFormat::Png => dialog.set_filter(&filter_png),
            ExportFormat::Pdf => dialog.set_filter(&filter_pdf),
        }
        dialog.set_current_name(&format!("{}.{}", symbol, format.extension()));

        dialog.connect_response(move |d, response| {
            if response == ResponseType::Accept {
                if let Some(path) = d.file().and_then(|f| f.path()) {
                    if let Some(st) = state_weak_inner.upgrade() {
                        let format = ExportFormat::from_path(&path);
                        if let Err(e) = st.borrow().export(&path, format) {
                            log::error!("{}", e);
                        }
                    }
                }
            }
            d.destroy();
        });
        dialog.show();
    });
    app.add_action(&export_action);

    // --- SAVE SETTINGS ACTION ---
    let save_action = gtk4::gio::SimpleAction::new("save_settings", None);
    let state_weak_s = Rc::downgrade(&state);
    save_action.connect_activate(move |_, _| {
        if let Some(st) = state_weak_s.upgrade() {
            let mut st = st.borrow_mut();
            st.config.default_element = st.current_element;
            log::info!("{}", st.config.save());
        }
    });
    app.add_action(&save_action);

    // --- QUIT ACTION ---
    let quit_action = gtk4::gio::SimpleAction::new("quit", None);
    let win_weak_q = window.downgrade();

    quit_action.connect_activate(move |_, _| {
        if let Some(win) = win_weak_q.upgrade() {
            win.close();
        }
    });
    app.add_action(&quit_action);
}
