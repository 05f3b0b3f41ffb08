// src/panels/sidebar.rs

use gtk4::prelude::*;
use gtk4::{
  Align, Box as GtkBox, Button, DrawingArea, Frame, Label, Orientation, SpinButton, ToggleButton,
};

use crate::state::AppState;
use crate::utils::report::element_summary;
use std::cell::RefCell;
use std::rc::Rc;

/// Builds the sidebar: element picker, info card and orbit controls.
/// The picker is returned too so other controls can move it.
pub fn build(state: Rc<RefCell<AppState>>, drawing_area: &DrawingArea) -> (GtkBox, SpinButton) {
  let root_vbox = GtkBox::new(Orientation::Vertical, 10);
  root_vbox.set_width_request(220);
  root_vbox.set_margin_start(10);
  root_vbox.set_margin_end(10);
  root_vbox.set_margin_top(10);
  root_vbox.set_margin_bottom(10);

  let title = Label::new(Some("<b>Element</b>"));
  title.set_use_markup(true);
  title.set_halign(Align::Start);
  root_vbox.append(&title);

  // --- 1. Atomic number picker ---
  let (current, max) = {
    let st = state.borrow();
    (st.current_element, st.max_element().max(1))
  };
  let spin = SpinButton::with_range(1.0, max as f64, 1.0);
  spin.set_digits(0);
  spin.set_value(current.clamp(1, max) as f64);
  root_vbox.append(&spin);

  // --- 2. Info card ---
  let frame = Frame::new(Some("Configuration"));
  let info_label = Label::new(None);
  info_label.set_wrap(true);
  info_label.set_xalign(0.0);
  info_label.set_margin_top(10);
  info_label.set_margin_bottom(10);
  info_label.set_margin_start(10);
  info_label.set_margin_end(10);
  frame.set_child(Some(&info_label));
  root_vbox.append(&frame);
  refresh_info(&info_label, &state.borrow());

  let s = state.clone();
  let da = drawing_area.clone();
  let info = info_label.clone();
  spin.connect_value_changed(move |sp| {
    let n = sp.value_as_int().max(0) as u32;
    let mut st = s.borrow_mut();
    match st.show_element(n) {
      Ok(()) => {
        if let Some(diagram) = st.diagram() {
          log::debug!("{}", element_summary(diagram));
        }
      }
      Err(e) => log::error!("{}", e),
    }
    refresh_info(&info, &st);
    da.queue_draw();
  });

  // --- 3. Orbit controls ---
  let shuffle_btn = Button::with_label("Shuffle orbits");
  let s = state.clone();
  let da = drawing_area.clone();
  shuffle_btn.connect_clicked(move |_| {
    if let Err(e) = s.borrow_mut().shuffle() {
      log::error!("{}", e);
    }
    da.queue_draw();
  });
  root_vbox.append(&shuffle_btn);

  let pause_btn = ToggleButton::with_label("Pause");
  pause_btn.set_action_name(Some("app.toggle_pause"));
  root_vbox.append(&pause_btn);

  let export_btn = Button::with_label("Export frame...");
  export_btn.set_action_name(Some("app.export"));
  root_vbox.append(&export_btn);

  (root_vbox, spin)
}

/// Rewrites the info card for the element currently on screen.
pub fn refresh_info(label: &Label, state: &AppState) {
  match state.current_record() {
    Some(record) => label.set_markup(&format!(
      "<b>{}</b> ({})\nZ = {}\nShells: {}\nValence electrons: {}",
      record.name,
      record.symbol,
      record.atomic_number,
      record.configuration_label(),
      record.valence_electrons()
    )),
    None => label.set_label("No element shown."),
  }
}
