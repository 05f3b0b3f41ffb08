// src/menu/actions_view.rs

use crate::state::AppState;
use gtk4::prelude::*;
use gtk4::{Application, DrawingArea, SpinButton};
use std::cell::RefCell;
use std::rc::Rc;

pub fn setup(
    app: &Application,
    state: Rc<RefCell<AppState>>,
    drawing_area: &DrawingArea,
    element_spin: &SpinButton,
) {
    // 1. Pause / Resume (stateful, drives the sidebar toggle too)
    let act_pause = gtk4::gio::SimpleAction::new_stateful("toggle_pause", None, &false.to_variant());
    let s_pause = state.clone();

    act_pause.connect_activate(move |action, _| {
        let paused = !action
            .state()
            .and_then(|v| v.get::<bool>())
            .unwrap_or(false);
        action.set_state(&paused.to_variant());
        s_pause.borrow_mut().stage.set_paused(paused);
        log::debug!("Orbits {}", if paused { "paused" } else { "resumed" });
    });
    app.add_action(&act_pause);

    // 2. Shuffle
    let act_shuffle = gtk4::gio::SimpleAction::new("shuffle", None);
    let s_shuffle = state.clone();
    let da_shuffle = drawing_area.downgrade();

    act_shuffle.connect_activate(move |_, _| {
        if let Err(e) = s_shuffle.borrow_mut().shuffle() {
            log::error!("{}", e);
        }
        if let Some(da) = da_shuffle.upgrade() {
            da.queue_draw();
        }
    });
    app.add_action(&act_shuffle);

    // 3. Step through the table. The spin button owns the element choice, so
    // moving it re-renders and refreshes the info card.
    for (name, step) in [("next_element", 1i64), ("prev_element", -1i64)] {
        let act = gtk4::gio::SimpleAction::new(name, None);
        let s = state.clone();
        let spin_weak = element_spin.downgrade();

        act.connect_activate(move |_, _| {
            let (current, target) = {
                let st = s.borrow();
                (st.current_element, st.stepped_element(step))
            };
            if target == current {
                return;
            }
            if let Some(spin) = spin_weak.upgrade() {
                spin.set_value(target as f64);
            }
        });
        app.add_action(&act);
    }
}
