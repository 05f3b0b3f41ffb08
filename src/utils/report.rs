// src/utils/report.rs

use crate::diagram::Diagram;
use crate::rendering::DrawingSurface;
use crate::animation::{Animation, Direction};

/// Text for the console when an element is shown.
pub fn element_summary<S: DrawingSurface>(diagram: &Diagram<S>) -> String {
    let Some(record) = diagram.element() else {
        return "No element shown.".to_string();
    };

    let mut out = String::new();
    out.push_str(&format!("Element: {} ({}), Z = {}\n", record.name, record.symbol, record.atomic_number));
    out.push_str(&format!("Configuration: {}\n", record.configuration_label()));
    out.push_str("--------------------------------------------------\n");
    out.push_str(&format!(
        "{:<8} {:<10} {:<10} {:<10} {:<6} {}\n",
        "Orbit", "Electrons", "Loop (s)", "Stagger", "Dir", "Phase"
    ));
    for tl in diagram.timelines() {
        let dir = match tl.direction() {
            Direction::Forward => "CW",
            Direction::Reverse => "CCW",
        };
        out.push_str(&format!(
            "{:<8} {:<10} {:<10.2} {:<10.3} {:<6} {:<6.2}\n",
            tl.orbit(),
            tl.electron_count(),
            tl.duration().as_secs_f64(),
            tl.stagger().as_secs_f64(),
            dir,
            tl.value()
        ));
    }
    out
}
