// src/utils/logger.rs

use gtk4::prelude::*;
use gtk4::{glib, TextView};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::sync::OnceLock;

static LOG_VIEW: OnceLock<glib::SendWeakRef<TextView>> = OnceLock::new();
static LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

/// Level from `BOHRVIEW_LOG` (error, warn, info, debug, trace), info by default.
pub fn level_from_env() -> LevelFilter {
  std::env::var("BOHRVIEW_LOG")
    .ok()
    .and_then(|v| v.parse().ok())
    .unwrap_or(LevelFilter::Info)
}

pub fn init(view: &TextView) -> Result<(), SetLoggerError> {
  let buffer = view.buffer();
  let tag_table = buffer.tag_table();

  for (name, color, bold) in [
    ("error", "#ff4444", true),
    ("warn", "#ffbb33", false),
    ("info", "#33b5e5", false),
    ("debug", "#aaaaaa", false),
  ] {
    if tag_table.lookup(name).is_none() {
      let tag = gtk4::TextTag::new(Some(name));
      tag.set_property("foreground", color);
      if bold {
        tag.set_property("weight", 700);
      }
      tag_table.add(&tag);
    }
  }

  let _ = LOG_VIEW.set(view.downgrade().into());
  log::set_logger(&LOGGER).map(|()| log::set_max_level(level_from_env()))
}

/// Console line and tag name for one record.
pub fn format_line(level: Level, message: &str) -> (String, &'static str) {
  let (icon, tag_name) = match level {
    Level::Error => ("🔴", "error"),
    Level::Warn => ("🟠", "warn"),
    Level::Info => ("🔵", "info"),
    Level::Debug => ("⚪", "debug"),
    Level::Trace => ("▫️", "debug"),
  };
  (format!("{}  {}\n", icon, message), tag_name)
}

impl log::Log for ConsoleLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record: &Record) {
    if !self.enabled(record.metadata()) {
      return;
    }
    let (msg, tag_name) = format_line(record.level(), &record.args().to_string());
    eprint!("[{}] {}", record.target(), msg);

    // The view lives on the main thread; records may come from anywhere.
    glib::MainContext::default().spawn_local(async move {
      if let Some(view) = LOG_VIEW.get().and_then(|w| w.upgrade()) {
        let buffer = view.buffer();
        let mut end = buffer.end_iter();
        buffer.insert_with_tags_by_name(&mut end, &msg, &[tag_name]);

        // Auto-scroll
        let mark = buffer.create_mark(None, &buffer.end_iter(), false);
        view.scroll_to_mark(&mark, 0.0, true, 0.0, 1.0);
        buffer.delete_mark(&mark);
      }
    });
  }

  fn flush(&self) {}
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn lines_carry_icon_and_tag() {
    let (line, tag) = format_line(Level::Warn, "slow frame");
    assert_eq!(tag, "warn");
    assert!(line.starts_with("🟠"));
    assert!(line.ends_with("slow frame\n"));
    assert_eq!(format_line(Level::Trace, "x").1, "debug");
  }
}
