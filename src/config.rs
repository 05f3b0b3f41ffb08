// src/config.rs

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::time::Duration;

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum ExportFormat {
  Png,
  #[default]
  Svg,
  Pdf,
}

impl ExportFormat {
  pub fn extension(&self) -> &'static str {
    match self {
      ExportFormat::Png => "png",
      ExportFormat::Svg => "svg",
      ExportFormat::Pdf => "pdf",
    }
  }

  /// Guess the format from a file name, falling back to PNG.
  pub fn from_path(path: &Path) -> Self {
    let ext = path
      .extension()
      .map(|e| e.to_string_lossy().to_lowercase())
      .unwrap_or_default();
    match ext.as_str() {
      "svg" => ExportFormat::Svg,
      "pdf" => ExportFormat::Pdf,
      _ => ExportFormat::Png,
    }
  }
}

// --- DiagramStyle ---
// Layout constants shared by every element: larger atoms add orbits outward,
// they never widen the spacing.

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiagramStyle {
  /// Width and height of the diagram canvas in user units.
  pub canvas_size: f64,
  pub nucleus_radius: f64,
  pub electron_radius: f64,
  pub orbit_spacing: f64,
  pub orbit_line_width: f64,
  pub nucleus_color: (f64, f64, f64),
  pub orbit_color: (f64, f64, f64),
  pub electron_color: (f64, f64, f64),
  pub background_color: (f64, f64, f64),
}

impl Default for DiagramStyle {
  fn default() -> Self {
    Self {
      canvas_size: 500.0,
      nucleus_radius: 20.0,
      electron_radius: 6.0,
      orbit_spacing: 30.0,
      orbit_line_width: 1.5,
      nucleus_color: (0.85, 0.25, 0.25),
      orbit_color: (0.55, 0.55, 0.6),
      electron_color: (0.2, 0.45, 0.95),
      background_color: (0.97, 0.97, 0.97),
    }
  }
}

impl DiagramStyle {
  /// Fixed center point of the diagram.
  pub fn center(&self) -> [f64; 2] {
    [self.canvas_size / 2.0, self.canvas_size / 2.0]
  }
}

// --- AnimationConfig ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
  pub min_duration_secs: f64,
  pub max_duration_secs: f64,
  /// Fixed seed for reproducible orbit speeds and directions.
  #[serde(default)]
  pub seed: Option<u64>,
}

impl Default for AnimationConfig {
  fn default() -> Self {
    Self {
      min_duration_secs: 6.0,
      max_duration_secs: 15.0,
      seed: None,
    }
  }
}

/// Longest accepted orbit period, in seconds.
pub const MAX_ORBIT_SECS: f64 = 3600.0;

impl AnimationConfig {
  /// Values `Duration` cannot hold fall back to the default range.
  pub fn duration_range(&self) -> (Duration, Duration) {
    let fallback = AnimationConfig::default();
    let secs = |v: f64, default: f64| {
      Duration::try_from_secs_f64(v).unwrap_or_else(|_| Duration::from_secs_f64(default))
    };
    (
      secs(self.min_duration_secs, fallback.min_duration_secs),
      secs(self.max_duration_secs, fallback.max_duration_secs),
    )
  }
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
  #[serde(default = "default_element")]
  pub default_element: u32,

  /// Alternative periodic table dataset; the embedded table is used when unset.
  #[serde(default)]
  pub dataset_path: Option<PathBuf>,

  #[serde(default)]
  pub default_export_format: ExportFormat,

  #[serde(default)]
  pub style: DiagramStyle,

  #[serde(default)]
  pub animation: AnimationConfig,
}

fn default_element() -> u32 {
  1
}

impl Default for Config {
  fn default() -> Self {
    Self {
      default_element: default_element(),
      dataset_path: None,
      default_export_format: ExportFormat::default(),
      style: DiagramStyle::default(),
      animation: AnimationConfig::default(),
    }
  }
}

impl Config {
  /// Loads config from standard OS location (e.g., ~/.config/bohrview/settings.json)
  pub fn load() -> (Self, String) {
    Self::load_from(&Self::get_path())
  }

  pub fn load_from(path: &Path) -> (Self, String) {
    let (mut cfg, msg) = if path.exists() {
      match File::open(path) {
        Ok(file) => {
          let reader = BufReader::new(file);
          match serde_json::from_reader(reader) {
            Ok(cfg) => (cfg, format!("Config loaded from {:?}", path)),
            Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
          }
        }
        Err(e) => (Self::default(), format!("Error opening config: {}", e)),
      }
    } else {
      (
        Self::default(),
        "No config found. Using defaults.".to_string(),
      )
    };
    cfg.sanitize();
    (cfg, msg)
  }

  /// Saves config to standard OS location
  pub fn save(&self) -> String {
    self.save_to(&Self::get_path())
  }

  pub fn save_to(&self, path: &Path) -> String {
    if let Some(parent) = path.parent() {
      let _ = fs::create_dir_all(parent);
    }

    match File::create(path) {
      Ok(file) => {
        let writer = BufWriter::new(file);
        match serde_json::to_writer_pretty(writer, self) {
          Ok(_) => format!("Config saved to {:?}", path),
          Err(e) => format!("Failed to save config: {}", e),
        }
      }
      Err(e) => format!("Could not create config file: {}", e),
    }
  }

  /// Repairs values the renderer cannot work with.
  pub fn sanitize(&mut self) {
    let anim = &mut self.animation;
    let range_ok = anim.min_duration_secs.is_finite()
      && anim.max_duration_secs.is_finite()
      && anim.min_duration_secs > 0.0
      && anim.min_duration_secs <= anim.max_duration_secs
      && anim.max_duration_secs <= MAX_ORBIT_SECS;
    if !range_ok {
      log::warn!(
        "Invalid orbit duration range {}..{}s, using defaults",
        anim.min_duration_secs,
        anim.max_duration_secs
      );
      let seed = anim.seed;
      *anim = AnimationConfig { seed, ..AnimationConfig::default() };
    }

    let style = &self.style;
    if !(style.orbit_spacing > 0.0 && style.electron_radius > 0.0 && style.nucleus_radius > 0.0)
      || !(style.canvas_size > 0.0)
    {
      log::warn!("Invalid diagram dimensions, using default style");
      self.style = DiagramStyle::default();
    }

    if self.default_element == 0 {
      self.default_element = default_element();
    }
  }

  fn get_path() -> PathBuf {
    // "com.example.bohrview" should match the Application ID in main.rs
    if let Some(proj) = ProjectDirs::from("com", "example", "bohrview") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}
