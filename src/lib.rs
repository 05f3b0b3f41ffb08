//! Animated Bohr model diagrams.
//!
//! The core (`model`, `rendering::geometry`, `animation`, `diagram`) does not
//! touch GTK; the viewer modules (`menu`, `panels`, `rendering::export`) paint
//! a [`rendering::SceneGraph`] with cairo.

pub mod animation;
pub mod config;
pub mod diagram;
pub mod error;
pub mod menu;
pub mod model;
pub mod panels;
pub mod rendering;
pub mod state;
pub mod utils;

pub use diagram::{Diagram, RenderOptions, Stage};
pub use error::DiagramError;
