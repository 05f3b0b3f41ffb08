//src/model/mod.rs
pub mod elements;

// Re-exports for cleaner imports
pub use elements::{ElementRecord, PeriodicTable};
