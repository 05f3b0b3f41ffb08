pub mod export;
pub mod geometry;
pub mod painter;
pub mod scene;
pub mod surface;

// Re-export specific functions to keep the API clean for the rest of the app
pub use export::{export_frame, setup_drawing};
pub use scene::SceneGraph;
pub use surface::{DrawingSurface, Shape, ShapeId, ShapeKind};
