// src/rendering/surface.rs

use super::geometry::{Circle, OrbitPath};

/// Handle to a shape owned by a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShapeId(pub usize);

/// What a shape stands for; painters pick colors from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Nucleus,
    Orbit,
    Electron,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Path(OrbitPath),
}

/// Minimal retained drawing target a diagram builds itself on.
pub trait DrawingSurface {
    /// Drop every shape.
    fn clear(&mut self);

    fn create_shape(&mut self, kind: ShapeKind, shape: Shape) -> ShapeId;

    /// Replace the shape of `id` with an orbit path.
    fn set_path(&mut self, id: ShapeId, path: &OrbitPath);

    /// Move a circle shape so its center sits at `position`.
    fn set_position(&mut self, id: ShapeId, position: [f64; 2]);

    /// Make `id` part of the visible container.
    fn attach(&mut self, id: ShapeId);
}
