// src/rendering/scene.rs

use super::geometry::OrbitPath;
use super::surface::{DrawingSurface, Shape, ShapeId, ShapeKind};

// Shared by painter.rs for drawing and by the exporters.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
  pub kind: ShapeKind,
  pub shape: Shape,
  pub attached: bool,
}

/// In-memory surface: an ordered list of nodes, painted back to front.
#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
  nodes: Vec<SceneNode>,
}

impl SceneGraph {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn node(&self, id: ShapeId) -> Option<&SceneNode> {
    self.nodes.get(id.0)
  }

  /// Attached nodes in paint order.
  pub fn visible(&self) -> impl Iterator<Item = &SceneNode> {
    self.nodes.iter().filter(|n| n.attached)
  }

  pub fn count(&self, kind: ShapeKind) -> usize {
    self.visible().filter(|n| n.kind == kind).count()
  }

  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }
}

impl DrawingSurface for SceneGraph {
  fn clear(&mut self) {
    self.nodes.clear();
  }

  fn create_shape(&mut self, kind: ShapeKind, shape: Shape) -> ShapeId {
    self.nodes.push(SceneNode {
      kind,
      shape,
      attached: false,
    });
    ShapeId(self.nodes.len() - 1)
  }

  fn set_path(&mut self, id: ShapeId, path: &OrbitPath) {
    if let Some(node) = self.nodes.get_mut(id.0) {
      node.shape = Shape::Path(path.clone());
    }
  }

  fn set_position(&mut self, id: ShapeId, position: [f64; 2]) {
    if let Some(SceneNode {
      shape: Shape::Circle(circle),
      ..
    }) = self.nodes.get_mut(id.0)
    {
      circle.center = position;
    }
  }

  fn attach(&mut self, id: ShapeId) {
    if let Some(node) = self.nodes.get_mut(id.0) {
      node.attached = true;
    }
  }
}
