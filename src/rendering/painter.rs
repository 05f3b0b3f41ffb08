// src/rendering/painter.rs
// Cairo painting of a SceneGraph. Shared by the screen and the exporters.

use super::geometry::{Circle, OrbitPath};
use super::scene::SceneGraph;
use super::surface::{Shape, ShapeKind};
use crate::config::DiagramStyle;
use gtk4::cairo;
use std::f64::consts::PI;

/// Maps diagram units onto a target area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scale: f64,
    pub offset: [f64; 2],
}

impl Viewport {
    /// Fit a square of half-width `extent` around `center` into `width` x `height`.
    pub fn fit(center: [f64; 2], extent: f64, width: f64, height: f64) -> Self {
        let side = width.min(height).max(1.0);
        let scale = side / (2.0 * extent.max(1.0));
        Self {
            scale,
            offset: [
                width / 2.0 - center[0] * scale,
                height / 2.0 - center[1] * scale,
            ],
        }
    }

    pub fn apply(&self, cr: &cairo::Context) {
        cr.translate(self.offset[0], self.offset[1]);
        cr.scale(self.scale, self.scale);
    }
}

pub fn paint_background(cr: &cairo::Context, style: &DiagramStyle) -> Result<(), cairo::Error> {
    let (r, g, b) = style.background_color;
    cr.set_source_rgb(r, g, b);
    cr.paint()
}

/// Paint every attached node of `scene`, back to front.
pub fn paint_scene(
    cr: &cairo::Context,
    scene: &SceneGraph,
    style: &DiagramStyle,
    viewport: &Viewport,
) -> Result<(), cairo::Error> {
    cr.save()?;
    viewport.apply(cr);
    for node in scene.visible() {
        match (&node.kind, &node.shape) {
            (ShapeKind::Nucleus, Shape::Circle(c)) => draw_nucleus(cr, c, style.nucleus_color)?,
            (ShapeKind::Orbit, Shape::Path(path)) => draw_orbit(cr, path, style)?,
            (ShapeKind::Orbit, Shape::Circle(c)) => {
                // Ring not yet given its path.
                cr.new_sub_path();
                cr.arc(c.center[0], c.center[1], c.radius, 0.0, 2.0 * PI);
                stroke_orbit(cr, style)?;
            }
            (ShapeKind::Electron, Shape::Circle(c)) => draw_electron(cr, c, style.electron_color)?,
            (_, Shape::Path(path)) => draw_orbit(cr, path, style)?,
        }
    }
    cr.restore()?;
    log::trace!("Painted scene at scale {:.3}", viewport.scale);
    Ok(())
}

fn draw_orbit(cr: &cairo::Context, path: &OrbitPath, style: &DiagramStyle) -> Result<(), cairo::Error> {
    cr.new_sub_path();
    // Cairo sweeps toward increasing angles, clockwise with y pointing down.
    for arc in &path.arcs {
        cr.arc(
            path.center[0],
            path.center[1],
            path.radius,
            arc.start_angle,
            arc.end_angle(),
        );
    }
    stroke_orbit(cr, style)
}

fn stroke_orbit(cr: &cairo::Context, style: &DiagramStyle) -> Result<(), cairo::Error> {
    let (r, g, b) = style.orbit_color;
    cr.set_source_rgb(r, g, b);
    cr.set_line_width(style.orbit_line_width);
    cr.stroke()
}

fn draw_nucleus(cr: &cairo::Context, circle: &Circle, color: (f64, f64, f64)) -> Result<(), cairo::Error> {
    let (r, g, b) = color;
    let [x, y] = circle.center;
    let radius = circle.radius;

    // Highlight offset to the top-left for a little depth.
    let gradient = cairo::RadialGradient::new(
        x - radius * 0.3,
        y - radius * 0.3,
        radius * 0.1,
        x,
        y,
        radius,
    );
    gradient.add_color_stop_rgb(0.0, 1.0, 1.0, 1.0);
    gradient.add_color_stop_rgb(0.2, (r + 0.2).min(1.0), (g + 0.2).min(1.0), (b + 0.2).min(1.0));
    gradient.add_color_stop_rgb(1.0, r * 0.6, g * 0.6, b * 0.6);

    cr.set_source(&gradient)?;
    cr.arc(x, y, radius, 0.0, 2.0 * PI);
    cr.fill()?;

    cr.set_source_rgba(0.0, 0.0, 0.0, 0.3);
    cr.set_line_width(radius * 0.05);
    cr.arc(x, y, radius, 0.0, 2.0 * PI);
    cr.stroke()
}

fn draw_electron(cr: &cairo::Context, circle: &Circle, color: (f64, f64, f64)) -> Result<(), cairo::Error> {
    let (r, g, b) = color;
    cr.set_source_rgb(r, g, b);
    cr.new_sub_path();
    cr.arc(circle.center[0], circle.center[1], circle.radius, 0.0, 2.0 * PI);
    cr.fill()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_screen(vp: &Viewport, p: [f64; 2]) -> [f64; 2] {
        [p[0] * vp.scale + vp.offset[0], p[1] * vp.scale + vp.offset[1]]
    }

    #[test]
    fn fit_centers_the_diagram() {
        let vp = Viewport::fit([250.0, 250.0], 100.0, 800.0, 400.0);
        assert!((vp.scale - 2.0).abs() < 1e-12);
        let c = to_screen(&vp, [250.0, 250.0]);
        assert!((c[0] - 400.0).abs() < 1e-9);
        assert!((c[1] - 200.0).abs() < 1e-9);
        let top = to_screen(&vp, [250.0, 150.0]);
        assert!(top[1].abs() < 1e-9);
    }

    #[test]
    fn fit_survives_degenerate_sizes() {
        let vp = Viewport::fit([0.0, 0.0], 0.0, 0.0, 0.0);
        assert!(vp.scale.is_finite() && vp.scale > 0.0);
    }
}
