use gtk4::DrawingArea;
use gtk4::prelude::*;
use gtk4::cairo;
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use super::painter::{self, Viewport};
use super::scene::SceneGraph;
use crate::config::{DiagramStyle, ExportFormat};
use crate::diagram::Diagram;
use crate::error::{DiagramError, Result};
use crate::state::AppState;

/// Margin around the diagram on screen and in exports, in diagram units.
const MARGIN: f64 = 12.0;

// --- Screen Rendering Entry Point ---
pub fn setup_drawing(drawing_area: &DrawingArea, state: Rc<RefCell<AppState>>) {
    let s = state.clone();
    drawing_area.set_draw_func(move |_, cr: &cairo::Context, width, height| {
        let st = s.borrow();
        let Some(diagram) = st.diagram() else {
            return;
        };
        let style = diagram.style();
        let viewport = Viewport::fit(style.center(), view_extent(diagram), width as f64, height as f64);

        let painted = painter::paint_background(cr, style)
            .and_then(|_| painter::paint_scene(cr, diagram.surface(), style, &viewport));
        if let Err(e) = painted {
            log::error!("Drawing failed: {}", e);
        }
    });

    // Frame clock drives the timelines; dt comes from consecutive frame times.
    let last_frame = Rc::new(RefCell::new(None::<i64>));
    drawing_area.add_tick_callback(move |da, clock| {
        let now = clock.frame_time();
        let dt = match last_frame.borrow_mut().replace(now) {
            Some(prev) if now > prev => Duration::from_micros((now - prev) as u64),
            _ => Duration::ZERO,
        };
        state.borrow_mut().stage.tick(dt);
        da.queue_draw();
        gtk4::glib::ControlFlow::Continue
    });
}

fn view_extent(diagram: &Diagram<SceneGraph>) -> f64 {
    diagram
        .geometry()
        .map(|g| g.extent())
        .unwrap_or(diagram.style().nucleus_radius)
        + MARGIN
}

// --- File Export Entry Point ---

/// Write the current frame of `diagram` to `path`. The page is a square just
/// large enough for the outermost orbit.
pub fn export_frame(
    diagram: &Diagram<SceneGraph>,
    path: &Path,
    format: ExportFormat,
    pixel_scale: f64,
) -> Result<()> {
    let extent = view_extent(diagram);
    let style = diagram.style();
    let scene = diagram.surface();

    match format {
        ExportFormat::Svg => {
            let side = 2.0 * extent;
            let surface = cairo::SvgSurface::new(side, side, Some(path)).map_err(export_err)?;
            paint_to(&surface, scene, style, extent, side)?;
            surface.finish();
        }
        ExportFormat::Pdf => {
            let side = 2.0 * extent;
            let surface = cairo::PdfSurface::new(side, side, path).map_err(export_err)?;
            paint_to(&surface, scene, style, extent, side)?;
            surface.finish();
        }
        ExportFormat::Png => {
            let side = (2.0 * extent * pixel_scale.max(0.1)).ceil();
            let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, side as i32, side as i32)
                .map_err(export_err)?;
            paint_to(&surface, scene, style, extent, side)?;
            let mut file = std::fs::File::create(path)?;
            surface
                .write_to_png(&mut file)
                .map_err(|e| DiagramError::Export(e.to_string()))?;
        }
    }

    log::info!("Exported {:?} as {}", path, format.extension());
    Ok(())
}

fn paint_to<T: AsRef<cairo::Surface>>(
    surface: &T,
    scene: &SceneGraph,
    style: &DiagramStyle,
    extent: f64,
    side: f64,
) -> Result<()> {
    let cr = cairo::Context::new(surface).map_err(export_err)?;
    let viewport = Viewport::fit(style.center(), extent, side, side);
    painter::paint_background(&cr, style).map_err(export_err)?;
    painter::paint_scene(&cr, scene, style, &viewport).map_err(export_err)?;
    Ok(())
}

fn export_err(e: cairo::Error) -> DiagramError {
    DiagramError::Export(e.to_string())
}
