// src/diagram.rs
//
// A Diagram owns everything drawn for its current element: the surface
// shapes, the geometry and one timeline per orbit. Rendering always starts
// from a full teardown.

use rand::Rng;
use std::collections::HashMap;
use std::time::Duration;

use crate::animation::{Animation, Scheduler, Timeline};
use crate::config::DiagramStyle;
use crate::error::{DiagramError, Result};
use crate::model::{ElementRecord, PeriodicTable};
use crate::rendering::geometry::{build_geometry, AtomGeometry, Circle, OrbitPath};
use crate::rendering::surface::{DrawingSurface, Shape, ShapeId, ShapeKind};

/// Arguments of [`Stage::render`]; both are required.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub element: u32,
    pub container: String,
}

struct OrbitBinding {
    path: OrbitPath,
    electrons: Vec<ShapeId>,
    timeline: Timeline,
}

pub struct Diagram<S: DrawingSurface> {
    surface: S,
    style: DiagramStyle,
    element: Option<ElementRecord>,
    geometry: Option<AtomGeometry>,
    orbits: Vec<OrbitBinding>,
}

impl<S: DrawingSurface> Diagram<S> {
    pub fn new(surface: S, style: DiagramStyle) -> Self {
        Self {
            surface,
            style,
            element: None,
            geometry: None,
            orbits: Vec::new(),
        }
    }

    /// Replace whatever is shown with `record` and start its timelines.
    pub fn render<R: Rng>(&mut self, record: &ElementRecord, scheduler: &mut Scheduler<R>) {
        self.teardown();

        let geometry = build_geometry(&record.shells, &self.style);

        let nucleus = self
            .surface
            .create_shape(ShapeKind::Nucleus, Shape::Circle(geometry.nucleus));
        self.surface.attach(nucleus);

        let mut timelines = scheduler.schedule(&geometry);
        for orbit in &geometry.orbits {
            let ring = self.surface.create_shape(
                ShapeKind::Orbit,
                Shape::Circle(Circle {
                    center: orbit.path.center,
                    radius: orbit.path.radius,
                }),
            );
            self.surface.set_path(ring, &orbit.path);
            self.surface.attach(ring);

            let electrons = orbit
                .electrons
                .iter()
                .map(|e| {
                    let id = self
                        .surface
                        .create_shape(ShapeKind::Electron, Shape::Circle(e.circle));
                    self.surface.attach(id);
                    id
                })
                .collect();

            let Some(pos) = timelines.iter().position(|t| t.orbit() == orbit.path.index) else {
                continue;
            };
            self.orbits.push(OrbitBinding {
                path: orbit.path.clone(),
                electrons,
                timeline: timelines.swap_remove(pos),
            });
        }

        self.sync_positions();
        log::info!(
            "Rendered {} ({}): {} orbits, configuration [{}]",
            record.name,
            record.symbol,
            self.orbits.len(),
            record.configuration_label()
        );
        self.element = Some(record.clone());
        self.geometry = Some(geometry);
    }

    /// Remove every shape and stop every timeline.
    pub fn teardown(&mut self) {
        if let Some(old) = self.element.take() {
            log::debug!("Tearing down {} ({} timelines)", old.symbol, self.orbits.len());
        }
        self.surface.clear();
        self.orbits.clear();
        self.geometry = None;
    }

    /// Advance all timelines by `dt` and move the electrons.
    pub fn tick(&mut self, dt: Duration) {
        for binding in &mut self.orbits {
            binding.timeline.tick(dt);
        }
        self.sync_positions();
    }

    fn sync_positions(&mut self) {
        for binding in &self.orbits {
            let positions = binding.timeline.positions(&binding.path);
            for (&id, pos) in binding.electrons.iter().zip(positions) {
                self.surface.set_position(id, pos);
            }
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn style(&self) -> &DiagramStyle {
        &self.style
    }

    pub fn element(&self) -> Option<&ElementRecord> {
        self.element.as_ref()
    }

    pub fn geometry(&self) -> Option<&AtomGeometry> {
        self.geometry.as_ref()
    }

    pub fn timelines(&self) -> impl Iterator<Item = &Timeline> {
        self.orbits.iter().map(|b| &b.timeline)
    }

    pub fn timeline_count(&self) -> usize {
        self.orbits.len()
    }
}

/// Named containers diagrams can be rendered into.
pub struct Stage<S: DrawingSurface, R: Rng = rand::rngs::StdRng> {
    table: PeriodicTable,
    scheduler: Scheduler<R>,
    containers: HashMap<String, Diagram<S>>,
    paused: bool,
}

impl<S: DrawingSurface, R: Rng> Stage<S, R> {
    pub fn new(table: PeriodicTable, scheduler: Scheduler<R>) -> Self {
        Self {
            table,
            scheduler,
            containers: HashMap::new(),
            paused: false,
        }
    }

    pub fn add_container(&mut self, selector: &str, diagram: Diagram<S>) {
        self.containers.insert(selector.to_string(), diagram);
    }

    pub fn container(&self, selector: &str) -> Option<&Diagram<S>> {
        self.containers.get(selector)
    }

    pub fn table(&self) -> &PeriodicTable {
        &self.table
    }

    /// Clear the target container and draw `options.element` into it.
    ///
    /// Nothing is touched when the element or the container is unknown.
    pub fn render(&mut self, options: &RenderOptions) -> Result<()> {
        let record = self.table.lookup(options.element)?;
        let diagram = self
            .containers
            .get_mut(&options.container)
            .ok_or_else(|| DiagramError::UnknownContainer(options.container.clone()))?;
        diagram.render(record, &mut self.scheduler);
        Ok(())
    }

    pub fn teardown(&mut self, selector: &str) -> Result<()> {
        let diagram = self
            .containers
            .get_mut(selector)
            .ok_or_else(|| DiagramError::UnknownContainer(selector.to_string()))?;
        diagram.teardown();
        Ok(())
    }

    pub fn tick(&mut self, dt: Duration) {
        if self.paused {
            return;
        }
        for diagram in self.containers.values_mut() {
            diagram.tick(dt);
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::TimelineState;
    use crate::config::AnimationConfig;
    use crate::rendering::scene::SceneGraph;

    const ATOM: &str = "#atom";

    fn stage() -> Stage<SceneGraph> {
        let mut stage = Stage::new(
            PeriodicTable::embedded().clone(),
            Scheduler::seeded(2024, &AnimationConfig::default()),
        );
        stage.add_container(ATOM, Diagram::new(SceneGraph::new(), DiagramStyle::default()));
        stage
    }

    fn options(element: u32) -> RenderOptions {
        RenderOptions {
            element,
            container: ATOM.to_string(),
        }
    }

    #[test]
    fn helium_has_one_orbit_two_electrons() {
        let mut stage = stage();
        stage.render(&options(2)).unwrap();
        let diagram = stage.container(ATOM).unwrap();
        let scene = diagram.surface();
        assert_eq!(scene.count(ShapeKind::Nucleus), 1);
        assert_eq!(scene.count(ShapeKind::Orbit), 1);
        assert_eq!(scene.count(ShapeKind::Electron), 2);

        let timelines: Vec<&Timeline> = diagram.timelines().collect();
        assert_eq!(timelines.len(), 1);
        assert_eq!(timelines[0].stagger(), timelines[0].duration() / 2);
        assert_eq!(timelines[0].state(), TimelineState::Playing);
    }

    #[test]
    fn calcium_has_four_timelines() {
        let mut stage = stage();
        stage.render(&options(20)).unwrap();
        let diagram = stage.container(ATOM).unwrap();
        let counts: Vec<usize> = diagram.timelines().map(|t| t.electron_count()).collect();
        assert_eq!(counts, vec![2, 8, 8, 2]);
        assert_eq!(diagram.surface().count(ShapeKind::Orbit), 4);
        assert_eq!(diagram.surface().count(ShapeKind::Electron), 20);
    }

    #[test]
    fn orbits_are_arc_paths() {
        let mut stage = stage();
        stage.render(&options(3)).unwrap();
        let scene = stage.container(ATOM).unwrap().surface();
        let radii: Vec<f64> = scene
            .visible()
            .filter_map(|n| match &n.shape {
                Shape::Path(p) => Some(p.radius),
                _ => None,
            })
            .collect();
        let spacing = DiagramStyle::default().orbit_spacing;
        assert_eq!(radii, vec![spacing, 2.0 * spacing]);
    }

    #[test]
    fn electrons_sit_on_their_orbit_at_first_paint() {
        let mut stage = stage();
        stage.render(&options(10)).unwrap();
        let diagram = stage.container(ATOM).unwrap();
        let center = diagram.style().center();
        let spacing = diagram.style().orbit_spacing;

        let mut distances: Vec<f64> = diagram
            .surface()
            .visible()
            .filter(|n| n.kind == ShapeKind::Electron)
            .filter_map(|n| match &n.shape {
                Shape::Circle(c) => {
                    Some(((c.center[0] - center[0]).powi(2) + (c.center[1] - center[1]).powi(2)).sqrt())
                }
                _ => None,
            })
            .collect();
        distances.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(distances.len(), 10);
        assert!(distances[..2].iter().all(|d| (d - spacing).abs() < 1e-6));
        assert!(distances[2..].iter().all(|d| (d - 2.0 * spacing).abs() < 1e-6));
    }

    #[test]
    fn rerender_replaces_everything() {
        let mut stage = stage();
        stage.render(&options(20)).unwrap();
        stage.render(&options(1)).unwrap();
        let diagram = stage.container(ATOM).unwrap();
        assert_eq!(diagram.element().unwrap().symbol, "H");
        assert_eq!(diagram.surface().len(), 3);
        assert_eq!(diagram.surface().count(ShapeKind::Electron), 1);
        assert_eq!(diagram.timeline_count(), 1);
        assert_eq!(diagram.geometry().unwrap().orbits.len(), 1);
    }

    #[test]
    fn unknown_element_leaves_diagram_alone() {
        let mut stage = stage();
        stage.render(&options(8)).unwrap();
        for bad in [0, 119] {
            match stage.render(&options(bad)) {
                Err(DiagramError::UnknownElement(n)) => assert_eq!(n, bad),
                other => panic!("expected UnknownElement, got {:?}", other),
            }
        }
        let diagram = stage.container(ATOM).unwrap();
        assert_eq!(diagram.element().unwrap().symbol, "O");
        assert_eq!(diagram.surface().count(ShapeKind::Electron), 8);
    }

    #[test]
    fn unknown_element_on_empty_container_draws_nothing() {
        let mut stage = stage();
        assert!(stage.render(&options(0)).is_err());
        let diagram = stage.container(ATOM).unwrap();
        assert!(diagram.surface().is_empty());
        assert!(diagram.geometry().is_none());
        assert_eq!(diagram.timeline_count(), 0);
    }

    #[test]
    fn unknown_container() {
        let mut stage = stage();
        let err = stage
            .render(&RenderOptions {
                element: 2,
                container: "#missing".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, DiagramError::UnknownContainer(s) if s == "#missing"));
    }

    #[test]
    fn teardown_clears_container() {
        let mut stage = stage();
        stage.render(&options(26)).unwrap();
        stage.teardown(ATOM).unwrap();
        let diagram = stage.container(ATOM).unwrap();
        assert!(diagram.surface().is_empty());
        assert!(diagram.element().is_none());
        assert_eq!(diagram.timelines().count(), 0);
    }

    #[test]
    fn tick_moves_electrons_unless_paused() {
        let mut stage = stage();
        stage.render(&options(1)).unwrap();
        let position = |stage: &Stage<SceneGraph>| {
            stage
                .container(ATOM)
                .unwrap()
                .surface()
                .visible()
                .find_map(|n| match (&n.kind, &n.shape) {
                    (ShapeKind::Electron, Shape::Circle(c)) => Some(c.center),
                    _ => None,
                })
                .unwrap()
        };

        let before = position(&stage);
        stage.set_paused(true);
        stage.tick(Duration::from_secs(1));
        assert_eq!(position(&stage), before);

        stage.set_paused(false);
        stage.tick(Duration::from_secs(1));
        assert_ne!(position(&stage), before);
    }

    #[test]
    fn containers_are_independent() {
        let mut stage = stage();
        stage.add_container("#other", Diagram::new(SceneGraph::new(), DiagramStyle::default()));
        stage.render(&options(2)).unwrap();
        stage
            .render(&RenderOptions {
                element: 6,
                container: "#other".to_string(),
            })
            .unwrap();
        assert_eq!(stage.container(ATOM).unwrap().element().unwrap().atomic_number, 2);
        assert_eq!(stage.container("#other").unwrap().element().unwrap().atomic_number, 6);
    }
}
