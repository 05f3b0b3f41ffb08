// src/state.rs
use std::path::Path;

use crate::animation::Scheduler;
use crate::config::{Config, ExportFormat};
use crate::diagram::{Diagram, RenderOptions, Stage};
use crate::error::Result;
use crate::model::{ElementRecord, PeriodicTable};
use crate::rendering::{export_frame, SceneGraph};

/// Selector of the drawing area's diagram.
pub const MAIN_CONTAINER: &str = "#atom";

pub struct AppState {
    pub config: Config,
    pub stage: Stage<SceneGraph>,
    pub current_element: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self::from_config(Config::default())
    }

    pub fn from_config(config: Config) -> Self {
        let table = match &config.dataset_path {
            Some(path) => PeriodicTable::from_file(path).unwrap_or_else(|e| {
                log::error!("Could not load dataset {:?}: {}. Using built-in table.", path, e);
                PeriodicTable::embedded().clone()
            }),
            None => PeriodicTable::embedded().clone(),
        };

        let mut stage = Stage::new(table, Scheduler::from_config(&config.animation));
        stage.add_container(
            MAIN_CONTAINER,
            Diagram::new(SceneGraph::new(), config.style.clone()),
        );

        Self {
            current_element: config.default_element,
            config,
            stage,
        }
    }

    pub fn load_config(&mut self) -> String {
        let (config, msg) = Config::load();
        *self = Self::from_config(config);
        msg
    }

    pub fn diagram(&self) -> Option<&Diagram<SceneGraph>> {
        self.stage.container(MAIN_CONTAINER)
    }

    pub fn current_record(&self) -> Option<&ElementRecord> {
        self.diagram().and_then(|d| d.element())
    }

    pub fn show_element(&mut self, atomic_number: u32) -> Result<()> {
        self.stage.render(&RenderOptions {
            element: atomic_number,
            container: MAIN_CONTAINER.to_string(),
        })?;
        self.current_element = atomic_number;
        Ok(())
    }

    /// Show the configured element, falling back to the lightest element of
    /// the table when the configured one is unknown.
    pub fn show_configured_element(&mut self) -> Result<()> {
        let configured = self.current_element;
        let Err(e) = self.show_element(configured) else {
            return Ok(());
        };
        log::error!("{}", e);
        let lightest = (1..=self.max_element())
            .find(|&n| self.stage.table().lookup(n).is_ok())
            .ok_or(e)?;
        log::warn!("Showing element {} instead of {}", lightest, configured);
        self.show_element(lightest)
    }

    /// Re-render the current element with fresh orbit speeds and directions.
    pub fn shuffle(&mut self) -> Result<()> {
        self.show_element(self.current_element)
    }

    /// Nearest element `step` places away that the table knows, or the
    /// current one at either end of the table.
    pub fn stepped_element(&self, step: i64) -> u32 {
        let table = self.stage.table();
        let max = i64::from(self.max_element());
        let mut n = i64::from(self.current_element);
        loop {
            n += step;
            if step == 0 || n < 1 || n > max {
                return self.current_element;
            }
            if table.lookup(n as u32).is_ok() {
                return n as u32;
            }
        }
    }

    pub fn max_element(&self) -> u32 {
        self.stage.table().max_atomic_number()
    }

    pub fn export(&self, path: &Path, format: ExportFormat) -> Result<()> {
        match self.diagram() {
            Some(diagram) => export_frame(diagram, path, format, 2.0),
            None => Err(crate::error::DiagramError::UnknownContainer(
                MAIN_CONTAINER.to_string(),
            )),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiagramError;

    fn state() -> AppState {
        let mut config = Config::default();
        config.animation.seed = Some(99);
        AppState::from_config(config)
    }

    #[test]
    fn show_element_tracks_current() {
        let mut st = state();
        st.show_element(20).unwrap();
        assert_eq!(st.current_element, 20);
        assert_eq!(st.current_record().unwrap().symbol, "Ca");
    }

    #[test]
    fn failed_lookup_keeps_current() {
        let mut st = state();
        st.show_element(6).unwrap();
        assert!(matches!(st.show_element(200), Err(DiagramError::UnknownElement(200))));
        assert_eq!(st.current_element, 6);
        assert_eq!(st.current_record().unwrap().symbol, "C");
    }

    #[test]
    fn unknown_configured_element_falls_back_to_lightest() {
        let mut config = Config::default();
        config.animation.seed = Some(1);
        config.default_element = 250;
        let mut st = AppState::from_config(config);
        st.show_configured_element().unwrap();
        assert_eq!(st.current_element, 1);
        assert_eq!(st.current_record().unwrap().symbol, "H");
    }

    #[test]
    fn stepping_clamps_at_the_table_ends() {
        let mut st = state();
        st.show_element(1).unwrap();
        assert_eq!(st.stepped_element(-1), 1);
        assert_eq!(st.stepped_element(1), 2);
        st.show_element(118).unwrap();
        assert_eq!(st.stepped_element(1), 118);
        assert_eq!(st.stepped_element(-1), 117);
    }

    #[test]
    fn shuffle_redraws_same_element() {
        let mut st = state();
        st.show_element(11).unwrap();
        let before: Vec<_> = st.diagram().unwrap().timelines().map(|t| t.duration()).collect();
        st.shuffle().unwrap();
        let diagram = st.diagram().unwrap();
        let after: Vec<_> = diagram.timelines().map(|t| t.duration()).collect();
        assert_eq!(diagram.element().unwrap().atomic_number, 11);
        assert_eq!(after.len(), 3);
        assert_ne!(before, after);
    }

    #[test]
    fn missing_dataset_falls_back_to_builtin() {
        let mut config = Config::default();
        config.dataset_path = Some("/nonexistent/table.json".into());
        let st = AppState::from_config(config);
        assert_eq!(st.max_element(), 118);
    }

    #[test]
    fn custom_dataset_limits_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.json");
        std::fs::write(
            &path,
            r#"{"elements": [{"number": 2, "symbol": "He", "name": "Helium", "shells": [2]}]}"#,
        )
        .unwrap();
        let mut config = Config::default();
        config.dataset_path = Some(path);
        let mut st = AppState::from_config(config);
        assert_eq!(st.max_element(), 2);
        assert!(st.show_element(2).is_ok());
        assert!(st.show_element(1).is_err());
    }

    #[test]
    fn stepping_skips_gaps_in_a_custom_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.json");
        std::fs::write(
            &path,
            r#"{"elements": [
                {"number": 1, "symbol": "H", "name": "Hydrogen", "shells": [1]},
                {"number": 3, "symbol": "Li", "name": "Lithium", "shells": [2, 1]}
            ]}"#,
        )
        .unwrap();
        let mut config = Config::default();
        config.dataset_path = Some(path);
        let mut st = AppState::from_config(config);
        st.show_element(1).unwrap();
        assert_eq!(st.stepped_element(1), 3);
        st.show_element(3).unwrap();
        assert_eq!(st.stepped_element(-1), 1);
        assert_eq!(st.stepped_element(1), 3);
    }
}
