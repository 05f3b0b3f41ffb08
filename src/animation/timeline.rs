//! Repeat-forever timeline driving the electrons of one orbit.
//!
//! Electron `i` starts `i * stagger` after the timeline origin, with
//! `stagger = duration / k`. Until it has started an electron has no
//! position, which is why the scheduler seeks every new timeline forward by
//! one full duration: from then on all `k` electrons are on the path, evenly
//! spaced, for good.
//!
//! # Invariants
//!
//! 1. After a seek of at least `duration`, every slot has a position.
//! 2. Positions of consecutive slots differ by `1 / k` of a turn at all times.
//! 3. A timeline never completes; only teardown ends it.

use std::time::Duration;

use super::{Animation, Direction};
use crate::rendering::geometry::OrbitPath;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineState {
    /// Built, not yet seeked: later slots are still bunched at the origin.
    Constructed,
    /// Seeked and looping forever.
    Playing,
}

#[derive(Debug, Clone)]
pub struct Timeline {
    orbit: usize,
    electrons: usize,
    duration: Duration,
    direction: Direction,
    elapsed: Duration,
    state: TimelineState,
}

impl Timeline {
    /// Create a timeline for `electrons` electrons on orbit `orbit` (1-based).
    pub fn new(orbit: usize, electrons: usize, duration: Duration, direction: Direction) -> Self {
        debug_assert!(electrons > 0, "orbits without electrons get no timeline");
        Self {
            orbit,
            electrons: electrons.max(1),
            duration: if duration.is_zero() {
                Duration::from_nanos(1)
            } else {
                duration
            },
            direction,
            elapsed: Duration::ZERO,
            state: TimelineState::Constructed,
        }
    }

    pub fn orbit(&self) -> usize {
        self.orbit
    }

    pub fn electron_count(&self) -> usize {
        self.electrons
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn state(&self) -> TimelineState {
        self.state
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Delay between consecutive electrons.
    pub fn stagger(&self) -> Duration {
        self.duration / self.electrons as u32
    }

    /// Jump to `position` on the timeline and start playing.
    pub fn seek(&mut self, position: Duration) {
        self.elapsed = position;
        self.state = TimelineState::Playing;
        self.wrap();
    }

    // Keep elapsed within [duration, 2 * duration) once past the first loop,
    // every slot has started by then.
    fn wrap(&mut self) {
        if self.elapsed >= self.duration * 2 {
            let extra = self.elapsed - self.duration;
            let loops = (extra.as_nanos() / self.duration.as_nanos()) as u32;
            self.elapsed = self.duration + (extra - self.duration * loops);
        }
    }

    /// Traversal parameter of electron `slot` in [0, 1), or `None` while it has
    /// not started yet.
    pub fn progress_of(&self, slot: usize) -> Option<f64> {
        if slot >= self.electrons {
            return None;
        }
        let offset = self.stagger() * slot as u32;
        if self.elapsed < offset {
            return None;
        }
        let local = (self.elapsed - offset).as_secs_f64() / self.duration.as_secs_f64();
        Some(self.direction.apply(local.rem_euclid(1.0)))
    }

    /// Current position of every electron on `path`; unstarted slots sit at
    /// the origin.
    pub fn positions(&self, path: &OrbitPath) -> Vec<[f64; 2]> {
        (0..self.electrons)
            .map(|slot| {
                self.progress_of(slot)
                    .map(|t| path.point_at(t))
                    .unwrap_or([0.0, 0.0])
            })
            .collect()
    }
}

impl Animation for Timeline {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
        self.wrap();
    }

    /// Progress of the lead electron.
    fn value(&self) -> f32 {
        self.progress_of(0).unwrap_or(0.0) as f32
    }
}
