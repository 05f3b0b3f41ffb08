//! Orbit animation: looping timelines and the scheduler that creates them.
//!
//! Timelines produce traversal parameters in [0, 1) for each electron of an
//! orbit. The host drives them with its frame clock through
//! [`Animation::tick`]; nothing here sleeps or spawns.

pub mod scheduler;
pub mod timeline;

use std::time::Duration;

pub use scheduler::Scheduler;
pub use timeline::{Timeline, TimelineState};

/// A time-based animation producing values in [0.0, 1.0].
pub trait Animation {
    /// Advance the animation by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Current output value, clamped to [0.0, 1.0].
    fn value(&self) -> f32;
}

/// Travel direction of the electrons on one orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Clockwise on screen, the orbit path's own direction.
    Forward,
    /// Counter-clockwise.
    Reverse,
}

impl Direction {
    /// Maps a forward traversal parameter into this direction.
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Direction::Forward => t,
            Direction::Reverse => (1.0 - t).rem_euclid(1.0),
        }
    }
}
