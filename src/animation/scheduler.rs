//! Creates one timeline per rendered orbit.
//!
//! Each orbit draws its duration first, then its direction, from the
//! injected random source. A seeded [`StdRng`] therefore reproduces the same
//! diagram motion run after run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

use super::{Direction, Timeline};
use crate::config::AnimationConfig;
use crate::rendering::geometry::AtomGeometry;

pub struct Scheduler<R: Rng = StdRng> {
    rng: R,
    min_duration: Duration,
    max_duration: Duration,
}

impl Scheduler<StdRng> {
    pub fn seeded(seed: u64, config: &AnimationConfig) -> Self {
        Self::new(StdRng::seed_from_u64(seed), config.duration_range())
    }

    /// Seeded from the config when it carries a seed, from OS entropy otherwise.
    pub fn from_config(config: &AnimationConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed, config),
            None => Self::new(StdRng::from_entropy(), config.duration_range()),
        }
    }
}

impl<R: Rng> Scheduler<R> {
    pub fn new(rng: R, (min, max): (Duration, Duration)) -> Self {
        let (min_duration, max_duration) = if min <= max { (min, max) } else { (max, min) };
        Self {
            rng,
            min_duration,
            max_duration,
        }
    }

    pub fn duration_range(&self) -> (Duration, Duration) {
        (self.min_duration, self.max_duration)
    }

    /// Uniform over the inclusive duration range.
    pub fn pick_duration(&mut self) -> Duration {
        if self.min_duration == self.max_duration {
            return self.min_duration;
        }
        let secs = self
            .rng
            .gen_range(self.min_duration.as_secs_f64()..=self.max_duration.as_secs_f64());
        Duration::from_secs_f64(secs)
    }

    pub fn pick_direction(&mut self) -> Direction {
        if self.rng.gen_bool(0.5) {
            Direction::Forward
        } else {
            Direction::Reverse
        }
    }

    /// One seeked, playing timeline per orbit of `geometry`, innermost first.
    pub fn schedule(&mut self, geometry: &AtomGeometry) -> Vec<Timeline> {
        geometry
            .orbits
            .iter()
            .filter(|orbit| !orbit.electrons.is_empty())
            .map(|orbit| {
                let duration = self.pick_duration();
                let direction = self.pick_direction();
                let mut timeline =
                    Timeline::new(orbit.path.index, orbit.electrons.len(), duration, direction);
                timeline.seek(duration);
                log::debug!(
                    "Orbit {}: {} electrons, {:.2}s per loop, {:?}",
                    orbit.path.index,
                    orbit.electrons.len(),
                    duration.as_secs_f64(),
                    direction
                );
                timeline
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::TimelineState;
    use crate::config::DiagramStyle;
    use crate::rendering::geometry::build_geometry;

    fn calcium() -> AtomGeometry {
        build_geometry(&[2, 8, 8, 2], &DiagramStyle::default())
    }

    #[test]
    fn same_seed_same_motion() {
        let cfg = AnimationConfig::default();
        let a = Scheduler::seeded(42, &cfg).schedule(&calcium());
        let b = Scheduler::seeded(42, &cfg).schedule(&calcium());
        assert_eq!(a.len(), 4);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.duration(), y.duration());
            assert_eq!(x.direction(), y.direction());
            assert_eq!(x.stagger(), y.stagger());
        }
    }

    #[test]
    fn durations_stay_in_range() {
        let cfg = AnimationConfig::default();
        let mut scheduler = Scheduler::seeded(1, &cfg);
        for _ in 0..1000 {
            let d = scheduler.pick_duration().as_secs_f64();
            assert!((6.0..=15.0).contains(&d), "duration {} out of range", d);
        }
    }

    #[test]
    fn both_directions_occur() {
        let mut scheduler = Scheduler::seeded(9, &AnimationConfig::default());
        let forward = (0..200)
            .filter(|_| scheduler.pick_direction() == Direction::Forward)
            .count();
        assert!(forward > 50 && forward < 150);
    }

    #[test]
    fn calcium_gets_four_independent_timelines() {
        let timelines = Scheduler::seeded(5, &AnimationConfig::default()).schedule(&calcium());
        let counts: Vec<usize> = timelines.iter().map(|t| t.electron_count()).collect();
        assert_eq!(counts, vec![2, 8, 8, 2]);
        let orbits: Vec<usize> = timelines.iter().map(|t| t.orbit()).collect();
        assert_eq!(orbits, vec![1, 2, 3, 4]);
        for tl in &timelines {
            assert_eq!(tl.state(), TimelineState::Playing);
            assert_eq!(tl.elapsed(), tl.duration());
            assert_eq!(tl.stagger(), tl.duration() / tl.electron_count() as u32);
        }
    }

    #[test]
    fn helium_timeline_after_seek() {
        let geometry = build_geometry(&[2], &DiagramStyle::default());
        let timelines = Scheduler::seeded(11, &AnimationConfig::default()).schedule(&geometry);
        assert_eq!(timelines.len(), 1);
        let tl = &timelines[0];
        assert_eq!(tl.stagger(), tl.duration() / 2);
        let a = tl.progress_of(0).unwrap();
        let b = tl.progress_of(1).unwrap();
        let gap = (a - b).rem_euclid(1.0);
        assert!((gap - 0.5).abs() < 1e-6);
    }

    #[test]
    fn empty_orbits_get_no_timeline() {
        let geometry = build_geometry(&[2, 0, 1], &DiagramStyle::default());
        let timelines = Scheduler::seeded(3, &AnimationConfig::default()).schedule(&geometry);
        let orbits: Vec<usize> = timelines.iter().map(|t| t.orbit()).collect();
        assert_eq!(orbits, vec![1, 3]);
    }

    #[test]
    fn fixed_range_gives_fixed_duration() {
        let cfg = AnimationConfig {
            min_duration_secs: 10.0,
            max_duration_secs: 10.0,
            seed: None,
        };
        let mut scheduler = Scheduler::from_config(&cfg);
        assert_eq!(scheduler.pick_duration(), Duration::from_secs(10));
    }

    #[test]
    fn inverted_range_is_swapped() {
        let scheduler = Scheduler::new(
            StdRng::seed_from_u64(0),
            (Duration::from_secs(15), Duration::from_secs(6)),
        );
        assert_eq!(
            scheduler.duration_range(),
            (Duration::from_secs(6), Duration::from_secs(15))
        );
    }
}
