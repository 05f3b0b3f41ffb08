// src/rendering/geometry.rs
//
// Nucleus, orbit and electron geometry for one element. Screen coordinates,
// y axis pointing down.

use crate::config::DiagramStyle;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: [f64; 2],
    pub radius: f64,
}

/// Half of an orbit, swept clockwise from `start_angle` by PI.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HalfArc {
    pub start_angle: f64,
}

impl HalfArc {
    pub fn end_angle(&self) -> f64 {
        self.start_angle + PI
    }
}

/// Closed circular path of one orbit.
///
/// The circle is stored as two complementary half-arcs, top pole to bottom
/// pole and back, so a traversal parameter `t` in [0, 1] covers the whole
/// circle once with `t = 0` and `t = 1` both on the top pole.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitPath {
    /// 1-based orbit index.
    pub index: usize,
    pub center: [f64; 2],
    pub radius: f64,
    pub arcs: [HalfArc; 2],
}

impl OrbitPath {
    pub fn new(index: usize, center: [f64; 2], spacing: f64) -> Self {
        let top = -FRAC_PI_2;
        Self {
            index,
            center,
            radius: orbit_radius(index, spacing),
            arcs: [
                HalfArc { start_angle: top },
                HalfArc { start_angle: top + PI },
            ],
        }
    }

    /// Angle of the traversal parameter `t`; values outside [0, 1] wrap.
    pub fn angle_at(&self, t: f64) -> f64 {
        let t = t.rem_euclid(1.0);
        let (arc, local) = if t < 0.5 {
            (&self.arcs[0], t * 2.0)
        } else {
            (&self.arcs[1], (t - 0.5) * 2.0)
        };
        arc.start_angle + local * PI
    }

    pub fn point_at(&self, t: f64) -> [f64; 2] {
        let (sin, cos) = self.angle_at(t).sin_cos();
        [
            self.center[0] + self.radius * cos,
            self.center[1] + self.radius * sin,
        ]
    }

    fn arc_endpoint(&self, angle: f64) -> [f64; 2] {
        let (sin, cos) = angle.sin_cos();
        [
            self.center[0] + self.radius * cos,
            self.center[1] + self.radius * sin,
        ]
    }

    /// SVG path data for the two half-arcs, starting at the top pole.
    pub fn svg_path_data(&self) -> String {
        let start = self.arc_endpoint(self.arcs[0].start_angle);
        let mut d = format!("M {:.3} {:.3}", start[0], start[1]);
        for arc in &self.arcs {
            let end = self.arc_endpoint(arc.end_angle());
            d.push_str(&format!(
                " A {r:.3} {r:.3} 0 1 1 {:.3} {:.3}",
                end[0],
                end[1],
                r = self.radius
            ));
        }
        d
    }
}

/// Radius of the orbit with 1-based `index`.
pub fn orbit_radius(index: usize, spacing: f64) -> f64 {
    index as f64 * spacing
}

/// Placeholder circle for one electron, unplaced (origin) until an animation
/// path moves it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElectronShape {
    pub orbit: usize,
    pub slot: usize,
    pub circle: Circle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitGeometry {
    pub path: OrbitPath,
    pub electrons: Vec<ElectronShape>,
}

impl OrbitGeometry {
    pub fn electron_count(&self) -> usize {
        self.electrons.len()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AtomGeometry {
    pub nucleus: Circle,
    pub orbits: Vec<OrbitGeometry>,
    pub electron_radius: f64,
}

impl AtomGeometry {
    /// Distance from the center to the outer edge of the outermost electron.
    pub fn extent(&self) -> f64 {
        self.orbits
            .iter()
            .map(|o| o.path.radius + self.electron_radius)
            .fold(self.nucleus.radius, f64::max)
    }

    pub fn electron_count(&self) -> usize {
        self.orbits.iter().map(|o| o.electron_count()).sum()
    }
}

/// Builds the geometry for an electron configuration.
///
/// Orbits with no electrons are left out but keep their index, so the radius
/// of every later orbit is unchanged.
pub fn build_geometry(shells: &[u32], style: &DiagramStyle) -> AtomGeometry {
    let center = style.center();
    let orbits = shells
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(i, &count)| {
            let index = i + 1;
            let electrons = (0..count as usize)
                .map(|slot| ElectronShape {
                    orbit: index,
                    slot,
                    circle: Circle {
                        center: [0.0, 0.0],
                        radius: style.electron_radius,
                    },
                })
                .collect();
            OrbitGeometry {
                path: OrbitPath::new(index, center, style.orbit_spacing),
                electrons,
            }
        })
        .collect::<Vec<_>>();

    log::debug!(
        "Built geometry: {} orbits, {} electrons",
        orbits.len(),
        orbits.iter().map(|o| o.electrons.len()).sum::<usize>()
    );

    AtomGeometry {
        nucleus: Circle {
            center,
            radius: style.nucleus_radius,
        },
        orbits,
        electron_radius: style.electron_radius,
    }
}

/// Normalizes an angle into [0, TAU).
pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}
