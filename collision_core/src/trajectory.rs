//! Sampled particle trajectories for the animated viewport
//!
//! Positions are sampled over a fixed finite horizon and handed to the
//! presentation layer as points on the x-axis of the 3-D scene. A
//! trajectory holds only its inputs: the same inputs always regenerate the
//! same samples.

use glam::Vec3;

use crate::error::LabError;
use crate::physics::{collide, CollisionKind, Particle};

/// Default animation horizon in seconds
pub const DEFAULT_HORIZON: f64 = 2.0;
/// Default number of samples across the horizon
pub const DEFAULT_SAMPLES: usize = 30;
/// Default initial separation: particle 1 starts at 0, particle 2 at this x
pub const DEFAULT_SEPARATION: f64 = 10.0;

/// Axis ranges of the fixed viewport the trajectory is rendered in
#[derive(Debug, Clone, Copy)]
pub struct SceneBounds {
    pub x: (f32, f32),
    pub y: (f32, f32),
    pub z: (f32, f32),
}

pub const SCENE_BOUNDS: SceneBounds = SceneBounds {
    x: (-10.0, 30.0),
    y: (-5.0, 5.0),
    z: (-5.0, 5.0),
};

/// One sampled instant of the two-particle system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    pub t: f64,
    pub x1: f64,
    pub x2: f64,
}

impl TrajectoryPoint {
    /// Scene positions of both particles, placed on the x-axis of the viewport
    pub fn scene_points(&self) -> [Vec3; 2] {
        [
            Vec3::new(self.x1 as f32, 0.0, 0.0),
            Vec3::new(self.x2 as f32, 0.0, 0.0),
        ]
    }
}

/// A deterministic sampled trajectory over a fixed horizon
#[derive(Debug, Clone, Copy)]
pub struct Trajectory {
    p1: Particle,
    p2: Particle,
    kind: CollisionKind,
    horizon: f64,
    samples: usize,
    separation: f64,
    merged_velocity: f64,
}

impl Trajectory {
    /// Trajectory with the default horizon, sample count and separation
    pub fn new(p1: Particle, p2: Particle, kind: CollisionKind) -> Result<Self, LabError> {
        Self::with_window(p1, p2, kind, DEFAULT_HORIZON, DEFAULT_SAMPLES, DEFAULT_SEPARATION)
    }

    /// Trajectory over `[0, horizon]` with `samples` points and the given
    /// initial separation. Fails on the same inputs the calculator rejects.
    pub fn with_window(
        p1: Particle,
        p2: Particle,
        kind: CollisionKind,
        horizon: f64,
        samples: usize,
        separation: f64,
    ) -> Result<Self, LabError> {
        let outcome = collide(p1, p2, kind)?;
        Ok(Self {
            p1,
            p2,
            kind,
            horizon,
            // At least the two endpoints
            samples: samples.max(2),
            separation,
            merged_velocity: outcome.v1_final,
        })
    }

    pub fn kind(&self) -> CollisionKind {
        self.kind
    }

    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    pub fn sample_count(&self) -> usize {
        self.samples
    }

    pub fn separation(&self) -> f64 {
        self.separation
    }

    /// Time at which the two particles meet, for the inelastic branch.
    ///
    /// Equal velocities never close the gap; the bend is pinned at t = 1
    /// in that case instead of dividing by zero.
    pub fn collision_time(&self) -> f64 {
        let (v1, v2) = (self.p1.velocity, self.p2.velocity);
        if v1 != v2 {
            self.separation / (v1 - v2)
        } else {
            1.0
        }
    }

    /// Positions of both particles at time `t`.
    ///
    /// The elastic branch keeps both particles on their initial
    /// straight-line paths for the whole horizon; only the inelastic
    /// branch bends, at the collision time, onto the shared
    /// merged-velocity path.
    pub fn position_at(&self, t: f64) -> (f64, f64) {
        let (v1, v2) = (self.p1.velocity, self.p2.velocity);
        match self.kind {
            CollisionKind::Elastic => (v1 * t, self.separation + v2 * t),
            CollisionKind::Inelastic => {
                if t < self.collision_time() {
                    (v1 * t, self.separation + v2 * t)
                } else {
                    let v = self.merged_velocity;
                    (v * t, self.separation + v * t)
                }
            }
        }
    }

    /// The i-th sampled point; sample times are evenly spaced over the horizon
    pub fn sample(&self, i: usize) -> TrajectoryPoint {
        let t = self.horizon * i as f64 / (self.samples - 1) as f64;
        let (x1, x2) = self.position_at(t);
        TrajectoryPoint { t, x1, x2 }
    }

    /// Iterate the sampled points. Restartable: every call yields the same
    /// finite sequence for the same trajectory.
    pub fn points(&self) -> impl Iterator<Item = TrajectoryPoint> + '_ {
        (0..self.samples).map(move |i| self.sample(i))
    }
}
