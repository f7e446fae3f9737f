//! Starting scenarios for the lab

use rand::Rng;

use crate::physics::{CollisionKind, Particle};

/// A named pair of starting particles
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub particles: [Particle; 2],
    pub kind: CollisionKind,
}

/// The classroom default: equal masses meeting head-on
pub fn classroom_default() -> Scenario {
    Scenario {
        name: "Classroom default",
        particles: [Particle::new(5.0, 5.0), Particle::new(5.0, -3.0)],
        kind: CollisionKind::Elastic,
    }
}

/// Symmetric head-on pair: equal masses, equal and opposite speeds
pub fn symmetric_headon() -> Scenario {
    Scenario {
        name: "Symmetric head-on",
        particles: [Particle::new(4.0, 3.0), Particle::new(4.0, -3.0)],
        kind: CollisionKind::Elastic,
    }
}

/// A light probe striking a heavy target at rest
pub fn heavy_target() -> Scenario {
    Scenario {
        name: "Heavy target",
        particles: [Particle::new(1.0, 8.0), Particle::new(20.0, 0.0)],
        kind: CollisionKind::Inelastic,
    }
}

/// Randomized masses and velocities, always approaching each other
pub fn randomized() -> Scenario {
    let mut rng = rand::thread_rng();
    let m1 = rng.gen_range(0.5..10.0);
    let m2 = rng.gen_range(0.5..10.0);
    // Particle 1 moves right, particle 2 left, so they always meet
    let v1 = rng.gen_range(1.0..6.0);
    let v2 = rng.gen_range(-6.0..-1.0);
    let kind = if rng.gen_bool(0.5) {
        CollisionKind::Elastic
    } else {
        CollisionKind::Inelastic
    };

    Scenario {
        name: "Random",
        particles: [Particle::new(m1, v1), Particle::new(m2, v2)],
        kind,
    }
}
