//! Error types for the collision lab core

use crate::physics::CollisionKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabError {
    #[error("invalid mass {0}: mass must be positive and finite")]
    InvalidMass(f64),

    #[error("invalid velocity {0}: velocity must be finite")]
    InvalidVelocity(f64),

    #[error("hypothesis text is empty")]
    EmptyHypothesis,

    #[error("{} collisions are disabled in this lab", .0.label())]
    UnsupportedCollision(CollisionKind),

    #[error("malformed hypothesis record at line {line}")]
    MalformedRecord { line: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] serde_yaml::Error),
}
