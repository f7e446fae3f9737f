//! Core logic for the 1-D particle collision teaching module
//!
//! This crate provides everything the front-end needs besides rendering:
//!
//! - closed-form elastic and perfectly inelastic collision physics
//! - sampled trajectories for the animated viewport
//! - the wizard-style session flow the student walks through
//! - the append-only hypothesis log, in memory or on disk
//! - configuration, localized display strings and the equation sheet
//!
//! The presentation layer calls in synchronously on each interaction and
//! re-renders from fresh outputs; nothing here blocks beyond the durable
//! log's file append.

pub mod config;
pub mod equations;
pub mod error;
pub mod hypothesis;
pub mod physics;
pub mod presets;
pub mod session;
pub mod strings;
pub mod trajectory;

pub use config::LabConfig;
pub use error::LabError;
pub use hypothesis::{FileStore, HypothesisRecord, HypothesisStore, MemoryStore};
pub use physics::{collide, CollisionKind, CollisionOutcome, Particle};
pub use session::{Session, Step};
pub use trajectory::{Trajectory, TrajectoryPoint};
