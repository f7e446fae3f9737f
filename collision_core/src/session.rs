//! Session flow for the guided collision exercise
//!
//! A wizard-style state machine carries the student from the introduction
//! to the statistics page. Navigation only moves the step; computed results
//! ride along unchanged and are never recomputed by moving around. The
//! single-page classroom layout is the same machine pinned at one
//! always-visible state.

use crate::config::{KindToggles, LabConfig};
use crate::error::LabError;
use crate::hypothesis::{submit, HypothesisStore};
use crate::physics::{collide, CollisionKind, CollisionOutcome, Particle};
use crate::presets;
use crate::trajectory::Trajectory;

/// A stage of the guided exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Intro,
    Parameters,
    Hypothesis,
    Results,
    Statistics,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Intro,
        Step::Parameters,
        Step::Hypothesis,
        Step::Results,
        Step::Statistics,
    ];

    /// 1-based position shown in the step header
    pub fn index(&self) -> usize {
        match self {
            Step::Intro => 1,
            Step::Parameters => 2,
            Step::Hypothesis => 3,
            Step::Results => 4,
            Step::Statistics => 5,
        }
    }

    /// The following step, saturating at the last one
    pub fn next(self) -> Step {
        match self {
            Step::Intro => Step::Parameters,
            Step::Parameters => Step::Hypothesis,
            Step::Hypothesis => Step::Results,
            Step::Results | Step::Statistics => Step::Statistics,
        }
    }

    /// The preceding step, saturating at the first one
    pub fn back(self) -> Step {
        match self {
            Step::Intro | Step::Parameters => Step::Intro,
            Step::Hypothesis => Step::Parameters,
            Step::Results => Step::Hypothesis,
            Step::Statistics => Step::Results,
        }
    }
}

/// Mutable state of one student's session.
///
/// The hypothesis store is injected per call rather than owned, so the same
/// session logic runs against the in-memory log or the durable file.
pub struct Session {
    step: Step,
    wizard: bool,
    allowed: KindToggles,
    pub particles: [Particle; 2],
    pub kind: CollisionKind,
    last_outcome: Option<CollisionOutcome>,
}

impl Session {
    pub fn new(config: &LabConfig) -> Self {
        let scenario = presets::classroom_default();
        // Fall back to whichever kind the lab has enabled
        let kind = if config.collision_kinds.allows(scenario.kind) {
            scenario.kind
        } else {
            CollisionKind::Inelastic
        };

        Self {
            step: Step::Intro,
            wizard: config.steps,
            allowed: config.collision_kinds,
            particles: scenario.particles,
            kind,
            last_outcome: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Whether the flow renders as a wizard or as one always-visible page
    pub fn is_wizard(&self) -> bool {
        self.wizard
    }

    pub fn last_outcome(&self) -> Option<&CollisionOutcome> {
        self.last_outcome.as_ref()
    }

    /// Move one step forward. Navigation never touches particles or results.
    pub fn advance(&mut self) {
        if self.wizard {
            self.step = self.step.next();
            log::debug!("session advanced to step {}", self.step.index());
        }
    }

    /// Move one step back. Navigation never touches particles or results.
    pub fn retreat(&mut self) {
        if self.wizard {
            self.step = self.step.back();
            log::debug!("session moved back to step {}", self.step.index());
        }
    }

    /// Run the collision for the current inputs and keep the outcome.
    ///
    /// A successful run moves the wizard from the parameters step to the
    /// hypothesis step.
    pub fn run_simulation(&mut self) -> Result<CollisionOutcome, LabError> {
        if !self.allowed.allows(self.kind) {
            return Err(LabError::UnsupportedCollision(self.kind));
        }

        let outcome = collide(self.particles[0], self.particles[1], self.kind)?;
        self.last_outcome = Some(outcome);
        if self.wizard && self.step == Step::Parameters {
            self.step = Step::Hypothesis;
        }
        Ok(outcome)
    }

    /// Submit a hypothesis against the current inputs.
    ///
    /// A successful submission moves the wizard from the hypothesis step to
    /// the results step. Rejected submissions leave everything unchanged.
    pub fn submit_hypothesis(
        &mut self,
        store: &mut dyn HypothesisStore,
        text: &str,
    ) -> Result<(), LabError> {
        submit(store, text, &self.particles)?;
        if self.wizard && self.step == Step::Hypothesis {
            self.step = Step::Results;
        }
        Ok(())
    }

    /// Build the trajectory for the current inputs. Regenerated on demand;
    /// samples are never cached or persisted.
    pub fn trajectory(&self) -> Result<Trajectory, LabError> {
        Trajectory::new(self.particles[0], self.particles[1], self.kind)
    }
}
