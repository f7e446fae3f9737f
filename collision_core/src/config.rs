//! Lab configuration loaded from YAML.
//!
//! One configurable core replaces the near-duplicate classroom variants:
//! with or without the step wizard, with or without the durable hypothesis
//! log, with either or both collision types on offer, in either language.
//!
//! # YAML format
//! ```yaml
//! steps: true                    # false -> single-page layout
//! persistence: "hypotheses.log"  # omit to keep the log in memory
//! collision_kinds:
//!   elastic: true
//!   inelastic: true
//! language: "en"                 # or "es"
//! ```
//!
//! Every field is optional; omitted fields take the defaults above (with
//! the in-memory log).

use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::LabError;
use crate::physics::CollisionKind;
use crate::strings::Language;

/// Which collision types the lab offers
#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(default)]
pub struct KindToggles {
    pub elastic: bool,
    pub inelastic: bool,
}

impl KindToggles {
    pub fn allows(&self, kind: CollisionKind) -> bool {
        match kind {
            CollisionKind::Elastic => self.elastic,
            CollisionKind::Inelastic => self.inelastic,
        }
    }
}

impl Default for KindToggles {
    fn default() -> Self {
        Self {
            elastic: true,
            inelastic: true,
        }
    }
}

/// Top-level lab configuration
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct LabConfig {
    /// false pins the flow at a single always-visible page
    pub steps: bool,
    /// Path of the durable hypothesis log; None keeps the log in memory
    pub persistence: Option<PathBuf>,
    pub collision_kinds: KindToggles,
    pub language: Language,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            steps: true,
            persistence: None,
            collision_kinds: KindToggles::default(),
            language: Language::default(),
        }
    }
}

impl LabConfig {
    /// Load a configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, LabError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}
