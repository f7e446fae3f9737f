//! Interactive 1-D Particle Collision Lab
//!
//! A terminal front-end for the collision teaching module. Students set
//! the mass and velocity of two particles, run elastic or inelastic
//! collisions, review momentum and kinetic energy before and after, and
//! submit a hypothesis that is kept for the next lesson's discussion.
//!
//! Commands:
//! - n / b: Next / previous step
//! - m1=X, v1=X, m2=X, v2=X: Set a mass or velocity (mass must be positive)
//! - e / i: Choose elastic / inelastic collision
//! - 1/2/3/4: Load presets (Classroom, Symmetric, Heavy target, Random)
//! - run: Run the collision with the current values
//! - any other text on the hypothesis step: submit it as your hypothesis
//! - q: Quit

mod view;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use collision_core::config::LabConfig;
use collision_core::hypothesis::{
    FileStore, HypothesisStore, MemoryStore, FILE_REVIEW_DEPTH, MEMORY_REVIEW_DEPTH,
};
use collision_core::physics::CollisionKind;
use collision_core::presets::{self, Scenario};
use collision_core::session::{Session, Step};
use collision_core::strings::{text, UiText};
use collision_core::LabError;

#[derive(Parser, Debug)]
struct Args {
    /// Lab configuration file (YAML); defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
}

struct App {
    session: Session,
    store: Box<dyn HypothesisStore>,
    review_depth: usize,
    text: &'static UiText,
}

impl App {
    fn new(config: LabConfig) -> Self {
        let (store, review_depth): (Box<dyn HypothesisStore>, usize) = match &config.persistence {
            Some(path) => (Box::new(FileStore::new(path)), FILE_REVIEW_DEPTH),
            None => (Box::new(MemoryStore::new()), MEMORY_REVIEW_DEPTH),
        };

        Self {
            session: Session::new(&config),
            store,
            review_depth,
            text: text(config.language),
        }
    }

    fn render(&self) -> String {
        view::render(&self.session, self.store.as_ref(), self.review_depth, self.text)
    }

    /// Handle one line of input; false means quit
    fn handle_line(&mut self, line: &str) -> bool {
        let input = line.trim();
        match input {
            "q" | "quit" => return false,
            "" => {
                if self.session.step() == Step::Hypothesis {
                    println!("{}", self.text.empty_hypothesis_warning);
                }
            }
            "n" | "next" => self.session.advance(),
            "b" | "back" => self.session.retreat(),
            "e" => self.session.kind = CollisionKind::Elastic,
            "i" => self.session.kind = CollisionKind::Inelastic,
            "1" => self.load_scenario(presets::classroom_default()),
            "2" => self.load_scenario(presets::symmetric_headon()),
            "3" => self.load_scenario(presets::heavy_target()),
            "4" => self.load_scenario(presets::randomized()),
            "run" => self.run(),
            _ if input.contains('=') => self.set_field(input),
            _ if self.session.step() == Step::Hypothesis => self.submit(input),
            _ => println!("unrecognized command: {input}"),
        }
        true
    }

    fn load_scenario(&mut self, scenario: Scenario) {
        log::debug!("loaded preset '{}'", scenario.name);
        self.session.particles = scenario.particles;
        self.session.kind = scenario.kind;
    }

    /// Field edits enforce the input ranges, so the calculator never sees a
    /// non-positive mass from the prompt.
    fn set_field(&mut self, input: &str) {
        let Some((key, value)) = input.split_once('=') else {
            return;
        };
        let Ok(value) = value.trim().parse::<f64>() else {
            println!("could not read a number from '{input}'");
            return;
        };

        match key.trim() {
            "m1" | "m2" if !value.is_finite() || value <= 0.0 => {
                println!("{}", self.text.mass_range_warning);
            }
            "m1" => self.session.particles[0].mass = value,
            "m2" => self.session.particles[1].mass = value,
            "v1" => self.session.particles[0].velocity = value,
            "v2" => self.session.particles[1].velocity = value,
            other => println!("unknown field: {other}"),
        }
    }

    fn run(&mut self) {
        match self.session.run_simulation() {
            Ok(outcome) => {
                println!("v1' = {:.2}, v2' = {:.2}", outcome.v1_final, outcome.v2_final);
            }
            Err(e) => println!("{e}"),
        }
    }

    fn submit(&mut self, input: &str) {
        match self.session.submit_hypothesis(self.store.as_mut(), input) {
            Ok(()) => {
                println!("{}", self.text.submission_success);
                match self.store.recent(self.review_depth) {
                    Ok(records) => {
                        println!("{}", self.text.recent_heading);
                        for (i, record) in records.iter().enumerate() {
                            println!("  {}. {}", i + 1, record.text);
                        }
                    }
                    Err(e) => log::error!("could not read back the hypothesis log: {e}"),
                }
            }
            Err(LabError::EmptyHypothesis) => println!("{}", self.text.empty_hypothesis_warning),
            Err(e) => println!("{e}"),
        }
    }
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => LabConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => LabConfig::default(),
    };

    let mut app = App::new(config);
    println!("{}", app.render());
    prompt()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if !app.handle_line(&line) {
            break;
        }
        println!("{}", app.render());
        prompt()?;
    }

    Ok(())
}
