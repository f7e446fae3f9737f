//! Step rendering for the terminal front-end.
//!
//! Every view is a pure function of the session state: the flow controller
//! owns the data, the view only formats it. The single-page layout renders
//! all sections at once; the wizard renders the current step.

use collision_core::equations::equation_sheet;
use collision_core::hypothesis::HypothesisStore;
use collision_core::physics::CollisionKind;
use collision_core::session::{Session, Step};
use collision_core::strings::{UiText, VIDEO_URL};
use collision_core::trajectory::{Trajectory, SCENE_BOUNDS};

/// Columns of the text track the animation frames are drawn on
const TRACK_WIDTH: usize = 60;

pub fn render(
    session: &Session,
    store: &dyn HypothesisStore,
    review_depth: usize,
    text: &UiText,
) -> String {
    if !session.is_wizard() {
        let mut out = format!("{}\n\n", text.title);
        for step in Step::ALL {
            out.push_str(&render_step(step, session, store, review_depth, text));
            out.push('\n');
        }
        return out;
    }

    let step = session.step();
    let mut out = format!(
        "=== {} ({}/5: {}) ===\n\n",
        text.title,
        step.index(),
        text.step_names[step.index() - 1]
    );
    out.push_str(&render_step(step, session, store, review_depth, text));
    out
}

fn render_step(
    step: Step,
    session: &Session,
    store: &dyn HypothesisStore,
    review_depth: usize,
    text: &UiText,
) -> String {
    match step {
        Step::Intro => render_intro(text),
        Step::Parameters => render_parameters(session, text),
        Step::Hypothesis => render_hypothesis(text),
        Step::Results => render_results(session, text),
        Step::Statistics => render_statistics(store, review_depth, text),
    }
}

fn render_intro(text: &UiText) -> String {
    format!(
        "{}\n{}\n\n{}: {}\n\n{}",
        text.intro_heading,
        text.intro_body,
        text.video_caption,
        VIDEO_URL,
        equation_sheet()
    )
}

fn render_parameters(session: &Session, text: &UiText) -> String {
    let [p1, p2] = session.particles;
    let kind = match session.kind {
        CollisionKind::Elastic => text.elastic_label,
        CollisionKind::Inelastic => text.inelastic_label,
    };

    format!(
        "{}\n  m1 = {:<8} {}\n  v1 = {:<8} {}\n  m2 = {:<8} {}\n  v2 = {:<8} {}\n  {}: {}\n",
        text.parameters_heading,
        p1.mass,
        text.mass1_label,
        p1.velocity,
        text.velocity1_label,
        p2.mass,
        text.mass2_label,
        p2.velocity,
        text.velocity2_label,
        text.kind_label,
        kind
    )
}

fn render_hypothesis(text: &UiText) -> String {
    let mut out = format!("{}\n", text.reflection_heading);
    for question in text.reflection_questions {
        out.push_str(&format!("  - {}\n", question));
    }
    out.push_str(&format!("\n{}\n{}\n", text.hypothesis_heading, text.hypothesis_prompt));
    out
}

fn render_results(session: &Session, text: &UiText) -> String {
    let Some(outcome) = session.last_outcome() else {
        return format!("{}\n", text.run_first_hint);
    };

    let mut out = format!("{}\n", text.results_heading);
    out.push_str(&format!("  {}: {:.2}\n", text.momentum_before_label, outcome.momentum_before));
    out.push_str(&format!("  {}: {:.2}\n", text.momentum_after_label, outcome.momentum_after));
    out.push_str(&format!("  {}: {:.2}\n", text.energy_before_label, outcome.energy_before));
    out.push_str(&format!("  {}: {:.2}\n", text.energy_after_label, outcome.energy_after));
    if session.kind == CollisionKind::Inelastic {
        out.push_str(&format!("  {}: {:.2}\n", text.energy_loss_label, outcome.energy_loss()));
    }

    out.push_str(&format!("\n{}\n", text.animation_heading));
    match session.trajectory() {
        Ok(trajectory) => {
            out.push_str(&trajectory_table(&trajectory));
            out.push('\n');
            out.push_str(&ascii_track(&trajectory));
        }
        Err(e) => out.push_str(&format!("  ({e})\n")),
    }
    out
}

fn render_statistics(store: &dyn HypothesisStore, review_depth: usize, text: &UiText) -> String {
    let mut out = format!("{}\n", text.statistics_heading);
    match store.recent(review_depth) {
        Ok(records) if records.is_empty() => {
            out.push_str(&format!("  {}\n", text.no_hypotheses_yet));
        }
        Ok(records) => {
            out.push_str(&format!("{}\n", text.recent_heading));
            for (i, record) in records.iter().enumerate() {
                out.push_str(&format!("  {}. {}\n", i + 1, record.text));
            }
        }
        Err(e) => out.push_str(&format!("  ({e})\n")),
    }
    out
}

fn trajectory_table(trajectory: &Trajectory) -> String {
    let mut out = String::from("      t      x1      x2\n");
    for point in trajectory.points() {
        out.push_str(&format!("  {:5.2} {:7.2} {:7.2}\n", point.t, point.x1, point.x2));
    }
    out
}

/// One text row per sampled frame, with both particles placed inside the
/// fixed viewport bounds
fn ascii_track(trajectory: &Trajectory) -> String {
    let (x_min, x_max) = SCENE_BOUNDS.x;
    let span = x_max - x_min;

    let mut out = String::new();
    for point in trajectory.points() {
        let mut row = vec!['.'; TRACK_WIDTH];
        let [s1, s2] = point.scene_points();
        let c1 = column(s1.x, x_min, span);
        let c2 = column(s2.x, x_min, span);
        if c1 == c2 {
            row[c1] = 'X';
        } else {
            row[c1] = '1';
            row[c2] = '2';
        }
        out.extend(row);
        out.push('\n');
    }
    out
}

fn column(x: f32, x_min: f32, span: f32) -> usize {
    let frac = ((x - x_min) / span).clamp(0.0, 1.0);
    (frac * (TRACK_WIDTH - 1) as f32).round() as usize
}
