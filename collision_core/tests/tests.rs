use approx::assert_abs_diff_eq;
use collision_core::config::LabConfig;
use collision_core::hypothesis::{submit, FileStore, HypothesisRecord, HypothesisStore, MemoryStore};
use collision_core::physics::{collide, CollisionKind, CollisionOutcome, Particle};
use collision_core::session::{Session, Step};
use collision_core::trajectory::Trajectory;
use collision_core::LabError;

const TOL: f64 = 1e-9;

/// Build the two particles of a run
fn pair(m1: f64, v1: f64, m2: f64, v2: f64) -> (Particle, Particle) {
    (Particle::new(m1, v1), Particle::new(m2, v2))
}

/// Run a collision that is expected to succeed
fn run(m1: f64, v1: f64, m2: f64, v2: f64, kind: CollisionKind) -> CollisionOutcome {
    let (p1, p2) = pair(m1, v1, m2, v2);
    collide(p1, p2, kind).expect("valid inputs must collide")
}

/// Inputs covering unequal masses, rest targets and co-moving particles
fn representative_inputs() -> Vec<(f64, f64, f64, f64)> {
    vec![
        (5.0, 5.0, 5.0, -3.0),
        (1.0, 8.0, 20.0, 0.0),
        (2.5, -4.0, 0.5, 6.0),
        (10.0, 0.1, 0.1, -10.0),
        (3.0, 2.0, 7.0, 2.0),
    ]
}

// ==================================================================================
// Collision calculator
// ==================================================================================

#[test]
fn momentum_is_conserved_for_both_kinds() {
    for (m1, v1, m2, v2) in representative_inputs() {
        for kind in [CollisionKind::Elastic, CollisionKind::Inelastic] {
            let outcome = run(m1, v1, m2, v2, kind);
            assert_abs_diff_eq!(outcome.momentum_before, outcome.momentum_after, epsilon = TOL);
            assert_abs_diff_eq!(
                m1 * v1 + m2 * v2,
                m1 * outcome.v1_final + m2 * outcome.v2_final,
                epsilon = TOL
            );
        }
    }
}

#[test]
fn elastic_collisions_conserve_kinetic_energy() {
    for (m1, v1, m2, v2) in representative_inputs() {
        let outcome = run(m1, v1, m2, v2, CollisionKind::Elastic);
        assert_abs_diff_eq!(outcome.energy_before, outcome.energy_after, epsilon = TOL);
    }
}

#[test]
fn equal_masses_swap_velocities_elastically() {
    let outcome = run(5.0, 5.0, 5.0, -3.0, CollisionKind::Elastic);
    assert_abs_diff_eq!(outcome.v1_final, -3.0, epsilon = TOL);
    assert_abs_diff_eq!(outcome.v2_final, 5.0, epsilon = TOL);
}

#[test]
fn inelastic_merge_shares_one_velocity() {
    let outcome = run(5.0, 5.0, 5.0, -3.0, CollisionKind::Inelastic);
    // (5·5 + 5·-3) / 10
    assert_abs_diff_eq!(outcome.v1_final, 1.0, epsilon = TOL);
    assert_eq!(outcome.v1_final, outcome.v2_final, "merged particles must share a velocity");
}

#[test]
fn inelastic_energy_never_increases() {
    for (m1, v1, m2, v2) in representative_inputs() {
        let outcome = run(m1, v1, m2, v2, CollisionKind::Inelastic);
        assert!(
            outcome.energy_after <= outcome.energy_before + TOL,
            "energy grew: {} -> {}",
            outcome.energy_before,
            outcome.energy_after
        );
    }
}

#[test]
fn inelastic_loss_matches_the_closed_form() {
    for (m1, v1, m2, v2) in representative_inputs() {
        let outcome = run(m1, v1, m2, v2, CollisionKind::Inelastic);
        let expected = 0.5 * m1 * m2 / (m1 + m2) * (v1 - v2) * (v1 - v2);
        assert_abs_diff_eq!(outcome.energy_loss(), expected, epsilon = TOL);
    }
}

#[test]
fn non_positive_mass_is_rejected() {
    for mass in [0.0, -1.0] {
        let (p1, p2) = pair(mass, 5.0, 5.0, -3.0);
        let err = collide(p1, p2, CollisionKind::Elastic).unwrap_err();
        assert!(matches!(err, LabError::InvalidMass(_)), "got {err:?}");
    }
}

#[test]
fn non_finite_inputs_are_rejected() {
    let (p1, p2) = pair(5.0, f64::NAN, 5.0, -3.0);
    assert!(collide(p1, p2, CollisionKind::Elastic).is_err());

    let (p1, p2) = pair(f64::INFINITY, 1.0, 5.0, -3.0);
    assert!(collide(p1, p2, CollisionKind::Elastic).is_err());
}

// ==================================================================================
// Trajectory sampler
// ==================================================================================

#[test]
fn elastic_paths_stay_linear_over_the_whole_horizon() {
    let (p1, p2) = pair(5.0, 5.0, 5.0, -3.0);
    let traj = Trajectory::new(p1, p2, CollisionKind::Elastic).unwrap();

    for point in traj.points() {
        assert_abs_diff_eq!(point.x1, 5.0 * point.t, epsilon = TOL);
        assert_abs_diff_eq!(point.x2, 10.0 + -3.0 * point.t, epsilon = TOL);
    }
}

#[test]
fn default_sampling_grid_spans_the_horizon() {
    let (p1, p2) = pair(5.0, 5.0, 5.0, -3.0);
    let traj = Trajectory::new(p1, p2, CollisionKind::Elastic).unwrap();

    let points: Vec<_> = traj.points().collect();
    assert_eq!(points.len(), 30);
    assert_abs_diff_eq!(points[0].t, 0.0, epsilon = TOL);
    assert_abs_diff_eq!(points[29].t, 2.0, epsilon = TOL);
}

#[test]
fn inelastic_paths_bend_at_the_collision_time() {
    let (p1, p2) = pair(5.0, 5.0, 5.0, -3.0);
    let traj = Trajectory::new(p1, p2, CollisionKind::Inelastic).unwrap();

    // 10 / (5 - -3)
    let t_c = traj.collision_time();
    assert_abs_diff_eq!(t_c, 1.25, epsilon = TOL);
    let merged = 1.0;

    for point in traj.points() {
        if point.t < t_c {
            assert_abs_diff_eq!(point.x1, 5.0 * point.t, epsilon = TOL);
            assert_abs_diff_eq!(point.x2, 10.0 + -3.0 * point.t, epsilon = TOL);
        } else {
            assert_abs_diff_eq!(point.x1, merged * point.t, epsilon = TOL);
            assert_abs_diff_eq!(point.x2, 10.0 + merged * point.t, epsilon = TOL);
        }
    }
}

#[test]
fn equal_velocities_fall_back_to_a_fixed_collision_time() {
    let (p1, p2) = pair(3.0, 2.0, 7.0, 2.0);
    let traj = Trajectory::new(p1, p2, CollisionKind::Inelastic).unwrap();
    assert_eq!(traj.collision_time(), 1.0);
}

#[test]
fn trajectories_are_restartable() {
    let (p1, p2) = pair(2.5, -4.0, 0.5, 6.0);
    let traj = Trajectory::new(p1, p2, CollisionKind::Inelastic).unwrap();

    let first: Vec<_> = traj.points().collect();
    let second: Vec<_> = traj.points().collect();
    assert_eq!(first, second, "iterating twice must regenerate identical samples");
}

#[test]
fn scene_points_sit_on_the_viewport_x_axis() {
    let (p1, p2) = pair(5.0, 5.0, 5.0, -3.0);
    let traj = Trajectory::new(p1, p2, CollisionKind::Elastic).unwrap();

    let point = traj.sample(10);
    let [s1, s2] = point.scene_points();
    assert_eq!(s1.x, point.x1 as f32);
    assert_eq!(s2.x, point.x2 as f32);
    assert_eq!((s1.y, s1.z), (0.0, 0.0));
    assert_eq!((s2.y, s2.z), (0.0, 0.0));
}

// ==================================================================================
// Session flow
// ==================================================================================

#[test]
fn wizard_transitions_saturate_at_both_ends() {
    let mut session = Session::new(&LabConfig::default());
    assert_eq!(session.step(), Step::Intro);

    session.retreat();
    assert_eq!(session.step(), Step::Intro, "retreat must saturate at the intro");

    for _ in 0..10 {
        session.advance();
    }
    assert_eq!(session.step(), Step::Statistics, "advance must saturate at statistics");
}

#[test]
fn successful_run_advances_from_parameters() {
    let mut session = Session::new(&LabConfig::default());
    session.advance();
    assert_eq!(session.step(), Step::Parameters);

    session.run_simulation().unwrap();
    assert_eq!(session.step(), Step::Hypothesis);
    assert!(session.last_outcome().is_some());
}

#[test]
fn failed_run_stays_on_parameters() {
    let mut session = Session::new(&LabConfig::default());
    session.advance();
    session.particles[0].mass = -2.0;

    assert!(session.run_simulation().is_err());
    assert_eq!(session.step(), Step::Parameters);
    assert!(session.last_outcome().is_none());
}

#[test]
fn successful_submission_advances_from_hypothesis() {
    let mut session = Session::new(&LabConfig::default());
    let mut store = MemoryStore::new();
    session.advance();
    session.run_simulation().unwrap();
    assert_eq!(session.step(), Step::Hypothesis);

    session
        .submit_hypothesis(&mut store, "the velocities will swap")
        .unwrap();
    assert_eq!(session.step(), Step::Results);
}

#[test]
fn navigation_never_recomputes_results() {
    let mut session = Session::new(&LabConfig::default());
    session.advance();
    let outcome = session.run_simulation().unwrap();

    session.advance();
    session.retreat();
    session.retreat();
    assert_eq!(session.last_outcome(), Some(&outcome));
}

#[test]
fn single_page_layout_pins_the_flow() {
    let config = LabConfig {
        steps: false,
        ..LabConfig::default()
    };
    let mut session = Session::new(&config);

    session.advance();
    session.advance();
    assert_eq!(session.step(), Step::Intro, "single-page flow must not move");

    // Running still works, it just never changes the visible state
    session.run_simulation().unwrap();
    assert_eq!(session.step(), Step::Intro);
    assert!(session.last_outcome().is_some());
}

#[test]
fn disabled_collision_kinds_are_refused() {
    let mut config = LabConfig::default();
    config.collision_kinds.inelastic = false;
    let mut session = Session::new(&config);

    session.kind = CollisionKind::Inelastic;
    let err = session.run_simulation().unwrap_err();
    assert!(matches!(err, LabError::UnsupportedCollision(_)), "got {err:?}");
}

// ==================================================================================
// Hypothesis log
// ==================================================================================

#[test]
fn blank_submissions_leave_the_log_unchanged() {
    let mut store = MemoryStore::new();
    let particles = [Particle::new(5.0, 5.0), Particle::new(5.0, -3.0)];

    for text in ["", "   ", "\t\n"] {
        let err = submit(&mut store, text, &particles).unwrap_err();
        assert!(matches!(err, LabError::EmptyHypothesis));
        assert_eq!(store.len().unwrap(), 0);
    }
}

#[test]
fn submissions_append_exactly_one_record() {
    let mut store = MemoryStore::new();
    let particles = [Particle::new(5.0, 5.0), Particle::new(5.0, -3.0)];

    submit(&mut store, "momentum stays the same", &particles).unwrap();
    assert_eq!(store.len().unwrap(), 1);

    submit(&mut store, "  energy drops when they stick  ", &particles).unwrap();
    assert_eq!(store.len().unwrap(), 2);

    let recent = store.recent(5).unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[1].text, "energy drops when they stick", "text must be trimmed");
    assert_eq!(recent[1].mass1, 5.0);
    assert_eq!(recent[1].velocity2, -3.0);
}

#[test]
fn file_store_survives_reopening() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hypotheses.log");
    let particles = [Particle::new(1.0, 8.0), Particle::new(20.0, 0.0)];

    {
        let mut store = FileStore::new(&path);
        submit(&mut store, "the heavy one barely moves", &particles).unwrap();
        submit(&mut store, "they travel together afterwards", &particles).unwrap();
    }

    // A fresh handle reads the same log back
    let store = FileStore::new(&path);
    let records = store.recent(10).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].text, "the heavy one barely moves");
    assert_eq!(records[1].text, "they travel together afterwards");
    assert_eq!(records[1].mass2, 20.0);
}

#[test]
fn file_store_treats_a_missing_file_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("never-created.log"));

    assert_eq!(store.len().unwrap(), 0);
    assert!(store.recent(10).unwrap().is_empty());
}

#[test]
fn file_store_writes_the_header_exactly_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hypotheses.log");
    let particles = [Particle::new(5.0, 5.0), Particle::new(5.0, -3.0)];

    let mut store = FileStore::new(&path);
    submit(&mut store, "first", &particles).unwrap();
    submit(&mut store, "second", &particles).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let headers = contents
        .lines()
        .filter(|line| line.starts_with("timestamp,"))
        .count();
    assert_eq!(headers, 1);
    assert_eq!(contents.lines().count(), 3);
}

#[test]
fn file_store_round_trips_awkward_text() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path().join("hypotheses.log"));

    let text = "first, they bounce;\nthen they slow down \\ stop".to_string();
    store
        .append(HypothesisRecord {
            timestamp: 1_700_000_000,
            mass1: 2.5,
            velocity1: -4.0,
            mass2: 0.5,
            velocity2: 6.0,
            text: text.clone(),
        })
        .unwrap();

    let records = store.recent(10).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text, text);
    assert_eq!(records[0].timestamp, 1_700_000_000);
    assert_eq!(records[0].velocity1, -4.0);
}
