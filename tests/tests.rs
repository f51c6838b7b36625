use orbsim::simulation::params::KM_TO_MILES;
use orbsim::{
    attraction, euler_step, Body, BodyConfig, NVec2, Parameters, Scenario, ScenarioConfig, System,
};

/// Build a body at (x, y) with velocity (vx, vy); presentation fields are
/// irrelevant to the physics under test
pub fn test_body(x: f64, y: f64, vx: f64, vy: f64, m: f64) -> Body {
    Body::new(
        NVec2::new(x, y),
        NVec2::new(vx, vy),
        m,
        1.0,
        [255, 255, 255],
        "",
    )
}

/// Simple 2-body system separated along the x-axis, no primary
pub fn two_body_system(dist: f64, m1: f64, m2: f64) -> System {
    let b1 = test_body(-dist / 2.0, 0.0, 0.0, 0.0, m1);
    let b2 = test_body(dist / 2.0, 0.0, 0.0, 0.0, m2);
    System {
        bodies: vec![b1, b2],
        t: 0.0,
    }
}

/// Primary of mass `m_primary` at the origin plus a satellite at (r, 0)
/// with the tangential speed of a circular orbit (G = 1)
pub fn orbit_system(m_primary: f64, r: f64, m_sat: f64) -> System {
    let mut primary = test_body(0.0, 0.0, 0.0, 0.0, m_primary);
    primary.primary = true;

    let v = (m_primary / r).sqrt(); // v = sqrt(G M / r) with G = 1
    let sat = test_body(r, 0.0, 0.0, v, m_sat);

    System {
        bodies: vec![primary, sat],
        t: 0.0,
    }
}

/// Default physics parameters for tests
pub fn test_params() -> Parameters {
    Parameters {
        G: 1.0,
        dt: 1.0e-3,
        scale: 1.0,
        trail_cap: 100,
        distance_interval: 100,
    }
}

fn body_cfg(x: [f64; 2], m: f64, primary: bool) -> BodyConfig {
    BodyConfig {
        name: String::new(),
        x: x.to_vec(),
        v: vec![0.0, 0.0],
        m,
        radius: 1.0,
        color: [255, 255, 255],
        primary,
    }
}

// ==================================================================================
// Attraction tests
// ==================================================================================

#[test]
fn attraction_antisymmetric_direction() {
    let mut sys = two_body_system(1.0, 2.0, 3.0);
    let (head, tail) = sys.bodies.split_at_mut(1);

    let f_01 = attraction(&mut head[0], &tail[0], 1.0);
    let f_10 = attraction(&mut tail[0], &head[0], 1.0);

    // Opposite directions, equal magnitude under role swap
    assert!((f_01 + f_10).norm() < 1e-12, "forces not antisymmetric: {f_01:?} vs {f_10:?}");
    assert!((f_01.norm() - f_10.norm()).abs() < 1e-12);

    // Magnitude matches G m M / d^2 directly
    let expected = 1.0 * 2.0 * 3.0 / (1.0 * 1.0);
    assert!((f_01.norm() - expected).abs() < 1e-12);
}

#[test]
fn attraction_inverse_square_law() {
    let mut sys_r = two_body_system(1.0, 1.0, 1.0);
    let mut sys_2r = two_body_system(2.0, 1.0, 1.0);

    let f_r = {
        let (head, tail) = sys_r.bodies.split_at_mut(1);
        attraction(&mut head[0], &tail[0], 1.0)
    };
    let f_2r = {
        let (head, tail) = sys_2r.bodies.split_at_mut(1);
        attraction(&mut head[0], &tail[0], 1.0)
    };

    let ratio = f_r.norm() / f_2r.norm();
    assert!((ratio - 4.0).abs() < 1e-9, "Expected ~4x, got {}", ratio);
}

#[test]
fn attraction_updates_distance_only_against_primary() {
    let mut sys = orbit_system(1000.0, 3.0, 1.0);
    let (head, tail) = sys.bodies.split_at_mut(1);
    let (primary, sat) = (&mut head[0], &mut tail[0]);

    // Satellite attracting toward the primary records the separation
    attraction(sat, primary, 1.0);
    assert!((sat.distance_to_primary - 3.0).abs() < 1e-12);

    // Primary attracting toward a non-primary records nothing
    attraction(primary, sat, 1.0);
    assert_eq!(primary.distance_to_primary, 0.0);
}

// ==================================================================================
// Trail tests
// ==================================================================================

#[test]
fn trail_grows_by_one_per_step_until_cap() {
    let mut sys = orbit_system(1000.0, 1.0, 1.0e-9);
    let mut params = test_params();
    params.trail_cap = 5;

    for step in 1..=8 {
        let prev_len = sys.bodies[1].trail.len();
        euler_step(&mut sys, &params);

        let sat = &sys.bodies[1];
        assert_eq!(sat.trail.len(), (prev_len + 1).min(params.trail_cap), "step {step}");
        assert_eq!(*sat.trail.back().unwrap(), sat.x, "step {step}: last trail entry is not the new position");
    }
}

#[test]
fn trail_evicts_oldest_first() {
    let mut sys = orbit_system(1000.0, 1.0, 1.0e-9);
    let params = test_params();

    // Track every recorded position independently of the trail
    let mut recorded = Vec::new();
    for _ in 0..150 {
        euler_step(&mut sys, &params);
        recorded.push(sys.bodies[1].x);
    }

    let sat = &sys.bodies[1];
    assert_eq!(sat.trail.len(), 100);
    // After 150 ticks with cap 100, the head of the trail is the position
    // recorded at the 51st update
    assert_eq!(sat.trail[0], recorded[50]);
    assert_eq!(*sat.trail.back().unwrap(), recorded[149]);
}

// ==================================================================================
// Distance bookkeeping tests
// ==================================================================================

#[test]
fn primary_distance_never_mutated() {
    let mut sys = orbit_system(1000.0, 1.0, 1.0);
    let params = test_params();

    // Run well past the recompute interval
    for _ in 0..250 {
        euler_step(&mut sys, &params);
    }

    assert_eq!(sys.bodies[0].distance_to_primary, 0.0);
}

#[test]
fn frame_counter_cycles_and_distance_recomputes_periodically() {
    let mut sys = orbit_system(1000.0, 1.0, 1.0e-9);
    let mut params = test_params();
    params.distance_interval = 5;

    for step in 1u32..=10 {
        euler_step(&mut sys, &params);

        let sat = &sys.bodies[1];
        assert_eq!(sat.frame_counter, step % 5, "step {step}");

        let separation = (sat.x - sys.bodies[0].x).norm();
        if step % 5 == 0 {
            // Periodic recompute: from absolute post-step positions, with
            // the configured scale conversion applied
            let expected = separation * params.scale / KM_TO_MILES;
            assert!(
                (sat.distance_to_primary - expected).abs() < 1e-9,
                "step {step}: expected recomputed {expected}, got {}",
                sat.distance_to_primary
            );
        } else {
            // Opportunistic update: the raw separation seen by the force
            // sweep, before the satellite itself moved this step
            assert!(
                (sat.distance_to_primary - separation).abs() < 1e-3,
                "step {step}: expected ~raw separation {separation}, got {}",
                sat.distance_to_primary
            );
            // And definitely not the converted value
            assert!((sat.distance_to_primary - separation / KM_TO_MILES).abs() > 1e-3);
        }
    }
}

// ==================================================================================
// Integration tests
// ==================================================================================

#[test]
fn circular_orbit_closes_after_one_period() {
    let m_primary = 1000.0;
    let r = 1.0;
    let mut sys = orbit_system(m_primary, r, 1.0e-9);

    let mut params = test_params();
    params.dt = 1.0e-5;

    let v = (m_primary / r).sqrt();
    let period = std::f64::consts::TAU * r / v;
    let steps = (period / params.dt).round() as usize;

    for _ in 0..steps {
        euler_step(&mut sys, &params);
    }

    let dist = sys.bodies[1].x.norm();
    assert!(
        (dist - r).abs() < 1e-2 * r,
        "orbit did not close: |x| = {dist}, expected ~{r}"
    );
}

#[test]
fn circular_orbit_matches_analytic_position() {
    let m_primary = 1000.0;
    let r = 1.0;
    let mut sys = orbit_system(m_primary, r, 1.0e-9);

    let mut params = test_params();
    params.dt = 1.0e-5;

    let v = (m_primary / r).sqrt();
    let omega = v / r;
    let quarter_period = 0.25 * std::f64::consts::TAU / omega;
    let steps = (quarter_period / params.dt).round() as usize;

    for _ in 0..steps {
        euler_step(&mut sys, &params);
    }

    // Counterclockwise circular orbit starting at (r, 0)
    let theta = omega * steps as f64 * params.dt;
    let expected = NVec2::new(r * theta.cos(), r * theta.sin());

    let err = (sys.bodies[1].x - expected).norm();
    assert!(err < 1e-2 * r, "position error {err} after quarter period");
}

#[test]
fn later_bodies_see_already_updated_positions() {
    // Two unit masses at rest, 1.0 apart, G = 1. The first body integrates
    // against the other's original position; the second body then sees the
    // first one already moved.
    let mut sys = two_body_system(1.0, 1.0, 1.0);
    let params = Parameters {
        dt: 0.1,
        ..test_params()
    };
    let dt = params.dt;

    euler_step(&mut sys, &params);

    // Body 0: a = 1 / 1^2 toward +x
    let x0_expected = -0.5 + dt * dt;
    assert!((sys.bodies[0].x.x - x0_expected).abs() < 1e-12);

    // Body 1: sees body 0 at its updated position, so d = 0.5 - x0'
    let d = 0.5 - x0_expected;
    let x1_staggered = 0.5 - dt * dt / (d * d);
    assert!((sys.bodies[1].x.x - x1_staggered).abs() < 1e-12);

    // A fully-synchronous scheme would have used d = 1.0
    let x1_synchronous = 0.5 - dt * dt;
    assert!((sys.bodies[1].x.x - x1_synchronous).abs() > 1e-4);
}

#[test]
fn empty_system_step_is_noop() {
    let mut sys = System {
        bodies: Vec::new(),
        t: 0.0,
    };
    let params = test_params();

    euler_step(&mut sys, &params);

    assert!(sys.bodies.is_empty());
    assert!((sys.t - params.dt).abs() < 1e-15);
}

#[test]
fn clock_advances_once_per_step() {
    let mut sys = orbit_system(1000.0, 1.0, 1.0);
    let params = test_params();

    for _ in 0..3 {
        euler_step(&mut sys, &params);
    }

    assert!((sys.t - 3.0 * params.dt).abs() < 1e-12);
}

// ==================================================================================
// Configuration tests
// ==================================================================================

#[test]
fn config_rejects_non_positive_mass() {
    let cfg = ScenarioConfig {
        bodies: vec![body_cfg([0.0, 0.0], 0.0, true)],
        ..Default::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = ScenarioConfig {
        bodies: vec![body_cfg([0.0, 0.0], -1.0, true)],
        ..Default::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn config_rejects_duplicate_or_missing_primary() {
    let cfg = ScenarioConfig {
        bodies: vec![
            body_cfg([0.0, 0.0], 1.0, true),
            body_cfg([1.0, 0.0], 1.0, true),
        ],
        ..Default::default()
    };
    assert!(cfg.validate().is_err(), "duplicate primary accepted");

    let cfg = ScenarioConfig {
        bodies: vec![
            body_cfg([0.0, 0.0], 1.0, false),
            body_cfg([1.0, 0.0], 1.0, false),
        ],
        ..Default::default()
    };
    assert!(cfg.validate().is_err(), "missing primary accepted");
}

#[test]
fn config_rejects_coincident_positions() {
    let cfg = ScenarioConfig {
        bodies: vec![
            body_cfg([2.0, 3.0], 1.0, true),
            body_cfg([2.0, 3.0], 1.0, false),
        ],
        ..Default::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn config_rejects_wrong_vector_arity() {
    let mut bad = body_cfg([0.0, 0.0], 1.0, true);
    bad.x = vec![0.0, 0.0, 0.0];
    let cfg = ScenarioConfig {
        bodies: vec![bad],
        ..Default::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn config_accepts_empty_body_set() {
    let cfg = ScenarioConfig::default();
    assert!(cfg.validate().is_ok());

    // And the resulting scenario steps without panicking
    let mut scenario = Scenario::build_scenario(cfg).unwrap();
    euler_step(&mut scenario.system, &scenario.parameters);
}

#[test]
fn build_scenario_maps_config_fields() {
    let yaml = r#"
parameters:
  G: 1.0
  dt: 0.5
  scale: 1.0
bodies:
  - name: "Center"
    x: [0.0, 0.0]
    v: [0.0, 0.0]
    m: 100.0
    radius: 5.0
    color: [255, 255, 0]
    primary: true
  - name: "Moonlet"
    x: [10.0, 0.0]
    v: [0.0, 3.1622776601]
    m: 0.001
    radius: 1.0
"#;

    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
    // Omitted parameters fall back to defaults
    assert_eq!(cfg.parameters.trail_cap, 100);
    assert_eq!(cfg.parameters.distance_interval, 100);

    let scenario = Scenario::build_scenario(cfg).unwrap();
    assert_eq!(scenario.system.bodies.len(), 2);
    assert_eq!(scenario.system.t, 0.0);

    let center = &scenario.system.bodies[0];
    assert!(center.primary);
    assert_eq!(center.name, "Center");
    assert_eq!(center.color, [255, 255, 0]);

    let moonlet = &scenario.system.bodies[1];
    assert!(!moonlet.primary);
    assert_eq!(moonlet.x, NVec2::new(10.0, 0.0));
    assert!(moonlet.trail.is_empty());
}

#[test]
fn solar_system_scenario_is_well_formed() {
    let mut scenario = Scenario::solar_system();
    assert_eq!(scenario.system.bodies.len(), 6);
    assert_eq!(
        scenario
            .system
            .bodies
            .iter()
            .filter(|b| b.primary)
            .count(),
        1
    );
    assert!(scenario.system.bodies.iter().all(|b| b.m > 0.0));
    assert!(scenario.system.bodies[0].primary, "sun should lead the sequence");

    // One step runs cleanly and every body records its trail
    euler_step(&mut scenario.system, &scenario.parameters);
    assert!(scenario.system.bodies.iter().all(|b| b.trail.len() == 1));
}
