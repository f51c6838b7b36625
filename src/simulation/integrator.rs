//! Fixed-step semi-implicit Euler driver for the N-body system
//!
//! `euler_step` advances the whole system by one tick: each body in turn
//! sums gravity from every other body, kicks its velocity, drifts its
//! position with the updated velocity, and records its trail.
//!
//! Bodies are updated sequentially against the one authoritative sequence,
//! so a body later in the list sees the already-updated positions of
//! earlier bodies within the same tick. This staggered policy is the
//! modeled behavior, not an accident; tests cover it explicitly.

use super::forces::attraction;
use super::params::{Parameters, KM_TO_MILES};
use super::states::{Body, NVec2, System};

/// Advance the system by one fixed step of `params.dt`
///
/// Updates every body in sequence order, then advances `sys.t`. With zero
/// bodies the sweep is a no-op and only the clock moves.
pub fn euler_step(sys: &mut System, params: &Parameters) {
    for i in 0..sys.bodies.len() {
        update_body(&mut sys.bodies, i, params);
    }
    sys.t += params.dt;
}

/// One body's update: force sum, kick, drift, trail, distance bookkeeping
fn update_body(bodies: &mut [Body], i: usize, params: &Parameters) {
    // Total gravitational force on body i from every other body.
    // The sweep against the primary also refreshes distance_to_primary
    // as a side effect (see `attraction`).
    let mut total = NVec2::zeros();
    for j in 0..bodies.len() {
        if j == i {
            continue;
        }
        let (bi, bj) = pair_mut(bodies, i, j);
        total += attraction(bi, bj, params.G);
    }

    // Primary position snapshot for the periodic recompute below.
    // The primary never recomputes against itself, so excluding i is safe.
    let primary_x = bodies
        .iter()
        .enumerate()
        .find(|(j, b)| *j != i && b.primary)
        .map(|(_, b)| b.x);

    let b = &mut bodies[i];

    // Semi-implicit Euler: kick velocity first, then drift position with
    // the updated velocity
    let acc = total / b.m;
    b.v += acc * params.dt;
    b.x += b.v * params.dt;

    b.record_trail(params.trail_cap);

    // Periodic authoritative distance recompute from absolute positions,
    // converted to screen-scale kilometres. Overrides whatever the force
    // sweep wrote this step. Primary bodies only cycle the counter.
    b.frame_counter += 1;
    if b.frame_counter >= params.distance_interval {
        b.frame_counter = 0;
        if !b.primary {
            if let Some(px) = primary_x {
                b.distance_to_primary = (b.x - px).norm() * params.scale / KM_TO_MILES;
            }
        }
    }
}

/// Split-borrow bodies[i] mutably together with bodies[j] immutably
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &Body) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = bodies.split_at_mut(j);
        (&mut head[i], &tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(i);
        (&mut tail[0], &head[j])
    }
}
