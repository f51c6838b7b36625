//! Pairwise Newtonian gravity for the n-body engine
//!
//! One force law, direct summation: suitable for a small fixed body count
//! where the O(n^2) sweep per step is cheap.

use crate::simulation::states::{Body, NVec2};

/// Force exerted ON `body` BY `other`:
///
///   F = G * m_body * m_other / d^2
///
/// directed along the displacement from `body` to `other`.
///
/// If `other` is the primary, the separation `d` is also written into
/// `body.distance_to_primary`. The force sweep against the primary doubles
/// as the per-step distance reading; the periodic recompute in the
/// integrator overrides it every `distance_interval` steps.
///
/// Precondition: `d > 0`. Coincident positions are rejected at scenario
/// validation and never arise from a valid configuration.
#[allow(non_snake_case)]
pub fn attraction(body: &mut Body, other: &Body, G: f64) -> NVec2 {
    // r is the displacement vector from body to other; the pull on body
    // points along +r
    let r = other.x - body.x;
    let d = r.norm();

    if other.primary {
        body.distance_to_primary = d;
    }

    let f = G * body.m * other.m / (d * d);

    // F_vec = (G m M / d^2) r_hat = f * r / d
    (f / d) * r
}
