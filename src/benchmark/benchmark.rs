use std::time::Instant;

use crate::simulation::integrator::euler_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Wall-clock timing of the direct-sum step at several system sizes
///
/// Builds deterministic synthetic systems (one heavy primary, satellites on
/// a ring) and reports the per-step cost of the O(n^2) sweep.
pub fn bench_step() {
    // Different system sizes to test
    let ns = [8, 16, 32, 64, 128, 256];
    let steps = 1000;

    for n in ns {
        let mut sys = ring_system(n);
        let params = bench_params();

        // Warm up
        euler_step(&mut sys, &params);

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_step(&mut sys, &params);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:4}, step = {:10.3} us", per_step * 1e6);
    }
}

/// One heavy primary at the origin plus n-1 unit-mass satellites on a ring,
/// deterministic, no rand needed
fn ring_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    let mut primary = Body::new(NVec2::zeros(), NVec2::zeros(), 1.0e6, 10.0, [255, 255, 0], "primary");
    primary.primary = true;
    bodies.push(primary);

    for i in 1..n {
        let angle = i as f64 * std::f64::consts::TAU / (n - 1) as f64;
        let radius = 10.0 + (i % 7) as f64;
        let x = NVec2::new(radius * angle.cos(), radius * angle.sin());
        // Tangential velocity for a roughly circular orbit
        let speed = (1.0e6 / radius).sqrt();
        let v = NVec2::new(-angle.sin() * speed, angle.cos() * speed);

        bodies.push(Body::new(x, v, 1.0, 1.0, [255, 255, 255], ""));
    }

    System { bodies, t: 0.0 }
}

fn bench_params() -> Parameters {
    Parameters {
        G: 1.0,
        dt: 1.0e-3,
        scale: 1.0,
        trail_cap: 100,
        distance_interval: 100,
    }
}
