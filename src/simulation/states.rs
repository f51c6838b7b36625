//! Core state types for the N-body simulation.
//!
//! Defines the 2D body/system structs:
//! - `Body` with kinematic state, orbit trail, and cached distance to the
//!   primary body,
//! - `System` holding the list of bodies and the current simulation time `t`.
//!
//! Bodies are constructed once at startup and never added or removed
//! afterwards; all mutation happens through the per-step update.

use std::collections::VecDeque;

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position (simulation units)
    pub v: NVec2, // velocity (simulation units per second)
    pub m: f64, // mass, strictly positive
    pub radius: f64, // draw radius in pixels, not used by physics
    pub color: [u8; 3], // draw color, not used by physics
    pub name: String,
    pub primary: bool, // marks the gravitational center; at most one per system
    pub trail: VecDeque<NVec2>, // past positions, oldest first, capped
    pub distance_to_primary: f64, // cached, dual update discipline (see integrator)
    pub frame_counter: u32, // steps since last periodic distance recompute
}

impl Body {
    /// New body at rest-or-moving initial state, empty trail
    /// Mass must be strictly positive; enforced at scenario validation
    pub fn new(x: NVec2, v: NVec2, m: f64, radius: f64, color: [u8; 3], name: &str) -> Self {
        Self {
            x,
            v,
            m,
            radius,
            color,
            name: name.to_string(),
            primary: false,
            trail: VecDeque::new(),
            distance_to_primary: 0.0,
            frame_counter: 0,
        }
    }

    /// Append the current position to the orbit trail, evicting the oldest
    /// entry once `cap` is exceeded
    pub fn record_trail(&mut self, cap: usize) {
        self.trail.push_back(self.x);
        if self.trail.len() > cap {
            self.trail.pop_front();
        }
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // the one authoritative body sequence, order-stable
    pub t: f64, // simulation clock in seconds, advanced once per step
}
