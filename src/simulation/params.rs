//! Unit/scale constants and runtime parameters for the simulation
//!
//! `Parameters` holds the per-scenario runtime settings:
//! - gravitational constant and fixed step size (`G`, `dt`),
//! - world-to-screen distance scale,
//! - orbit trail cap and distance recompute interval
//!
//! The constants below are the solar-system units used by the default
//! scenario; `Default` reproduces them so a scenario only overrides what
//! it needs.

/// Kilometres to miles
pub const KM_TO_MILES: f64 = 0.621371;

/// One astronomical unit in kilometres
pub const AU_IN_KM: f64 = 149.6e6 * 1000.0;

/// One astronomical unit in simulation units (miles)
pub const AU: f64 = AU_IN_KM * KM_TO_MILES;

/// Newtonian gravitational constant
pub const DEFAULT_G: f64 = 6.67428e-11;

/// World-to-screen scale: 250 pixels per AU
pub const DEFAULT_SCALE: f64 = 250.0 / AU;

/// Fixed step size: half a day in seconds
pub const DEFAULT_DT: f64 = 3600.0 * 24.0 * 0.5;

/// Maximum number of positions kept in each orbit trail
pub const DEFAULT_TRAIL_CAP: usize = 100;

/// Recompute distance-to-primary every this many steps
pub const DEFAULT_DISTANCE_INTERVAL: u32 = 100;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub dt: f64, // fixed step size in seconds
    pub scale: f64, // world-to-screen distance scale
    pub trail_cap: usize, // orbit trail length cap
    pub distance_interval: u32, // steps between distance recomputes
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: DEFAULT_G,
            dt: DEFAULT_DT,
            scale: DEFAULT_SCALE,
            trail_cap: DEFAULT_TRAIL_CAP,
            distance_interval: DEFAULT_DISTANCE_INTERVAL,
        }
    }
}
