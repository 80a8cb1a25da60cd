//! Sensor trace generators
//!
//! Traces are built from simple physical models:
//! - Walking adds a ~2 Hz vertical bounce on top of gravity
//! - A resting phone reads gravity plus a little sensor noise
//! - The geomagnetic field is ~45 µT outdoors; steel and wiring indoors
//!   make it wander by several µT as the user moves

use innout_core::{SensorEvent, Timestamp};

use super::TestRng;

/// Standard gravity (m/s²)
pub const GRAVITY: f32 = 9.81;

/// Accelerometer sample period at 50 Hz (ms)
pub const ACCEL_PERIOD_MS: u64 = 20;

/// Accelerometer samples of a walking user
///
/// Vertical bounce of `amplitude` m/s² at two steps per second.
pub fn walking_gait(samples: usize, amplitude: f32) -> Vec<SensorEvent> {
    (0..samples)
        .map(|i| {
            let t = i as f32 * ACCEL_PERIOD_MS as f32 / 1000.0;
            let bounce = amplitude * libm::sinf(2.0 * core::f32::consts::PI * 2.0 * t);
            SensorEvent::Acceleration {
                x: 0.3,
                y: 0.2,
                z: GRAVITY + bounce,
            }
        })
        .collect()
}

/// Accelerometer samples of a phone lying still
pub fn stationary(samples: usize, rng: &mut TestRng) -> Vec<SensorEvent> {
    (0..samples)
        .map(|_| SensorEvent::Acceleration {
            x: 0.0,
            y: 0.0,
            z: GRAVITY + rng.gen_range(-0.005, 0.005),
        })
        .collect()
}

/// One magnetometer reading per second with uniform jitter around `base`
pub fn magnetic_trace(
    start: Timestamp,
    seconds: u64,
    base: f32,
    jitter: f32,
    rng: &mut TestRng,
) -> Vec<SensorEvent> {
    (0..seconds)
        .map(|s| SensorEvent::MagneticField {
            x: base + rng.gen_range(-jitter, jitter),
            y: 0.0,
            z: 0.0,
            timestamp: start + s * 1000,
        })
        .collect()
}

/// Timer ticks matching a magnetic trace
pub fn ticks(start: Timestamp, seconds: u64) -> Vec<SensorEvent> {
    (0..seconds)
        .map(|s| SensorEvent::Tick {
            timestamp: start + s * 1000,
        })
        .collect()
}
