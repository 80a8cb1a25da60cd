//! Walk Replay Example
//!
//! Replays a synthetic walk from a building out into the street through an
//! [`Estimator`], the same way a platform sensor loop would feed it.
//!
//! ## What You'll Learn
//!
//! - Routing raw sensor events through `Estimator::handle`
//! - Driving the periodic recompute from a clock with `poll`
//! - Subscribing an observer that renders each verdict
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_walk_replay
//! ```

use innout_core::{
    ClassifierResult, Estimator, EstimatorConfig, FixedTime, FusionOutput, SatelliteSummary,
    SensorEvent, TimeOfDay, WirelessSummary,
};

const ACCEL_RATE_HZ: u64 = 50;

/// Ambient readings that change when the user steps outside
struct Surroundings {
    lux: f32,
    magnetic_jitter: f32,
    cn0: Vec<f32>,
    rssi: Vec<i32>,
}

fn indoors() -> Surroundings {
    Surroundings {
        lux: 280.0,
        magnetic_jitter: 9.0,
        cn0: vec![17.0, 20.5],
        rssi: vec![-48, -55, -63, -70, -74, -79],
    }
}

fn outdoors() -> Surroundings {
    Surroundings {
        lux: 18_000.0,
        magnetic_jitter: 0.4,
        cn0: (0..16).map(|i| 36.0 + (i % 6) as f32).collect(),
        rssi: vec![-88, -94],
    }
}

/// Simulate one second of walking
fn walk_second(
    estimator: &mut Estimator,
    clock: &mut FixedTime,
    here: &Surroundings,
    second: u64,
) -> ClassifierResult<()> {
    use innout_core::TimeSource;

    let start = clock.now();
    for i in 0..ACCEL_RATE_HZ {
        let t = (second * ACCEL_RATE_HZ + i) as f32 / ACCEL_RATE_HZ as f32;
        let bounce = 1.8 * (2.0 * std::f32::consts::PI * 1.9 * t).sin();
        estimator.handle(SensorEvent::Acceleration {
            x: 0.4,
            y: 0.1,
            z: 9.81 + bounce,
        })?;
    }

    // Deterministic pseudo-noise on the field magnitude
    let wobble = ((second * 7919) % 100) as f32 / 50.0 - 1.0;
    estimator.handle(SensorEvent::MagneticField {
        x: 44.0 + wobble * here.magnetic_jitter,
        y: 6.0,
        z: -3.0,
        timestamp: start,
    })?;
    estimator.handle(SensorEvent::Light { lux: here.lux })?;

    if second % 2 == 0 {
        estimator.handle(SensorEvent::Satellites(SatelliteSummary::from_cn0(&here.cn0)))?;
    }
    if second % 5 == 0 {
        estimator.handle(SensorEvent::WirelessScan(WirelessSummary::from_levels(&here.rssi)))?;
    }

    clock.advance(1000);
    estimator.poll(&*clock);
    Ok(())
}

fn main() -> ClassifierResult<()> {
    println!("InnOut Walk Replay Example");
    println!("==========================\n");

    let config = EstimatorConfig::default().with_resting_magnitude(9.81);
    let mut estimator = Estimator::new(config)?;
    estimator.handle(SensorEvent::TimeOfDay(TimeOfDay::Day))?;

    let mut last_printed = None;
    estimator.subscribe(move |output: &FusionOutput| {
        if last_printed != Some(output.verdict) {
            println!("  -> {} (p = {:.3})", output.verdict, output.probability);
            last_printed = Some(output.verdict);
        }
    });

    let mut clock = FixedTime::new(1_700_000_000_000);

    println!("Walking through the office for 30 s");
    let inside = indoors();
    for second in 0..30 {
        walk_second(&mut estimator, &mut clock, &inside, second)?;
    }

    println!("\nStepping out onto the street for 30 s");
    let outside = outdoors();
    for second in 30..60 {
        walk_second(&mut estimator, &mut clock, &outside, second)?;
    }

    println!("\nFinal verdict: {}", estimator.verdict());
    if let Some(variance) = estimator.magnetic().current_variance() {
        println!("Magnetic variance: {:.2} µT²", variance);
    }
    println!(
        "Window: {} buckets, {} readings",
        estimator.magnetic().bucket_count(),
        estimator.magnetic().observation_count()
    );

    Ok(())
}
