//! Shared Estimator Example
//!
//! Platform sensor callbacks usually arrive on several threads. A
//! [`SharedEstimator`] lets each callback push its events without a global
//! lock: the magnetometer thread only contends on the aggregator, the
//! accelerometer thread only on the detector.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_shared_estimator
//! ```

use std::sync::Arc;
use std::thread;

use innout_core::{time::SystemTime, FusionOutput, SensorEvent, SharedEstimator, WirelessSummary};

fn main() {
    println!("InnOut Shared Estimator Example");
    println!("===============================\n");

    let estimator = Arc::new(SharedEstimator::default());
    estimator.subscribe(|output: &FusionOutput| {
        println!("  published {} (p = {:.3})", output.verdict, output.probability);
    });

    let accelerometer = {
        let estimator = Arc::clone(&estimator);
        thread::spawn(move || {
            for i in 0..200u32 {
                let z = if i % 2 == 0 { 11.5 } else { 8.0 };
                if let Err(err) = estimator.handle(SensorEvent::Acceleration { x: 0.0, y: 0.0, z }) {
                    eprintln!("accelerometer: {err}");
                }
            }
        })
    };

    let magnetometer = {
        let estimator = Arc::clone(&estimator);
        thread::spawn(move || {
            for second in 0..20u64 {
                let x = if second % 3 == 0 { 38.0 } else { 52.0 };
                let event = SensorEvent::MagneticField {
                    x,
                    y: 0.0,
                    z: 0.0,
                    timestamp: second * 1000,
                };
                if let Err(err) = estimator.handle(event) {
                    eprintln!("magnetometer: {err}");
                }
                estimator.tick(second * 1000);
            }
        })
    };

    let environment = {
        let estimator = Arc::clone(&estimator);
        thread::spawn(move || {
            let scan = WirelessSummary::from_levels(&[-50, -58, -66]);
            for event in [
                SensorEvent::Light { lux: 220.0 },
                SensorEvent::WirelessScan(scan),
            ] {
                if let Err(err) = estimator.handle(event) {
                    eprintln!("environment: {err}");
                }
            }
        })
    };

    for worker in [accelerometer, magnetometer, environment] {
        if worker.join().is_err() {
            eprintln!("sensor thread panicked");
        }
    }

    estimator.poll(&SystemTime);
    println!("\nMotion: {:?}", estimator.motion_state());
    println!("Verdict: {}", estimator.verdict());
    if let Some(output) = estimator.latest() {
        for c in &output.contributions {
            println!("  {:<10} {:.3}", c.signal.name(), c.probability);
        }
    }
}
