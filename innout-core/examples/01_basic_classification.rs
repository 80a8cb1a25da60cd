//! Basic Classification Example
//!
//! The simplest use of InnOut: map a handful of readings to per-sensor
//! indoor probabilities and fuse them into a verdict.
//!
//! ## What You'll Learn
//!
//! - Filling in a [`FusionInputs`] by hand
//! - Reading the per-signal breakdown of a fused result
//! - How the motion gate suppresses updates
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_classification
//! ```

use innout_core::{
    fusion::FusionClassifier, snapshot::FusionInputs, TimeOfDay, Verdict, WirelessSummary,
};

fn print_output(label: &str, classifier: &mut FusionClassifier, inputs: &FusionInputs) {
    match classifier.evaluate(inputs) {
        Some(output) => {
            println!("{label}: {} (p = {:.3})", output.verdict, output.probability);
            for c in &output.contributions {
                println!(
                    "    {:<10} p = {:.3}  x {:.3} = {:.4}",
                    c.signal.name(),
                    c.probability,
                    c.weight,
                    c.weighted()
                );
            }
        }
        None => println!(
            "{label}: not moving, verdict stays {}",
            classifier.verdict()
        ),
    }
    println!();
}

fn main() {
    println!("InnOut Basic Classification Example");
    println!("====================================\n");

    let mut classifier = FusionClassifier::default();

    // Nothing reported yet: every mapper is neutral
    let empty = FusionInputs {
        moving: true,
        ..FusionInputs::default()
    };
    print_output("No data", &mut classifier, &empty);
    assert_eq!(classifier.verdict(), Verdict::Loading);

    // Shopping centre at noon
    let mall = FusionInputs {
        lux: Some(600.0),
        time_of_day: TimeOfDay::Day,
        magnetic_variance: Some(22.0),
        satellite_count: Some(2),
        mean_cnr: Some(19.0),
        wireless: Some(WirelessSummary {
            access_points: 31,
            mean_strength_dbm: -66.0,
        }),
        moving: true,
        ..FusionInputs::default()
    };
    print_output("Mall", &mut classifier, &mall);

    // Same readings, user standing still: nothing changes
    let waiting = FusionInputs {
        lux: Some(40_000.0),
        moving: false,
        ..mall
    };
    print_output("Standing at the exit", &mut classifier, &waiting);

    // Walking across a car park
    let car_park = FusionInputs {
        lux: Some(40_000.0),
        magnetic_variance: Some(0.8),
        satellite_count: Some(17),
        mean_cnr: Some(41.0),
        wireless: Some(WirelessSummary {
            access_points: 3,
            mean_strength_dbm: -91.0,
        }),
        moving: true,
        ..mall
    };
    print_output("Car park", &mut classifier, &car_park);
}
