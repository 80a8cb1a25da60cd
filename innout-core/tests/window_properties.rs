//! Property tests for the windowed statistics and probability bounds
//!
//! Tests cover:
//! - Observation bookkeeping across arbitrary record/evict sequences
//! - Mean and population variance against a direct computation
//! - Mapper and fused outputs staying inside [0, 1]

use innout_core::{
    fusion::FusionClassifier,
    mappers::{LightMapper, MagneticMapper, NavigationMapper, WirelessMapper},
    snapshot::FusionInputs,
    TimeOfDay, Verdict, WindowConfig, WindowedAggregator, WirelessSummary,
};

use proptest::prelude::*;

fn reference_stats(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    (mean, variance)
}

proptest! {
    #[test]
    fn prop_observation_count_matches_contents(
        steps in prop::collection::vec((0u64..40, 1.0f32..100.0), 1..300)
    ) {
        let mut window = WindowedAggregator::<f32>::new(WindowConfig::default());
        let mut now = 0u64;

        for (gap_ms, value) in steps {
            now += gap_ms * 100;
            let before = window.bucket_count();
            window.record(value, now);

            // One record adds at most one bucket and evicts at most one
            prop_assert!(window.bucket_count() <= before + 1);
            prop_assert!(window.bucket_count() + 1 >= before);
            prop_assert_eq!(window.observation_count(), window.values().count());
        }
    }

    #[test]
    fn prop_statistics_match_direct_computation(
        readings in prop::collection::vec(prop::collection::vec(20.0f32..80.0, 1..5), 10..16)
    ) {
        let mut window = WindowedAggregator::<f32>::new(WindowConfig::default());
        for (second, bucket) in readings.iter().enumerate() {
            for value in bucket {
                window.record(*value, second as u64 * 1000 + 10);
            }
        }
        window.refresh();

        let values: Vec<f64> = window.values().map(|v| v as f64).collect();
        let (mean, variance) = reference_stats(&values);

        let got_mean = window.current_mean().unwrap();
        let got_variance = window.current_variance().unwrap();
        prop_assert!((got_mean - mean).abs() < 1e-9 * mean.abs().max(1.0));
        prop_assert!((got_variance - variance).abs() < 1e-6 * variance.max(1.0));
        prop_assert!(got_variance >= 0.0);
    }

    #[test]
    fn prop_no_mean_below_retention(
        buckets in 1usize..10,
        value in 1.0f32..100.0
    ) {
        let mut window = WindowedAggregator::<f32>::new(WindowConfig::default());
        for second in 0..buckets as u64 {
            window.record(value, second * 1000);
        }
        window.refresh();

        prop_assert_eq!(window.current_mean(), None);
        prop_assert_eq!(window.current_variance(), None);
    }

    #[test]
    fn prop_mappers_stay_in_unit_interval(
        lux in 0.0f32..200_000.0,
        covered in any::<bool>(),
        night in any::<bool>(),
        variance in 0.0f64..10_000.0,
        count in 0u32..200,
        cnr in -10.0f64..80.0,
        access_points in 0u32..500,
        strength in -120.0f64..0.0,
    ) {
        let time_of_day = if night { TimeOfDay::Night } else { TimeOfDay::Day };
        let scan = WirelessSummary { access_points, mean_strength_dbm: strength };

        let probabilities = [
            LightMapper::default().probability(Some(lux), covered, time_of_day),
            MagneticMapper::default().probability(Some(variance)),
            NavigationMapper::default().probability(Some(count), Some(cnr)),
            WirelessMapper::default().probability(Some(&scan)),
        ];
        for p in probabilities {
            prop_assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn prop_fused_probability_bounded_and_consistent(
        lux in prop::option::of(0.0f32..100_000.0),
        variance in prop::option::of(0.0f64..500.0),
        count in prop::option::of(0u32..40),
        cnr in prop::option::of(0.0f64..60.0),
        access_points in 0u32..120,
        strength in -100.0f64..-20.0,
    ) {
        let inputs = FusionInputs {
            lux,
            magnetic_variance: variance,
            satellite_count: count,
            mean_cnr: cnr,
            wireless: Some(WirelessSummary { access_points, mean_strength_dbm: strength }),
            moving: true,
            ..FusionInputs::default()
        };

        let output = FusionClassifier::default().compute(&inputs);
        prop_assert!((0.0..=1.0 + 1e-12).contains(&output.probability));
        prop_assert_eq!(output.verdict, Verdict::from_probability(output.probability));
    }
}
