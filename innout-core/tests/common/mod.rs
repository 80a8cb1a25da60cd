//! Common test utilities and signal generators for integration tests
//!
//! This module provides:
//! - Deterministic sensor traces (walking gait, resting phone, magnetic field)
//! - Indoor and outdoor scenarios with their expected verdicts
//! - A seeded RNG so every run sees the same noise

#![allow(dead_code)]

pub mod generators;
pub mod scenarios;

use innout_core::{Estimator, FusionOutput, SensorEvent};

/// Linear congruential generator, good enough for test noise
pub struct TestRng {
    state: u32,
}

impl TestRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Uniform in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        (self.state >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform in [min, max)
    pub fn gen_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }
}

/// Feed every event, returning the outputs that were published
pub fn replay(estimator: &mut Estimator, events: &[SensorEvent]) -> Vec<FusionOutput> {
    events
        .iter()
        .filter_map(|event| estimator.handle(*event).expect("generated events are finite"))
        .collect()
}
