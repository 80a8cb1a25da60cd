//! Pre-built classification scenarios
//!
//! Each scenario is a full event stream: environment readings, a magnetic
//! trace with matching ticks, and a walking gait long enough to open the
//! motion gate. Its expected verdict is what a person standing there would
//! answer.

use innout_core::{SatelliteSummary, SensorEvent, TimeOfDay, Verdict, WirelessSummary};

use super::{
    generators::{magnetic_trace, ticks, walking_gait},
    TestRng,
};

pub struct Scenario {
    pub name: &'static str,
    pub events: Vec<SensorEvent>,
    pub expected: Verdict,
}

const START: u64 = 1_700_000_000_000;

fn assemble(
    time_of_day: TimeOfDay,
    environment: &[SensorEvent],
    magnetic_jitter: f32,
    seed: u32,
) -> Vec<SensorEvent> {
    let mut rng = TestRng::new(seed);
    let mut events = vec![SensorEvent::TimeOfDay(time_of_day)];
    events.extend_from_slice(environment);

    let magnetic = magnetic_trace(START, 15, 45.0, magnetic_jitter, &mut rng);
    for (reading, tick) in magnetic.into_iter().zip(ticks(START, 15)) {
        events.push(reading);
        events.push(tick);
    }

    events.extend(walking_gait(120, 1.5));
    events
}

/// Office at midday: dim light, few weak satellites, dense Wi-Fi
pub fn office_daytime() -> Scenario {
    let environment = [
        SensorEvent::Light { lux: 350.0 },
        SensorEvent::Proximity { distance_cm: 5.0 },
        SensorEvent::Satellites(SatelliteSummary::from_cn0(&[18.0, 21.0, 16.5])),
        SensorEvent::WirelessScan(WirelessSummary::from_levels(&[-45, -52, -60, -67, -71])),
    ];

    Scenario {
        name: "office_daytime",
        events: assemble(TimeOfDay::Day, &environment, 12.0, 7),
        expected: Verdict::Indoor,
    }
}

/// Park at midday: bright sun, clear sky, barely any Wi-Fi
pub fn park_daytime() -> Scenario {
    let cn0: Vec<f32> = (0..18).map(|i| 38.0 + (i % 5) as f32).collect();
    let environment = [
        SensorEvent::Light { lux: 25_000.0 },
        SensorEvent::Proximity { distance_cm: 5.0 },
        SensorEvent::Satellites(SatelliteSummary::from_cn0(&cn0)),
        SensorEvent::WirelessScan(WirelessSummary::from_levels(&[-93])),
    ];

    Scenario {
        name: "park_daytime",
        events: assemble(TimeOfDay::Day, &environment, 0.5, 11),
        expected: Verdict::Outdoor,
    }
}

/// Street at night: dark, open sky, no networks in range
pub fn street_night() -> Scenario {
    let cn0: Vec<f32> = (0..14).map(|i| 35.0 + (i % 4) as f32).collect();
    let environment = [
        SensorEvent::Light { lux: 4.0 },
        SensorEvent::Satellites(SatelliteSummary::from_cn0(&cn0)),
        SensorEvent::WirelessScan(WirelessSummary::from_levels(&[-95])),
    ];

    Scenario {
        name: "street_night",
        events: assemble(TimeOfDay::Night, &environment, 0.5, 13),
        expected: Verdict::Outdoor,
    }
}

/// Living room at night: lamps on, no fix, home network
pub fn home_night() -> Scenario {
    let environment = [
        SensorEvent::Light { lux: 450.0 },
        SensorEvent::Satellites(SatelliteSummary::from_cn0(&[])),
        SensorEvent::WirelessScan(WirelessSummary::from_levels(&[-40, -75])),
    ];

    Scenario {
        name: "home_night",
        events: assemble(TimeOfDay::Night, &environment, 10.0, 17),
        expected: Verdict::Indoor,
    }
}

pub fn all() -> Vec<Scenario> {
    vec![office_daytime(), park_daytime(), street_night(), home_night()]
}
