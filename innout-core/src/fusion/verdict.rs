//! Tri-state classification result

use core::fmt;

use crate::constants::fusion::VERDICT_THRESHOLD;

/// Discrete fusion verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    /// No informative data yet, or the evidence is exactly balanced
    #[default]
    Loading,
    /// Fused probability above 0.5
    Indoor,
    /// Fused probability below 0.5
    Outdoor,
}

impl Verdict {
    /// Derive a verdict from a fused probability
    ///
    /// Compared for exact equality: all-neutral inputs sum to precisely 0.5
    /// and must read as LOADING.
    pub fn from_probability(probability: f64) -> Self {
        if probability == VERDICT_THRESHOLD {
            Verdict::Loading
        } else if probability > VERDICT_THRESHOLD {
            Verdict::Indoor
        } else {
            Verdict::Outdoor
        }
    }

    /// Upper-case display label
    pub const fn as_str(&self) -> &'static str {
        match self {
            Verdict::Loading => "LOADING",
            Verdict::Indoor => "INDOOR",
            Verdict::Outdoor => "OUTDOOR",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Verdict {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.as_str())
    }
}
