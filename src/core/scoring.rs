use chrono::NaiveDate;

use crate::models::{Donor, ScoringWeights};

/// Per-request context handed to the scorer
///
/// Carries the evaluation date explicitly so recency scoring stays a pure
/// function of its inputs.
#[derive(Debug, Clone)]
pub struct ScoringContext {
    pub blood_type: String,
    pub radius_km: f64,
    pub as_of: NaiveDate,
}

/// Suitability scoring policy, injected into the matching pipeline
///
/// Implementations must be pure functions of their inputs and return a
/// finite value for every valid input; higher is better. The engine treats
/// a non-finite score as an internal fault.
pub trait Scorer: Send + Sync {
    fn score(&self, donor: &Donor, distance_km: f64, ctx: &ScoringContext) -> f64;
}

/// Baseline scoring policy: inverse-distance decay weighted against
/// donation-recency eligibility
///
/// A donor who donated within the cooldown window scores strictly lower
/// than an equally-distant donor outside it, since they are less likely to
/// be eligible to donate again.
#[derive(Debug, Clone)]
pub struct RecencyDistanceScorer {
    weights: ScoringWeights,
    cooldown_days: u32,
}

impl RecencyDistanceScorer {
    pub fn new(weights: ScoringWeights, cooldown_days: u32) -> Self {
        Self {
            weights,
            cooldown_days,
        }
    }
}

impl Default for RecencyDistanceScorer {
    fn default() -> Self {
        Self::new(ScoringWeights::default(), 90)
    }
}

impl Scorer for RecencyDistanceScorer {
    fn score(&self, donor: &Donor, distance_km: f64, ctx: &ScoringContext) -> f64 {
        let distance = distance_score(distance_km, ctx.radius_km);
        let recency = recency_score(donor.last_donation, ctx.as_of, self.cooldown_days);

        let total = (distance * self.weights.distance + recency * self.weights.recency) * 100.0;
        total.clamp(0.0, 100.0)
    }
}

/// Distance component (0-1), exponentially decaying with distance
#[inline]
fn distance_score(distance_km: f64, radius_km: f64) -> f64 {
    if radius_km <= 0.0 {
        return 0.0;
    }

    // Exponential decay: nearby donors score much higher than donors at the
    // edge of the radius
    (-distance_km / (radius_km * 0.5)).exp()
}

/// Recency component (0-1)
///
/// Full credit when there is no recorded donation or the last donation is
/// at least `cooldown_days` old; inside the window the component ramps up
/// with elapsed days but stays strictly below the outside-window value.
#[inline]
fn recency_score(last_donation: Option<NaiveDate>, as_of: NaiveDate, cooldown_days: u32) -> f64 {
    let Some(last) = last_donation else {
        return 1.0;
    };

    let elapsed = (as_of - last).num_days().max(0);
    if elapsed >= i64::from(cooldown_days) {
        return 1.0;
    }

    0.5 * elapsed as f64 / f64::from(cooldown_days)
}
