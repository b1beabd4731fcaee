use std::sync::Arc;

use thiserror::Error;

use crate::core::filter::within_radius;
use crate::core::geo::GeoPoint;
use crate::core::scoring::{RecencyDistanceScorer, Scorer, ScoringContext};
use crate::models::{Donor, RankedDonor};

/// Hard cap on the number of donors returned per request
pub const MAX_MATCHES: usize = 50;

/// Faults raised inside the matching pipeline
///
/// All of these are internal-processing errors from the caller's point of
/// view; the orchestrator logs them and reports an opaque failure.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no scoring policy configured for the matching pipeline")]
    ScorerUnavailable,

    #[error("donor {donor_id} reached the pipeline without coordinates")]
    MissingLocation { donor_id: i32 },

    #[error("scoring policy produced a non-finite score for donor {donor_id}")]
    InvalidScore { donor_id: i32 },
}

/// Result of one matching run: the ranked shortlist plus the number of
/// donors that matched before truncation
#[derive(Debug)]
pub struct MatchOutcome {
    pub matches: Vec<RankedDonor>,
    pub total_matched: usize,
}

/// Donor matching pipeline: distance filter, suitability scoring, ranking
/// and truncation over an immutable directory snapshot
///
/// The scoring policy is an injected capability; a matcher constructed
/// without one rejects every request rather than degrading silently.
#[derive(Clone)]
pub struct Matcher {
    scorer: Option<Arc<dyn Scorer>>,
}

impl Matcher {
    pub fn new(scorer: Arc<dyn Scorer>) -> Self {
        Self {
            scorer: Some(scorer),
        }
    }

    /// A matcher with no scoring policy; `rank` always fails
    pub fn unconfigured() -> Self {
        Self { scorer: None }
    }

    pub fn with_default_policy() -> Self {
        Self::new(Arc::new(RecencyDistanceScorer::default()))
    }

    /// Run the full pipeline for one request
    ///
    /// `snapshot` is the pre-filtered donor directory for the requested
    /// blood type, frozen for the duration of the call. The returned
    /// shortlist is sorted by score descending, ties broken by distance
    /// ascending, then donor id ascending, and truncated to
    /// [`MAX_MATCHES`]. Identical inputs produce identical output.
    pub fn rank(
        &self,
        origin: &GeoPoint,
        snapshot: Vec<Donor>,
        ctx: &ScoringContext,
    ) -> Result<MatchOutcome, EngineError> {
        let scorer = self.scorer.as_ref().ok_or(EngineError::ScorerUnavailable)?;

        let candidates = within_radius(origin, snapshot, &ctx.blood_type, ctx.radius_km)?;
        let total_matched = candidates.len();

        let mut matches = Vec::with_capacity(total_matched);
        for candidate in candidates {
            let score = scorer.score(&candidate.donor, candidate.distance_km, ctx);
            if !score.is_finite() {
                return Err(EngineError::InvalidScore {
                    donor_id: candidate.donor.id,
                });
            }

            matches.push(RankedDonor {
                donor: candidate.donor,
                distance_km: candidate.distance_km,
                score,
            });
        }

        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    a.distance_km
                        .partial_cmp(&b.distance_km)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .then_with(|| a.donor.id.cmp(&b.donor.id))
        });

        matches.truncate(MAX_MATCHES);

        Ok(MatchOutcome {
            matches,
            total_matched,
        })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_policy()
    }
}
