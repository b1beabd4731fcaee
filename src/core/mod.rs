// Core pipeline exports
pub mod engine;
pub mod filter;
pub mod geo;
pub mod scoring;

pub use engine::{EngineError, MatchOutcome, Matcher, MAX_MATCHES};
pub use filter::{within_radius, Candidate};
pub use geo::{GeoError, GeoPoint};
pub use scoring::{RecencyDistanceScorer, Scorer, ScoringContext};
