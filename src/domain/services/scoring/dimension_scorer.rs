use crate::domain::entities::artist_context::ArtistContext;
use crate::domain::services::math::{clamp, round};

/// Value used by scorers when the data they need is absent
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Common trait for the dimension scorers
///
/// Implementations are pure functions of the context and always return a
/// value in [0.0, 1.0], rounded to the score precision.
pub trait DimensionScorer: Send + Sync {
    /// Human-readable name of the dimension
    fn name(&self) -> &str;

    /// Score the dimension for the given context
    fn score(&self, context: &ArtistContext) -> f64;
}

/// Clamp a raw score to [0.0, 1.0] and round it
pub fn finalize_score(raw: f64) -> f64 {
    round(clamp(raw, 0.0, 1.0))
}
