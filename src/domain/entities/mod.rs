pub mod artist_context;
pub mod candidate;
pub mod score_snapshot;
