use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An artist under consideration by the radar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: i64,
    pub artist_slug: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when creating or updating a candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateInput {
    pub artist_slug: String,
    pub display_name: Option<String>,
}

impl CandidateInput {
    pub fn new(artist_slug: impl Into<String>) -> Self {
        CandidateInput {
            artist_slug: artist_slug.into(),
            display_name: None,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Display name, falling back to the slug
    pub fn resolved_display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.artist_slug)
    }
}
