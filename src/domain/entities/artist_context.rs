use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Length of the lookback window attached to every context
pub const LOOKBACK_DAYS: i64 = 90;

/// Contact coverage reported by the coverage provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactsCoverage {
    #[serde(default)]
    pub total_contacts: u32,
}

/// Outreach engagement rates in [0.0, 1.0]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngagementMetrics {
    #[serde(default)]
    pub open_rate: Option<f64>,
    #[serde(default)]
    pub reply_rate: Option<f64>,
}

/// A past promotional campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Coverage and engagement data for an artist
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageContext {
    #[serde(default)]
    pub contacts_coverage: Option<ContactsCoverage>,
    #[serde(default)]
    pub engagement_metrics: Option<EngagementMetrics>,
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
}

/// Neighbourhood of the artist's node in the industry graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphNeighborhood {
    #[serde(default)]
    pub playlists: Vec<String>,
    #[serde(default)]
    pub blogs: Vec<String>,
    #[serde(default)]
    pub connectivity_score: Option<f64>,
}

/// Direction a scene is moving in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneTrend {
    Rising,
    Stable,
    Falling,
    #[serde(other)]
    Unknown,
}

/// One scene the artist is associated with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSignal {
    pub slug: String,
    /// Activity level in [0.0, 1.0]
    #[serde(default)]
    pub pulse: Option<f64>,
    pub trend: SceneTrend,
}

impl SceneSignal {
    pub fn is_rising(&self) -> bool {
        self.trend == SceneTrend::Rising
    }
}

/// Scene-trend data for an artist
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneContext {
    #[serde(default)]
    pub scenes: Vec<SceneSignal>,
    #[serde(default)]
    pub scene_fit_score: Option<f64>,
    #[serde(default)]
    pub opportunity_score: Option<f64>,
}

/// Distance of the artist's output from genre and scene norms
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UniquenessSignals {
    #[serde(default)]
    pub genre_distance: Option<f64>,
    #[serde(default)]
    pub scene_distance: Option<f64>,
    #[serde(default)]
    pub innovation_score: Option<f64>,
}

/// Creative and consistency summary for an artist
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreativeSummary {
    #[serde(default)]
    pub uniqueness_signals: Option<UniquenessSignals>,
    #[serde(default)]
    pub consistency_score: Option<f64>,
}

/// Campaign history derived from coverage data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignHistory {
    pub artist_slug: String,
    pub campaigns: Vec<Campaign>,
    pub total_campaigns: usize,
    /// Fixed at 0.5 until campaign outcomes are tracked
    pub success_rate: f64,
    pub avg_coverage: f64,
}

impl CampaignHistory {
    pub const PLACEHOLDER_SUCCESS_RATE: f64 = 0.5;

    pub fn from_coverage(artist_slug: &str, coverage: &CoverageContext) -> Self {
        CampaignHistory {
            artist_slug: artist_slug.to_string(),
            campaigns: coverage.campaigns.clone(),
            total_campaigns: coverage.campaigns.len(),
            success_rate: Self::PLACEHOLDER_SUCCESS_RATE,
            avg_coverage: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// Community signals. No provider feeds these yet, so they carry neutral values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunitySignals {
    pub artist_slug: String,
    pub fan_engagement: f64,
    pub social_mentions: u64,
    pub community_growth_rate: f64,
    pub sentiment: Sentiment,
}

impl CommunitySignals {
    pub fn neutral(artist_slug: &str) -> Self {
        CommunitySignals {
            artist_slug: artist_slug.to_string(),
            fan_engagement: 0.5,
            social_mentions: 0,
            community_growth_rate: 0.0,
            sentiment: Sentiment::Neutral,
        }
    }
}

/// Lookback window the context was built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeframe {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
}

impl Timeframe {
    /// The last [`LOOKBACK_DAYS`] days ending at `end_date`
    pub fn lookback(end_date: NaiveDate) -> Self {
        Timeframe {
            start_date: end_date - Duration::days(LOOKBACK_DAYS),
            end_date,
            days: LOOKBACK_DAYS,
        }
    }
}

/// Which providers delivered data for a context
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderAvailability {
    pub coverage: bool,
    pub industry_graph: bool,
    pub scenes: bool,
    pub creative: bool,
}

impl ProviderAvailability {
    pub fn available_count(&self) -> usize {
        [self.coverage, self.industry_graph, self.scenes, self.creative]
            .iter()
            .filter(|available| **available)
            .count()
    }
}

/// Everything known about an artist for one scoring call
///
/// Built fresh per call and dropped once the snapshot is produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistContext {
    pub artist_slug: String,
    pub coverage: Option<CoverageContext>,
    pub industry_graph: Option<GraphNeighborhood>,
    pub scenes: Option<SceneContext>,
    pub creative: Option<CreativeSummary>,
    pub campaign_history: Option<CampaignHistory>,
    pub community_signals: CommunitySignals,
    pub timeframe: Timeframe,
}

impl ArtistContext {
    /// Assemble a context from whatever the providers returned
    pub fn assemble(
        artist_slug: &str,
        as_of: NaiveDate,
        coverage: Option<CoverageContext>,
        industry_graph: Option<GraphNeighborhood>,
        scenes: Option<SceneContext>,
        creative: Option<CreativeSummary>,
    ) -> Self {
        let campaign_history = coverage
            .as_ref()
            .map(|coverage| CampaignHistory::from_coverage(artist_slug, coverage));

        ArtistContext {
            artist_slug: artist_slug.to_string(),
            coverage,
            industry_graph,
            scenes,
            creative,
            campaign_history,
            community_signals: CommunitySignals::neutral(artist_slug),
            timeframe: Timeframe::lookback(as_of),
        }
    }

    /// A context with no provider data at all
    pub fn empty(artist_slug: &str, as_of: NaiveDate) -> Self {
        Self::assemble(artist_slug, as_of, None, None, None, None)
    }

    pub fn availability(&self) -> ProviderAvailability {
        ProviderAvailability {
            coverage: self.coverage.is_some(),
            industry_graph: self.industry_graph.is_some(),
            scenes: self.scenes.is_some(),
            creative: self.creative.is_some(),
        }
    }

    /// Scenes the artist is associated with, empty when scene data is absent
    pub fn scene_signals(&self) -> &[SceneSignal] {
        self.scenes
            .as_ref()
            .map(|scenes| scenes.scenes.as_slice())
            .unwrap_or(&[])
    }

    pub fn engagement_metrics(&self) -> Option<&EngagementMetrics> {
        self.coverage
            .as_ref()
            .and_then(|coverage| coverage.engagement_metrics.as_ref())
    }

    pub fn connectivity_score(&self) -> Option<f64> {
        self.industry_graph
            .as_ref()
            .and_then(|graph| graph.connectivity_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_timeframe_covers_ninety_days() {
        let timeframe = Timeframe::lookback(date(2024, 4, 30));
        assert_eq!(timeframe.days, 90);
        assert_eq!(timeframe.start_date, date(2024, 1, 31));
        assert_eq!(timeframe.end_date, date(2024, 4, 30));
    }

    #[test]
    fn test_empty_context_has_no_provider_data() {
        let context = ArtistContext::empty("nova-lake", date(2024, 4, 30));
        assert_eq!(context.availability(), ProviderAvailability::default());
        assert_eq!(context.availability().available_count(), 0);
        assert!(context.campaign_history.is_none());
        assert!(context.scene_signals().is_empty());
        assert_eq!(context.community_signals.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_campaign_history_derived_from_coverage() {
        let coverage = CoverageContext {
            campaigns: vec![
                Campaign {
                    id: "c1".to_string(),
                    name: None,
                    status: None,
                },
                Campaign {
                    id: "c2".to_string(),
                    name: Some("Spring push".to_string()),
                    status: Some("completed".to_string()),
                },
            ],
            ..CoverageContext::default()
        };

        let context = ArtistContext::assemble(
            "nova-lake",
            date(2024, 4, 30),
            Some(coverage),
            None,
            None,
            None,
        );

        let history = context.campaign_history.unwrap();
        assert_eq!(history.total_campaigns, 2);
        assert_eq!(history.success_rate, 0.5);
        assert_eq!(history.avg_coverage, 0.0);
        assert_eq!(history.artist_slug, "nova-lake");
    }

    #[test]
    fn test_scene_trend_deserializes_unknown_values() {
        let scene: SceneSignal =
            serde_json::from_str(r#"{"slug":"hyperpop","pulse":0.8,"trend":"exploding"}"#)
                .unwrap();
        assert_eq!(scene.trend, SceneTrend::Unknown);
        assert!(!scene.is_rising());

        let scene: SceneSignal =
            serde_json::from_str(r#"{"slug":"drill","trend":"rising"}"#).unwrap();
        assert!(scene.is_rising());
        assert_eq!(scene.pulse, None);
    }

    #[test]
    fn test_provider_records_tolerate_missing_fields() {
        let graph: GraphNeighborhood = serde_json::from_str("{}").unwrap();
        assert!(graph.playlists.is_empty());
        assert_eq!(graph.connectivity_score, None);

        let coverage: CoverageContext =
            serde_json::from_str(r#"{"contacts_coverage":{"total_contacts":12}}"#).unwrap();
        assert_eq!(coverage.contacts_coverage.unwrap().total_contacts, 12);
        assert!(coverage.engagement_metrics.is_none());
    }
}
