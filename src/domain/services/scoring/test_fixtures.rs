use chrono::NaiveDate;

use crate::domain::entities::artist_context::{
    ArtistContext, ContactsCoverage, CoverageContext, CreativeSummary, EngagementMetrics,
    GraphNeighborhood, SceneContext, SceneSignal, SceneTrend, UniquenessSignals,
};

pub const ARTIST: &str = "nova-lake";

pub fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

pub fn empty_context() -> ArtistContext {
    ArtistContext::empty(ARTIST, as_of())
}

pub fn scene(slug: &str, pulse: Option<f64>, trend: SceneTrend) -> SceneSignal {
    SceneSignal {
        slug: slug.to_string(),
        pulse,
        trend,
    }
}

pub fn scenes(signals: Vec<SceneSignal>) -> SceneContext {
    SceneContext {
        scenes: signals,
        scene_fit_score: None,
        opportunity_score: None,
    }
}

pub fn coverage(total_contacts: u32, open_rate: Option<f64>, reply_rate: Option<f64>) -> CoverageContext {
    CoverageContext {
        contacts_coverage: Some(ContactsCoverage { total_contacts }),
        engagement_metrics: Some(EngagementMetrics {
            open_rate,
            reply_rate,
        }),
        campaigns: Vec::new(),
    }
}

pub fn graph(playlists: usize, blogs: usize, connectivity_score: Option<f64>) -> GraphNeighborhood {
    GraphNeighborhood {
        playlists: (0..playlists).map(|i| format!("playlist-{}", i)).collect(),
        blogs: (0..blogs).map(|i| format!("blog-{}", i)).collect(),
        connectivity_score,
    }
}

pub fn creative(
    genre_distance: Option<f64>,
    scene_distance: Option<f64>,
    innovation_score: Option<f64>,
    consistency_score: Option<f64>,
) -> CreativeSummary {
    CreativeSummary {
        uniqueness_signals: Some(UniquenessSignals {
            genre_distance,
            scene_distance,
            innovation_score,
        }),
        consistency_score,
    }
}

pub fn context(
    coverage: Option<CoverageContext>,
    graph: Option<GraphNeighborhood>,
    scenes: Option<SceneContext>,
    creative: Option<CreativeSummary>,
) -> ArtistContext {
    ArtistContext::assemble(ARTIST, as_of(), coverage, graph, scenes, creative)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
