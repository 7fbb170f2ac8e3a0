use crate::domain::entities::score_snapshot::ScoreDimensions;

/// Composite score at or above which potential is "high"
pub const HIGH_POTENTIAL_THRESHOLD: f64 = 0.75;
/// Composite score at or above which potential is "moderate"
pub const MODERATE_POTENTIAL_THRESHOLD: f64 = 0.5;
/// Dimension score at or above which the dimension is listed as a strength
pub const STRENGTH_THRESHOLD: f64 = 0.7;
/// Risk score at or above which a warning is emitted
pub const RISK_WARNING_THRESHOLD: f64 = 0.6;

/// A rule maps (dimensions, composite) to an optional sentence
pub type ExplanationRule = fn(&ScoreDimensions, f64) -> Option<String>;

/// Non-risk dimensions with their strength labels, in explanation order
fn labelled_dimensions(dimensions: &ScoreDimensions) -> [(&'static str, f64); 6] {
    [
        ("strong coverage", dimensions.breakout),
        ("high momentum", dimensions.momentum),
        ("creative uniqueness", dimensions.creative_uniqueness),
        ("scene alignment", dimensions.scene_alignment),
        ("engagement quality", dimensions.engagement_quality),
        ("campaign efficiency", dimensions.campaign_efficiency),
    ]
}

fn potential_rule(_dimensions: &ScoreDimensions, composite: f64) -> Option<String> {
    let sentence = if composite >= HIGH_POTENTIAL_THRESHOLD {
        "High breakout potential."
    } else if composite >= MODERATE_POTENTIAL_THRESHOLD {
        "Moderate breakout potential."
    } else {
        "Early-stage artist."
    };
    Some(sentence.to_string())
}

fn strengths_rule(dimensions: &ScoreDimensions, _composite: f64) -> Option<String> {
    let strengths: Vec<&str> = labelled_dimensions(dimensions)
        .into_iter()
        .filter(|(_, value)| *value >= STRENGTH_THRESHOLD)
        .map(|(label, _)| label)
        .collect();

    if strengths.is_empty() {
        None
    } else {
        Some(format!("Strengths: {}.", strengths.join(", ")))
    }
}

fn risk_rule(dimensions: &ScoreDimensions, _composite: f64) -> Option<String> {
    (dimensions.risk >= RISK_WARNING_THRESHOLD)
        .then(|| "Risk factors: volatility or low diversity.".to_string())
}

/// Builds the human-readable rationale stored with each snapshot
///
/// Rules run in order and their sentences are joined with a space.
#[derive(Clone)]
pub struct ExplanationGenerator {
    rules: Vec<ExplanationRule>,
}

impl Default for ExplanationGenerator {
    fn default() -> Self {
        ExplanationGenerator {
            rules: vec![potential_rule, strengths_rule, risk_rule],
        }
    }
}

impl ExplanationGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule evaluated after the existing ones
    pub fn with_rule(mut self, rule: ExplanationRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn explain(&self, dimensions: &ScoreDimensions, composite: f64) -> String {
        self.rules
            .iter()
            .filter_map(|rule| rule(dimensions, composite))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
