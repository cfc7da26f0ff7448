use serde::Deserialize;

use crate::models::RelatedArticle;

/// Wire sentinel meaning an outlet did not cover a topic. Compared
/// exactly; the analyzer emits the literal string.
pub const NOT_COVERED: &str = "Not covered";

#[derive(Debug, Deserialize)]
pub struct WireDocument {
    pub analysis_date: String,
    pub overall_gap_score: f32,
    pub summary: String,
    pub topics: Vec<WireTopic>,
}

#[derive(Debug, Deserialize)]
pub struct WireTopic {
    pub topic_name: String,
    pub gap_score: f32,
    pub gap_level: String,
    pub sources_covering: Vec<String>,
    pub perspective_summary: WirePerspectives,
    pub key_differences: String,
    pub related_articles: Vec<RelatedArticle>,
}

/// All three keys are required on the wire; "Not covered" marks absence,
/// never a missing key.
#[derive(Debug, Deserialize)]
pub struct WirePerspectives {
    #[serde(rename = "CNN")]
    pub cnn: String,
    #[serde(rename = "Al Jazeera")]
    pub al_jazeera: String,
    #[serde(rename = "Global Times")]
    pub global_times: String,
}
