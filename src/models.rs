use serde::{Deserialize, Serialize};

/// The three outlets the analyzer compares. The set is closed: the
/// perspective matrix always carries exactly these keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Source {
    #[serde(rename = "CNN")]
    Cnn,
    #[serde(rename = "Al Jazeera")]
    AlJazeera,
    #[serde(rename = "Global Times")]
    GlobalTimes,
}

impl Source {
    /// Fixed display order for perspective listings.
    pub const ALL: [Source; 3] = [Source::Cnn, Source::AlJazeera, Source::GlobalTimes];

    pub fn label(self) -> &'static str {
        match self {
            Source::Cnn => "CNN",
            Source::AlJazeera => "Al Jazeera",
            Source::GlobalTimes => "Global Times",
        }
    }

    pub fn region(self) -> &'static str {
        match self {
            Source::Cnn => "Western (US)",
            Source::AlJazeera => "Middle East (Qatar)",
            Source::GlobalTimes => "East Asia (China)",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisDocument {
    pub analysis_date: String,  // opaque display timestamp, e.g. "2026-08-07"
    pub overall_gap_score: f32, // [0.0, 100.0]
    pub summary: String,
    pub topics: Vec<Topic>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Topic {
    pub topic_name: String, // unique within a document
    pub gap_score: f32,     // [0.0, 100.0], higher = more divergence
    pub gap_level: String,  // independently authored label, not derived from gap_score
    pub sources_covering: Vec<String>,
    pub perspectives: PerspectiveSummary,
    pub key_differences: String,
    pub related_articles: Vec<RelatedArticle>,
}

/// Per-outlet coverage summaries. `None` means the outlet did not cover
/// the topic (the wire sentinel "Not covered", translated at load time).
#[derive(Debug, Clone, Default, Serialize)]
pub struct PerspectiveSummary {
    pub cnn: Option<String>,
    pub al_jazeera: Option<String>,
    pub global_times: Option<String>,
}

impl PerspectiveSummary {
    pub fn get(&self, source: Source) -> Option<&str> {
        match source {
            Source::Cnn => self.cnn.as_deref(),
            Source::AlJazeera => self.al_jazeera.as_deref(),
            Source::GlobalTimes => self.global_times.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedArticle {
    pub source: String, // outlet name, not constrained to the fixed three
    pub title: String,
    pub link: String,
}
