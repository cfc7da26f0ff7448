use serde::Serialize;

use crate::models::{RelatedArticle, Source, Topic};

/// Visual emphasis class for a topic card, derived from the analyzer's
/// gap level label. Total over arbitrary input: unrecognized labels fall
/// through to `Default` rather than failing the render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GapTier {
    Extreme,
    High,
    Moderate,
    Default,
}

impl GapTier {
    /// Case-insensitive mapping from the wire label.
    pub fn from_level(level: &str) -> GapTier {
        match level.to_lowercase().as_str() {
            "extreme" => GapTier::Extreme,
            "high" => GapTier::High,
            "moderate" => GapTier::Moderate,
            _ => GapTier::Default,
        }
    }
}

/// Zero-padded two-digit rank label ("01", "12"). Ranks past 99 widen
/// instead of truncating.
pub fn rank_label(rank: usize) -> String {
    format!("{rank:02}")
}

#[derive(Debug, Clone, Serialize)]
pub struct PerspectiveView {
    pub source: Source,
    pub summary: String,
}

/// Everything the presentation layer needs for one topic card.
#[derive(Debug, Clone, Serialize)]
pub struct TopicView {
    pub rank_label: String,
    pub tier: GapTier,
    pub topic_name: String,
    pub gap_score: f32,
    pub gap_level: String,
    pub sources_covering: Vec<String>,
    pub perspectives: Vec<PerspectiveView>,
    pub key_differences: String,
    /// `None` means the related-articles section is omitted entirely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_articles: Option<Vec<RelatedArticle>>,
}

/// Derive the display card for `topic` at 1-based `rank`. Total over
/// well-formed topics; there is no error path here.
pub fn topic_view(topic: &Topic, rank: usize) -> TopicView {
    let perspectives = Source::ALL
        .iter()
        .filter_map(|&source| {
            topic.perspectives.get(source).map(|summary| PerspectiveView {
                source,
                summary: summary.to_string(),
            })
        })
        .collect();

    let related_articles = if topic.related_articles.is_empty() {
        None
    } else {
        Some(topic.related_articles.clone())
    };

    TopicView {
        rank_label: rank_label(rank),
        tier: GapTier::from_level(&topic.gap_level),
        topic_name: topic.topic_name.clone(),
        gap_score: topic.gap_score,
        gap_level: topic.gap_level.clone(),
        sources_covering: topic.sources_covering.clone(),
        perspectives,
        key_differences: topic.key_differences.clone(),
        related_articles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PerspectiveSummary;

    fn topic_with(perspectives: PerspectiveSummary, related: Vec<RelatedArticle>) -> Topic {
        Topic {
            topic_name: "Border dispute".to_string(),
            gap_score: 81.0,
            gap_level: "Extreme".to_string(),
            sources_covering: vec!["CNN".to_string(), "Global Times".to_string()],
            perspectives,
            key_differences: "Opposing narratives on sovereignty.".to_string(),
            related_articles: related,
        }
    }

    #[test]
    fn rank_labels_are_zero_padded_never_truncated() {
        assert_eq!(rank_label(1), "01");
        assert_eq!(rank_label(9), "09");
        assert_eq!(rank_label(10), "10");
        assert_eq!(rank_label(100), "100");
    }

    #[test]
    fn tier_mapping_is_case_insensitive() {
        assert_eq!(GapTier::from_level("Extreme"), GapTier::Extreme);
        assert_eq!(GapTier::from_level("high"), GapTier::High);
        assert_eq!(GapTier::from_level("MODERATE"), GapTier::Moderate);
    }

    #[test]
    fn unrecognized_levels_fall_through_to_default() {
        assert_eq!(GapTier::from_level("low"), GapTier::Default);
        assert_eq!(GapTier::from_level("unknown"), GapTier::Default);
        assert_eq!(GapTier::from_level(""), GapTier::Default);
    }

    #[test]
    fn perspectives_keep_fixed_source_order() {
        let t = topic_with(
            PerspectiveSummary {
                cnn: Some("a".into()),
                al_jazeera: Some("b".into()),
                global_times: Some("c".into()),
            },
            Vec::new(),
        );
        let view = topic_view(&t, 1);
        let sources: Vec<Source> = view.perspectives.iter().map(|p| p.source).collect();
        assert_eq!(
            sources,
            [Source::Cnn, Source::AlJazeera, Source::GlobalTimes]
        );
    }

    #[test]
    fn all_not_covered_yields_empty_perspectives() {
        let t = topic_with(PerspectiveSummary::default(), Vec::new());
        let view = topic_view(&t, 1);
        assert!(view.perspectives.is_empty());
    }

    #[test]
    fn absent_outlets_are_filtered_out() {
        let t = topic_with(
            PerspectiveSummary {
                cnn: None,
                al_jazeera: Some("only voice".into()),
                global_times: None,
            },
            Vec::new(),
        );
        let view = topic_view(&t, 2);
        assert_eq!(view.perspectives.len(), 1);
        assert_eq!(view.perspectives[0].source, Source::AlJazeera);
        assert_eq!(view.perspectives[0].summary, "only voice");
    }

    #[test]
    fn empty_related_articles_signal_omission() {
        let t = topic_with(PerspectiveSummary::default(), Vec::new());
        assert!(topic_view(&t, 1).related_articles.is_none());
    }

    #[test]
    fn related_articles_pass_through_in_order() {
        let articles = vec![
            RelatedArticle {
                source: "CNN".to_string(),
                title: "First".to_string(),
                link: "https://example.com/1".to_string(),
            },
            RelatedArticle {
                source: "Reuters".to_string(),
                title: "Second".to_string(),
                link: "https://example.com/2".to_string(),
            },
        ];
        let t = topic_with(PerspectiveSummary::default(), articles);
        let view = topic_view(&t, 1);
        let titles: Vec<&str> = view
            .related_articles
            .as_deref()
            .unwrap()
            .iter()
            .map(|a| a.title.as_str())
            .collect();
        assert_eq!(titles, ["First", "Second"]);
    }

    #[test]
    fn tier_serializes_as_lowercase_class() {
        let json = serde_json::to_string(&GapTier::Extreme).unwrap();
        assert_eq!(json, "\"extreme\"");
    }
}
