// src/render.rs
use itertools::Itertools;

use crate::models::{AnalysisDocument, Source};
use crate::view::TopicView;

/// Markdown rendering of the landing view: header, overall score,
/// ranked topic cards, and the static source-identity section.
pub fn render_page_markdown(doc: &AnalysisDocument, cards: &[TopicView]) -> String {
    let mut md = String::new();
    md.push_str("# Global Empathy News\n\n");
    md.push_str("Analyzing perspective gaps across international news sources\n\n");

    md.push_str("## Overall Gap Score\n");
    md.push_str(&format!(
        "**{}** out of 100 — last updated: {}\n\n",
        doc.overall_gap_score, doc.analysis_date
    ));
    md.push_str(&format!("{}\n\n", doc.summary.trim()));

    md.push_str("## Top Perspective Gaps\n\n");
    md.push_str("Topics with the highest divergence in media coverage\n\n");
    for card in cards {
        md.push_str(&format!(
            "### {} {} — {}/100 ({})\n\n",
            card.rank_label, card.topic_name, card.gap_score, card.gap_level
        ));
        if !card.sources_covering.is_empty() {
            md.push_str(&format!(
                "Covered by: {}\n\n",
                card.sources_covering.iter().join(" · ")
            ));
        }
        md.push_str(&format!("{}\n\n", card.key_differences.trim()));

        if !card.perspectives.is_empty() {
            md.push_str("Perspectives:\n");
            for p in &card.perspectives {
                md.push_str(&format!("- **{}** — {}\n", p.source.label(), p.summary));
            }
            md.push('\n');
        }

        if let Some(articles) = &card.related_articles {
            md.push_str("Related articles:\n");
            for a in articles {
                md.push_str(&format!("- {}: [{}]({})\n", a.source, a.title, a.link));
            }
            md.push('\n');
        }
    }

    md.push_str("## News Sources\n");
    for source in Source::ALL {
        md.push_str(&format!("- **{}** — {}\n", source.label(), source.region()));
    }

    md
}

/// Plain-text report, the printable counterpart of the landing view.
pub fn render_report_text(doc: &AnalysisDocument, cards: &[TopicView]) -> String {
    let bar = "=".repeat(70);
    let rule = "-".repeat(70);

    let mut out = String::new();
    out.push_str(&format!("{}\n", bar));
    out.push_str("GLOBAL EMPATHY NEWS - Perspective Gap Report\n");
    out.push_str(&format!("{}\n", bar));
    out.push_str(&format!("\nAnalysis Date: {}\n", doc.analysis_date));
    out.push_str(&format!("Overall Gap Score: {}/100\n", doc.overall_gap_score));
    out.push_str(&format!("\nSummary: {}\n", doc.summary.trim()));

    out.push_str(&format!("\n{}\n", rule));
    out.push_str("TOPIC ANALYSIS\n");
    out.push_str(&format!("{}\n", rule));

    for card in cards {
        out.push_str(&format!("\n{}. {}\n", card.rank_label, card.topic_name));
        out.push_str(&format!(
            "   Gap Score: {}/100 ({})\n",
            card.gap_score, card.gap_level
        ));
        out.push_str(&format!(
            "   Sources: {}\n",
            card.sources_covering.iter().join(", ")
        ));
        out.push_str("\n   Key Differences:\n");
        out.push_str(&format!("   {}\n", card.key_differences.trim()));

        if !card.perspectives.is_empty() {
            out.push_str("\n   Perspectives:\n");
            for p in &card.perspectives {
                out.push_str(&format!("   - {}: {}\n", p.source.label(), p.summary));
            }
        }

        if let Some(articles) = &card.related_articles {
            out.push_str("\n   Related Articles:\n");
            for a in articles {
                out.push_str(&format!("   - {}: {} <{}>\n", a.source, a.title, a.link));
            }
        }
    }

    out.push_str(&format!("\n{}\n", bar));
    out.push_str("END OF REPORT\n");
    out.push_str(&format!("{}\n", bar));

    out
}
