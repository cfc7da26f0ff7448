use std::collections::HashSet;
use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::models::{AnalysisDocument, PerspectiveSummary, Topic};
use crate::schema::{WireDocument, WirePerspectives, WireTopic, NOT_COVERED};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read analysis document at {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed analysis document: {0}")]
    Malformed(String),
}

/// Read and validate the analysis document at `path`. Fails once; the
/// document is static content, so a failed load is not retried.
pub fn load_document(path: &Path) -> Result<AnalysisDocument, LoadError> {
    let start = std::time::Instant::now();
    debug!("Loading analysis document - path={}", path.display());

    let raw = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let doc = parse_document(&raw)?;

    info!(
        "Document loaded - topics={}, overall_gap_score={}, duration={:.3}s",
        doc.topics.len(),
        doc.overall_gap_score,
        start.elapsed().as_secs_f32()
    );
    Ok(doc)
}

/// Parse raw JSON into the domain model, enforcing the schema invariants
/// the transform layer relies on: scores in [0,100], unique topic names,
/// and the full three-key perspective matrix (checked by serde via the
/// wire struct).
pub fn parse_document(raw: &str) -> Result<AnalysisDocument, LoadError> {
    let wire: WireDocument =
        serde_json::from_str(raw).map_err(|e| LoadError::Malformed(e.to_string()))?;

    check_score("overall_gap_score", wire.overall_gap_score)?;

    let mut seen = HashSet::new();
    for t in &wire.topics {
        check_score(&format!("gap_score of \"{}\"", t.topic_name), t.gap_score)?;
        if !seen.insert(t.topic_name.clone()) {
            return Err(LoadError::Malformed(format!(
                "duplicate topic_name \"{}\"",
                t.topic_name
            )));
        }
    }

    Ok(AnalysisDocument {
        analysis_date: wire.analysis_date,
        overall_gap_score: wire.overall_gap_score,
        summary: wire.summary,
        topics: wire.topics.into_iter().map(topic_from_wire).collect(),
    })
}

fn topic_from_wire(t: WireTopic) -> Topic {
    Topic {
        topic_name: t.topic_name,
        gap_score: t.gap_score,
        gap_level: t.gap_level,
        sources_covering: t.sources_covering,
        perspectives: perspectives_from_wire(t.perspective_summary),
        key_differences: t.key_differences,
        related_articles: t.related_articles,
    }
}

fn perspectives_from_wire(p: WirePerspectives) -> PerspectiveSummary {
    PerspectiveSummary {
        cnn: coverage(p.cnn),
        al_jazeera: coverage(p.al_jazeera),
        global_times: coverage(p.global_times),
    }
}

/// Sentinel-to-option translation at the wire boundary.
fn coverage(summary: String) -> Option<String> {
    if summary == NOT_COVERED {
        None
    } else {
        Some(summary)
    }
}

fn check_score(field: &str, value: f32) -> Result<(), LoadError> {
    // NaN fails the range check too.
    if !(0.0..=100.0).contains(&value) {
        return Err(LoadError::Malformed(format!(
            "{} out of range: {} (expected 0-100)",
            field, value
        )));
    }
    Ok(())
}
