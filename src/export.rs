// src/export.rs
use std::{fs, path::Path};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use tracing::debug;

use crate::models::{AnalysisDocument, Source};
use crate::view::TopicView;

/// Static identity entry shown unconditionally by the page, independent
/// of the document contents.
#[derive(Debug, Serialize)]
pub struct SourceIdentity {
    pub name: &'static str,
    pub region: &'static str,
}

/// The full view model a front-end needs to render the landing page.
#[derive(Debug, Serialize)]
pub struct PageModel<'a> {
    pub analysis_date: &'a str,
    pub overall_gap_score: f32,
    pub summary: &'a str,
    pub cards: &'a [TopicView],
    pub sources: Vec<SourceIdentity>,
}

pub fn page_model<'a>(doc: &'a AnalysisDocument, cards: &'a [TopicView]) -> PageModel<'a> {
    PageModel {
        analysis_date: &doc.analysis_date,
        overall_gap_score: doc.overall_gap_score,
        summary: &doc.summary,
        cards,
        sources: Source::ALL
            .iter()
            .map(|&s| SourceIdentity {
                name: s.label(),
                region: s.region(),
            })
            .collect(),
    }
}

/// Persist the rendered artifacts: timestamped copies for history plus
/// `latest_*` copies for easy access.
pub fn write_outputs(
    out_dir: &Path,
    doc: &AnalysisDocument,
    cards: &[TopicView],
    page_md: &str,
    report: &str,
) -> Result<()> {
    fs::create_dir_all(out_dir).with_context(|| format!("create {:?}", out_dir))?;

    let stamp = Utc::now().format("%Y%m%d_%H%M%S").to_string();
    let page = page_model(doc, cards);

    write_json(out_dir.join(format!("page_{stamp}.json")), &page)?;
    write_json(out_dir.join("latest_page.json"), &page)?;
    debug!("Wrote page view model - stamp={}", stamp);

    fs::write(out_dir.join(format!("page_{stamp}.md")), page_md)?;
    fs::write(out_dir.join("latest_page.md"), page_md)?;
    debug!("Wrote page markdown");

    fs::write(out_dir.join(format!("report_{stamp}.txt")), report)?;
    fs::write(out_dir.join("latest_report.txt"), report)?;
    debug!("Wrote text report");

    Ok(())
}

fn write_json<P: AsRef<Path>, T: ?Sized + Serialize>(path: P, value: &T) -> Result<()> {
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .map(|_| ())
        .map_err(|e| e.into())
}
