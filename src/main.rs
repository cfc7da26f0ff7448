mod export;
mod load;
mod models;
mod rank;
mod render;
mod schema;
mod view;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use itertools::Itertools;
use tracing::{debug, info};

use crate::view::TopicView;

/// Global Empathy News - perspective gap dashboard generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the precomputed analysis document
    #[arg(short, long, default_value = "output/latest_analysis.json")]
    input: PathBuf,

    /// Output directory for generated files (default: "out")
    #[arg(short, long, default_value = "out")]
    output_dir: PathBuf,

    /// Number of topics shown on the landing view
    #[arg(short = 'n', long, default_value_t = 3)]
    top: usize,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();

    info!("Starting empathy_news_gap");

    let args = Args::parse();
    debug!(
        "Arguments - input={}, output_dir={}, top={}",
        args.input.display(),
        args.output_dir.display(),
        args.top
    );

    let start = std::time::Instant::now();

    // 1) load the precomputed analysis; a malformed document fails the
    //    whole render, never a partial page
    let doc = load::load_document(&args.input)?;

    // 2) rank and derive the landing-view cards (1-based ranks)
    let ranked = rank::top_topics(&doc, args.top);
    info!(
        "Topics ranked - selected={}, available={}",
        ranked.len(),
        doc.topics.len()
    );

    let cards: Vec<TopicView> = ranked
        .iter()
        .enumerate()
        .map(|(i, t)| view::topic_view(t, i + 1))
        .collect();

    // 3) render + persist
    let page_md = render::render_page_markdown(&doc, &cards);
    let report = render::render_report_text(&doc, &cards);
    export::write_outputs(&args.output_dir, &doc, &cards, &page_md, &report)?;
    info!("Output persisted - directory={}", args.output_dir.display());

    let high_gap: Vec<String> = doc
        .topics
        .iter()
        .filter(|t| t.gap_score >= 60.0)
        .map(|t| format!("{} ({}/100)", t.topic_name, t.gap_score))
        .collect();
    if !high_gap.is_empty() {
        info!("High gap topics (score >= 60): {}", high_gap.iter().join(", "));
    }

    info!(
        "Dashboard generation completed - duration={:.2}s, overall_gap_score={}, topics={}",
        start.elapsed().as_secs_f32(),
        doc.overall_gap_score,
        doc.topics.len()
    );
    Ok(())
}
