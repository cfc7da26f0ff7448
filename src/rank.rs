use crate::models::{AnalysisDocument, Topic};

/// Select the `n` topics with the highest gap score, highest first.
///
/// The sort is stable: topics with equal scores keep their relative
/// order from the document. Ties are expected in real analyses, so the
/// landing view must be reproducible across runs. The document itself
/// is never reordered.
pub fn top_topics(doc: &AnalysisDocument, n: usize) -> Vec<&Topic> {
    let mut ranked: Vec<&Topic> = doc.topics.iter().collect();
    ranked.sort_by(|a, b| b.gap_score.total_cmp(&a.gap_score));
    ranked.truncate(n);
    ranked
}
