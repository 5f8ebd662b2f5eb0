use super::text::TextStats;

/// Heuristic confidence in `[0, 1]`: longer texts with more sentences and more
/// recognised markers give the scorer more to work with.
pub fn confidence_level(stats: &TextStats, marker_matches: u32) -> f64 {
    let length = (stats.word_count() as f64 / 200.0).min(1.0);
    let sentences = (stats.sentence_count as f64 / 10.0).min(1.0);
    let markers = (f64::from(marker_matches) / 20.0).min(1.0);
    let raw = 0.2 + 0.4 * length + 0.2 * sentences + 0.2 * markers;
    ((raw * 100.0).round() / 100.0).clamp(0.0, 1.0)
}
