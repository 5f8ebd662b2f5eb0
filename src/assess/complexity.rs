use super::text::TextStats;
use crate::types::scoring::Score;

/// Piecewise-linear map from average sentence length to `[0, 100]`.
/// Each band starts at the previous band's ceiling.
pub fn complexity_score(stats: &TextStats) -> Score {
    score_for_sentence_length(stats.avg_words_per_sentence())
}

pub fn score_for_sentence_length(avg: f64) -> Score {
    let (cap, raw) = if avg < 4.0 {
        (40, avg * 9.0)
    } else if avg < 6.0 {
        (50, 40.0 + (avg - 4.0) * 5.0)
    } else if avg < 8.0 {
        (60, 50.0 + (avg - 6.0) * 5.0)
    } else if avg < 12.0 {
        (75, 60.0 + (avg - 8.0) * 3.75)
    } else if avg < 16.0 {
        (85, 75.0 + (avg - 12.0) * 2.5)
    } else {
        (100, 85.0 + (avg - 16.0) * 1.5)
    };
    (raw.floor() as Score).min(cap)
}
