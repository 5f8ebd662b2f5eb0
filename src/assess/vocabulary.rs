use super::text::TextStats;
use crate::types::scoring::Score;

/// `(word-count upper bound, cap, scale factor)`; the last band is open-ended.
const BANDS: [(usize, Score, f64); 4] = [
    (30, 55, 80.0),
    (50, 65, 90.0),
    (100, 75, 100.0),
    (usize::MAX, 95, 110.0),
];

/// Lexical diversity scaled and capped by text length, so short texts with a
/// high unique-word ratio cannot score as advanced.
pub fn vocabulary_score(stats: &TextStats) -> Score {
    let word_count = stats.word_count();
    let (_, cap, factor) = BANDS
        .iter()
        .copied()
        .find(|(limit, _, _)| word_count < *limit)
        .unwrap_or(BANDS[BANDS.len() - 1]);
    let scaled = (stats.lexical_diversity() * factor).floor() as Score;
    scaled.min(cap)
}
