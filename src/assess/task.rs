use super::patterns::discourse_groups;
use super::text::TextStats;
use crate::types::scoring::Score;

const BASELINE: i64 = 50;
const PARAGRAPH_BONUS: i64 = 10;
const MAX_DISCOURSE_BONUS: i64 = 20;

/// Total discourse-marker matches across the five marker groups.
pub fn discourse_marker_count(text: &str) -> u32 {
    discourse_groups()
        .iter()
        .map(|regex| regex.find_iter(text).count() as u32)
        .sum()
}

/// Length, paragraphing and discourse-marker use as a proxy for whether the
/// writing task was addressed.
pub fn task_achievement_score(
    stats: &TextStats,
    discourse_markers: u32,
    multiplier: u32,
    floor: Score,
) -> Score {
    let word_count = stats.word_count();
    let mut score = BASELINE;
    if word_count < 50 {
        score = (score - 20).max(30);
    } else if word_count < 100 {
        score = (score - 10).max(40);
    } else if word_count > 250 {
        score = (score + 10).min(70);
    }

    if stats.paragraph_count > 1 {
        score += PARAGRAPH_BONUS;
    }

    score += (i64::from(discourse_markers) * i64::from(multiplier)).min(MAX_DISCOURSE_BONUS);
    score.clamp(i64::from(floor), 100) as Score
}
