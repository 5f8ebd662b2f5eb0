use crate::types::level::CefrLevel;
use crate::types::scoring::{Score, Thresholds};
use tracing::debug;

const BASIC_VOCABULARY_LIMIT: f64 = 0.6;

/// Auxiliary signals consulted by the downgrade corrections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectionSignals {
    pub word_count: usize,
    pub a1_markers: u32,
    pub a2_markers: u32,
    pub b1_markers: u32,
    pub basic_word_fraction: f64,
}

pub fn assign_level(score: Score, thresholds: &Thresholds) -> CefrLevel {
    thresholds.level_for(score)
}

/// Short texts are systematically overestimated by the weighted score. These
/// rules run in order and can only lower the level.
pub fn apply_corrections(level: CefrLevel, signals: &CorrectionSignals) -> CefrLevel {
    let words = signals.word_count;
    let mut corrected = level;

    if words < 70 && corrected >= CefrLevel::C1 {
        corrected = if words < 40 {
            CefrLevel::B1
        } else {
            CefrLevel::B2
        };
        log_downgrade("short_text_advanced", level, corrected, words);
    }

    if words < 50 && corrected == CefrLevel::B2 {
        log_downgrade("short_text_b2", corrected, CefrLevel::B1, words);
        corrected = CefrLevel::B1;
    }

    if words < 30 && corrected == CefrLevel::B1 {
        log_downgrade("short_text_b1", corrected, CefrLevel::A2, words);
        corrected = CefrLevel::A2;
    }

    if words < 30
        && corrected > CefrLevel::A1
        && signals.a1_markers > signals.a2_markers + signals.b1_markers
    {
        log_downgrade("beginner_markers", corrected, CefrLevel::A1, words);
        corrected = CefrLevel::A1;
    }

    if words < 50
        && signals.basic_word_fraction > BASIC_VOCABULARY_LIMIT
        && matches!(corrected, CefrLevel::A2 | CefrLevel::B1)
    {
        log_downgrade("basic_vocabulary", corrected, CefrLevel::A1, words);
        corrected = CefrLevel::A1;
    }

    debug_assert!(corrected <= level);
    corrected
}

fn log_downgrade(rule: &str, from: CefrLevel, to: CefrLevel, word_count: usize) {
    debug!(rule, %from, %to, word_count, "level downgraded");
}
