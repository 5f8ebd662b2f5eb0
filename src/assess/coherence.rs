use super::patterns::coherence_markers;
use crate::types::level::CefrLevel;
use crate::types::scoring::Score;

/// Per-pattern matches beyond this count are ignored.
pub const MAX_MATCHES_PER_PATTERN: usize = 5;
const BASELINE: f64 = 50.0;
const BAND_SCALE: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoherenceSignals {
    /// Capped match totals indexed by `CefrLevel::index`.
    pub band_totals: [u32; 6],
    pub score: Score,
}

impl CoherenceSignals {
    pub fn total(&self, level: CefrLevel) -> u32 {
        self.band_totals[level.index()]
    }

    pub fn total_matches(&self) -> u32 {
        self.band_totals.iter().sum()
    }
}

/// Matches every band's marker table against the raw text and turns the
/// weighted average band into a score. No markers leaves the baseline of 50.
pub fn coherence_signals(text: &str) -> CoherenceSignals {
    let mut band_totals = [0u32; 6];
    for table in coherence_markers() {
        band_totals[table.level.index()] = table
            .regexes
            .iter()
            .map(|regex| regex.find_iter(text).take(MAX_MATCHES_PER_PATTERN).count() as u32)
            .sum();
    }

    let total: u32 = band_totals.iter().sum();
    let weighted: u32 = CefrLevel::ALL
        .iter()
        .map(|level| band_totals[level.index()] * level.weight())
        .sum();
    let base = if total == 0 {
        0.0
    } else {
        f64::from(weighted) / f64::from(total) * BAND_SCALE
    };
    let score = ((BASELINE + base).floor() as Score).min(100);

    CoherenceSignals { band_totals, score }
}
