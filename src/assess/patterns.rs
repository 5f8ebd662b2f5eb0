//! Heuristic pattern tables.
//!
//! Every table is plain data; the regexes are compiled case-insensitively on
//! first use and shared for the lifetime of the process.

use crate::types::level::CefrLevel;
use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

/// Connectors and structures typical of one CEFR band.
#[derive(Debug)]
pub struct MarkerTable {
    pub level: CefrLevel,
    pub patterns: &'static [&'static str],
}

#[derive(Debug)]
pub struct GrammarRule {
    pub id: &'static str,
    pub pattern: &'static str,
    pub level: CefrLevel,
    pub severity: u8,
    pub description: &'static str,
    /// Drops a match when this also matches the match widened back to the
    /// start of the preceding word.
    pub exception: Option<&'static str>,
}

#[derive(Debug)]
pub struct DiscourseGroup {
    pub id: &'static str,
    pub pattern: &'static str,
}

pub const COHERENCE_TABLES: &[MarkerTable] = &[
    MarkerTable {
        level: CefrLevel::A1,
        patterns: &[
            r"\b(and|but|or)\b",
            r"\b(is|are|am)\b",
            r"\bcan\b",
            r"\b(i|my) (like|have|am)\b",
            r"\bvery\b",
        ],
    },
    MarkerTable {
        level: CefrLevel::A2,
        patterns: &[
            r"\bbecause\b",
            r"\b(then|after that|first|next)\b",
            r"\bso\b",
            r"\b(when|if)\b",
            r"\balso\b",
        ],
    },
    MarkerTable {
        level: CefrLevel::B1,
        patterns: &[
            r"\b(however|although|though)\b",
            r"\b(for example|for instance)\b",
            r"\b(in my opinion|i think|i believe)\b",
            r"\b(finally|in conclusion|to sum up)\b",
            r"\b(while|whereas|unless)\b",
        ],
    },
    MarkerTable {
        level: CefrLevel::B2,
        patterns: &[
            r"\b(moreover|furthermore|in addition)\b",
            r"\b(on the other hand|in contrast)\b",
            r"\b(therefore|consequently|as a result)\b",
            r"\b(despite|in spite of)\b",
            r"\b(which|whom|whose)\b",
        ],
    },
    MarkerTable {
        level: CefrLevel::C1,
        patterns: &[
            r"\b(nevertheless|nonetheless)\b",
            r"\b(whereby|thereby|hence)\b",
            r"\b(it is worth noting|it could be argued|arguably)\b",
            r"\b(having said that|be that as it may)\b",
            r"\b(inasmuch as|insofar as)\b",
        ],
    },
    MarkerTable {
        level: CefrLevel::C2,
        patterns: &[
            r"\b(albeit|notwithstanding)\b",
            r"\b(hitherto|henceforth|thereof)\b",
            r"\b(be it|were it not for|had it not been)\b",
            r"\b(ostensibly|paradoxically|conversely)\b",
            r"\bnot only\b.{1,60}?\bbut also\b",
        ],
    },
];

pub const GRAMMAR_RULES: &[GrammarRule] = &[
    GrammarRule {
        id: "grammar.agreement.plural_subject",
        pattern: r"\b(they|we) (is|was|has)\b",
        level: CefrLevel::A1,
        severity: 5,
        description: "Subject-verb agreement: plural subject with a singular verb",
        exception: None,
    },
    GrammarRule {
        id: "grammar.agreement.third_person",
        pattern: r"\b(he|she|it) (are|have|do|don't)\b",
        level: CefrLevel::A1,
        severity: 5,
        description: "Subject-verb agreement: third-person singular subject with a plural verb",
        exception: Some(r"^(do|does|did|can|could|will|would|shall|should|may|might|must)\s"),
    },
    GrammarRule {
        id: "grammar.agreement.first_person",
        pattern: r"\bi (is|are|has|goes|does)\b",
        level: CefrLevel::A1,
        severity: 5,
        description: "Subject-verb agreement: 'I' with a third-person verb form",
        exception: None,
    },
    GrammarRule {
        id: "grammar.article.an",
        pattern: r"\ba [aeio]\w*",
        level: CefrLevel::A1,
        severity: 3,
        description: "Article: use 'an' before a vowel sound",
        exception: Some(
            r"\ba (is|are|was|were|and|or|as|at|if|in|into|it|its|of|on|also|only)$",
        ),
    },
    GrammarRule {
        id: "grammar.tense.past_marker",
        pattern: r"\b(yesterday|last (week|year|night|month)),? (i|we|they|he|she) (go|eat|see|buy|come|do|have)\b",
        level: CefrLevel::A2,
        severity: 4,
        description: "Tense: present form used with a past time marker",
        exception: None,
    },
    GrammarRule {
        id: "grammar.auxiliary.inflected_verb",
        pattern: r"\b(did|does|do) (not )?(went|ate|saw|came|goes|does|did)\b",
        level: CefrLevel::A2,
        severity: 4,
        description: "Auxiliary 'do' followed by an inflected verb",
        exception: None,
    },
    GrammarRule {
        id: "grammar.comparative.double",
        pattern: r"\bmore (better|worse|easier|bigger|faster|smaller)\b",
        level: CefrLevel::A2,
        severity: 3,
        description: "Double comparative",
        exception: None,
    },
    GrammarRule {
        id: "grammar.verb.be_agree",
        pattern: r"\b(i|we|they|you) (am|are) (agree|disagree)\b",
        level: CefrLevel::B1,
        severity: 4,
        description: "'agree' is a verb and does not take 'be'",
        exception: None,
    },
    GrammarRule {
        id: "grammar.preposition.depend_of",
        pattern: r"\b(depend|depends|depended|depending) of\b",
        level: CefrLevel::B1,
        severity: 3,
        description: "Preposition: 'depend on', not 'depend of'",
        exception: None,
    },
    GrammarRule {
        id: "grammar.preposition.discuss_about",
        pattern: r"\b(discuss|discussed|discusses|discussing) about\b",
        level: CefrLevel::B1,
        severity: 3,
        description: "'discuss' takes a direct object, not 'about'",
        exception: None,
    },
    GrammarRule {
        id: "grammar.noun.uncountable_plural",
        pattern: r"\b(informations|advices|furnitures|equipments|researches|knowledges)\b",
        level: CefrLevel::B2,
        severity: 3,
        description: "Uncountable noun used in the plural",
        exception: None,
    },
    GrammarRule {
        id: "grammar.conditional.will",
        pattern: r"\bif (i|you|he|she|it|we|they) will\b",
        level: CefrLevel::B2,
        severity: 4,
        description: "Conditional: 'will' inside a first-conditional if-clause",
        exception: None,
    },
    GrammarRule {
        id: "grammar.modal.of",
        pattern: r"\b(could|should|would|must|might) of\b",
        level: CefrLevel::C1,
        severity: 3,
        description: "'of' written instead of 'have' after a modal verb",
        exception: None,
    },
    GrammarRule {
        id: "grammar.quantifier.less_countable",
        pattern: r"\bless (people|students|cars|books|things|problems)\b",
        level: CefrLevel::C1,
        severity: 3,
        description: "'less' used with a countable noun; use 'fewer'",
        exception: None,
    },
];

pub const DISCOURSE_GROUPS: &[DiscourseGroup] = &[
    DiscourseGroup {
        id: "introduction",
        pattern: r"\b(firstly|first of all|to begin with|in the first place)\b",
    },
    DiscourseGroup {
        id: "addition",
        pattern: r"\b(moreover|furthermore|in addition|additionally|also)\b",
    },
    DiscourseGroup {
        id: "contrast",
        pattern: r"\b(however|nevertheless|on the other hand|although|whereas)\b",
    },
    DiscourseGroup {
        id: "example",
        pattern: r"\b(for example|for instance|such as|namely)\b",
    },
    DiscourseGroup {
        id: "conclusion",
        pattern: r"\b(in conclusion|to conclude|to sum up|in summary|overall|therefore)\b",
    },
];

/// High-frequency beginner words used by the basic-vocabulary correction.
pub const BASIC_VOCABULARY: &[&str] = &[
    "a", "am", "and", "are", "big", "can", "cat", "day", "do", "dog", "eat", "family", "friend",
    "go", "good", "happy", "has", "have", "he", "her", "his", "home", "i", "in", "is", "it",
    "like", "me", "my", "nice", "not", "on", "our", "play", "school", "she", "small", "that",
    "the", "they", "this", "to", "very", "want", "we", "with", "you", "your",
];

pub struct CompiledMarkers {
    pub level: CefrLevel,
    pub regexes: Vec<Regex>,
}

pub struct CompiledRule {
    pub rule: &'static GrammarRule,
    pub regex: Regex,
    pub exception: Option<Regex>,
}

static MARKERS: OnceLock<Vec<CompiledMarkers>> = OnceLock::new();
static RULES: OnceLock<Vec<CompiledRule>> = OnceLock::new();
static DISCOURSE: OnceLock<Vec<Regex>> = OnceLock::new();

fn compile(pattern: &str) -> Regex {
    // Table patterns are literals covered by `every_table_pattern_compiles`.
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("static pattern should compile")
}

pub fn coherence_markers() -> &'static [CompiledMarkers] {
    MARKERS.get_or_init(|| {
        COHERENCE_TABLES
            .iter()
            .map(|table| CompiledMarkers {
                level: table.level,
                regexes: table.patterns.iter().map(|p| compile(p)).collect(),
            })
            .collect()
    })
}

pub fn grammar_rules() -> &'static [CompiledRule] {
    RULES.get_or_init(|| {
        GRAMMAR_RULES
            .iter()
            .map(|rule| CompiledRule {
                rule,
                regex: compile(rule.pattern),
                exception: rule.exception.map(compile),
            })
            .collect()
    })
}

pub fn discourse_groups() -> &'static [Regex] {
    DISCOURSE.get_or_init(|| {
        DISCOURSE_GROUPS
            .iter()
            .map(|group| compile(group.pattern))
            .collect()
    })
}

pub fn is_basic_word(word: &str) -> bool {
    BASIC_VOCABULARY.binary_search(&word).is_ok()
}
