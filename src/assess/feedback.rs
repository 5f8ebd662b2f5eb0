//! Fixed per-level feedback shown alongside the score.

use crate::types::level::CefrLevel;

pub fn overview(level: CefrLevel) -> &'static [&'static str] {
    match level {
        CefrLevel::A1 => &[
            "You can write simple, isolated phrases and sentences about yourself and familiar topics.",
            "Sentences are short and mostly joined with basic connectors such as 'and' or 'but'.",
        ],
        CefrLevel::A2 => &[
            "You can write short, simple texts on everyday matters.",
            "Ideas are linked with simple connectors like 'because', 'so' and 'then'.",
        ],
        CefrLevel::B1 => &[
            "You can write straightforward connected text on familiar topics.",
            "You express opinions and give examples, with occasional errors that do not block meaning.",
        ],
        CefrLevel::B2 => &[
            "You can write clear, detailed text and argue a point of view.",
            "Your writing uses a range of linking devices and mostly accurate grammar.",
        ],
        CefrLevel::C1 => &[
            "You can write clear, well-structured text on complex subjects.",
            "Your writing shows controlled use of organisational patterns, connectors and cohesive devices.",
        ],
        CefrLevel::C2 => &[
            "You can write clear, smoothly flowing text in an appropriate style.",
            "Your writing shows a logical structure that helps the reader notice significant points.",
        ],
    }
}

pub fn suggestions(level: CefrLevel) -> &'static [&'static str] {
    match level {
        CefrLevel::A1 => &[
            "Practise basic sentence patterns: subject, verb, object.",
            "Learn common everyday words for family, school, food and hobbies.",
            "Check that the verb agrees with the subject ('he is', 'they are').",
        ],
        CefrLevel::A2 => &[
            "Join sentences with 'because', 'so', 'when' and 'then'.",
            "Practise the past simple to describe past events.",
            "Try writing a short paragraph instead of single sentences.",
        ],
        CefrLevel::B1 => &[
            "Give reasons and examples with 'for example' and 'however'.",
            "Organise your text into an introduction, body and conclusion.",
            "Vary your vocabulary instead of repeating the same words.",
        ],
        CefrLevel::B2 => &[
            "Use a wider range of connectors such as 'moreover', 'therefore' and 'on the other hand'.",
            "Combine ideas with relative clauses ('which', 'whose').",
            "Review articles and prepositions, which are common sources of error.",
        ],
        CefrLevel::C1 => &[
            "Refine register and tone for your audience.",
            "Use advanced cohesive devices such as 'nevertheless' and 'whereby' precisely.",
            "Experiment with complex structures like inversion and nominalisation.",
        ],
        CefrLevel::C2 => &[
            "Polish style and rhythm; read your text aloud to check flow.",
            "Use idiomatic and nuanced expressions where they fit naturally.",
            "Keep challenging yourself with academic and literary texts.",
        ],
    }
}

pub fn overview_lines(level: CefrLevel) -> Vec<String> {
    overview(level).iter().map(|line| line.to_string()).collect()
}

pub fn suggestion_lines(level: CefrLevel) -> Vec<String> {
    suggestions(level).iter().map(|line| line.to_string()).collect()
}
