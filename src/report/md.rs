use crate::batch::BatchReport;
use crate::types::report::AssessmentResult;

pub fn to_markdown(result: &AssessmentResult) -> String {
    let mut output = String::new();
    output.push_str("# Writing Assessment\n\n");
    output.push_str(&format!(
        "Level: {} (score {})\n",
        result.cefr_level, result.score
    ));
    if let Some(confidence) = result.confidence_level {
        output.push_str(&format!("Confidence: {:.2}\n", confidence));
    }
    output.push('\n');

    output.push_str("## Sub-scores\n\n");
    output.push_str(&format!(
        "- vocabulary: {}\n- grammar: {}\n- coherence: {}\n- complexity: {}\n- task_achievement: {}\n\n",
        result.details.vocabulary,
        result.details.grammar,
        result.details.coherence,
        result.details.complexity,
        result.details.task_achievement
    ));

    output.push_str("## Grammar\n\n");
    if result.grammar_errors.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for error in &result.grammar_errors {
            output.push_str(&format!(
                "- [{} severity {}] {}: \"{}\"\n",
                error.level, error.severity, error.description, error.excerpt
            ));
        }
        output.push('\n');
    }

    output.push_str("## Overview\n\n");
    for line in &result.overview {
        output.push_str(&format!("- {line}\n"));
    }
    output.push('\n');

    output.push_str("## Suggestions\n\n");
    for line in &result.suggestions {
        output.push_str(&format!("- {line}\n"));
    }

    output
}

pub fn batch_to_markdown(report: &BatchReport) -> String {
    let mut output = String::new();
    output.push_str("# Cohort Assessment\n\n");
    output.push_str(&format!(
        "Variant: {}\nGenerated: {}\nDuplicates: {}\n\n",
        report.variant,
        report.generated_at,
        report.duplicate_count()
    ));

    output.push_str("| File | Level | Score | Grammar findings | Duplicate of |\n");
    output.push_str("|------|-------|-------|------------------|--------------|\n");
    for entry in &report.entries {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            entry.path,
            entry.result.cefr_level,
            entry.result.score,
            entry.result.grammar_errors.len(),
            entry.duplicate_of.as_deref().unwrap_or("-")
        ));
    }
    output.push('\n');

    output.push_str("## Levels\n\n");
    if report.level_counts.is_empty() {
        output.push_str("- none\n");
    } else {
        for (level, count) in &report.level_counts {
            output.push_str(&format!("- {level}: {count}\n"));
        }
    }

    if !report.skipped.is_empty() {
        output.push_str("\n## Skipped\n\n");
        for skipped in &report.skipped {
            output.push_str(&format!("- {}: {}\n", skipped.path, skipped.reason));
        }
    }

    output
}
