#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SIMPLE: &str = "I am Tom. I have a cat and a dog. My cat is small. I can run. I like my home.";
const WITH_ERROR: &str =
    "My friends are at the park today. They is happy because the weather is warm and sunny.";
const CLEAN: &str =
    "My friends are at the park today. They are happy because the weather is warm and sunny.";

/// Runs the binary inside `dir` with HOME pointed there too, so no stray
/// global or project config leaks into the test.
fn proficiency_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("proficiency").expect("binary should compile");
    cmd.current_dir(dir).env("HOME", dir).env_remove("RUST_LOG");
    cmd
}

fn advanced_essay() -> String {
    fs::read_to_string(
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/advanced_essay.txt"),
    )
    .expect("fixture should read")
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("file should write");
}

#[test]
fn assess_json_outputs_result() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(dir.path(), "essay.txt", SIMPLE);

    proficiency_in(dir.path())
        .args(["assess", "essay.txt", "--format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"cefrLevel\": \"A1\""))
        .stdout(predicate::str::contains("\"confidenceLevel\""));
}

#[test]
fn assess_reads_stdin() {
    let dir = TempDir::new().expect("temp dir should be created");

    proficiency_in(dir.path())
        .args(["assess", "-"])
        .write_stdin(SIMPLE)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Writing Assessment"))
        .stdout(predicate::str::contains("Level: A1"));
}

#[test]
fn assess_legacy_variant_omits_confidence() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(dir.path(), "essay.txt", SIMPLE);

    proficiency_in(dir.path())
        .args(["assess", "essay.txt", "--format", "json", "--variant", "legacy"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"cefrLevel\": \"A2\""))
        .stdout(predicate::str::contains("confidenceLevel").not());
}

#[test]
fn assess_rejects_text_below_minimum_length() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(dir.path(), "essay.txt", "Hi there");

    proficiency_in(dir.path())
        .args(["assess", "essay.txt"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("text too short"));
}

#[test]
fn assess_reports_missing_input() {
    let dir = TempDir::new().expect("temp dir should be created");

    proficiency_in(dir.path())
        .args(["assess", "missing.txt"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("input not found"));
}

#[test]
fn assess_below_expected_level_exits_with_code_2() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(dir.path(), "essay.txt", SIMPLE);

    proficiency_in(dir.path())
        .args(["assess", "essay.txt", "--expect", "B1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("below expected B1"));
}

#[test]
fn assess_advanced_essay_meets_expected_level() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(dir.path(), "essay.txt", &advanced_essay());

    proficiency_in(dir.path())
        .args(["assess", "essay.txt", "--expect", "c1"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Level: C"));
}

#[test]
fn assess_sarif_lists_grammar_rules() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(dir.path(), "essay.txt", WITH_ERROR);

    proficiency_in(dir.path())
        .args(["assess", "essay.txt", "--format", "sarif"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"version\": \"2.1.0\""))
        .stdout(predicate::str::contains("grammar.agreement.plural_subject"));
}

#[test]
fn lint_reports_grammar_findings_as_warnings() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(dir.path(), "essay.txt", WITH_ERROR);

    proficiency_in(dir.path())
        .args(["lint", "essay.txt"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("grammar.agreement.plural_subject"))
        .stdout(predicate::str::contains("\"They is\""));
}

#[test]
fn lint_passes_clean_text() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(dir.path(), "essay.txt", CLEAN);

    proficiency_in(dir.path())
        .args(["lint", "essay.txt"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("lint: no findings"));
}

#[test]
fn lint_strips_html_before_matching() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(
        dir.path(),
        "essay.html",
        "<p>My friends are at the park.</p><p><b>They</b> is happy today.</p>",
    );

    proficiency_in(dir.path())
        .args(["lint", "essay.html"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("grammar.agreement.plural_subject"));
}

#[test]
fn suggest_prints_overview_and_suggestions() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(dir.path(), "essay.txt", SIMPLE);

    proficiency_in(dir.path())
        .args(["suggest", "essay.txt"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("level: A1"))
        .stdout(predicate::str::contains("overview:"))
        .stdout(predicate::str::contains("suggestions:"));
}

#[test]
fn batch_reports_cohort_and_duplicates() {
    let dir = TempDir::new().expect("temp dir should be created");
    let cohort = dir.path().join("cohort");
    fs::create_dir_all(&cohort).expect("cohort dir should create");
    write(&cohort, "anna.txt", SIMPLE);
    write(&cohort, "ben.txt", SIMPLE);
    write(&cohort, "cara.txt", CLEAN);

    proficiency_in(dir.path())
        .args(["batch", "cohort"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Cohort Assessment"))
        .stdout(predicate::str::contains("| ben.txt | A1 |"))
        .stdout(predicate::str::contains("anna.txt |\n"));
}

#[test]
fn batch_json_records_skipped_files_and_warns() {
    let dir = TempDir::new().expect("temp dir should be created");
    let cohort = dir.path().join("cohort");
    fs::create_dir_all(&cohort).expect("cohort dir should create");
    write(&cohort, "anna.txt", SIMPLE);
    write(&cohort, "tiny.txt", "Hi.");

    proficiency_in(dir.path())
        .args(["batch", "cohort", "--format", "json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"levelCounts\""))
        .stdout(predicate::str::contains("\"tiny.txt\""))
        .stderr(predicate::str::contains("1 submission(s) skipped"));
}

#[test]
fn batch_missing_directory_fails() {
    let dir = TempDir::new().expect("temp dir should be created");

    proficiency_in(dir.path())
        .args(["batch", "nowhere"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("input not found"));
}

#[test]
fn levels_show_variant_thresholds() {
    let dir = TempDir::new().expect("temp dir should be created");

    proficiency_in(dir.path())
        .args(["levels", "--variant", "legacy"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("variant: legacy"))
        .stdout(predicate::str::contains("C1 >= 80"))
        .stdout(predicate::str::contains("A1 >= 0"));
}

#[test]
fn project_config_raises_minimum_length() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(dir.path(), "proficiency.toml", "[input]\nmin_chars = 500\n");
    write(dir.path(), "essay.txt", SIMPLE);

    proficiency_in(dir.path())
        .args(["assess", "essay.txt"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("at least 500 characters"));
}

#[test]
fn project_config_selects_variant() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(dir.path(), "proficiency.toml", "[scoring]\nvariant = \"legacy\"\n");

    proficiency_in(dir.path())
        .arg("levels")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("variant: legacy"));
}

#[test]
fn explicit_config_flag_is_used() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(dir.path(), "strict.toml", "[input]\nmin_chars = 500\n");
    write(dir.path(), "essay.txt", SIMPLE);

    proficiency_in(dir.path())
        .args(["--config", "strict.toml", "assess", "essay.txt"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("at least 500 characters"));
}

#[test]
fn invalid_config_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(
        dir.path(),
        "proficiency.toml",
        "[scoring.weights]\nvocabulary = 0.9\ngrammar = 0.9\ncoherence = 0.0\n\
         complexity = 0.0\ntask_achievement = 0.0\n",
    );

    proficiency_in(dir.path())
        .arg("levels")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config parse error"))
        .stderr(predicate::str::contains("must sum to 1.0"));
}

#[test]
fn partial_weights_are_rejected_for_any_variant() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(
        dir.path(),
        "proficiency.toml",
        "[scoring.weights]\nvocabulary = 0.10\ngrammar = 0.30\n",
    );

    proficiency_in(dir.path())
        .args(["levels", "--variant", "legacy"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("missing key(s)"));
}
