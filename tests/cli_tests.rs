//! End-to-end tests of the `pair-solver` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn pair_solver() -> Command {
    Command::cargo_bin("pair-solver").expect("binary should build")
}

/// Three-model table with instruction-following and knowledge rows only
fn scenario_csv() -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".csv").expect("Failed to create temp file");
    writeln!(file, ",,metric,A,B,C").unwrap();
    writeln!(
        file,
        "Instruction Following,Instruction-Following Evaluation(IFeval),accuracy,80,70,40"
    )
    .unwrap();
    writeln!(file, "Knowledge,MMLU,accuracy,90,95,50").unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_pairs_all_strategies_tsv() {
    let csv = scenario_csv();
    pair_solver()
        .args(["pairs", "-i", "-k", "--format", "tsv", "--catalog"])
        .arg(csv.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("strategy\tfirst\tsecond"))
        .stdout(predicate::str::contains("superior\tA\tB"))
        .stdout(predicate::str::contains("similarity\tB\tC"))
        .stdout(predicate::str::contains("superior+similarity\tA\tC"));
}

#[test]
fn test_pairs_single_strategy_json() {
    let output = pair_solver()
        .args(["pairs", "-a", "--strategy", "superior", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let pairs = json["pairs"].as_array().unwrap();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0]["strategy"], "superior");
    assert_eq!(pairs[0]["first"], "GPT-4");
    assert_eq!(pairs[0]["second"], "GPT-3.5-Turbo");
    assert_eq!(json["dimensions"].as_array().unwrap().len(), 6);
}

#[test]
fn test_pairs_text_output() {
    pair_solver()
        .args(["pairs", "--knowledge", "--reasoning"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Abilities: knowledge+reasoning"))
        .stdout(predicate::str::contains("GPT-4"));
}

#[test]
fn test_pairs_without_abilities_warns() {
    pair_solver()
        .args(["pairs"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No abilities selected"));
}

#[test]
fn test_all_abilities_conflicts_with_flags() {
    pair_solver().args(["pairs", "-a", "-k"]).assert().failure();
}

#[test]
fn test_rank_limit() {
    pair_solver()
        .args(["rank", "-a", "-n", "2", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1\tGPT-4\t"))
        .stdout(predicate::str::contains("2\tGPT-3.5-Turbo\t"))
        .stdout(predicate::str::contains("3\t").not());
}

#[test]
fn test_similar_with_custom_catalog() {
    let csv = scenario_csv();
    pair_solver()
        .args(["similar", "A", "-i", "-k", "--catalog"])
        .arg(csv.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Closest match to A: C"));
}

#[test]
fn test_similar_unknown_model_fails() {
    pair_solver()
        .args(["similar", "Not-A-Model", "-a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Model 'Not-A-Model' not found in catalog"));
}

#[test]
fn test_excluded_model_is_not_found() {
    pair_solver()
        .args(["similar", "Vicuna-33B", "-a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found in catalog"));
}

#[test]
fn test_exclude_flag() {
    pair_solver()
        .args([
            "pairs", "-a", "-s", "superior", "--format", "tsv", "--exclude", "GPT-4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("superior\tGPT-3.5-Turbo\tBard"));
}

#[test]
fn test_catalog_list_hides_excluded_models() {
    pair_solver()
        .args(["catalog", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Llama-2-70B-chat"))
        .stdout(predicate::str::contains("Alpaca-7B").not())
        .stdout(predicate::str::contains("Total: 8 models"));
}

#[test]
fn test_catalog_list_verbose_reports_exclusion_list_size() {
    pair_solver()
        .args(["catalog", "list", "--verbose", "--exclude", "GPT-4"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Loaded catalog with 7 models (10 models on the exclusion list)",
        ));
}

#[test]
fn test_catalog_show_scales_mmlu_pro() {
    pair_solver()
        .args(["catalog", "show", "GPT-4", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MMLU-Pro\tknowledge\t72.6000"));
}

#[test]
fn test_catalog_export_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let exported = dir.path().join("catalog.json");

    pair_solver()
        .args(["catalog", "export"])
        .arg(&exported)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 8 models"));

    pair_solver()
        .args(["pairs", "-a", "-s", "superior", "--format", "tsv", "--catalog"])
        .arg(&exported)
        .assert()
        .success()
        .stdout(predicate::str::contains("superior\tGPT-4\tGPT-3.5-Turbo"));
}

#[test]
fn test_missing_catalog_file_fails() {
    pair_solver()
        .args(["pairs", "-a", "--catalog", "/nonexistent/scores.csv"])
        .assert()
        .failure();
}
