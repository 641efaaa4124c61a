// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Modcov-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Modcov and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use modcov::config::ScoringOptions;
use modcov::ops::{build_collection, evaluate_abundance, evaluate_presence};
use modcov::store;

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join("pipeline")
}

fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

fn read_fixture(name: &str) -> String {
    let path = fixture(name);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read {path:?}: {err}"))
}

fn modcov(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_modcov"))
        .args(args)
        .env_remove("MODCOV_LOG")
        .output()
        .expect("run modcov")
}

fn path_arg(name: &str) -> String {
    fixture(name).to_string_lossy().into_owned()
}

#[test]
fn presence_pipeline_matches_expected_table() {
    let definitions = store::read_definitions_file(&fixture("modules.tsv")).expect("definitions");
    let collection = build_collection(definitions).expect("collection");
    let observed = store::read_presence_file(&fixture("kos.txt")).expect("presence");
    let results = evaluate_presence(&collection, &observed, 0.0);

    let mut out = Vec::new();
    store::write_presence_results(
        &mut out,
        Path::new("presence.tsv"),
        results.iter().map(|(module_id, outcome)| (module_id, outcome.clone().ok())),
    )
    .expect("write");
    assert_eq!(String::from_utf8(out).expect("utf8"), read_fixture("presence.expected.tsv"));
}

#[test]
fn abundance_pipeline_matches_expected_table() {
    let definitions = store::read_definitions_file(&fixture("modules.tsv")).expect("definitions");
    let collection = build_collection(definitions).expect("collection");
    let table = store::read_abundance_file(&fixture("abundance.tsv")).expect("abundance");
    let results = evaluate_abundance(&collection, table.columns(), ScoringOptions::default());

    let mut out = Vec::new();
    store::write_abundance_results(
        &mut out,
        Path::new("abundance.tsv"),
        table.samples(),
        results.iter().map(|(module_id, outcomes)| {
            (module_id, outcomes.iter().map(|outcome| outcome.clone().ok()).collect())
        }),
    )
    .expect("write");
    assert_eq!(String::from_utf8(out).expect("utf8"), read_fixture("abundance.expected.tsv"));
}

#[test]
fn cli_presence_writes_the_result_table_to_stdout() {
    let output = modcov(&[
        "presence",
        "--definitions",
        &path_arg("modules.tsv"),
        "--input",
        &path_arg("kos.txt"),
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout), read_fixture("presence.expected.tsv"));

    // The rejected complex is reported on stderr, not in the table.
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("M00004"), "{stderr}");
}

#[test]
fn cli_abundance_reads_options_from_a_config_file() {
    let output = modcov(&[
        "abundance",
        "-d",
        &path_arg("modules.tsv"),
        "-i",
        &path_arg("abundance.tsv"),
        "--config",
        &path_arg("minimum.json"),
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let m3 = stdout.lines().find(|line| line.starts_with("M00003")).expect("M00003 row");
    assert_eq!(m3, "M00003\t0.0\t0.0");

    // A command-line method wins over the file.
    let output = modcov(&[
        "abundance",
        "-d",
        &path_arg("modules.tsv"),
        "-i",
        &path_arg("abundance.tsv"),
        "--config",
        &path_arg("minimum.json"),
        "--method",
        "mean",
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout), read_fixture("abundance.expected.tsv"));
}

#[test]
fn cli_graph_exports_one_module_as_json() {
    let output = modcov(&["graph", "-d", &path_arg("modules.tsv"), "--module", "M00002"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    let modules = json.as_object().expect("object");
    assert_eq!(modules.len(), 1);
    assert_eq!(json["M00002"]["terminal_ids"], serde_json::json!([0, 1]));
    assert_eq!(json["M00002"]["nodes"][1]["name"], "K00002");
}

#[test]
fn cli_graph_explain_includes_the_best_path() {
    let output = modcov(&[
        "graph",
        "-d",
        &path_arg("modules.tsv"),
        "--module",
        "M00005",
        "--explain",
        &path_arg("kos.txt"),
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(json["M00005"]["report"]["path"], serde_json::json!([0, 1, 4]));
    assert_eq!(json["M00005"]["report"]["covered"], 2);
    assert_eq!(json["M00005"]["graph"]["nodes"][1]["score"], 1.0);
}

#[test]
fn cli_reports_errors_with_exit_status_one() {
    let unknown_method = modcov(&[
        "abundance",
        "-d",
        &path_arg("modules.tsv"),
        "-i",
        &path_arg("abundance.tsv"),
        "--method",
        "maen",
    ]);
    assert_eq!(unknown_method.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&unknown_method.stderr);
    assert!(stderr.starts_with("modcov: "), "{stderr}");
    assert!(stderr.contains("did you mean \"mean\""), "{stderr}");

    let malformed = modcov(&[
        "presence",
        "-d",
        &path_arg("malformed.tsv"),
        "-i",
        &path_arg("kos.txt"),
    ]);
    assert_eq!(malformed.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&malformed.stderr);
    assert!(stderr.contains("M00001") && stderr.contains("never closed"), "{stderr}");

    let unknown_module =
        modcov(&["graph", "-d", &path_arg("modules.tsv"), "--module", "M00010"]);
    assert_eq!(unknown_module.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&unknown_module.stderr);
    assert!(stderr.contains("did you mean"), "{stderr}");
}
