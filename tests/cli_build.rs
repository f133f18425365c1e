//! Local-mode build and build-then-deploy against fake Nua tools.

#![cfg(unix)]

mod common;

use common::*;

#[test]
fn test_build_runs_nua_build_per_app_in_catalog_order() {
    let env = TestEnv::builder().build();

    let result = env.run(&["build"]);

    assert!(result.is_success(), "{}", result.combined_output());
    let apps_root = env.apps_root();
    let expected: Vec<String> = ["galene", "hedgedoc", "ackee", "dolibarr", "etherpad-lite"]
        .iter()
        .map(|id| format!("nua-build ./{} in {}", id, apps_root.display()))
        .collect();
    assert_eq!(env.tool_log(), expected);
}

#[test]
fn test_build_subset_keeps_requested_order() {
    let env = TestEnv::builder().build();

    let result = env.run(&["build", "--apps", "dolibarr, galene"]);

    assert!(result.is_success(), "{}", result.combined_output());
    let log = env.tool_log();
    assert_eq!(log.len(), 2);
    assert!(log[0].starts_with("nua-build ./dolibarr "));
    assert!(log[1].starts_with("nua-build ./galene "));
}

#[test]
fn test_build_stops_at_first_failure() {
    let env = TestEnv::builder().build();

    let result = env.run_with_env(
        &["build", "--apps", "galene,hedgedoc,ackee"],
        &[("FAKE_FAIL_APP", "hedgedoc")],
    );

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("build of 'hedgedoc' failed"),
        "stderr: {}",
        result.stderr
    );
    assert!(result.stderr.contains("status 7"), "stderr: {}", result.stderr);
    let log = env.tool_log();
    assert_eq!(log.len(), 2, "ackee must not be attempted: {:?}", log);
}

#[test]
fn test_build_json_failure_names_app() {
    let env = TestEnv::builder().build();

    let result = env.run_with_env(
        &["build", "--apps", "galene", "--json"],
        &[("FAKE_FAIL_APP", "galene")],
    );

    assert_eq!(result.exit_code, 1);
    let error = result.json_lines().pop().unwrap();
    assert_eq!(error["event"], "error");
    assert_eq!(error["code"], "build_failed");
    assert_eq!(error["app"], "galene");
}

#[test]
fn test_all_builds_before_deploying() {
    let env = TestEnv::builder()
        .with_app("galene", "galene")
        .with_app("ackee", "ackee")
        .build();

    let result = env.run(&["all", "--apps", "galene,ackee"]);

    assert!(result.is_success(), "{}", result.combined_output());
    let log = env.tool_log();
    assert_eq!(log.len(), 3, "{:?}", log);
    assert!(log[0].starts_with("nua-build ./galene"));
    assert!(log[1].starts_with("nua-build ./ackee"));
    assert!(log[2].starts_with("nua-orchestrator deploy"));
    assert!(env.document_path().exists());
}

#[test]
fn test_all_failed_build_skips_deploy() {
    let env = TestEnv::builder().with_app("galene", "galene").build();

    let result = env.run_with_env(&["all", "--apps", "galene"], &[("FAKE_FAIL_APP", "galene")]);

    assert_eq!(result.exit_code, 1);
    assert!(!env.document_path().exists());
    assert_eq!(env.tool_log().len(), 1);
}
