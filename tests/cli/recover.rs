//! Tests for `recover`.

use crate::support::*;

#[test]
fn test_recover_from_env() {
    let t = Test::with_env(HOT_ENV);

    let output = t.recover(&[]);
    assert_success(&output);
    assert_stdout_contains(&output, WALLET_ID);
    assert_stdout_contains(&output, DESTINATION);
    assert_stdout_contains(&output, "recovery request resolved");
}

#[test]
fn test_flag_wins_over_env() {
    let t = Test::with_env(&[("WALLET_ID", "xyz789")]);
    let output = t.recover(&[
        "--walletId",
        "abc123",
        "--env",
        "test",
        "-a",
        ACCESS_TOKEN,
        "-p",
        PASSCODE,
        "-d",
        DESTINATION,
        "--json",
    ]);
    assert_success(&output);

    let json = stdout_json(&output);
    assert_eq!(json["walletId"], "abc123");
}

#[test]
fn test_wallet_id_env_fallback() {
    let t = Test::with_env(&without(HOT_ENV, "WALLET_ID"));
    let output = t
        .cmd()
        .env("WALLET_ID", "xyz789")
        .args(["recover", "--json"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout_json(&output)["walletId"], "xyz789");
}

#[test]
fn test_wallet_id_missing() {
    let t = Test::with_env(&without(HOT_ENV, "WALLET_ID"));

    let output = t.recover(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "WALLET_ID env var not set");
    assert_stderr_contains(&output, "pass --walletId or set WALLET_ID");
}

#[test]
fn test_empty_env_var_is_missing() {
    let mut env = without(HOT_ENV, "RECOVERY_DESTINATION");
    env.push(("RECOVERY_DESTINATION", ""));
    let t = Test::with_env(&env);

    let output = t.recover(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "RECOVERY_DESTINATION");
}

#[test]
fn test_every_hot_var_is_required() {
    for (var, _) in HOT_ENV {
        let t = Test::with_env(&without(HOT_ENV, var));
        let output = t.recover(&[]);
        assert_failure(&output);
        assert_stderr_contains(&output, var);
    }
}

#[test]
fn test_secrets_are_fingerprinted() {
    let t = Test::with_env(HOT_ENV);

    let output = t.recover(&[]);
    assert_success(&output);
    assert_not_printed(&output, ACCESS_TOKEN);
    assert_not_printed(&output, PASSCODE);
    assert_stdout_contains(&output, "sha256:");

    let output = t.recover(&["--json"]);
    assert_success(&output);
    assert_not_printed(&output, ACCESS_TOKEN);
    let json = stdout_json(&output);
    assert!(json["accessToken"].as_str().unwrap().starts_with("sha256:"));
}

#[test]
fn test_production_warning() {
    let mut env = without(HOT_ENV, "BITGO_ENV");
    env.push(("BITGO_ENV", "prod"));
    let t = Test::with_env(&env);

    let output = t.recover(&[]);
    assert_success(&output);
    assert_stdout_contains(&output, "production environment");
}
