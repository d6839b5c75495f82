//! Tests for `sign`.

use crate::support::*;

#[test]
fn test_sign_with_user_key() {
    let t = Test::with_env(SIGN_ENV);

    let output = t.sign(&["--keyType", "user", "--json"]);
    assert_success(&output);

    let json = stdout_json(&output);
    assert_eq!(json["keyType"], "user");
    assert_eq!(json["redeemScript"], REDEEM_SCRIPT);
    assert_not_printed(&output, USER_KEY);
}

#[test]
fn test_sign_backup_ignores_missing_user_key() {
    let t = Test::with_env(&without(SIGN_ENV, "USER_KEY"));

    let output = t.sign(&["-k", "backup"]);
    assert_success(&output);
    assert_stdout_contains(&output, "Sign with backup key");
}

#[test]
fn test_sign_user_requires_user_key() {
    let t = Test::with_env(&without(SIGN_ENV, "USER_KEY"));

    let output = t.sign(&["-k", "user"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "USER_KEY env var not set");
}

#[test]
fn test_sign_invalid_key_type() {
    let t = Test::with_env(SIGN_ENV);

    let output = t.sign(&["--keyType", "bitgo"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid keyType bitgo");
    assert_stderr_contains(&output, "user, backup");
}

#[test]
fn test_sign_key_type_required() {
    let t = Test::with_env(SIGN_ENV);

    let output = t.sign(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "missing required flag --keyType");
}

#[test]
fn test_redeem_script_flag_wins() {
    let t = Test::with_env(SIGN_ENV);

    let output = t.sign(&["-k", "user", "-r", "52ae", "--json"]);
    assert_success(&output);
    assert_eq!(stdout_json(&output)["redeemScript"], "52ae");
}
