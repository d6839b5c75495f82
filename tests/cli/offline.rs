//! Tests for `recover-offline`.

use crate::support::*;

#[test]
fn test_offline_from_env() {
    let t = Test::with_env(OFFLINE_ENV);

    let output = t.recover_offline(&["--json"]);
    assert_success(&output);

    let json = stdout_json(&output);
    assert_eq!(json["env"], "test");
    assert_eq!(json["bitgoPubkey"], BITGO_PUB_KEY);
    assert_eq!(json["destination"], DESTINATION);
    for secret in [USER_KEY, BACKUP_KEY, PASSCODE, BLOCK_CHAIR_KEY] {
        assert_not_printed(&output, secret);
    }
}

#[test]
fn test_offline_short_flags() {
    let t = Test::new();

    let output = t.recover_offline(&[
        "-e",
        "test",
        "-u",
        USER_KEY,
        "-b",
        BACKUP_KEY,
        "-g",
        BITGO_PUB_KEY,
        "-p",
        PASSCODE,
        "-d",
        DESTINATION,
        "--blockChairApiKey",
        BLOCK_CHAIR_KEY,
    ]);
    assert_success(&output);
    assert_stdout_contains(&output, BITGO_PUB_KEY);
}

#[test]
fn test_block_chair_key_missing() {
    let t = Test::with_env(&without(OFFLINE_ENV, "BLOCK_CHAIR_API_KEY"));

    let output = t.recover_offline(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "BLOCK_CHAIR_API_KEY env var not set");
    assert_stderr_contains(&output, "--blockChairApiKey");
}

#[test]
fn test_bitgo_pubkey_missing() {
    let t = Test::with_env(&without(OFFLINE_ENV, "BITGO_PUB_KEY"));

    let output = t.recover_offline(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "BITGO_PUB_KEY");
}

#[test]
fn test_offline_rejects_access_token_flag() {
    let t = Test::with_env(OFFLINE_ENV);

    let output = t.recover_offline(&["--accessToken", ACCESS_TOKEN]);
    assert_eq!(output.status.code(), Some(2));
}
