//! CLI integration tests, driving the binary as a user would.

use assert_cmd::Command;
use predicates::prelude::*;

fn bytevise() -> Command {
    Command::cargo_bin("bytevise").unwrap()
}

#[test]
fn test_help() {
    bytevise()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Encode and decode byte sequences"));
}

#[test]
fn test_list_presets() {
    bytevise()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("base64"))
        .stdout(predicate::str::contains("base32"));
}

#[test]
fn test_encode_base64_stdin() {
    bytevise()
        .args(["encode", "--alphabet", "base64"])
        .write_stdin("foobar")
        .assert()
        .success()
        .stdout(predicate::str::contains("Zm9vYmFy"));
}

#[test]
fn test_decode_base64_stdin() {
    bytevise()
        .args(["decode", "--alphabet", "base64"])
        .write_stdin("Zm9vYmFy")
        .assert()
        .success()
        .stdout(predicate::eq("foobar"));
}

#[test]
fn test_hex_round_trip() {
    bytevise()
        .args(["encode", "--hex"])
        .write_stdin(&b"\x4A\x94\xFD\xFF\x1E\xAF\xED"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("4a94fdff1eafed"));

    bytevise()
        .args(["decode", "--hex"])
        .write_stdin("4a94fdff1eafed")
        .assert()
        .success();
}

#[test]
fn test_radix_encode() {
    bytevise()
        .args(["encode", "--radix", "10"])
        .write_stdin(&[0x01u8, 0x00][..])
        .assert()
        .success()
        .stdout(predicate::str::contains("256"));
}

#[test]
fn test_invalid_radix_fails() {
    bytevise()
        .args(["encode", "--radix", "37"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("radix must be between 2 and 36"));
}

#[test]
fn test_decode_invalid_symbol_fails() {
    bytevise()
        .args(["decode", "--hex"])
        .write_stdin("0xZZ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid symbol 'Z'"));
}

#[test]
fn test_unknown_preset_suggests() {
    bytevise()
        .args(["encode", "--alphabet", "bas64"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("did you mean 'base64'?"));
}
