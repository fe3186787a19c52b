use assert_cmd::Command;
use pretty_assertions::assert_eq;
use std::{env, fs};

#[test]
fn transmit_nec() {
    let message = irproto::encode::nec(0x04FB08F7, 32).unwrap();

    let mut cmd = Command::cargo_bin("irtool").unwrap();

    let assert = cmd
        .args(["transmit", "--protocol", "nec", "--data", "0x04fb08f7"])
        .assert()
        .success();

    let output = assert.get_output();

    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("carrier: 38kHz\nrawir: {}\n", message.print_rawir())
    );
}

#[test]
fn transmit_nec_repeat() {
    let message = irproto::encode::nec_repeat();

    let mut cmd = Command::cargo_bin("irtool").unwrap();

    let assert = cmd
        .args(["transmit", "--protocol", "nec", "--repeat"])
        .assert()
        .success();

    let output = assert.get_output();

    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("carrier: 38kHz\nrawir: {}\n", message.print_rawir())
    );
}

#[test]
fn transmit_sharp_address_command() {
    let message = irproto::encode::sharp(0x04, 0xa9).unwrap();

    let mut cmd = Command::cargo_bin("irtool").unwrap();

    let assert = cmd
        .args([
            "transmit",
            "--protocol",
            "sharp",
            "--address",
            "0x04",
            "--command",
            "0xa9",
        ])
        .assert()
        .success();

    let output = assert.get_output();

    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("carrier: 38kHz\nrawir: {}\n", message.print_rawir())
    );
}

#[test]
fn transmit_dish_uses_56khz_carrier() {
    let mut cmd = Command::cargo_bin("irtool").unwrap();

    let assert = cmd
        .args(["transmit", "--protocol", "dish", "--data", "0x9c00"])
        .assert()
        .success();

    let output = assert.get_output();

    assert!(String::from_utf8_lossy(&output.stdout).starts_with("carrier: 56kHz\n"));
}

#[test]
fn transmit_from_keymap() {
    let message = irproto::encode::nec(0x04fb08f7, 32).unwrap();

    let path = env::temp_dir().join("irtool-transmit-keymap-test.toml");
    fs::write(
        &path,
        r#"
[[remote]]
name = "tv"
protocol = "nec"
bits = 32

[remote.keys]
KEY_POWER = 0x04fb08f7
"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("irtool").unwrap();

    let assert = cmd
        .args(["transmit", "--key", "KEY_POWER", "--keymap"])
        .arg(&path)
        .assert()
        .success();

    let output = assert.get_output();

    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("carrier: 38kHz\nrawir: {}\n", message.print_rawir())
    );

    let _ = fs::remove_file(&path);
}

#[test]
fn transmit_rejects_bad_bit_count() {
    let mut cmd = Command::cargo_bin("irtool").unwrap();

    let assert = cmd
        .args([
            "transmit",
            "--protocol",
            "nec",
            "--data",
            "0x1",
            "--bits",
            "16",
        ])
        .assert()
        .failure()
        .code(2);

    let output = assert.get_output();

    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "error: nec frames are 32 bits, not 16\n"
    );
}

#[test]
fn transmit_rejects_decode_only_protocols() {
    let mut cmd = Command::cargo_bin("irtool").unwrap();

    let assert = cmd
        .args(["transmit", "--protocol", "sanyo", "--data", "0x123"])
        .assert()
        .failure()
        .code(2);

    let output = assert.get_output();

    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "error: no encoder for protocol sanyo\n"
    );
}

#[test]
fn transmit_round_trips_through_decode() {
    let mut cmd = Command::cargo_bin("irtool").unwrap();

    let assert = cmd
        .args(["transmit", "--protocol", "rc5", "--data", "0x1775"])
        .assert()
        .success();

    let output = assert.get_output();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let rawir = stdout
        .lines()
        .find_map(|line| line.strip_prefix("rawir: "))
        .unwrap();

    let mut cmd = Command::cargo_bin("irtool").unwrap();

    let assert = cmd.args(["decode", "--raw", rawir]).assert().success();

    let output = assert.get_output();

    assert!(String::from_utf8_lossy(&output.stdout)
        .starts_with("decoded: protocol rc5, value 0x1775, bits 13"));
}
