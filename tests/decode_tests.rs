use assert_cmd::Command;
use pretty_assertions::assert_eq;
use std::{env, fs};

#[test]
fn decode_nec_from_rawir() {
    let message = irproto::encode::nec(0x04FB08F7, 32).unwrap();

    let mut cmd = Command::cargo_bin("irtool").unwrap();

    let assert = cmd
        .args(["decode", "--raw", &message.print_rawir()])
        .assert()
        .success();

    let output = assert.get_output();

    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "decoded: protocol nec, value 0x4fb08f7, bits 32, address 0x04, command 0x08\n"
    );
}

#[test]
fn decode_unknown_prints_fingerprint() {
    let raw = [123u32, 456, 789, 1011, 1213];
    let fingerprint = irproto::fingerprint(&raw);

    let mut cmd = Command::cargo_bin("irtool").unwrap();

    let assert = cmd
        .args(["decode", "--raw", "+123 -456 +789 -1011 +1213"])
        .assert()
        .success();

    let output = assert.get_output();

    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!(
            "decoded: protocol unknown, value 0x{:x}, bits 32\n",
            fingerprint
        )
    );
}

#[test]
fn decode_mode2_file() {
    let message = irproto::encode::sony(0x295, 12).unwrap();

    let mut mode2 = String::from("carrier 40000\n");
    for (i, duration) in message.raw.iter().enumerate() {
        if i % 2 == 0 {
            mode2.push_str(&format!("pulse {}\n", duration));
        } else {
            mode2.push_str(&format!("space {}\n", duration));
        }
    }

    let path = env::temp_dir().join("irtool-decode-mode2-test.txt");
    fs::write(&path, mode2).unwrap();

    let mut cmd = Command::cargo_bin("irtool").unwrap();

    let assert = cmd
        .args(["decode", "--file"])
        .arg(&path)
        .assert()
        .success();

    let output = assert.get_output();

    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "decoded: protocol sony, value 0x295, bits 12, address 0x05, command 0x15\n"
    );

    let _ = fs::remove_file(&path);
}

#[test]
fn decode_with_protocol_filter() {
    let message = irproto::encode::nec(0x20df10ef, 32).unwrap();
    let fingerprint = irproto::fingerprint(&message.raw);

    // the samsung decoder must not take an NEC frame
    let mut cmd = Command::cargo_bin("irtool").unwrap();

    let assert = cmd
        .args([
            "decode",
            "--protocol",
            "samsung",
            "--raw",
            &message.print_rawir(),
        ])
        .assert()
        .success();

    let output = assert.get_output();

    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!(
            "decoded: protocol unknown, value 0x{:x}, bits 32\n",
            fingerprint
        )
    );
}

#[test]
fn decode_with_keymap_lookup() {
    let message = irproto::encode::nec(0x04FB08F7, 32).unwrap();

    let path = env::temp_dir().join("irtool-decode-keymap-test.toml");
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
        .args(["decode", "--raw", &message.print_rawir(), "--keymap"])
        .arg(&path)
        .assert()
        .success();

    let output = assert.get_output();

    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "decoded: protocol nec, value 0x4fb08f7, bits 32, address 0x04, command 0x08\n\
         key: KEY_POWER (tv)\n"
    );

    let _ = fs::remove_file(&path);
}

#[test]
fn decode_rejects_bad_rawir() {
    let mut cmd = Command::cargo_bin("irtool").unwrap();

    let assert = cmd
        .args(["decode", "--raw", "+100 +100"])
        .assert()
        .failure()
        .code(2);

    let output = assert.get_output();

    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "error: unexpected ‘+’ encountered\n"
    );
}
