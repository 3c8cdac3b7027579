use std::fs;
use std::process::Command;

use cpy::shim::{render_c, MAX_VARIADIC_LENGTH, TARGETS};

fn generator() -> Command {
    Command::new(env!("CARGO_BIN_EXE_cpy-variadic"))
}

#[test]
fn test_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let status = generator().current_dir(dir.path()).status().unwrap();
    assert!(status.success());

    let written = fs::read_to_string(dir.path().join("variadic.c")).unwrap();
    assert_eq!(written, render_c(TARGETS, MAX_VARIADIC_LENGTH));
}

#[test]
fn test_output_and_cases_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shims.c");
    let status = generator().arg("-o").arg(&path).args(["-n", "2"]).status().unwrap();
    assert!(status.success());

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, render_c(TARGETS, 2));
    assert_eq!(written.matches("        case ").count(), 2 * 3);
}

#[test]
fn test_unwritable_destination_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("variadic.c");
    let output = generator().arg("-o").arg(&path).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error opening file"), "{stderr}");
    assert!(!path.exists());
}

#[test]
fn test_negative_count_rejected_by_parser() {
    let output = generator().args(["-n", "-1"]).output().unwrap();
    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(1));
}

#[cfg(unix)]
#[test]
fn test_read_only_destination_exits_one() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("variadic.c");
    fs::write(&path, "old").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o444)).unwrap();
    if fs::OpenOptions::new().write(true).open(&path).is_ok() {
        return;
    }

    let output = generator().arg("-o").arg(&path).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error opening file"), "{stderr}");
    assert_eq!(fs::read_to_string(&path).unwrap(), "old");
}
