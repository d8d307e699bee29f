use std::process::Command;

#[test]
fn test_version_matches_package() {
    let bin = env!("CARGO_BIN_EXE_zeroops");

    let output = Command::new(bin).arg("--version").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        format!("zeroops {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn test_help_lists_command_groups() {
    let bin = env!("CARGO_BIN_EXE_zeroops");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for group in ["context", "deploy", "proxy"] {
        assert!(stdout.contains(group), "missing {} in:\n{}", group, stdout);
    }
}
