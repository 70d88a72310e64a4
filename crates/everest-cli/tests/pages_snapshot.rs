use assert_cmd::Command;

#[allow(deprecated)]
fn run_everest(args: &[&str]) -> String {
    let data_dir = tempfile::TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("everest").unwrap();
    let output = cmd
        .arg("--data-dir")
        .arg(data_dir.path())
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_pages_quiet() {
    let stdout = run_everest(&["pages", "--quiet"]);
    insta::assert_snapshot!("pages_quiet", stdout);
}
