use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::Path;

const ICON_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M3 12l9-9 9 9"/></svg>"#;

fn add_icon(root: &Path, file_name: &str) {
    std::fs::write(root.join("src/svg").join(file_name), ICON_SVG).unwrap();
}

fn project_arg(dir: &tempfile::TempDir) -> &str {
    dir.path().to_str().unwrap()
}

#[test]
fn test_init_and_build() {
    let dir = tempfile::tempdir().unwrap();

    // Init project
    cargo_bin_cmd!("glyphsmith")
        .args(["init", project_arg(&dir)])
        .assert()
        .success();

    assert!(dir.path().join("glyphsmith.yaml").exists());
    assert!(dir.path().join("src/svg").is_dir());

    add_icon(dir.path(), "home.svg");
    add_icon(dir.path(), "arrow-left.svg");

    // Build
    cargo_bin_cmd!("glyphsmith")
        .args(["--config", project_arg(&dir), "build"])
        .assert()
        .success();

    assert!(dir.path().join("src/components/ArrowLeft.tsx").exists());
    assert!(dir.path().join("src/components/Home.tsx").exists());

    let index = std::fs::read_to_string(dir.path().join("src/index.ts")).unwrap();
    assert_eq!(
        index,
        "export { default as ArrowLeft } from './components/ArrowLeft';\n\
         export { default as Home } from './components/Home';\n"
    );

    let metadata = std::fs::read_to_string(dir.path().join("src/metadata.ts")).unwrap();
    assert_eq!(
        metadata,
        "export default {\"arrow-left\":\"ArrowLeft\",\"home\":\"Home\"};\n"
    );
}

#[test]
fn test_init_twice_fails() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("glyphsmith")
        .args(["init", project_arg(&dir)])
        .assert()
        .success();

    cargo_bin_cmd!("glyphsmith")
        .args(["init", project_arg(&dir)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_build_without_input_dir_fails() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("glyphsmith")
        .args(["--config", project_arg(&dir), "build"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot find the svg files"));

    assert!(!dir.path().join("src/components").exists());
    assert!(!dir.path().join("src/index.ts").exists());
}

#[test]
fn test_build_with_path_overrides() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("icons")).unwrap();
    std::fs::write(dir.path().join("icons/bell.svg"), ICON_SVG).unwrap();

    cargo_bin_cmd!("glyphsmith")
        .current_dir(dir.path())
        .args(["build", "--input", "icons", "--output", "out/components"])
        .assert()
        .success();

    assert!(dir.path().join("out/components/Bell.tsx").exists());
    assert!(dir.path().join("out/index.ts").exists());
    assert!(dir.path().join("out/metadata.ts").exists());
}

#[test]
fn test_build_rejects_output_over_input() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("src/svg")).unwrap();
    add_icon(dir.path(), "home.svg");

    for output in ["src/svg", "src", "."] {
        cargo_bin_cmd!("glyphsmith")
            .current_dir(dir.path())
            .args(["build", "--output", output])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid --input/--output combination"));

        assert!(dir.path().join("src/svg/home.svg").exists());
    }
    assert!(!dir.path().join("src/index.ts").exists());
}

#[test]
fn test_build_output_override_with_configured_index() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("src/svg")).unwrap();
    add_icon(dir.path(), "home.svg");
    std::fs::write(dir.path().join("glyphsmith.yaml"), "index_file: src/index.ts\n").unwrap();

    cargo_bin_cmd!("glyphsmith")
        .current_dir(dir.path())
        .args(["build", "--output", "out/components"])
        .assert()
        .success();

    let index = std::fs::read_to_string(dir.path().join("src/index.ts")).unwrap();
    assert_eq!(
        index,
        "export { default as Home } from '../out/components/Home';\n"
    );
}

#[test]
fn test_build_skip_invalid() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("src/svg")).unwrap();
    add_icon(dir.path(), "home.svg");
    std::fs::write(dir.path().join("src/svg/broken.svg"), "<svg><g></svg>").unwrap();

    // Default policy aborts
    cargo_bin_cmd!("glyphsmith")
        .args(["--config", project_arg(&dir), "build"])
        .assert()
        .failure();
    assert!(!dir.path().join("src/components").exists());

    cargo_bin_cmd!("glyphsmith")
        .args(["--config", project_arg(&dir), "build", "--skip-invalid"])
        .assert()
        .success();
    assert!(dir.path().join("src/components/Home.tsx").exists());
    assert!(!dir.path().join("src/components/Broken.tsx").exists());
}

#[test]
fn test_list_json() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("src/svg")).unwrap();
    add_icon(dir.path(), "user-profile.svg");

    let output = cargo_bin_cmd!("glyphsmith")
        .args(["--config", project_arg(&dir), "list", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        rows,
        serde_json::json!([
            { "file": "user-profile.svg", "component": "UserProfile", "key": "user-profile" }
        ])
    );
}

#[test]
fn test_check_detects_drift() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("src/svg")).unwrap();
    add_icon(dir.path(), "home.svg");

    // Nothing generated yet
    cargo_bin_cmd!("glyphsmith")
        .args(["--config", project_arg(&dir), "check"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("missing"));

    cargo_bin_cmd!("glyphsmith")
        .args(["--config", project_arg(&dir), "build"])
        .assert()
        .success();

    cargo_bin_cmd!("glyphsmith")
        .args(["--config", project_arg(&dir), "check"])
        .assert()
        .success();

    // A new asset makes the output stale
    add_icon(dir.path(), "bell.svg");
    cargo_bin_cmd!("glyphsmith")
        .args(["--config", project_arg(&dir), "check"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Bell.tsx"));
}
