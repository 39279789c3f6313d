//! Integration tests for the full SVG → component pipeline
//!
//! Tests use temporary project directories with real SVG fixtures to verify:
//! - End-to-end generation with the bundled JSX transform
//! - Configuration-driven paths and options
//! - Completeness between assets, components, index and metadata

use glyphsmith_codegen::{Error, Generator, GeneratorOptions, JsxTransform};
use glyphsmith_core::Config;
use std::path::Path;
use tempfile::TempDir;

const HOME_SVG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
  <path d="M3 12l9-9 9 9"/>
</svg>
"#;

const USER_PROFILE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="#000" stroke-width="2">
  <circle cx="12" cy="7" r="4"/>
  <path d="M5 21v-2a7 7 0 0 1 14 0v2"/>
</svg>
"##;

/// Helper to create a temporary project with the given assets in `src/svg`.
fn setup_project(assets: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("src/svg")).unwrap();
    for (name, content) in assets {
        std::fs::write(dir.path().join("src/svg").join(name), content).unwrap();
    }
    dir
}

fn generator(config: &Config) -> Generator<JsxTransform> {
    Generator::new(
        JsxTransform::new(),
        config.project.transform.clone(),
        GeneratorOptions::from_config(config),
    )
}

fn read(path: impl AsRef<Path>) -> String {
    std::fs::read_to_string(path).unwrap()
}

// =============================================================================
// End-to-End Tests
// =============================================================================

#[tokio::test]
async fn test_end_to_end_default_config() {
    let dir = setup_project(&[("home.svg", HOME_SVG), ("user-profile.svg", USER_PROFILE_SVG)]);
    let config = Config::load_or_default(dir.path()).unwrap();

    let report = generator(&config).run().await.unwrap();
    assert_eq!(report.components, ["Home", "UserProfile"]);

    let home = read(dir.path().join("src/components/Home.tsx"));
    assert!(home.starts_with("import * as React from 'react';\n"));
    assert!(home.contains("const SvgHome = (props: SVGProps<SVGSVGElement>) => ("));
    assert!(!home.contains("<?xml"));
    assert!(home.ends_with("export default SvgHome;\n"));

    let profile = read(dir.path().join("src/components/UserProfile.tsx"));
    assert!(profile.contains(r#"strokeWidth="2""#));
    assert!(profile.contains(r#"<circle cx="12" cy="7" r="4" />"#));

    let index = read(dir.path().join("src/index.ts"));
    let lines: Vec<&str> = index.lines().collect();
    assert_eq!(
        lines,
        [
            "export { default as Home } from './components/Home';",
            "export { default as UserProfile } from './components/UserProfile';",
        ]
    );

    let metadata = read(dir.path().join("src/metadata.ts"));
    let literal = metadata
        .strip_prefix("export default ")
        .and_then(|rest| rest.strip_suffix(";\n"))
        .unwrap();
    let table: serde_json::Value = serde_json::from_str(literal).unwrap();
    assert_eq!(
        table,
        serde_json::json!({"home": "Home", "user-profile": "UserProfile"})
    );
}

#[tokio::test]
async fn test_configured_paths_and_options() {
    let dir = setup_project(&[]);
    std::fs::create_dir_all(dir.path().join("assets/icons")).unwrap();
    std::fs::write(dir.path().join("assets/icons/user-profile.svg"), USER_PROFILE_SVG).unwrap();
    std::fs::write(
        dir.path().join("glyphsmith.yaml"),
        r##"
input_dir: assets/icons
output_dir: lib/icons/generated
index_file: lib/all.js
metadata_file: lib/names.js
transform:
  typescript: false
  replace_attr_values:
    "#000": currentColor
"##,
    )
    .unwrap();

    let config = Config::load(dir.path()).unwrap();
    generator(&config).run().await.unwrap();

    let component = read(dir.path().join("lib/icons/generated/UserProfile.jsx"));
    assert!(component.contains(r#"stroke="currentColor""#));
    assert!(!component.contains("SVGProps"));
    assert_eq!(
        read(dir.path().join("lib/all.js")),
        "export { default as UserProfile } from './icons/generated/UserProfile';\n"
    );
    assert!(dir.path().join("lib/names.js").exists());
}

#[tokio::test]
async fn test_every_asset_is_accounted_for() {
    let names = ["arrow-left", "arrow-right", "bell", "cloud_upload", "x"];
    let assets: Vec<(String, &str)> = names
        .iter()
        .map(|n| (format!("{n}.svg"), HOME_SVG))
        .collect();
    let refs: Vec<(&str, &str)> = assets.iter().map(|(n, c)| (n.as_str(), *c)).collect();
    let dir = setup_project(&refs);
    let config = Config::load_or_default(dir.path()).unwrap();

    let report = generator(&config).run().await.unwrap();

    let index = read(dir.path().join("src/index.ts"));
    let metadata = read(dir.path().join("src/metadata.ts"));
    assert_eq!(report.components.len(), names.len());
    assert_eq!(index.lines().count(), names.len());
    for component in &report.components {
        assert!(dir.path().join(format!("src/components/{component}.tsx")).exists());
        assert!(index.contains(&format!("default as {component} }}")));
        assert!(metadata.contains(&format!(":\"{component}\"")));
    }
}

#[tokio::test]
async fn test_invalid_svg_aborts_before_writing() {
    let dir = setup_project(&[("home.svg", HOME_SVG), ("zz-broken.svg", "<svg><g></svg>")]);
    let config = Config::load_or_default(dir.path()).unwrap();

    let err = generator(&config).run().await.unwrap_err();

    assert!(err.to_string().contains("zz-broken.svg"));
    assert!(!dir.path().join("src/components").exists());
    assert!(!dir.path().join("src/index.ts").exists());
}

// =============================================================================
// Safety Tests
// =============================================================================

#[tokio::test]
async fn test_output_dir_containing_input_is_rejected() {
    let dir = setup_project(&[("home.svg", HOME_SVG)]);
    std::fs::write(dir.path().join("glyphsmith.yaml"), "output_dir: src\n").unwrap();

    let err = Config::load(dir.path()).unwrap_err();
    assert!(err.to_string().contains("contains input_dir"));

    // Options built without loading still go through the same check
    let mut config = Config::default_for(dir.path());
    config.project.output_dir = "src".into();
    let err = generator(&config).run().await.unwrap_err();

    assert!(matches!(err, Error::Core(glyphsmith_core::Error::ConfigInvalid { .. })));
    assert_eq!(read(dir.path().join("src/svg/home.svg")), HOME_SVG);
}

#[tokio::test]
async fn test_component_named_like_react_compiles_cleanly() {
    let dir = setup_project(&[("react.svg", HOME_SVG), ("memo.svg", HOME_SVG)]);
    std::fs::write(dir.path().join("glyphsmith.yaml"), "transform:\n  memo: true\n").unwrap();
    let config = Config::load(dir.path()).unwrap();

    let report = generator(&config).run().await.unwrap();
    assert_eq!(report.components, ["Memo", "React"]);

    let react = read(dir.path().join("src/components/React.tsx"));
    assert!(!react.contains("const React "));
    assert!(react.contains("const SvgReact = "));

    let memo = read(dir.path().join("src/components/Memo.tsx"));
    assert_eq!(memo.matches("const Memo ").count(), 1);
    assert!(memo.contains("React.memo(SvgMemo)"));

    let index = read(dir.path().join("src/index.ts"));
    assert!(index.contains("export { default as React } from './components/React';"));
}
