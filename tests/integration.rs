use snapdoc::{BinaryDetection, SnapdocBuilder, SnapdocOptions, WalkErrorPolicy, generate};
use std::fs;
use tempfile::tempdir;
#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("frontend");
    fs::create_dir_all(root.join("src/screens")).unwrap();
    fs::write(root.join("App.js"), "export default App;").unwrap();
    fs::write(root.join("src/screens/Home.jsx"), "<Home />\n\tdone").unwrap();
    fs::write(root.join("icon.png"), [137u8, 80, 78, 71]).unwrap();
    fs::create_dir_all(root.join("node_modules/react")).unwrap();
    fs::write(root.join("node_modules/react/index.js"), "x").unwrap();
    let output = dir.path().join("out/docs/frontend.docx");
    let options = SnapdocBuilder::new(&root).output(&output).build();
    let report = generate(options).unwrap();
    assert_eq!(report.output, output);
    assert_eq!(report.files_written, 2);
    assert_eq!(report.files_skipped, 1);
    assert!(report.walk_errors.is_empty());
    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"PK"));
}
#[test]
fn integration_options_from_json() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("snapdoc.json");
    fs::write(
        &config,
        r#"{
            "root": "/srv/project",
            "output": "/tmp/project.docx",
            "exclude_dirs": ["target"],
            "allowed_extensions": [".rs", "toml"],
            "binary_detection": "accurate",
            "on_walk_error": "abort"
        }"#,
    )
    .unwrap();
    let options = SnapdocOptions::from_json_file(&config).unwrap();
    assert_eq!(options.root, std::path::PathBuf::from("/srv/project"));
    assert_eq!(options.exclude_dirs, vec!["target".to_string()]);
    assert_eq!(options.binary_detection, BinaryDetection::Accurate);
    assert_eq!(options.on_walk_error, WalkErrorPolicy::Abort);
    assert_eq!(options.chunk_size, 1000);
    assert_eq!(options.code_font, "Courier New");
}
#[test]
fn integration_bad_config_is_reported() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("broken.json");
    fs::write(&config, "{ not json").unwrap();
    let err = SnapdocOptions::from_json_file(&config).unwrap_err();
    assert!(err.to_string().contains("broken.json"));
}
