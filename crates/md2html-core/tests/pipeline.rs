//! Snapshot tests for the mdast to HTML pipeline
//!
//! Each fixture is an mdast JSON document rendered into a full page with the
//! fixture configuration.

use std::fs;
use std::path::PathBuf;

use md2html_core::{
    CONFIG_FILE_NAME, Config, Error, NodeKind, RenderError, render_fragment, render_json,
};
use pretty_assertions::assert_eq;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn fixture_config() -> Config {
    let path = fixtures_dir().join(CONFIG_FILE_NAME);
    let content = fs::read_to_string(&path).expect("Failed to read fixture config");
    Config::from_toml_str(&content).expect("Failed to parse fixture config")
}

fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(format!("{}.json", name));
    fs::read_to_string(&path).expect("Failed to read fixture file")
}

fn render_fixture(name: &str) -> String {
    render_json(&read_fixture(name), &fixture_config()).expect("Failed to render fixture")
}

macro_rules! snapshot_test {
    ($name:ident) => {
        #[test]
        fn $name() {
            let html = render_fixture(stringify!($name));
            insta::assert_snapshot!(html);
        }
    };
}

snapshot_test!(basic);
snapshot_test!(lists);
snapshot_test!(references);
snapshot_test!(code);

#[test]
fn unsupported_table_fails() {
    let err = render_json(&read_fixture("table"), &fixture_config()).unwrap_err();
    assert!(matches!(
        err,
        Error::Render(RenderError::Unsupported(NodeKind::Table))
    ));
}

#[test]
fn fragment_skips_page_template() {
    let root = serde_json::from_str(&read_fixture("basic")).unwrap();
    let html = render_fragment(&root, &fixture_config()).unwrap();
    assert_eq!(
        html,
        concat!(
            "\n<h1>Hello</h1>",
            "\n  <p>Some <em>styled</em> and <strong>bold</strong> text.</p><hr>",
            "\n    <p>Bye</p>",
        )
    );
}

#[test]
fn escape_option_applies_to_text() {
    let json = r#"{
        "type": "root",
        "children": [
            {"type": "paragraph", "children": [{"type": "text", "value": "1 < 2 & 3"}]},
            {"type": "html", "value": "<b>kept</b>"}
        ]
    }"#;
    let mut config = Config::default();
    config.writer.escape = true;
    let html = render_fragment(&serde_json::from_str(json).unwrap(), &config).unwrap();
    assert_eq!(html, "\n<p>1 &lt; 2 &amp; 3</p><b>kept</b>\n");
}

#[test]
fn dangling_full_references_keep_visible_text() {
    let json = r#"{
        "type": "root",
        "children": [{
            "type": "paragraph",
            "children": [
                {
                    "type": "linkReference",
                    "identifier": "home",
                    "label": "Home",
                    "referenceType": "full",
                    "children": [{"type": "text", "value": "start"}]
                },
                {"type": "text", "value": " "},
                {
                    "type": "imageReference",
                    "identifier": "chart",
                    "label": "Chart",
                    "alt": "A chart",
                    "referenceType": "full"
                }
            ]
        }]
    }"#;
    let root = serde_json::from_str(json).unwrap();
    let html = render_fragment(&root, &Config::default()).unwrap();
    assert_eq!(html, "\n<p>[start][Home] ![A chart][Chart]</p>");
}
