use std::fs;
use std::path::PathBuf;

use repomap::config::RepoMapConfig;
use repomap::tooling::cli::{CliContext, Commands, ConfigCommands};
use tempfile::TempDir;

const LISTING: &str = r#"{
  "sha": "abc",
  "tree": [
    {"path": "client", "type": "tree"},
    {"path": "client/src/App.js", "type": "blob"},
    {"path": "server/index.js", "type": "blob"},
    {"path": "README.md", "type": "blob"}
  ],
  "truncated": false
}"#;

fn write_listing(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

fn context() -> CliContext {
    let config = RepoMapConfig {
        color: false,
        ..RepoMapConfig::default()
    };
    CliContext::with_config(config)
}

#[test]
fn graph_json_contract_has_nodes_and_links() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_listing(&temp_dir, "repo.json", LISTING);

    let output = context()
        .execute(&Commands::Graph {
            input,
            format: "json".to_string(),
            title: None,
            skip_invalid: false,
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let nodes = parsed["nodes"].as_array().unwrap();
    let links = parsed["links"].as_array().unwrap();
    // root, client, client/src, client/src/App.js, server, server/index.js, README.md
    assert_eq!(nodes.len(), 7);
    assert_eq!(links.len(), 6);
    assert!(links
        .iter()
        .all(|l| l["source"].is_string() && l["target"].is_string()));
    let client = nodes.iter().find(|n| n["id"] == "client").unwrap();
    assert_eq!(client["desc"], "Frontend UI");
    assert_eq!(client["kind"], "directory");
}

#[test]
fn graph_html_export_uses_title() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_listing(&temp_dir, "my-repo.json", LISTING);

    let output = context()
        .execute(&Commands::Graph {
            input,
            format: "html".to_string(),
            title: None,
            skip_invalid: false,
        })
        .unwrap();
    assert!(output.contains("<title>my-repo 3D</title>"));
}

#[test]
fn report_text_lists_every_entry() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_listing(&temp_dir, "repo.json", LISTING);

    let output = context()
        .execute(&Commands::Report {
            input,
            format: "text".to_string(),
            title: Some("Demo".to_string()),
            page_capacity: None,
            skip_invalid: false,
        })
        .unwrap();

    assert!(output.starts_with("Report: Demo"));
    for path in ["client", "client/src/App.js", "server/index.js", "README.md"] {
        assert!(output.contains(path), "missing {}", path);
    }
    assert!(output.contains("Documentation"));
}

#[test]
fn report_page_capacity_override() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_listing(&temp_dir, "repo.json", LISTING);

    let output = context()
        .execute(&Commands::Report {
            input,
            format: "json".to_string(),
            title: None,
            page_capacity: Some(0),
            skip_invalid: false,
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    // Capacity zero forces one row per page.
    assert_eq!(parsed["pages"].as_array().unwrap().len(), 4);
}

#[test]
fn invalid_entry_fails_unless_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_listing(
        &temp_dir,
        "bad.json",
        r#"[{"path":"a.js","type":"blob"},{"path":"vendor/x","type":"commit"}]"#,
    );
    let ctx = context();

    let err = ctx
        .execute(&Commands::Summary {
            input: input.clone(),
            format: "json".to_string(),
            skip_invalid: false,
        })
        .unwrap_err();
    assert!(err.to_string().contains("commit"));

    let output = ctx
        .execute(&Commands::Summary {
            input,
            format: "json".to_string(),
            skip_invalid: true,
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["nodes"], 2);
    assert_eq!(parsed["files"], 1);
}

#[test]
fn summary_text_reports_conflicts() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_listing(
        &temp_dir,
        "conflict.json",
        r#"[{"path":"docs","type":"blob"},{"path":"docs/a.md","type":"blob"}]"#,
    );

    let output = context()
        .execute(&Commands::Summary {
            input,
            format: "text".to_string(),
            skip_invalid: false,
        })
        .unwrap();
    assert!(output.contains("Anomalies (1)"));
    assert!(output.contains("docs"));
}

#[test]
fn unsupported_format_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_listing(&temp_dir, "repo.json", LISTING);
    let result = context().execute(&Commands::Graph {
        input,
        format: "svg".to_string(),
        title: None,
        skip_invalid: false,
    });
    assert!(result.is_err());
}

#[test]
fn workspace_config_drives_annotations() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("repomap.toml"),
        r#"
[annotations]
replace_defaults = true

[[annotations.names]]
name = "README.md"
label = "Start Here"
"#,
    )
    .unwrap();

    let ctx = CliContext::new(temp_dir.path().to_path_buf(), None).unwrap();
    let output = ctx
        .execute(&Commands::Annotate {
            paths: vec!["README.md".to_string(), "index.js".to_string()],
        })
        .unwrap();
    assert_eq!(output, "README.md\tStart Here\nindex.js\t");

    let shown = ctx
        .execute(&Commands::Config {
            command: ConfigCommands::Show,
        })
        .unwrap();
    assert!(shown.contains("Start Here"));
}

#[test]
fn missing_config_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let result = CliContext::new(
        temp_dir.path().to_path_buf(),
        Some(temp_dir.path().join("nope.toml")),
    );
    assert!(result.is_err());
}
