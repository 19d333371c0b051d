use clap::{CommandFactory, Parser};
use repomap::tooling::cli::Cli;

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["repomap", "graph", "listing.json"],
        vec!["repomap", "graph", "-", "--format", "html", "--title", "demo"],
        vec!["repomap", "report", "listing.json", "--page-capacity", "500"],
        vec!["repomap", "report", "-", "--format", "json", "--skip-invalid"],
        vec!["repomap", "summary", "listing.json"],
        vec!["repomap", "annotate", "src", "README.md"],
        vec!["repomap", "config", "show"],
        vec![
            "repomap",
            "--log-level",
            "debug",
            "--log-output",
            "stderr",
            "graph",
            "listing.json",
        ],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_missing_arguments() {
    assert!(Cli::try_parse_from(["repomap", "graph"]).is_err());
    assert!(Cli::try_parse_from(["repomap", "annotate"]).is_err());
    assert!(Cli::try_parse_from(["repomap", "report", "x.json", "--page-capacity", "-3"]).is_err());
}

#[test]
fn top_level_help_lists_commands() {
    let mut command = Cli::command();
    let mut output = Vec::new();
    command.write_long_help(&mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    for token in ["graph", "report", "summary", "annotate", "config", "--workspace"] {
        assert!(output.contains(token), "help should mention {}", token);
    }
}
