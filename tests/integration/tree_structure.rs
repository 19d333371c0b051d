use repomap::tree::{NodeKind, ROOT_ID};
use repomap::{Annotator, RawEntry, TreeBuilder};
use std::collections::BTreeSet;

fn raw(entries: &[(&str, &str)]) -> Vec<RawEntry> {
    entries
        .iter()
        .map(|(path, kind)| RawEntry::new(*path, *kind))
        .collect()
}

fn distinct_prefixes(entries: &[RawEntry]) -> BTreeSet<String> {
    let mut set = BTreeSet::new();
    for entry in entries {
        let parts: Vec<&str> = entry.path.split('/').collect();
        for n in 1..=parts.len() {
            set.insert(parts[..n].join("/"));
        }
    }
    set
}

#[test]
fn node_count_is_root_plus_distinct_prefixes() {
    let entries = raw(&[
        ("client/src/App.js", "blob"),
        ("client/src/index.js", "blob"),
        ("client/public/index.html", "blob"),
        ("server/index.js", "blob"),
        ("server", "tree"),
        ("client/src/App.js", "blob"),
        ("README.md", "blob"),
    ]);
    let annotator = Annotator::default();
    let graph = TreeBuilder::new(&annotator).build(&entries).unwrap();

    assert_eq!(graph.nodes.len(), 1 + distinct_prefixes(&entries).len());
    assert_eq!(graph.edges.len(), graph.nodes.len() - 1);
    graph.check_invariants().unwrap();
}

#[test]
fn every_implied_ancestor_is_a_directory() {
    let entries = raw(&[("a/b/c/d.txt", "blob"), ("x/y.txt", "blob")]);
    let annotator = Annotator::default();
    let graph = TreeBuilder::new(&annotator).build(&entries).unwrap();

    for id in ["a", "a/b", "a/b/c", "x"] {
        let node = graph.node(id).unwrap();
        assert_eq!(node.kind, NodeKind::Directory, "{} should be a directory", id);
        assert_eq!(node.annotation, None);
    }
    assert_eq!(graph.node("a/b/c/d.txt").unwrap().kind, NodeKind::File);
}

#[test]
fn original_example_listing() {
    let entries = raw(&[("src/index.js", "blob")]);
    let annotator = Annotator::default();
    let graph = TreeBuilder::new(&annotator).build(&entries).unwrap();

    let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec![ROOT_ID, "src", "src/index.js"]);
    assert_eq!(graph.nodes[0].kind, NodeKind::Root);
    assert_eq!(
        graph.nodes[2].annotation.as_deref(),
        Some("Entry Point")
    );

    let export = serde_json::to_value(graph.to_export()).unwrap();
    assert_eq!(
        export["links"],
        serde_json::json!([
            {"source": "root", "target": "src"},
            {"source": "src", "target": "src/index.js"}
        ])
    );
}

#[test]
fn empty_listing_is_root_only() {
    let annotator = Annotator::default();
    let graph = TreeBuilder::new(&annotator).build(&[]).unwrap();
    let export = serde_json::to_value(graph.to_export()).unwrap();
    assert_eq!(export["nodes"].as_array().unwrap().len(), 1);
    assert_eq!(export["links"], serde_json::json!([]));
}

#[test]
fn malformed_entry_produces_no_graph() {
    let annotator = Annotator::default();
    let result = TreeBuilder::new(&annotator).build(&raw(&[
        ("src/index.js", "blob"),
        ("", "blob"),
    ]));
    let err = result.unwrap_err();
    assert_eq!(err.index, 1);
    assert!(err.to_string().contains("path is empty"));
}
