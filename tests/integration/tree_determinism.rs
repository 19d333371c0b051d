use proptest::prelude::*;
use repomap::{Annotator, Entry, EntryKind, TreeBuilder};

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("src".to_string()),
        Just("lib".to_string()),
        Just("index.js".to_string()),
        Just("App.js".to_string()),
        Just("style.css".to_string()),
        Just("README.md".to_string()),
        "[a-c]{1,2}",
    ]
}

fn entry() -> impl Strategy<Value = Entry> {
    (
        prop::collection::vec(segment(), 1..4),
        prop_oneof![Just(EntryKind::File), Just(EntryKind::Directory)],
    )
        .prop_map(|(segments, kind)| Entry {
            path: segments.join("/"),
            kind,
        })
}

fn listing_and_permutation() -> impl Strategy<Value = (Vec<Entry>, Vec<Entry>)> {
    prop::collection::vec(entry(), 0..24).prop_flat_map(|entries| {
        let shuffled = Just(entries.clone()).prop_shuffle();
        (Just(entries), shuffled)
    })
}

proptest! {
    #[test]
    fn build_is_order_independent((entries, shuffled) in listing_and_permutation()) {
        let annotator = Annotator::default();
        let builder = TreeBuilder::new(&annotator);
        let a = builder.build_entries(&entries);
        let b = builder.build_entries(&shuffled);
        prop_assert_eq!(a.canonical(), b.canonical());

        let mut anomalies_a: Vec<String> = a.anomalies.iter().map(|x| x.to_string()).collect();
        let mut anomalies_b: Vec<String> = b.anomalies.iter().map(|x| x.to_string()).collect();
        anomalies_a.sort();
        anomalies_b.sort();
        prop_assert_eq!(anomalies_a, anomalies_b);
    }

    #[test]
    fn build_is_idempotent(entries in prop::collection::vec(entry(), 0..24)) {
        let annotator = Annotator::default();
        let builder = TreeBuilder::new(&annotator);
        prop_assert_eq!(builder.build_entries(&entries), builder.build_entries(&entries));
    }

    #[test]
    fn invariants_hold(entries in prop::collection::vec(entry(), 0..24)) {
        let annotator = Annotator::default();
        let graph = TreeBuilder::new(&annotator).build_entries(&entries);
        prop_assert!(graph.check_invariants().is_ok());
    }

    #[test]
    fn doubling_the_listing_changes_nothing(entries in prop::collection::vec(entry(), 0..16)) {
        let annotator = Annotator::default();
        let builder = TreeBuilder::new(&annotator);
        let mut doubled = entries.clone();
        doubled.extend(entries.iter().cloned());
        prop_assert_eq!(builder.build_entries(&entries).canonical(), builder.build_entries(&doubled).canonical());
    }
}
