use proptest::prelude::*;
use repomap::report::{build_report, Pager};
use repomap::{paginate, Annotator, Entry, ReportLayout};

fn layout() -> impl Strategy<Value = ReportLayout> {
    (0u32..800, 1u32..40, 0u32..200, 0u32..200, 4usize..80).prop_map(
        |(page_capacity, row_height, first_page_offset, page_top_offset, path_width)| ReportLayout {
            page_capacity,
            row_height,
            first_page_offset,
            page_top_offset,
            path_width,
        },
    )
}

fn entries() -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec(
        ("[a-z]{1,12}(/[a-z.]{1,12}){0,6}", any::<bool>()).prop_map(|(path, is_file)| {
            if is_file {
                Entry::file(path)
            } else {
                Entry::directory(path)
            }
        }),
        0..200,
    )
}

proptest! {
    #[test]
    fn pagination_is_loss_free_and_ordered(entries in entries(), layout in layout()) {
        let annotator = Annotator::default();
        let pages = paginate(&entries, |p| annotator.annotate(p), &layout);

        let total: usize = pages.iter().map(|p| p.rows.len()).sum();
        prop_assert_eq!(total, entries.len());
        prop_assert!(pages.iter().all(|p| !p.rows.is_empty()));

        let rows: Vec<_> = pages.iter().flat_map(|p| p.rows.iter()).collect();
        for (row, entry) in rows.iter().zip(entries.iter()) {
            prop_assert_eq!(&row.path, &entry.path);
            prop_assert_eq!(row.kind, entry.kind);
            prop_assert_eq!(&row.annotation, &annotator.annotate(&entry.path));
            prop_assert!(row.display_path.chars().count() <= layout.path_width);
        }
    }

    #[test]
    fn lazy_pager_matches_collected(entries in entries(), layout in layout()) {
        let eager = paginate(&entries, |_| String::new(), &layout);
        let mut lazy = Pager::new(&entries, |_| String::new(), &layout);
        if let Some(first) = eager.first() {
            let next = lazy.next();
            prop_assert_eq!(next.as_ref(), Some(first));
        }
    }
}

#[test]
fn report_json_shape() {
    let entries = vec![Entry::directory("src"), Entry::file("src/App.js")];
    let report = build_report(
        "demo",
        &entries,
        &Annotator::default(),
        &ReportLayout::default(),
    )
    .unwrap();
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["header"]["title"], "demo");
    assert_eq!(value["header"]["total_entries"], 2);
    assert!(value["header"]["generated_at"].is_string());
    let rows = value["pages"][0]["rows"].as_array().unwrap();
    assert_eq!(rows[0]["kind"], "directory");
    assert_eq!(rows[1]["annotation"], "Main Component");
}
