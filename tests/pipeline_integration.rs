mod common;

use common::{TestItem, fixture_registry};
use mediaindex::{
    ExtractionScope, FieldMapping, FieldStore, ItemOutcome, MediaDescriptor, on_attach,
    on_upload,
};

const REPORT: &str = "Héllo, wörld!\n\u{c}日本語 テスト\n---\nTitle:  Hello World  \nKeywords:\nSubject:  Quarterly numbers \n";

#[test]
fn upload_writes_content_and_metadata() {
    let registry = fixture_registry(1000);
    let mut items = vec![TestItem::pdf("/media/report", REPORT, 2)];

    let reports = on_upload(&mut items, &registry, &FieldMapping::default());

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].path, "/media/report");
    let ItemOutcome::Indexed(report) = reports[0].outcome else {
        panic!("item not indexed: {:?}", reports[0].outcome);
    };
    assert!(report.content_written);
    assert_eq!(report.versions_edited, 2);
    assert_eq!(report.metadata_fields_written, 4);

    let item = &items[0];
    assert_eq!(item.shared.get("_Content"), "Héllo wörld\n日本語 テスト\n");
    for version in &item.versions {
        assert_eq!(version.get("Title"), "Hello World");
        assert_eq!(version.get("Keywords"), "");
        assert_eq!(version.get("Description"), "Quarterly numbers");
        assert!(!version.editing);
    }
    assert!(!item.shared.editing);
}

#[test]
fn attach_without_item_does_nothing() {
    let registry = fixture_registry(1000);
    let report = on_attach::<TestItem>(None, &registry, &FieldMapping::default());
    assert!(report.is_none());
}

#[test]
fn attach_indexes_single_item() {
    let registry = fixture_registry(1000);
    let mut item = TestItem::pdf("/media/attached", "Attached file body\n", 1);

    let report = on_attach(Some(&mut item), &registry, &FieldMapping::default())
        .expect("item given");
    assert!(matches!(report.outcome, ItemOutcome::Indexed(r) if r.content_written));
    assert_eq!(item.shared.get("_Content"), "Attached file body\n");
}

#[test]
fn cutoff_scenario_stops_at_next_delimiter() {
    let registry = fixture_registry(10);
    let body = "word ".repeat(100);
    let mut item = TestItem::pdf("/media/words", &body, 0);

    let result = registry
        .extract(&item, ExtractionScope::ContentAndMetadata)
        .expect("extracts");
    assert!(result.truncated);
    assert_eq!(result.normalized_content, "word word word");
    assert_eq!(result.char_count, 14);

    on_upload(std::slice::from_mut(&mut item), &registry, &FieldMapping::default());
    assert_eq!(item.shared.get("_Content"), "word word word");
}

#[test]
fn pages_after_cutoff_are_never_read() {
    // the third page would fail to read if it were ever requested
    let body = "alpha beta gamma delta\n\u{c}epsilon\n\u{c}!badpage\n";
    let registry = fixture_registry(5);
    let item = TestItem::pdf("/media/long", body, 0);

    let result = registry
        .extract(&item, ExtractionScope::ContentAndMetadata)
        .expect("cutoff stops before the bad page");
    assert!(result.truncated);
    assert_eq!(result.pages_read, 1);
    assert_eq!(result.normalized_content, "alpha beta");
}

#[test]
fn item_without_content_field_gets_metadata_only() {
    let registry = fixture_registry(1000);
    let mut items = vec![TestItem::pdf("/media/no-content", REPORT, 1).without_content_field()];

    let reports = on_upload(&mut items, &registry, &FieldMapping::default());
    let ItemOutcome::Indexed(report) = reports[0].outcome else {
        panic!("item not indexed");
    };
    assert!(!report.content_written);
    assert_eq!(report.metadata_fields_written, 2);
    assert!(!items[0].shared.has_field("_Content"));
    assert_eq!(items[0].versions[0].get("Title"), "Hello World");
}

#[test]
fn blank_metadata_never_clears_existing_values() {
    let registry = fixture_registry(1000);
    let mut item = TestItem::pdf("/media/blank", "Body\n---\nTitle:   \n", 1);
    item.versions[0]
        .values
        .insert("Title".into(), "Curated title".into());
    item.versions[0]
        .values
        .insert("Keywords".into(), "curated, keywords".into());

    on_upload(std::slice::from_mut(&mut item), &registry, &FieldMapping::default());

    let version = &item.versions[0];
    assert_eq!(version.get("Title"), "Curated title");
    assert_eq!(version.get("Keywords"), "curated, keywords");
    assert_eq!(version.edits, 0);
}

#[test]
fn reindexing_unchanged_item_opens_no_edit() {
    let registry = fixture_registry(1000);
    let mapping = FieldMapping::default();
    let mut item = TestItem::pdf("/media/again", REPORT, 1);

    on_upload(std::slice::from_mut(&mut item), &registry, &mapping);
    assert_eq!(item.shared.edits, 1);
    assert_eq!(item.versions[0].edits, 1);

    let reports = on_upload(std::slice::from_mut(&mut item), &registry, &mapping);
    let ItemOutcome::Indexed(report) = reports[0].outcome else {
        panic!("item not indexed");
    };
    assert!(!report.changed_anything());
    assert_eq!(item.shared.edits, 1);
    assert_eq!(item.versions[0].edits, 1);
}

#[test]
fn custom_field_mapping_is_honoured() {
    let registry = fixture_registry(1000);
    let mapping = FieldMapping {
        content: "Body".into(),
        title: "Heading".into(),
        keywords: "Tags".into(),
        description: "Summary".into(),
    };
    let mut item = TestItem::pdf("/media/custom", REPORT, 1);
    item.shared = common::Fields::with(&["Body"]);
    item.versions = vec![common::Fields::with(&["Heading", "Tags", "Summary"])];

    on_upload(std::slice::from_mut(&mut item), &registry, &mapping);

    assert_eq!(item.shared.get("Body"), "Héllo wörld\n日本語 テスト\n");
    assert_eq!(item.versions[0].get("Heading"), "Hello World");
    assert_eq!(item.versions[0].get("Summary"), "Quarterly numbers");
}

#[test]
fn non_pdf_items_are_skipped_untouched() {
    let registry = fixture_registry(1000);
    let mut items = vec![
        TestItem::pdf("/media/photo", REPORT, 1)
            .with_descriptor(MediaDescriptor::new("jpg", "image/jpeg")),
        TestItem::pdf("/media/upper", REPORT, 1)
            .with_descriptor(MediaDescriptor::new("PDF", "application/octet-stream")),
        TestItem::pdf("/media/by-mime", REPORT, 1)
            .with_descriptor(MediaDescriptor::new("bin", "application/pdf")),
    ];

    let reports = on_upload(&mut items, &registry, &FieldMapping::default());

    assert_eq!(reports[0].outcome, ItemOutcome::Unsupported);
    assert!(items[0].untouched());
    assert!(matches!(reports[1].outcome, ItemOutcome::Indexed(_)));
    assert!(matches!(reports[2].outcome, ItemOutcome::Indexed(_)));
}
