//! Loading datasets from JSON files.

use crate::common::{load_sample, SAMPLE_EXPORT};
use klein::{source_for, DatasetSource, Error, FileSource};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.display().to_string()
}

#[test]
fn test_sample_export_loads() {
    let dataset = load_sample();
    assert_eq!(dataset.page_count(), 3);
    assert_eq!(dataset.line_count(), 11);
    assert_eq!(dataset.pages()[1].title, "Rust");
}

#[test]
fn test_bare_page_array_loads() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "pages.json",
        r#"[{"id":"p","title":"T","created":1,"lines":[
            {"id":"l1","text":"hello","updated":2}
        ]}]"#,
    );

    let dataset = FileSource::new(&path).fetch().unwrap();
    assert_eq!(dataset.page_count(), 1);
    // Missing optional fields fall back to defaults.
    let line = &dataset.pages()[0].lines[0];
    assert_eq!(line.created, 0);
    assert_eq!(line.user_id, "");
}

#[test]
fn test_export_and_array_with_same_pages_share_version() {
    let dir = TempDir::new().unwrap();
    let page = r#"{"id":"p","title":"T","created":1,"lines":[{"id":"l1","text":"x","updated":2}]}"#;
    let export = write(&dir, "export.json", &format!(r#"{{"name":"proj","pages":[{}]}}"#, page));
    let array = write(&dir, "array.json", &format!("[{}]", page));

    let a = FileSource::new(&export).fetch().unwrap();
    let b = FileSource::new(&array).fetch().unwrap();
    assert_eq!(a.version(), b.version());
    assert_eq!(a, b);
}

#[test]
fn test_invalid_json_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "broken.json", "{ not json");

    let err = FileSource::new(&path).fetch().unwrap_err();
    assert!(matches!(err, Error::Parse { .. }), "got {:?}", err);
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn test_wrong_shape_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "shape.json", r#"{"pages": 3}"#);

    let err = FileSource::new(&path).fetch().unwrap_err();
    assert!(matches!(err, Error::Parse { .. }), "got {:?}", err);
}

#[test]
fn test_duplicate_line_id_is_malformed() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "dup.json",
        r#"[{"id":"p","title":"T","created":1,"lines":[
            {"id":"l1","text":"a","updated":1},
            {"id":"l1","text":"b","updated":1}
        ]}]"#,
    );

    let err = FileSource::new(&path).fetch().unwrap_err();
    match err {
        Error::MalformedDataset { page_id, .. } => assert_eq!(page_id.as_str(), "p"),
        other => panic!("expected MalformedDataset, got {:?}", other),
    }
}

#[test]
fn test_missing_file_is_source_unavailable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let err = FileSource::new(&path).fetch().unwrap_err();
    assert!(matches!(err, Error::SourceUnavailable { .. }));
}

#[test]
fn test_source_for_path_reads_file() {
    let source = source_for(SAMPLE_EXPORT, Duration::from_secs(1)).unwrap();
    assert_eq!(source.location(), SAMPLE_EXPORT);
    assert_eq!(source.fetch().unwrap().page_count(), 3);
}

#[cfg(feature = "parquet")]
mod parquet {
    use crate::common::{anchors, assert_ordered, SAMPLE_PARQUET, SAMPLE_PARQUET_TWIN};
    use klein::{search, Dataset, DatasetSource, Error, FileSource};
    use std::fs;
    use tempfile::TempDir;

    fn load_parquet() -> Dataset {
        FileSource::new(SAMPLE_PARQUET).fetch().unwrap()
    }

    #[test]
    fn test_parquet_export_loads() {
        let dataset = load_parquet();
        assert_eq!(dataset.page_count(), 3);
        assert_eq!(dataset.line_count(), 6);

        let first = &dataset.pages()[0];
        assert_eq!(first.title, "井戸端2024/06/01");
        assert_eq!(first.created, 1717200000);
        assert_eq!(first.lines[1].text, "[meganii.icon] parquet から読めた");
        assert_eq!(first.lines[1].user_id, "u-meganii");
        assert_eq!(first.lines[1].updated, 1717207200);
        // Empty text survives as the block delimiter.
        assert_eq!(first.lines[2].text, "");
        // A null userId falls back to the default.
        assert_eq!(first.lines[3].user_id, "");

        assert!(dataset.pages()[2].lines.is_empty());
    }

    #[test]
    fn test_parquet_matches_json_twin() {
        let parquet = load_parquet();
        let json = FileSource::new(SAMPLE_PARQUET_TWIN).fetch().unwrap();
        assert_eq!(parquet, json);
        assert_eq!(parquet.version(), json.version());
    }

    #[test]
    fn test_search_over_parquet_export() {
        let results = search(&load_parquet(), "[meganii.icon]");

        assert_ordered(&results);
        assert_eq!(
            anchors(&results),
            vec!["6650b1000000000000000001", "6650a1000000000000000001"]
        );
        assert_eq!(results[0].text, "Parquet\n[meganii.icon] 列指向");
        assert_eq!(
            results[1].text,
            "井戸端2024/06/01\n[meganii.icon] parquet から読めた"
        );
    }

    #[test]
    fn test_format_is_detected_by_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pages.bin");
        fs::copy(SAMPLE_PARQUET, &path).unwrap();

        let dataset = FileSource::new(&path).fetch().unwrap();
        assert_eq!(dataset, load_parquet());
    }

    #[test]
    fn test_truncated_parquet_is_parse_error() {
        let bytes = fs::read(SAMPLE_PARQUET).unwrap();
        let mut truncated = bytes[..100].to_vec();
        truncated.extend_from_slice(b"PAR1");

        let err = Dataset::from_bytes("truncated.parquet", &truncated).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }), "got {:?}", err);
        assert!(err.to_string().contains("truncated.parquet"));
    }
}
