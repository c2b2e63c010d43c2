use std::io::Write;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tempfile::{NamedTempFile, TempDir};
use tower::ServiceExt;
use yob_verify::{create_router, AppState, CsvRecordSource, RecordLookup, RecordStore, VerifyError};

fn csv_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_mock_database() {
    let file = csv_file("Name,YOB\nAlice,1990\nBob,1985\nCarol,2001\n");
    let store = RecordStore::load(&CsvRecordSource::new(file.path())).unwrap();

    assert_eq!(store.len(), 3);
    assert!(store.find("bob", "1985").unwrap());
    assert!(!store.find("bob", "1990").unwrap());
}

#[test]
fn test_year_of_birth_is_normalized_on_load_only() {
    let file = csv_file("Name,YOB\nAlice, 01990\n");
    let store = RecordStore::load(&CsvRecordSource::new(file.path())).unwrap();

    assert!(store.find("Alice", "1990").unwrap());
    assert!(!store.find("Alice", "01990").unwrap());
    assert!(!store.find("Alice", "90").unwrap());
}

#[test]
fn test_quoted_fields() {
    let file = csv_file("Name,YOB,Notes\n\"Smith, Jane\",1970,\"likes \"\"tea\"\"\"\n");
    let store = RecordStore::load(&CsvRecordSource::new(file.path())).unwrap();

    assert!(store.find("smith, jane", "1970").unwrap());
}

#[test]
fn test_missing_yob_column_fails_load() {
    let file = csv_file("Name,Age\nAlice,34\n");
    let err = RecordStore::load(&CsvRecordSource::new(file.path())).unwrap_err();

    assert!(matches!(err, VerifyError::MissingColumn { ref column } if column == "YOB"));
}

#[test]
fn test_missing_file_gives_empty_store() {
    let dir = TempDir::new().unwrap();
    let source = CsvRecordSource::new(dir.path().join("mock_database.csv"));
    let store = RecordStore::load(&source).unwrap();

    assert!(store.is_empty());
}

#[tokio::test]
async fn test_degraded_mode_never_errors() {
    let dir = TempDir::new().unwrap();
    let source = CsvRecordSource::new(dir.path().join("mock_database.csv"));
    let store = RecordStore::load(&source).unwrap();
    let router = create_router(AppState::new(store));

    for uri in [
        "/verify?name=Alice&yob=1990",
        "/verify?name=bob&yob=1985",
        "/verify?name=x&yob=y",
    ] {
        let response = router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"result": 0}));
    }
}
