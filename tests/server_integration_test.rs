use std::io::Write;

use serde_json::{json, Value};
use tempfile::NamedTempFile;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use yob_verify::server;
use yob_verify::{create_router, AppState, CsvRecordSource, RecordStore};

#[tokio::test]
async fn test_end_to_end_over_tcp() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"Name,YOB\nAlice,1990\n").unwrap();
    let store = RecordStore::load(&CsvRecordSource::new(file.path())).unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(server::serve(
        listener,
        create_router(AppState::new(store)),
        async {
            let _ = shutdown_rx.await;
        },
    ));

    let client = reqwest::Client::new();
    let base = format!("http://{}", address);

    let response = client
        .get(format!("{}/verify", base))
        .query(&[("name", "alice"), ("yob", "1990")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.json::<Value>().await.unwrap(), json!({"result": 1}));

    let response = client
        .get(format!("{}/verify?name=Bob&yob=1990", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.json::<Value>().await.unwrap(), json!({"result": 0}));

    let response = client
        .get(format!("{}/verify?yob=1990", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({"error": "Missing required parameters: 'name' and 'yob'"})
    );

    shutdown_tx.send(()).unwrap();
    handle.await.unwrap().unwrap();
}
