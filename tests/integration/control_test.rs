use statline::core::control::{bind, serve, ControlClient, SocketGuard};
use statline::core::OverrideStore;
use statline::StatusError;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;
use tokio::task::JoinHandle;

fn start(dir: &Path) -> (PathBuf, OverrideStore, JoinHandle<()>, SocketGuard) {
    let path = dir.join("status.sock");
    let store = OverrideStore::new();
    let (listener, guard) = bind(&path).unwrap();

    let server_store = store.clone();
    let handle = tokio::spawn(async move {
        let _ = serve(listener, server_store).await;
    });

    (path, store, handle, guard)
}

async fn raw_request(path: &Path, request: &str) -> String {
    let mut stream = UnixStream::connect(path).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

#[tokio::test]
async fn test_client_sets_override() {
    let temp_dir = TempDir::new().unwrap();
    let (path, store, handle, _guard) = start(temp_dir.path());

    ControlClient::new(&path).send("build failed").await.unwrap();
    assert_eq!(&*store.get(), "build failed");

    handle.abort();
}

#[tokio::test]
async fn test_same_body_twice_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let (path, store, handle, _guard) = start(temp_dir.path());
    let client = ControlClient::new(&path);

    client.send("deploying").await.unwrap();
    client.send("deploying").await.unwrap();
    assert_eq!(&*store.get(), "deploying");

    client.send("").await.unwrap();
    assert_eq!(&*store.get(), "");

    handle.abort();
}

#[tokio::test]
async fn test_get_is_rejected_with_use_post() {
    let temp_dir = TempDir::new().unwrap();
    let (path, store, handle, _guard) = start(temp_dir.path());

    let response = raw_request(
        &path,
        "GET / HTTP/1.1\r\nHost: status\r\nConnection: close\r\n\r\n",
    )
    .await;

    assert!(response.starts_with("HTTP/1.1 405"), "{}", response);
    assert!(response.ends_with("Use POST"), "{}", response);
    assert_eq!(&*store.get(), "");

    handle.abort();
}

#[tokio::test]
async fn test_any_path_is_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let (path, store, handle, _guard) = start(temp_dir.path());

    let response = raw_request(
        &path,
        "POST /anything HTTP/1.1\r\nHost: status\r\nContent-Length: 5\r\nConnection: close\r\n\r\nhello",
    )
    .await;

    assert!(response.starts_with("HTTP/1.1 200"), "{}", response);
    assert_eq!(&*store.get(), "hello");

    handle.abort();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_writers_leave_one_whole_value() {
    let temp_dir = TempDir::new().unwrap();
    let (path, store, handle, _guard) = start(temp_dir.path());

    let values: Vec<String> = (0..12)
        .map(|i| char::from(b'a' + i as u8).to_string().repeat(2048))
        .collect();

    let sends: Vec<_> = values
        .iter()
        .cloned()
        .map(|value| {
            let client = ControlClient::new(&path);
            tokio::spawn(async move { client.send(&value).await })
        })
        .collect();

    for send in sends {
        send.await.unwrap().unwrap();
    }

    let last = store.get();
    assert!(values.iter().any(|v| v.as_str() == &*last));

    handle.abort();
}

#[tokio::test]
async fn test_non_ok_status_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("teapot.sock");
    let listener = tokio::net::UnixListener::bind(&path).unwrap();

    // a peer that answers every request with 500
    let server = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 1024];
        let _ = stream.read(&mut buf).await.unwrap();
        stream
            .write_all(b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 4\r\n\r\nboom")
            .await
            .unwrap();
    });

    let err = ControlClient::new(&path).send("hi").await.unwrap_err();
    match err {
        StatusError::Client(text) => {
            assert!(text.contains("500"), "{}", text);
            assert!(text.contains("boom"), "{}", text);
        }
        other => panic!("unexpected error: {:?}", other),
    }

    server.await.unwrap();
}

#[tokio::test]
async fn test_non_post_methods_leave_message_alone() {
    let temp_dir = TempDir::new().unwrap();
    let (path, store, handle, _guard) = start(temp_dir.path());
    store.set("keep me");

    for method in ["PUT", "DELETE", "PATCH"] {
        let request = format!(
            "{} / HTTP/1.1\r\nHost: status\r\nContent-Length: 4\r\nConnection: close\r\n\r\nnope",
            method
        );
        let response = raw_request(&path, &request).await;

        assert!(response.starts_with("HTTP/1.1 405"), "{}", response);
        assert!(response.ends_with("Use POST"), "{}", response);
    }
    assert_eq!(&*store.get(), "keep me");

    handle.abort();
}
