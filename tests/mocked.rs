use mockito::Matcher;
use std::time::Duration;
use yadisk::operation::OperationStatus;
use yadisk::{Client, ClientBuilder, Credentials};

fn init() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn client(server: &mockito::ServerGuard) -> Client {
    init();
    ClientBuilder::default()
        .with_base_url(server.url())
        .with_credentials(Credentials::oauth("access-token"))
        .with_timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

#[tokio::test]
async fn copy_then_poll() {
    let mut server = mockito::Server::new_async().await;
    let copy = server
        .mock("POST", "/resources/copy")
        .match_header("authorization", "OAuth access-token")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("from".into(), "app:/photos".into()),
            Matcher::UrlEncoded("path".into(), "app:/photos-backup".into()),
        ]))
        .with_status(202)
        .with_body(format!(
            r#"{{"href": "{}/operations/0a1b2c", "method": "GET", "templated": false}}"#,
            server.url()
        ))
        .create_async()
        .await;
    let poll = server
        .mock("GET", "/operations/0a1b2c")
        .match_header("authorization", "OAuth access-token")
        .with_status(200)
        .with_body(r#"{"status": "success"}"#)
        .expect(2)
        .create_async()
        .await;
    let client = client(&server);
    let status = client.copy("app:/photos", "app:/photos-backup").await.unwrap();
    let id = status.operation_id().unwrap().to_owned();
    assert_eq!(
        client.get_operation_status(&id).await.unwrap(),
        OperationStatus::Success
    );
    assert_eq!(
        client.get_operation_status(&id).await.unwrap(),
        OperationStatus::Success
    );
    copy.assert_async().await;
    poll.assert_async().await;
}

#[tokio::test]
async fn round_trip_through_presigned_urls() {
    let mut server = mockito::Server::new_async().await;
    let upload_link = server
        .mock("GET", "/resources/upload")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("path".into(), "app:/notes.txt".into()),
            Matcher::UrlEncoded("overwrite".into(), "false".into()),
        ]))
        .with_status(200)
        .with_body(format!(
            r#"{{"href": "{}/put/notes", "method": "PUT", "templated": false}}"#,
            server.url()
        ))
        .create_async()
        .await;
    let upload = server
        .mock("PUT", "/put/notes")
        .match_header("authorization", Matcher::Missing)
        .match_body("some notes")
        .with_status(202)
        .create_async()
        .await;
    let download_link = server
        .mock("GET", "/resources/download")
        .match_query(Matcher::UrlEncoded("path".into(), "app:/notes.txt".into()))
        .with_status(200)
        .with_body(format!(
            r#"{{"href": "{}/get/notes", "method": "GET", "templated": false}}"#,
            server.url()
        ))
        .create_async()
        .await;
    let download = server
        .mock("GET", "/get/notes")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body("some notes")
        .create_async()
        .await;

    let root = tempfile::TempDir::new().unwrap();
    let source = root.path().join("source.txt");
    let target = root.path().join("target.txt");
    std::fs::write(&source, "some notes").unwrap();

    let client = client(&server);
    let sent = client
        .upload_file("app:/notes.txt", &source, false)
        .await
        .unwrap();
    assert_eq!(sent.status, 202);
    let received = client
        .download_file("app:/notes.txt", &target)
        .await
        .unwrap();
    assert_eq!(received.status, 200);
    assert_eq!(received.size, sent.size);
    assert_eq!(std::fs::read_to_string(&target).unwrap(), "some notes");

    upload_link.assert_async().await;
    upload.assert_async().await;
    download_link.assert_async().await;
    download.assert_async().await;
}

#[tokio::test]
async fn expired_deadline_never_reaches_server() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("GET", "/")
        .with_status(200)
        .expect(0)
        .create_async()
        .await;
    let client = client(&server).with_deadline(std::time::Instant::now());
    let err = client.get_disk_info().await.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.status(), None);
    m.assert_async().await;
}
