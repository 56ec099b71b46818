use sealdrop_client::api_client::StorageApiClient;
use sealdrop_client::config::ClientConfig;
use sealdrop_client::error::ShareError;
use sealdrop_client::types::UploadPackage;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn setup(server: &MockServer) -> StorageApiClient {
    StorageApiClient::new(ClientConfig {
        api_base_url: server.uri(),
        request_timeout_secs: 5,
    })
}

fn dummy_package() -> UploadPackage {
    UploadPackage {
        ciphertext: vec![0xAB; 48],
        iv: [7u8; 12],
        wrapped_key: vec![0xCD; 256],
        filename: "report.pdf".into(),
    }
}

// --- Upload ---

#[tokio::test]
async fn upload_returns_receipt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/files/upload"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "fileId": "f-123" })),
        )
        .mount(&server)
        .await;

    let client = setup(&server);
    let receipt = client.upload_encrypted_file(&dummy_package()).await.unwrap();
    assert_eq!(receipt.file_id, "f-123");
}

#[tokio::test]
async fn upload_server_error_surfaces_as_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/files/upload"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = setup(&server);
    let err = client.upload_encrypted_file(&dummy_package()).await.unwrap_err();
    assert!(matches!(err, ShareError::Api(_)));
}

// --- Metadata ---

#[tokio::test]
async fn get_file_meta_parses_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/files/f-1/meta"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "iv": "AAAAAAAAAAAAAAAA",
            "wrappedKey": "q83v",
            "originalName": "report.pdf"
        })))
        .mount(&server)
        .await;

    let client = setup(&server);
    let meta = client.get_file_meta("f-1").await.unwrap();
    assert_eq!(meta.iv, "AAAAAAAAAAAAAAAA");
    assert_eq!(meta.wrapped_key, "q83v");
    assert_eq!(meta.original_name.as_deref(), Some("report.pdf"));
}

#[tokio::test]
async fn meta_missing_original_name_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/files/f-2/meta"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "iv": "AAAAAAAAAAAAAAAA",
            "wrappedKey": "q83v"
        })))
        .mount(&server)
        .await;

    let client = setup(&server);
    let meta = client.get_file_meta("f-2").await.unwrap();
    assert!(meta.original_name.is_none());
}

#[tokio::test]
async fn unknown_file_meta_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/files/missing/meta"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = setup(&server);
    let err = client.get_file_meta("missing").await.unwrap_err();
    assert!(matches!(err, ShareError::NotFound(_)));
}

// --- Ciphertext download ---

#[tokio::test]
async fn download_returns_raw_bytes() {
    let server = MockServer::start().await;
    let blob = vec![1u8, 2, 3, 4, 255];
    Mock::given(method("GET"))
        .and(path("/api/files/f-1/download"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(blob.clone()))
        .mount(&server)
        .await;

    let client = setup(&server);
    assert_eq!(client.get_encrypted_file_data("f-1").await.unwrap(), blob);
}

#[tokio::test]
async fn unknown_file_download_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/files/missing/download"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = setup(&server);
    let err = client.get_encrypted_file_data("missing").await.unwrap_err();
    assert!(matches!(err, ShareError::NotFound(_)));
}

// --- Key directory ---

#[tokio::test]
async fn public_key_lookup_returns_base64() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/alice/publicKey"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "publicKeyBase64": "c3BraS1ieXRlcw=="
        })))
        .mount(&server)
        .await;

    let client = setup(&server);
    let key = client.get_public_key_base64("alice").await.unwrap();
    assert_eq!(key, "c3BraS1ieXRlcw==");
}

#[tokio::test]
async fn unknown_user_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/nobody/publicKey"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = setup(&server);
    let err = client.get_public_key_base64("nobody").await.unwrap_err();
    assert!(matches!(err, ShareError::NotFound(_)));
}

#[tokio::test]
async fn publish_public_key_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/publicKey"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = setup(&server);
    client.publish_public_key("c3BraS1ieXRlcw==").await.unwrap();
}
