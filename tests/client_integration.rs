//! Integration tests for the client request pipeline.
//!
//! These tests run the full stack (client, transport, protocol) against
//! a local mock HTTP server.

use httpmock::prelude::*;
use simple_http::{Client, Headers, HttpError};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_get_returns_body_text() {
    init_logging();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/get");
        then.status(200)
            .header("Content-Type", "text/plain")
            .body("hello from mock");
    });

    let client = Client::new(&server.base_url()).unwrap();
    let response = client.get("/get").unwrap();

    mock.assert();
    assert_eq!(response.status_code, 200);
    assert!(response.is_success());
    assert_eq!(response.text(), "hello from mock");
}

#[test]
fn test_get_sends_default_headers() {
    init_logging();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/headers")
            .header("Accept", "*/*")
            .header("Connection", "close")
            .header_exists("User-Agent")
            .header_exists("Host");
        then.status(200);
    });

    let client = Client::new(&server.base_url()).unwrap();
    let response = client.get("/headers").unwrap();

    mock.assert();
    assert_eq!(response.status_code, 200);
}

#[test]
fn test_get_with_custom_headers() {
    init_logging();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/")
            .header("Custom-Header", "Hello");
        then.status(200).body("custom header received");
    });

    let client = Client::new(&server.base_url()).unwrap();
    let mut headers = Headers::new();
    headers.insert("Custom-Header", "Hello");
    let response = client.get_with_headers("/", headers).unwrap();

    mock.assert();
    assert_eq!(response.text(), "custom header received");
}

#[test]
fn test_custom_header_overrides_default() {
    init_logging();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/ua")
            .header("User-Agent", "custom-agent/2.0");
        then.status(200);
    });

    let client = Client::new(&server.base_url()).unwrap();
    let response = client
        .get_with_headers("/ua", [("User-Agent", "custom-agent/2.0")])
        .unwrap();

    mock.assert();
    assert_eq!(response.status_code, 200);
}

#[test]
fn test_post_sends_body_and_content_length() {
    init_logging();
    let server = MockServer::start();
    let post_data = "token=123456&name=example";
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/post")
            .header("Content-Length", post_data.len().to_string())
            .body(post_data);
        then.status(200).body("post received");
    });

    let client = Client::new(&server.base_url()).unwrap();
    let response = client.post("/post", post_data).unwrap();

    mock.assert();
    assert_eq!(response.text(), "post received");
}

#[test]
fn test_post_with_custom_headers() {
    init_logging();
    let server = MockServer::start();
    let post_data = "token=123456&name=example";
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/post")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Custom-Header", "TestValue")
            .body(post_data);
        then.status(200).body("ok");
    });

    let client = Client::new(&server.base_url()).unwrap();
    let headers = Headers::from([
        ("Content-Type", "application/x-www-form-urlencoded"),
        ("Custom-Header", "TestValue"),
    ]);
    let response = client
        .post_with_headers("/post", post_data, headers)
        .unwrap();

    mock.assert();
    assert_eq!(response.status_code, 200);
}

#[test]
fn test_404_is_returned_not_an_error() {
    init_logging();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/missing");
        then.status(404).body("not here");
    });

    let client = Client::new(&server.base_url()).unwrap();
    let response = client.get("/missing").unwrap();

    assert_eq!(response.status_code, 404);
    assert!(!response.is_success());
    assert_eq!(response.text(), "not here");
}

#[test]
fn test_response_headers_accessible() {
    init_logging();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/typed");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(r#"{"ok":true}"#);
    });

    let client = Client::new(&server.base_url()).unwrap();
    let response = client.get("/typed").unwrap();

    assert_eq!(response.header("content-type"), Some("application/json"));
    assert_eq!(response.utf8().unwrap(), r#"{"ok":true}"#);
}

#[test]
fn test_body_representations_agree() {
    init_logging();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/body");
        then.status(200).body("payload-123");
    });

    let client = Client::new(&server.base_url()).unwrap();
    let response = client.get("/body").unwrap();

    assert_eq!(response.text(), "payload-123");
    assert_eq!(response.utf8().unwrap(), "payload-123");
    assert_eq!(response.bytes(), b"payload-123");
    assert_eq!(response.into_bytes(), b"payload-123".to_vec());
}

#[test]
fn test_binary_body_round_trip() {
    init_logging();
    let server = MockServer::start();
    let payload: Vec<u8> = vec![0x00, 0xFF, 0x7F, 0x80, 0x01];
    server.mock(|when, then| {
        when.method(GET).path("/binary");
        then.status(200).body(payload.clone());
    });

    let client = Client::new(&server.base_url()).unwrap();
    let response = client.get("/binary").unwrap();

    assert_eq!(response.bytes(), payload.as_slice());
    assert!(matches!(response.utf8(), Err(HttpError::NonUtf8Body)));
}

#[test]
fn test_head_request_has_no_body() {
    init_logging();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::HEAD).path("/head");
        then.status(200).header("Content-Length", "1234");
    });

    let client = Client::new(&server.base_url()).unwrap();
    let response = client.head("/head").unwrap();

    mock.assert();
    assert_eq!(response.status_code, 200);
    assert!(response.bytes().is_empty());
}

#[test]
fn test_base_url_with_path_prefix() {
    init_logging();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/users");
        then.status(200).body("users");
    });

    let base = format!("{}/api/v1/", server.base_url());
    let client = Client::new(&base).unwrap();
    let response = client.get("users").unwrap();

    mock.assert();
    assert_eq!(response.text(), "users");
}

#[test]
fn test_query_string_preserved() {
    init_logging();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/search")
            .query_param("q", "rust")
            .query_param("page", "2");
        then.status(200);
    });

    let client = Client::new(&server.base_url()).unwrap();
    let response = client.get("/search?q=rust&page=2").unwrap();

    mock.assert();
    assert_eq!(response.status_code, 200);
}

#[test]
fn test_connection_refused_is_network_error() {
    init_logging();
    // Bind then drop to find a port with nothing listening.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = Client::new(&format!("http://127.0.0.1:{}", port)).unwrap();
    let result = client.get("/get");
    assert!(matches!(result, Err(HttpError::Network(_))));
}

#[test]
fn test_error_is_printable_at_top_level() {
    init_logging();
    // The caller-side contract: one catchable, printable error.
    let run = || -> Result<String, HttpError> {
        let client = Client::new("https://127.0.0.1:1")?;
        Ok(client.get("/")?.text().into_owned())
    };
    match run() {
        Ok(_) => panic!("https base URL must be rejected"),
        Err(e) => {
            let printed = format!("HTTP request failed: {}", e);
            assert!(printed.contains("Unsupported URL scheme"));
        }
    }
}
