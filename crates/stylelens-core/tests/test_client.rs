mod common;

use stylelens_core::client::ApiClient;
use stylelens_core::config::ClientConfig;
use stylelens_core::error::LensError;

fn test_config(base_url: &str) -> ClientConfig {
    ClientConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
    }
}

#[test]
fn test_analyze_success_parses_result() {
    let (base_url, server) = common::spawn_one_shot_server("200 OK", common::sample_result_body());
    let client = ApiClient::new(&test_config(&base_url)).unwrap();

    let result = client
        .analyze_outfit("outfit.jpg", b"fake image bytes".to_vec())
        .unwrap();

    assert!((result.rating - 8.5).abs() < 1e-9);
    assert_eq!(
        result.color_analysis.primary_colors,
        vec!["#112233", "#445566"]
    );
    assert_eq!(result.skin_tone_analysis.tone, "medium");
    assert_eq!(result.suggestions, vec!["Try a belt"]);
    assert!(result.color_compatibility.is_some());

    server.join().unwrap();
}

#[test]
fn test_analyze_sends_multipart_to_fixed_endpoint() {
    let (base_url, server) = common::spawn_one_shot_server("200 OK", common::sample_result_body());
    let client = ApiClient::new(&test_config(&base_url)).unwrap();

    client
        .analyze_outfit("look.png", b"png-ish payload".to_vec())
        .unwrap();

    let request = String::from_utf8_lossy(&server.join().unwrap()).into_owned();
    assert!(
        request.starts_with("POST /api/analyze-outfit HTTP/1.1"),
        "unexpected request line: {}",
        request.lines().next().unwrap_or_default()
    );
    assert!(request.contains("multipart/form-data"), "got: {request}");
    assert!(request.contains("name=\"file\""), "got: {request}");
    assert!(request.contains("filename=\"look.png\""), "got: {request}");
    assert!(request.contains("image/png"), "got: {request}");
    assert!(request.contains("png-ish payload"), "got: {request}");
}

#[test]
fn test_trailing_slash_in_base_url_is_tolerated() {
    let (base_url, server) = common::spawn_one_shot_server("200 OK", common::sample_result_body());
    let client = ApiClient::new(&test_config(&format!("{base_url}/"))).unwrap();

    client
        .analyze_outfit("outfit.jpg", b"bytes".to_vec())
        .unwrap();

    let request = String::from_utf8_lossy(&server.join().unwrap()).into_owned();
    assert!(
        request.starts_with("POST /api/analyze-outfit "),
        "path was mangled: {}",
        request.lines().next().unwrap_or_default()
    );
}

#[test]
fn test_server_error_maps_to_status() {
    let (base_url, server) = common::spawn_one_shot_server(
        "500 Internal Server Error",
        r#"{"detail": "boom"}"#.to_string(),
    );
    let client = ApiClient::new(&test_config(&base_url)).unwrap();

    let err = client
        .analyze_outfit("outfit.jpg", b"bytes".to_vec())
        .unwrap_err();

    match err {
        LensError::Status { status } => assert_eq!(status, 500),
        other => panic!("expected Status error, got {other:?}"),
    }
    server.join().unwrap();
}

#[test]
fn test_malformed_body_maps_to_malformed_response() {
    let (base_url, server) =
        common::spawn_one_shot_server("200 OK", "this is not json".to_string());
    let client = ApiClient::new(&test_config(&base_url)).unwrap();

    let err = client
        .analyze_outfit("outfit.jpg", b"bytes".to_vec())
        .unwrap_err();

    assert!(
        matches!(err, LensError::MalformedResponse(_)),
        "expected MalformedResponse, got {err:?}"
    );
    server.join().unwrap();
}

#[test]
fn test_valid_json_with_wrong_shape_is_malformed() {
    let (base_url, server) =
        common::spawn_one_shot_server("200 OK", r#"{"rating": "not a number"}"#.to_string());
    let client = ApiClient::new(&test_config(&base_url)).unwrap();

    let err = client
        .analyze_outfit("outfit.jpg", b"bytes".to_vec())
        .unwrap_err();

    assert!(matches!(err, LensError::MalformedResponse(_)));
    server.join().unwrap();
}

#[test]
fn test_client_rejects_invalid_base_url() {
    let err = ApiClient::new(&test_config("localhost:8000")).unwrap_err();
    assert!(matches!(err, LensError::InvalidConfig(_)));
}

#[test]
fn test_unreachable_host_maps_to_transport() {
    // Bind-then-drop gives a port nothing is listening on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = ApiClient::new(&test_config(&format!("http://127.0.0.1:{port}"))).unwrap();

    let err = client
        .analyze_outfit("outfit.jpg", b"bytes".to_vec())
        .unwrap_err();

    assert!(
        matches!(err, LensError::Transport(_)),
        "expected Transport, got {err:?}"
    );
}
