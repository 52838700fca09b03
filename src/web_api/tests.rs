use super::*;
use crate::model::enums::ResultCode;
use httpmock::prelude::*;
use serde_json::json;

fn api_for(server: &MockServer, timeout_secs: u64) -> SteamWebApi {
    SteamWebApi::new(&WebApiSettings {
        base_url: server.base_url(),
        key: None,
        timeout_secs,
    })
    .unwrap()
}

#[tokio::test]
async fn parses_player_count() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/ISteamUserStats/GetNumberOfCurrentPlayers/v1/")
                .query_param("appid", "570");
            then.status(200)
                .json_body(json!({"response": {"player_count": 654321, "result": 1}}));
        })
        .await;

    let count = api_for(&server, 5).current_players(570).await.unwrap();

    mock.assert_async().await;
    assert!(count.result.is_ok());
    assert_eq!(count.player_count, 654321);
}

#[tokio::test]
async fn sends_key_when_configured() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/ISteamUserStats/GetNumberOfCurrentPlayers/v1/")
                .query_param("appid", "440")
                .query_param("key", "SECRET");
            then.status(200)
                .json_body(json!({"response": {"player_count": 1, "result": 1}}));
        })
        .await;

    let api = SteamWebApi::new(&WebApiSettings {
        base_url: format!("{}/", server.base_url()),
        key: Some("SECRET".to_owned()),
        timeout_secs: 5,
    })
    .unwrap();
    api.current_players(440).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn failed_result_is_not_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200).json_body(json!({"response": {"result": 42}}));
        })
        .await;

    let count = api_for(&server, 5).current_players(1).await.unwrap();

    assert_eq!(count.result, ResultCode::from_raw(42));
    assert_eq!(count.player_count, 0);
}

#[tokio::test]
async fn ok_without_count_is_a_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200).json_body(json!({"response": {"result": 1}}));
        })
        .await;

    let result = api_for(&server, 5).current_players(1).await;

    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[tokio::test]
async fn http_error_reports_status_text() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(503);
        })
        .await;

    let result = api_for(&server, 5).current_players(1).await;

    match result {
        Err(ApiError::Status(text)) => assert_eq!(text, "503 Service Unavailable"),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200)
                .delay(Duration::from_secs(3))
                .json_body(json!({"response": {"player_count": 1, "result": 1}}));
        })
        .await;

    let result = api_for(&server, 1).current_players(1).await;

    assert!(matches!(result, Err(ApiError::Timeout(_))));
}

#[tokio::test]
async fn transport_error_omits_request_url() {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let api = SteamWebApi::new(&WebApiSettings {
        base_url: format!("http://127.0.0.1:{}/", port),
        key: Some("SUPERSECRETKEY".to_owned()),
        timeout_secs: 5,
    })
    .unwrap();

    let error = api.current_players(620).await.unwrap_err();

    assert!(matches!(error, ApiError::Transport(_)));
    assert!(!error.to_string().contains("SUPERSECRETKEY"));
    assert!(!format!("{:?}", error).contains("SUPERSECRETKEY"));
    assert_eq!(error.public_reason(), "request failed");
}

#[test]
fn rejects_invalid_base_url() {
    let result = SteamWebApi::new(&WebApiSettings {
        base_url: "not a url".to_owned(),
        key: None,
        timeout_secs: 5,
    });
    assert!(result.is_err());
}
