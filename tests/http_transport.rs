//! End-to-end tests for `CoinsHttp` against a local mock server.

#![cfg(feature = "http")]

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use coins_sdk::prelude::*;

const KEY: &str = "live-key";

fn client_for(server: &MockServer) -> CoinsClient<CoinsHttp, ApiKeyStore> {
    CoinsClientBuilder::new()
        .base_url(&server.uri())
        .api_key(KEY)
        .build()
        .expect("client builds")
}

#[tokio::test]
async fn get_coin_sends_query_and_api_key_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/coin"))
        .and(query_param("address", "0xabc"))
        .and(query_param("chain", "8453"))
        .and(header("api-key", KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "zora20Token": { "name": "Mock Coin", "address": "0xabc" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resp = client
        .coins()
        .get(GetCoinQuery::new("0xabc").chain(8453), None)
        .await
        .unwrap();

    assert_eq!(resp.status, 200);
    assert_eq!(
        resp.data.zora20_token.and_then(|c| c.name).as_deref(),
        Some("Mock Coin")
    );
}

#[tokio::test]
async fn get_many_repeats_encoded_coins_param() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/coins"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "zora20Tokens": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resp = client
        .coins()
        .get_many(
            GetCoinsQuery::new([
                CoinIdentifier::new(1, "0xabc"),
                CoinIdentifier::new(8453, "0xdef"),
            ]),
            None,
        )
        .await
        .unwrap();
    assert!(resp.data.zora20_tokens.is_empty());

    let requests = server.received_requests().await.expect("recording enabled");
    let coins: Vec<String> = requests[0]
        .url
        .query_pairs()
        .filter(|(k, _)| k == "coins")
        .map(|(_, v)| v.into_owned())
        .collect();
    assert_eq!(
        coins,
        vec![
            r#"{"chainId":1,"collectionAddress":"0xabc"}"#.to_string(),
            r#"{"chainId":8453,"collectionAddress":"0xdef"}"#.to_string(),
        ]
    );
}

#[tokio::test]
async fn profile_page_query_explodes_chain_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profileBalances"))
        .and(query_param("identifier", "jacob"))
        .and(query_param("count", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "profile": {
                "handle": "jacob",
                "coinBalances": {
                    "edges": [{ "node": { "balance": "5" } }],
                    "pageInfo": { "endCursor": "next", "hasNextPage": true }
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resp = client
        .profiles()
        .balances(
            ProfilePageQuery::new("jacob").count(2).chain_ids([8453, 84532]),
            None,
        )
        .await
        .unwrap();

    let balances = resp.data.profile.unwrap().coin_balances;
    assert_eq!(balances.next_cursor(), Some("next"));

    let requests = server.received_requests().await.unwrap();
    let chain_ids: Vec<String> = requests[0]
        .url
        .query_pairs()
        .filter(|(k, _)| k == "chainIds")
        .map(|(_, v)| v.into_owned())
        .collect();
    assert_eq!(chain_ids, vec!["8453", "84532"]);
}

#[tokio::test]
async fn per_call_base_url_override_is_honoured() {
    let default_server = MockServer::start().await;
    let override_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .and(header("api-key", KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "profile": null })))
        .expect(1)
        .mount(&override_server)
        .await;

    let client = client_for(&default_server);
    let options = RequestOptions::new().with_base_url(override_server.uri());
    let resp = client
        .profiles()
        .get(GetProfileQuery::new("jacob"), Some(options))
        .await
        .unwrap();

    assert!(resp.data.profile.is_none());
    assert!(default_server
        .received_requests()
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn missing_key_sends_no_api_key_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profileCoins"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = CoinsClientBuilder::new()
        .base_url(&server.uri())
        .build()
        .unwrap();
    client
        .profiles()
        .coins(ProfilePageQuery::new("jacob"), None)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("api-key").is_none());
}

// ─── Error mapping ───────────────────────────────────────────────────────────

async fn error_for(template: ResponseTemplate) -> SdkError {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/coinComments"))
        .respond_with(template)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .coins()
        .comments(GetCoinCommentsQuery::new("0xabc"), None)
        .await
        .unwrap_err()
}

#[tokio::test]
async fn not_found_maps_to_not_found() {
    let err = error_for(ResponseTemplate::new(404).set_body_string("no such coin")).await;
    match err {
        SdkError::Http(HttpError::NotFound(body)) => assert_eq!(body, "no such coin"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn rate_limit_reads_retry_after() {
    let err = error_for(ResponseTemplate::new(429).insert_header("Retry-After", "3")).await;
    assert!(matches!(
        err,
        SdkError::Http(HttpError::RateLimited {
            retry_after_ms: Some(3000)
        })
    ));
}

#[tokio::test]
async fn oversized_retry_after_is_dropped() {
    let err = error_for(
        ResponseTemplate::new(429).insert_header("Retry-After", u64::MAX.to_string().as_str()),
    )
    .await;
    assert!(matches!(
        err,
        SdkError::Http(HttpError::RateLimited {
            retry_after_ms: None
        })
    ));
}

#[tokio::test]
async fn unauthorized_and_bad_request() {
    let err = error_for(ResponseTemplate::new(401)).await;
    assert!(matches!(err, SdkError::Http(HttpError::Unauthorized)));

    let err = error_for(ResponseTemplate::new(422).set_body_string("bad address")).await;
    match err {
        SdkError::Http(HttpError::BadRequest { status, body }) => {
            assert_eq!(status, 422);
            assert_eq!(body, "bad address");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn server_error_carries_status_and_body() {
    let err = error_for(ResponseTemplate::new(502).set_body_string("gateway")).await;
    match err {
        SdkError::Http(HttpError::ServerError { status, body }) => {
            assert_eq!(status, 502);
            assert_eq!(body, "gateway");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn undecodable_body_is_a_transport_error() {
    let err = error_for(ResponseTemplate::new(200).set_body_string("not json")).await;
    assert!(matches!(err, SdkError::Http(HttpError::Reqwest(_))));
}

#[tokio::test]
async fn per_call_timeout_maps_to_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/coin"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = RequestOptions::new().with_timeout(Duration::from_millis(50));
    let err = client
        .coins()
        .get(GetCoinQuery::new("0xabc"), Some(options))
        .await
        .unwrap_err();

    assert!(matches!(err, SdkError::Http(HttpError::Timeout)), "{err:?}");
}

// ─── Caller headers ──────────────────────────────────────────────────────────

#[tokio::test]
async fn caller_headers_reach_the_wire_on_multi_coin_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/coins"))
        .and(header("x-trace", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "zora20Tokens": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = RequestOptions::new().with_header("x-trace", "abc");
    client
        .coins()
        .get_many(
            GetCoinsQuery::new([CoinIdentifier::new(1, "0xabc")]),
            Some(options),
        )
        .await
        .unwrap();

    // Caller wins on /coins: its header map replaces the injected one.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].headers.get("x-trace").and_then(|v| v.to_str().ok()),
        Some("abc")
    );
    assert!(requests[0].headers.get("api-key").is_none());
}
