use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use httpmock::{Method::GET, MockServer};
use serde_json::{json, Value};
use stockmate_server::{api::app_router, build_state, config::Config};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

async fn app(vendor: &MockServer) -> (Router, TempDir) {
    let tmp = tempdir().unwrap();
    let config = Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: tmp.path().join("test.db").to_string_lossy().to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(10),
        fmp_api_key: "test-key".to_string(),
        fmp_base_url: vendor.base_url(),
        fmp_timeout: Duration::from_secs(2),
    };
    let state = build_state(&config).await.unwrap();
    (app_router(state, &config).unwrap(), tmp)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn sync(symbol: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/api/v1/internal/companies/{}/sync", symbol))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn healthz_works() {
    let vendor = MockServer::start_async().await;
    let (app, _tmp) = app(&vendor).await;

    let response = app.oneshot(get("/api/v1/healthz")).await.unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn sync_then_read_company_and_statements() {
    let vendor = MockServer::start_async().await;
    vendor
        .mock_async(|when, then| {
            when.method(GET).path("/profile").query_param("symbol", "AAPL");
            then.status(200).body(
                r#"[{"symbol":"AAPL","companyName":"Apple Inc.","marketCap":2500000000000,
                     "sector":"Technology","exchange":"NASDAQ"}]"#,
            );
        })
        .await;
    vendor
        .mock_async(|when, then| {
            when.method(GET).path("/income-statement");
            then.status(200).body(
                r#"[
                    {"symbol":"AAPL","date":"2024-09-28","period":"FY","revenue":391035000000},
                    {"symbol":"AAPL","date":"2023-09-30","period":"FY","revenue":383285000000}
                ]"#,
            );
        })
        .await;
    let (app, _tmp) = app(&vendor).await;

    let (status, report) = send(
        &app,
        sync("aapl", json!({"kinds": ["income-statement", "profile"]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["symbol"], "AAPL");
    assert_eq!(report["kinds"][0]["kind"], "profile");
    assert_eq!(report["kinds"][0]["created"], 1);
    assert_eq!(report["kinds"][1]["created"], 2);

    let (status, company) = send(&app, get("/api/v1/companies/AAPL")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(company["companyName"], "Apple Inc.");
    assert_eq!(company["sector"], "Technology");

    let (status, rows) = send(&app, get("/api/v1/companies/aapl/income-statement")).await;
    assert_eq!(status, StatusCode::OK);
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["date"], "2024-09-28");
    assert_eq!(rows[0]["period"], "FY");

    let (status, rows) = send(
        &app,
        get("/api/v1/companies/AAPL/income-statement?period=quarter"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows, json!([]));

    let (status, _) = send(
        &app,
        get("/api/v1/companies/AAPL/income-statement?period=yearly"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, dividends) = send(&app, get("/api/v1/companies/AAPL/dividends")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dividends, json!([]));
}

#[tokio::test]
async fn sync_then_read_ratios_and_analyst_data() {
    let vendor = MockServer::start_async().await;
    vendor
        .mock_async(|when, then| {
            when.method(GET).path("/ratios").query_param("period", "annual");
            then.status(200).body(
                r#"[{"symbol":"AAPL","date":"2024-09-28","period":"FY","currentRatio":0.87}]"#,
            );
        })
        .await;
    vendor
        .mock_async(|when, then| {
            when.method(GET).path("/grades");
            then.status(200).body(
                r#"[
                    {"symbol":"AAPL","date":"2025-01-31","gradingCompany":"Barclays",
                     "newGrade":"Underweight","action":"maintain"},
                    {"symbol":"AAPL","date":"2025-01-30","gradingCompany":"Wedbush",
                     "newGrade":"Outperform","action":"maintain"}
                ]"#,
            );
        })
        .await;
    vendor
        .mock_async(|when, then| {
            when.method(GET).path("/price-target-consensus");
            then.status(200).body(
                r#"[{"symbol":"AAPL","targetHigh":325,"targetLow":197,
                     "targetConsensus":251.25,"targetMedian":250}]"#,
            );
        })
        .await;
    let (app, _tmp) = app(&vendor).await;

    let (status, report) = send(
        &app,
        sync(
            "AAPL",
            json!({"kinds": ["financial-ratios", "gradings", "price-target"]}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    for kind in report["kinds"].as_array().unwrap() {
        assert!(kind["error"].is_null(), "{}", kind);
    }

    let (status, rows) = send(&app, get("/api/v1/companies/AAPL/financial-ratios")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows[0]["currentRatio"], 0.87);

    let (status, rows) = send(&app, get("/api/v1/companies/AAPL/gradings?limit=1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["gradingCompany"], "Barclays");

    let (status, rows) = send(&app, get("/api/v1/companies/AAPL/price-targets")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows[0]["targetConsensus"], 251.25);

    let (status, rows) = send(&app, get("/api/v1/companies/AAPL/financial-scores")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows, json!([]));

    let (status, _) = send(&app, get("/api/v1/companies/AAPL/gradings?limit=0")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_company_is_404() {
    let vendor = MockServer::start_async().await;
    let (app, _tmp) = app(&vendor).await;

    let (status, body) = send(&app, get("/api/v1/companies/ZZZZ")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);

    let (status, _) = send(&app, get("/api/v1/companies/ZZZZ/news")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn vendor_outage_is_reported_per_kind() {
    let vendor = MockServer::start_async().await;
    vendor
        .mock_async(|when, then| {
            when.method(GET).path("/splits");
            then.status(503).body("Service Unavailable");
        })
        .await;
    let (app, _tmp) = app(&vendor).await;

    let (status, report) = send(&app, sync("AAPL", json!({"kinds": ["splits"]}))).await;

    assert_eq!(status, StatusCode::OK);
    let error = report["kinds"][0]["error"].as_str().unwrap();
    assert!(error.contains("HTTP 503"), "{}", error);
    assert!(!error.contains("test-key"));
}

#[tokio::test]
async fn invalid_sync_requests_are_400() {
    let vendor = MockServer::start_async().await;
    let catch_all = vendor
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200).body("[]");
        })
        .await;
    let (app, _tmp) = app(&vendor).await;

    let (status, _) = send(&app, sync("AA%20PL", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, sync("AAPL", json!({"kinds": ["quotes"]}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("Invalid sync request"));

    catch_all.assert_hits_async(0).await;
}
