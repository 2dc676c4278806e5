//! End-to-end tests against the router served on a real socket.

use admin_panel::{config::AppConfig, routes, AppState};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Spin up the app on a random port, returning the base URL and a handle to stop the server.
async fn start_server() -> (String, tokio::task::JoinHandle<()>) {
    let config = AppConfig::from_lookup(|key| match key {
        "SERVICE_NAME" => Some("backend".to_string()),
        _ => None,
    })
    .expect("config");

    let app = routes::router(AppState { config });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    let base_url = format!("http://{addr}");

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    (base_url, handle)
}

async fn get_json(client: &Client, url: String) -> (StatusCode, Value) {
    let resp = client.get(url).send().await.unwrap();
    let status = resp.status();
    (status, resp.json().await.unwrap())
}

#[tokio::test]
async fn dashboard_endpoints_serve_fixtures() {
    let (base, _handle) = start_server().await;
    let client = Client::new();

    let resp = client
        .get(format!("{base}/dashboard/stats"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.text().await.unwrap(),
        r#"{"total_revenue":"$45,231","total_users":2345,"total_orders":1234,"growth_rate":"24.5%"}"#
    );

    let (status, orders) = get_json(&client, format!("{base}/api/dashboard/orders")).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = orders
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["#12345", "#12344", "#12343", "#12342"]);
    assert_eq!(
        orders[0],
        json!({
            "id": "#12345",
            "customer": "John Doe",
            "product": "Premium Package",
            "amount": "$299",
            "status": "Completed"
        })
    );
}

#[tokio::test]
async fn stats_are_stable_across_calls() {
    let (base, _handle) = start_server().await;
    let client = Client::new();

    let mut bodies = Vec::new();
    for _ in 0..3 {
        let body = client
            .get(format!("{base}/api/dashboard/stats"))
            .send()
            .await
            .unwrap()
            .bytes()
            .await
            .unwrap();
        bodies.push(body);
    }
    assert!(bodies.windows(2).all(|w| w[0] == w[1]));
}

#[tokio::test]
async fn health_timestamps_are_non_decreasing() {
    let (base, _handle) = start_server().await;
    let client = Client::new();

    let mut previous = None;
    for _ in 0..3 {
        let (status, health) = get_json(&client, format!("{base}/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(health["status"], "ok");
        assert_eq!(health["service"], "backend");

        let ts = chrono::DateTime::parse_from_rfc3339(health["timestamp"].as_str().unwrap())
            .expect("timestamp should be RFC 3339");
        if let Some(prev) = previous {
            assert!(ts >= prev);
        }
        previous = Some(ts);
    }
}

#[tokio::test]
async fn dashboard_page_and_missing_routes() {
    let (base, _handle) = start_server().await;
    let client = Client::new();

    let resp = client.get(format!("{base}/dashboard")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = resp.text().await.unwrap();
    assert!(html.contains("Dashboard Overview"));
    assert!(html.contains(r#"<span class="badge badge-blue">Processing</span>"#));

    let (status, body) = get_json(&client, format!("{base}/api/unknown")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}
