use std::str::FromStr;

use serde_json::Value;
use tokio::task::JoinHandle;

use appdeck_core::{AppRecord, AppStatus, CalendarDate, Directory, UpdateType, today_utc};
use appdeck_server::{AppConfig, AppState, build_app};

fn sample_directory() -> Directory {
    Directory::new(vec![
        AppRecord::new(
            "notes",
            "Notes",
            "📝",
            "#9C27B0",
            "https://example.com/notes",
            CalendarDate::from_str("2025-01-18").unwrap(),
            AppStatus::Building,
        ),
        AppRecord::new(
            "timer",
            "Timer",
            "⏱️",
            "#2196F3",
            "https://example.com/timer",
            today_utc(),
            AppStatus::Shipped,
        )
        .with_update(today_utc(), UpdateType::Features),
        AppRecord::new(
            "tips",
            "Tips",
            "💰",
            "#FF9800",
            "https://example.com/tips",
            CalendarDate::from_str("2025-01-10").unwrap(),
            AppStatus::Mvp,
        )
        .with_price("price_xxxxx", "$5"),
    ])
}

async fn start_server(cfg: AppConfig) -> (String, tokio::sync::oneshot::Sender<()>, JoinHandle<()>) {
    let app = build_app(AppState::new(sample_directory(), cfg));
    let listener = tokio::net::TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();
    let server = tokio::spawn(async move {
        let _ = axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = rx.await;
            })
            .await;
    });
    (format!("http://{addr}"), tx, server)
}

#[tokio::test]
async fn root_reports_service_info() {
    let (base, shutdown_tx, handle) = start_server(AppConfig::default()).await;
    let body: Value = reqwest::get(format!("{base}/"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["service"], "Appdeck Server");
    assert_eq!(body["apps"], 3);
    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

#[tokio::test]
async fn health_endpoints_respond() {
    let (base, shutdown_tx, handle) = start_server(AppConfig::default()).await;
    let health: Value = reqwest::get(format!("{base}/healthz"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "ok");
    let ready: Value = reqwest::get(format!("{base}/readyz"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ready["status"], "ready");
    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

#[tokio::test]
async fn listing_hides_invisible_statuses() {
    let (base, shutdown_tx, handle) = start_server(AppConfig::default()).await;
    let body: Value = reqwest::get(format!("{base}/apps"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let slugs: Vec<&str> = body["apps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, ["timer", "tips"]);
    assert_eq!(body["total"], 2);
    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

#[tokio::test]
async fn listing_all_flag_shows_everything_in_order() {
    let (base, shutdown_tx, handle) = start_server(AppConfig::default()).await;
    let body: Value = reqwest::get(format!("{base}/apps?all=true"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let slugs: Vec<&str> = body["apps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, ["notes", "timer", "tips"]);
    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

#[tokio::test]
async fn listing_carries_derived_badge_fields() {
    let (base, shutdown_tx, handle) = start_server(AppConfig::default()).await;
    let body: Value = reqwest::get(format!("{base}/apps"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let timer = body["apps"]
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["slug"] == "timer")
        .unwrap();
    assert_eq!(timer["new"], true);
    assert_eq!(timer["badge"]["text"], "NEW STUFF");
    assert_eq!(timer["statusIcon"], "🚀");

    let tips = body["apps"]
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["slug"] == "tips")
        .unwrap();
    assert_eq!(tips["new"], false);
    assert!(tips.get("badge").is_none());
    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

#[tokio::test]
async fn viewer_lookup_returns_record_and_paid_flag() {
    let (base, shutdown_tx, handle) = start_server(AppConfig::default()).await;
    let body: Value = reqwest::get(format!("{base}/apps/tips"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["app"]["embedUrl"], "https://example.com/tips");
    assert_eq!(body["app"]["stripePriceId"], "price_xxxxx");
    assert_eq!(body["app"]["price"], "$5");
    assert_eq!(body["paid"], true);
    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

#[tokio::test]
async fn viewer_lookup_unknown_slug_is_404() {
    let (base, shutdown_tx, handle) = start_server(AppConfig::default()).await;
    let resp = reqwest::get(format!("{base}/apps/ghost")).await.unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "App not found: ghost");
    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

#[tokio::test]
async fn checkout_rejects_missing_fields() {
    let (base, shutdown_tx, handle) = start_server(AppConfig::default()).await;
    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{base}/api/checkout"))
        .json(&serde_json::json!({ "appSlug": "tips" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Missing priceId or appSlug");
    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

#[tokio::test]
async fn checkout_without_gateway_key_reports_unconfigured() {
    let (base, shutdown_tx, handle) = start_server(AppConfig::default()).await;
    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{base}/api/checkout"))
        .json(&serde_json::json!({ "priceId": "price_xxxxx", "appSlug": "tips" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 500);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "STRIPE_SECRET_KEY not configured");
    let _ = shutdown_tx.send(());
    let _ = handle.await;
}
