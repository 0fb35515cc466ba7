use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use time::OffsetDateTime;

use appdeck_core::{AppRecord, Badge, DEFAULT_WINDOW_DAYS, badge_for, is_new};

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse<'a> {
    status: &'a str,
}

pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    let body = json!({
        "service": "Appdeck Server",
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "apps": state.directory.len(),
    });
    (StatusCode::OK, Json(body))
}

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse { status: "ok" }))
}

pub async fn readyz() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse { status: "ready" }))
}

#[derive(Deserialize)]
pub struct ListingParams {
    /// Operator escape hatch: `?all=true` lists every status.
    #[serde(default)]
    pub all: bool,
}

/// One listing entry: the record plus its derived presentation fields.
#[derive(Serialize)]
pub struct ListingEntry<'a> {
    #[serde(flatten)]
    pub record: &'a AppRecord,
    pub new: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    #[serde(rename = "statusIcon")]
    pub status_icon: &'static str,
    #[serde(rename = "statusLabel")]
    pub status_label: &'static str,
}

pub async fn list_apps(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> impl IntoResponse {
    let now = OffsetDateTime::now_utc();
    let visible = state.directory.visible(params.all);
    let entries: Vec<ListingEntry<'_>> = visible
        .into_iter()
        .map(|record| ListingEntry {
            record,
            new: is_new(record, now, DEFAULT_WINDOW_DAYS),
            badge: badge_for(record, now),
            status_icon: record.status.meta().icon,
            status_label: record.status.meta().label,
        })
        .collect();
    let total = entries.len();
    let body = json!({
        "apps": entries,
        "total": total,
    });
    (StatusCode::OK, Json(body))
}

pub async fn get_app(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    match state.directory.find(&slug) {
        Some(record) => {
            let now = OffsetDateTime::now_utc();
            let body = json!({
                "app": record,
                "paid": record.is_paid(),
                "new": is_new(record, now, DEFAULT_WINDOW_DAYS),
                "badge": badge_for(record, now),
            });
            (StatusCode::OK, Json(body))
        }
        None => {
            let body = json!({ "error": format!("App not found: {slug}") });
            (StatusCode::NOT_FOUND, Json(body))
        }
    }
}

#[derive(Deserialize)]
pub struct CheckoutRequest {
    #[serde(rename = "priceId", default)]
    pub price_id: Option<String>,
    #[serde(rename = "appSlug", default)]
    pub app_slug: Option<String>,
}

pub async fn checkout(
    State(state): State<AppState>,
    Json(payload): Json<CheckoutRequest>,
) -> impl IntoResponse {
    let (Some(price_id), Some(app_slug)) = (payload.price_id, payload.app_slug) else {
        let body = json!({ "error": "Missing priceId or appSlug" });
        return (StatusCode::BAD_REQUEST, Json(body));
    };

    let Some(client) = state.checkout.as_ref() else {
        let body = json!({ "error": "STRIPE_SECRET_KEY not configured" });
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(body));
    };

    match client
        .create_session(&price_id, &app_slug, &state.config.base_url())
        .await
    {
        Ok(url) => (StatusCode::OK, Json(json!({ "url": url }))),
        Err(e) => {
            tracing::error!(error = %e, slug = %app_slug, "checkout session failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
        }
    }
}
