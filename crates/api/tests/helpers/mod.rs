#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{DateTime, TimeDelta};
use http_body_util::BodyExt;
use querystats_api::{create_api_routes, AppState};
use querystats_application::ports::QueryLogReader;
use querystats_application::services::{DomainExclusion, WindowLoader};
use querystats_application::stats::MetricsEngine;
use querystats_application::use_cases::{
    GetMetricsUseCase, GetTimelineUseCase, GetTopEntriesUseCase,
};
use querystats_domain::{DomainError, QueryWindow, RawQueryRow, StatusMapping};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub struct StaticReader {
    rows: Vec<RawQueryRow>,
    failure: Option<DomainError>,
}

#[async_trait]
impl QueryLogReader for StaticReader {
    async fn read_window(&self, _window: &QueryWindow) -> Result<Vec<RawQueryRow>, DomainError> {
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(self.rows.clone()),
        }
    }
}

/// FTL-style row `offset_secs` after 2024-01-01T10:00:00Z.
pub fn row(offset_secs: i64, domain: &str, client: &str, status: i64) -> RawQueryRow {
    let base = DateTime::parse_from_rfc3339("2024-01-01T10:00:00+00:00").unwrap();
    RawQueryRow {
        timestamp: Some(base + TimeDelta::seconds(offset_secs)),
        domain: Some(domain.to_string()),
        client: Some(client.to_string()),
        status: Some(status),
        reply_time: Some(0.01),
    }
}

pub fn sample_rows() -> Vec<RawQueryRow> {
    vec![
        row(0, "a.com", "10.0.0.1", 2),
        row(60, "ads.example", "10.0.0.2", 1),
        row(7200, "a.com", "10.0.0.1", 3),
        row(7260, "b.com", "10.0.0.2", 2),
        row(7320, "ads.example", "10.0.0.1", 1),
    ]
}

fn app_with_reader(reader: StaticReader) -> Router {
    let loader = Arc::new(WindowLoader::new(
        Arc::new(reader),
        StatusMapping::pihole_ftl(),
        DomainExclusion::none(),
    ));
    let state = AppState {
        get_metrics: Arc::new(GetMetricsUseCase::new(
            loader.clone(),
            MetricsEngine::default(),
        )),
        get_timeline: Arc::new(GetTimelineUseCase::new(loader.clone(), 10)),
        get_top_entries: Arc::new(GetTopEntriesUseCase::new(loader)),
        default_window: Arc::new(QueryWindow::last_days(365)),
        default_limit: 10,
    };
    Router::new().nest("/api", create_api_routes(state))
}

pub fn create_test_app(rows: Vec<RawQueryRow>) -> Router {
    app_with_reader(StaticReader {
        rows,
        failure: None,
    })
}

pub fn create_failing_app(error: DomainError) -> Router {
    app_with_reader(StaticReader {
        rows: Vec::new(),
        failure: Some(error),
    })
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}
