use querystats_application::services::{DomainExclusion, WindowLoader};
use querystats_application::stats::{MetricsEngine, TimeGranularity};
use querystats_application::use_cases::{
    GetMetricsUseCase, GetTimelineUseCase, GetTopEntriesUseCase,
};
use querystats_domain::{QueryWindow, RawQueryRow, StatusMapping};
use std::sync::Arc;

mod helpers;
use helpers::{ts, MockQueryLogReader, RawRowBuilder};

const ALLOWED: i64 = 2;
const BLOCKED: i64 = 1;

fn row(timestamp: &str, domain: &str, client: &str, status: i64) -> RawQueryRow {
    RawRowBuilder::new()
        .at(ts(timestamp))
        .domain(domain)
        .client(client)
        .status(status)
        .build()
}

fn sample_rows() -> Vec<RawQueryRow> {
    vec![
        row("2024-01-01T10:05:00Z", "a.com", "10.0.0.1", ALLOWED),
        row("2024-01-01T10:20:00Z", "ads.example", "10.0.0.2", BLOCKED),
        row("2024-01-01T13:10:00Z", "a.com", "10.0.0.1", ALLOWED),
        row("2024-01-01T13:40:00Z", "b.com", "10.0.0.2", ALLOWED),
        row("2024-01-01T13:50:00Z", "ads.example", "10.0.0.1", BLOCKED),
        row("2024-01-01T13:55:00Z", "track.example", "10.0.0.3", BLOCKED),
    ]
}

fn loader(rows: Vec<RawQueryRow>) -> Arc<WindowLoader> {
    let reader = MockQueryLogReader::with_rows(rows);
    Arc::new(WindowLoader::new(
        Arc::new(reader),
        StatusMapping::pihole_ftl(),
        DomainExclusion::none(),
    ))
}

#[tokio::test]
async fn test_get_metrics_reports_window_and_counts() {
    let use_case = GetMetricsUseCase::new(loader(sample_rows()), MetricsEngine::default());
    let window = QueryWindow::last_days(30);

    let report = use_case.execute(window.clone()).await.unwrap();

    assert_eq!(report.window, window);
    assert_eq!(report.metrics.total_queries, 6);
    assert_eq!(report.metrics.allowed_count, 3);
    assert_eq!(report.metrics.blocked_count, 3);
    assert_eq!(report.skipped, 0);
}

#[tokio::test]
async fn test_get_metrics_counts_skipped_rows() {
    let mut rows = sample_rows();
    rows.push(RawRowBuilder::new().status(99).build());
    let use_case = GetMetricsUseCase::new(loader(rows), MetricsEngine::default());

    let report = use_case.execute(QueryWindow::last_days(30)).await.unwrap();

    assert_eq!(report.metrics.total_queries, 6);
    assert_eq!(report.skipped, 1);
}

#[tokio::test]
async fn test_get_metrics_on_empty_source() {
    let use_case = GetMetricsUseCase::new(loader(Vec::new()), MetricsEngine::default());

    let report = use_case.execute(QueryWindow::last_days(30)).await.unwrap();

    assert_eq!(report.metrics.total_queries, 0);
    assert!(report.metrics.peak_day.is_no_data());
}

#[tokio::test]
async fn test_get_timeline_zero_fills_hours() {
    let use_case = GetTimelineUseCase::new(loader(sample_rows()), 2);

    let report = use_case
        .execute(QueryWindow::last_days(30), TimeGranularity::Hour)
        .await
        .unwrap();

    let totals: Vec<(u64, u64)> = report
        .verdicts
        .iter()
        .map(|b| (b.allowed, b.blocked))
        .collect();
    assert_eq!(totals, vec![(1, 1), (0, 0), (0, 0), (2, 2)]);
    assert_eq!(report.verdicts[0].start, ts("2024-01-01T10:00:00Z"));
    assert_eq!(report.verdicts[3].start, ts("2024-01-01T13:00:00Z"));
}

#[tokio::test]
async fn test_get_timeline_client_activity() {
    let use_case = GetTimelineUseCase::new(loader(sample_rows()), 2);

    let report = use_case
        .execute(QueryWindow::last_days(30), TimeGranularity::Hour)
        .await
        .unwrap();

    let clients: Vec<&str> = report.clients.clients.iter().map(|c| &**c).collect();
    assert_eq!(clients, vec!["10.0.0.1", "10.0.0.2"]);
    assert_eq!(report.clients.buckets.len(), 4);
    assert_eq!(report.clients.buckets[0].counts, vec![1, 1]);
    assert_eq!(report.clients.buckets[1].counts, vec![0, 0]);
    assert_eq!(report.clients.buckets[3].counts, vec![2, 1]);
}

#[tokio::test]
async fn test_get_timeline_quarter_hour_buckets() {
    let use_case = GetTimelineUseCase::new(loader(sample_rows()), 5);

    let report = use_case
        .execute(QueryWindow::last_days(30), TimeGranularity::QuarterHour)
        .await
        .unwrap();

    assert_eq!(report.verdicts.first().unwrap().start, ts("2024-01-01T10:00:00Z"));
    assert_eq!(report.verdicts.last().unwrap().start, ts("2024-01-01T13:45:00Z"));
    assert_eq!(report.verdicts.len(), 16);
    let total: u64 = report.verdicts.iter().map(|b| b.total()).sum();
    assert_eq!(total, 6);
}

#[tokio::test]
async fn test_get_timeline_daily_reply_times() {
    let rows = vec![
        RawRowBuilder::new()
            .at(ts("2024-01-01T10:00:00Z"))
            .reply_time(0.25)
            .build(),
        RawRowBuilder::new()
            .at(ts("2024-01-01T11:00:00Z"))
            .reply_time(0.75)
            .build(),
        RawRowBuilder::new().at(ts("2024-01-02T11:00:00Z")).build(),
    ];
    let use_case = GetTimelineUseCase::new(loader(rows), 5);

    let report = use_case
        .execute(QueryWindow::last_days(30), TimeGranularity::Day)
        .await
        .unwrap();

    assert_eq!(report.reply_times.len(), 1);
    assert_eq!(report.reply_times[0].samples, 2);
    assert_eq!(report.reply_times[0].average_reply_time.as_millis_f64(), 500.0);
    assert_eq!(report.verdicts.len(), 2);
}

#[tokio::test]
async fn test_get_top_entries() {
    let use_case = GetTopEntriesUseCase::new(loader(sample_rows()));

    let top = use_case.execute(QueryWindow::last_days(30), 10).await.unwrap();

    let allowed: Vec<(&str, u64)> = top
        .allowed_domains
        .iter()
        .map(|e| (&*e.name, e.count))
        .collect();
    assert_eq!(allowed, vec![("a.com", 2), ("b.com", 1)]);
    let blocked: Vec<(&str, u64)> = top
        .blocked_domains
        .iter()
        .map(|e| (&*e.name, e.count))
        .collect();
    assert_eq!(blocked, vec![("ads.example", 2), ("track.example", 1)]);

    assert_eq!(top.clients.len(), 3);
    assert_eq!(&*top.clients[0].client, "10.0.0.1");
    assert_eq!(top.clients[0].allowed, 2);
    assert_eq!(top.clients[0].blocked, 1);
}

#[tokio::test]
async fn test_get_top_entries_respects_limit() {
    let use_case = GetTopEntriesUseCase::new(loader(sample_rows()));

    let top = use_case.execute(QueryWindow::last_days(30), 1).await.unwrap();

    assert_eq!(top.allowed_domains.len(), 1);
    assert_eq!(top.blocked_domains.len(), 1);
    assert_eq!(top.clients.len(), 1);
}
