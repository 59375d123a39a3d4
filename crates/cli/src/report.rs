use crate::di::UseCases;
use querystats_domain::QueryWindow;
use tracing::info;

/// One-shot mode: compute the configured window and write it to stdout.
pub async fn print_metrics(use_cases: &UseCases, window: QueryWindow) -> anyhow::Result<()> {
    let report = use_cases.get_metrics.execute(window).await?;
    info!(
        total = report.metrics.total_queries,
        skipped = report.skipped,
        "Report computed"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
