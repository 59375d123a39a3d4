use crate::dto::StatsQuery;
use querystats_application::use_cases::queries::MAX_TOP_LIMIT;
use querystats_domain::{DomainError, QueryWindow};

/// Clamp a requested list size to `1..=MAX_TOP_LIMIT`, using `default` when absent.
///
/// # Examples
/// ```
/// use querystats_api::utils::parse_limit;
///
/// assert_eq!(parse_limit(None, 10), 10);
/// assert_eq!(parse_limit(Some(25), 10), 25);
/// assert_eq!(parse_limit(Some(1000), 10), 100);
/// assert_eq!(parse_limit(Some(0), 10), 1);
/// ```
pub fn parse_limit(requested: Option<usize>, default: usize) -> usize {
    requested.unwrap_or(default).clamp(1, MAX_TOP_LIMIT)
}

/// Builds the window for one request on top of the configured one.
///
/// Dates given in the request replace both configured dates, so a request
/// can narrow to a single bound without inheriting the other.
pub fn resolve_window(
    defaults: &QueryWindow,
    params: &StatsQuery,
) -> Result<QueryWindow, DomainError> {
    let start_date = parse_optional_date(params.start_date.as_deref())?;
    let end_date = parse_optional_date(params.end_date.as_deref())?;

    let (start_date, end_date) = if start_date.is_some() || end_date.is_some() {
        (start_date, end_date)
    } else {
        (defaults.start_date, defaults.end_date)
    };

    let window = QueryWindow::last_days(params.days.unwrap_or(defaults.days))
        .between(start_date, end_date)
        .for_client(params.client.clone().or_else(|| defaults.client.clone()));
    window.validate()?;
    Ok(window)
}

fn parse_optional_date(value: Option<&str>) -> Result<Option<chrono::NaiveDate>, DomainError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => QueryWindow::parse_date(v).map(Some),
        None => Ok(None),
    }
}
