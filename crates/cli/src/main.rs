use clap::Parser;
use querystats_api::AppState;
use querystats_domain::CliOverrides;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod di;
mod report;
mod server;

#[derive(Parser)]
#[command(name = "querystats")]
#[command(version)]
#[command(about = "Long-term statistics over Pi-hole FTL query logs")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Number of days of history to load
    #[arg(long, env = "QUERYSTATS_DAYS")]
    days: Option<u32>,

    /// Pi-hole FTL database; repeat for several, or comma-separate in the env var
    #[arg(long = "db-path", env = "QUERYSTATS_DB_PATH", value_delimiter = ',')]
    db_path: Vec<String>,

    /// Web server port
    #[arg(short = 'p', long, env = "QUERYSTATS_PORT")]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// IANA timezone for dates and hours (e.g. Europe/Berlin)
    #[arg(long, env = "QUERYSTATS_TIMEZONE")]
    timezone: Option<String>,

    /// First day to include (YYYY-MM-DD)
    #[arg(long)]
    start_date: Option<String>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long)]
    end_date: Option<String>,

    /// Regex of domains to leave out of every statistic
    #[arg(long, env = "QUERYSTATS_IGNORE_DOMAINS")]
    ignore_domains: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Compute the metrics once, print them as JSON and exit
    #[arg(long)]
    report: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            port: self.port,
            bind_address: self.bind.clone(),
            database_paths: Some(self.db_path.clone()),
            days: self.days,
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            timezone: self.timezone.clone(),
            ignore_domains: self.ignore_domains.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config);

    info!("Starting querystats v{}", env!("CARGO_PKG_VERSION"));

    let repos = di::Repositories::new(&config).await?;
    let use_cases = di::UseCases::new(&config, &repos)?;
    let default_window = config.source.window()?;

    if cli.report {
        return report::print_metrics(&use_cases, default_window).await;
    }

    let app_state = AppState {
        get_metrics: use_cases.get_metrics,
        get_timeline: use_cases.get_timeline,
        get_top_entries: use_cases.get_top_entries,
        default_window: Arc::new(default_window),
        default_limit: config.stats.top_limit,
    };

    let web_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address: {e}"))?;

    server::start_web_server(web_addr, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}
