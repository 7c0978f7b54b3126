//! MoMo Dashboard CLI
//!
//! Interactive dashboard plus one-shot commands for statistics, listing,
//! search and transaction details.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use momo_dashboard::api::{ApiError, DashboardApi, HttpApiClient};
use momo_dashboard::config::{self, Config, DisplayConfig, LoggingConfig};
use momo_dashboard::dashboard::{DashboardController, DashboardError};
use momo_dashboard::model::{FilterField, FilterInputs};
use momo_dashboard::terminal::{
    self, OutputFormat, StatisticsReport, TerminalView, TextChartBackend,
};
use momo_dashboard::view::{
    monthly_trend_chart, stat_cards, transaction_rows, type_distribution_chart, DetailView,
};

#[derive(Parser)]
#[command(name = "momo-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse mobile-money transaction statistics and details")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: user config dir, then ./config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Transactions API base URL, overrides the config file
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format for one-shot commands
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive dashboard (default)
    Dashboard,

    /// Summary statistics and charts
    Stats,

    /// List transactions, optionally filtered
    List {
        /// Transaction type label, e.g. "Bank Deposit"
        #[arg(long = "type")]
        transaction_type: Option<String>,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Minimum amount
        #[arg(long)]
        min: Option<String>,
        /// Maximum amount
        #[arg(long)]
        max: Option<String>,
    },

    /// Free-text search
    Search {
        term: String,
    },

    /// Details of one transaction
    Show {
        id: i64,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    init_logging(&config.logging);
    tracing::debug!(base_url = %config.api.base_url, "Using transactions API");

    let display = config.display.clone();
    let client = || HttpApiClient::new(&config.api).context("Failed to build HTTP client");
    let stdout = io::stdout();

    match cli.command.unwrap_or(Commands::Dashboard) {
        Commands::Config { output } => write_config(output.as_ref())?,

        Commands::Dashboard => run_dashboard(client()?, display).await?,

        Commands::Stats => {
            let stats = client()?
                .statistics()
                .await
                .map_err(DashboardError::DataLoad)?;
            let cards = stat_cards(&stats, &display);
            let charts = [type_distribution_chart(&stats), monthly_trend_chart(&stats)];
            let report = StatisticsReport {
                cards: &cards,
                charts: &charts,
            };
            terminal::write_statistics(stdout.lock(), &report, cli.format)?;
        }

        Commands::List {
            transaction_type,
            from,
            to,
            min,
            max,
        } => {
            let mut inputs = FilterInputs::default();
            let fields = [
                (FilterField::Type, transaction_type),
                (FilterField::StartDate, from),
                (FilterField::EndDate, to),
                (FilterField::MinAmount, min),
                (FilterField::MaxAmount, max),
            ];
            for (field, value) in fields {
                if let Some(value) = value {
                    inputs.set(field, value);
                }
            }

            let criteria = inputs.to_criteria().map_err(DashboardError::from)?;
            let transactions = client()?
                .transactions(&criteria)
                .await
                .map_err(DashboardError::DataLoad)?;
            terminal::write_rows(
                stdout.lock(),
                &transaction_rows(&transactions, &display),
                cli.format,
            )?;
        }

        Commands::Search { term } => {
            let api = client()?;
            let transactions = if term.trim().is_empty() {
                api.transactions(&Default::default())
                    .await
                    .map_err(DashboardError::DataLoad)?
            } else {
                api.search(term.trim())
                    .await
                    .map_err(DashboardError::Search)?
            };
            terminal::write_rows(
                stdout.lock(),
                &transaction_rows(&transactions, &display),
                cli.format,
            )?;
        }

        Commands::Show { id } => {
            let transaction = client()?.transaction(id).await.map_err(|e| match e {
                ApiError::NotFound(_) => DashboardError::NotFound(id),
                e => DashboardError::Detail(e),
            })?;
            let detail = DetailView::from_transaction(&transaction, &display);
            terminal::write_detail(stdout.lock(), &detail, cli.format)?;
        }
    }

    Ok(())
}

async fn run_dashboard(api: HttpApiClient, display: DisplayConfig) -> anyhow::Result<()> {
    let controller = DashboardController::new(
        api,
        TerminalView::new(io::stdout()),
        TextChartBackend::new(io::stdout()),
        display,
    );

    // A failed first load has been shown to the user; the prompt still works
    if let Err(e) = controller.initialize().await {
        tracing::warn!(error = %e, "Initial load failed");
    }
    controller
        .with_view(|view| view.print("Type 'help' for commands.\n"))
        .await;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    terminal::repl::run(&controller, stdin)
        .await
        .context("Failed to read commands")?;

    controller.shutdown().await;
    Ok(())
}

fn write_config(output: Option<&PathBuf>) -> anyhow::Result<()> {
    let content = config::generate_default_config();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &content)
                .with_context(|| format!("Failed to write config to {:?}", path))?;
            eprintln!("Config written to {:?}", path);
        }
        None => print!("{}", content),
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}
