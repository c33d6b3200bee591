mod formatter;

use anyhow::Context;
use catalog_core::{
    display::category_infos, CatalogConfig, CatalogView, CategoryFilter, Clock, ContentSource,
    EventCatalog, FileSource, FixedClock, Listing, SystemClock, TemporalFilter,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "catalog-cli",
    version,
    about = "Browse the department's seminars, workshops, conferences and announcements"
)]
struct Cli {
    /// Path to a catalog configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Read events from a .json or .toml data file instead of the configured source
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List events matching the category and date filters
    List {
        /// all, seminar, workshop, conference or announcement
        #[arg(long, default_value = "all")]
        category: String,

        /// upcoming, past or all
        #[arg(long, default_value = "upcoming")]
        when: String,

        /// Reference day (YYYY-MM-DD); defaults to the local date
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Print the raw event records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show every detail of one event
    Show {
        /// Event id
        id: String,
    },
    /// Report data-quality issues in the event collection
    Check,
    /// List the event categories
    Categories {
        #[arg(long)]
        json: bool,
    },
}

fn load_config(path: Option<&Path>) -> anyhow::Result<CatalogConfig> {
    match path {
        Some(path) => CatalogConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(CatalogConfig::default()),
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn source_for(cli_file: Option<&Path>, config: &CatalogConfig) -> Box<dyn ContentSource> {
    match cli_file {
        Some(path) => Box::new(FileSource::new(path)),
        None => config.source.build(),
    }
}

async fn fetch_catalog(source: &dyn ContentSource) -> anyhow::Result<EventCatalog> {
    EventCatalog::fetch(source)
        .await
        .with_context(|| format!("Failed to load events from {}", source.describe()))
}

async fn run(cli: Cli, config: CatalogConfig) -> anyhow::Result<ExitCode> {
    let source = source_for(cli.file.as_deref(), &config);

    match cli.command {
        Commands::List {
            category,
            when,
            today,
            json,
        } => {
            let category = category.parse::<CategoryFilter>()?;
            let temporal = when.parse::<TemporalFilter>()?;
            let clock: Box<dyn Clock> = match today {
                Some(day) => Box::new(FixedClock(day)),
                None => Box::new(SystemClock),
            };

            let mut view = CatalogView::new();
            view.select_category(category);
            view.select_temporal(temporal);
            view.load(source.as_ref()).await;

            match view.listing(clock.today()) {
                Listing::Loading => anyhow::bail!("Events are still loading"),
                Listing::Failed { message } => anyhow::bail!(message),
                Listing::Empty { message } => {
                    if json {
                        println!("[]");
                    } else {
                        println!("{}", message);
                    }
                }
                Listing::Events(events) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&events)?);
                    } else {
                        println!("{}", formatter::format_listing(&events));
                    }
                }
            }
        }
        Commands::Show { id } => {
            let catalog = fetch_catalog(source.as_ref()).await?;
            let event = catalog.lookup(&id)?;
            println!("{}", formatter::format_event_details(event));
        }
        Commands::Check => {
            let catalog = fetch_catalog(source.as_ref()).await?;
            let issues = catalog.issues();
            if issues.is_empty() {
                println!("{} events, no data issues found.", catalog.len());
            } else {
                for issue in &issues {
                    println!("{}", formatter::format_issue(issue));
                }
                println!("{} events, {} issue(s).", catalog.len(), issues.len());
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Categories { json } => {
            let infos = category_infos();
            if json {
                println!("{}", serde_json::to_string_pretty(&infos)?);
            } else {
                for info in infos {
                    println!("{:<14} {}", info.value, info.label);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.logging.level);

    match run(cli, config).await {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
