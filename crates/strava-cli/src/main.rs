use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use strava_cli::cli::commands;
use strava_cli::metrics::ActivityFilter;

#[derive(Parser)]
#[command(name = "strava")]
#[command(author, version, about = "Ingest and summarize Strava activities", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Data directory holding the activity dataset
    #[arg(long, global = true, env = "STRAVA_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch activities from the Strava API and replace the local dataset
    Ingest {
        /// Keep activities after this bound (YYYY-MM-DD or epoch seconds)
        #[arg(long, env = "IMPORT_AFTER")]
        after: Option<String>,
        /// Keep activities before this bound (YYYY-MM-DD or epoch seconds)
        #[arg(long, env = "IMPORT_BEFORE")]
        before: Option<String>,
    },
    /// List activities from the local dataset
    Activities {
        #[command(flatten)]
        filter: FilterArgs,
        /// Number of rows to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Aggregate statistics over the local dataset
    Stats {
        #[command(subcommand)]
        command: StatsCommands,
    },
}

#[derive(Subcommand)]
enum StatsCommands {
    /// Totals for the filtered dataset
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Distance, time and outing count per day
    Daily {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Distance, time and outing count per ISO week
    Weekly {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Distance per gear
    Gear {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Eddington number over daily distances
    Eddington {
        #[command(flatten)]
        filter: FilterArgs,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Restrict to a calendar year
    #[arg(long)]
    year: Option<i32>,

    /// Restrict to a sport category (repeatable)
    #[arg(long = "sport")]
    sports: Vec<String>,

    /// Minimum distance in km
    #[arg(long)]
    min_km: Option<f64>,

    /// Maximum distance in km
    #[arg(long)]
    max_km: Option<f64>,

    /// Keep activities whose name contains this text
    #[arg(long)]
    name: Option<String>,
}

impl FilterArgs {
    fn into_filter(self) -> ActivityFilter {
        let mut filter = ActivityFilter::new();
        if let Some(year) = self.year {
            filter = filter.with_year(year);
        }
        if !self.sports.is_empty() {
            filter = filter.with_sports(self.sports);
        }
        if self.min_km.is_some() || self.max_km.is_some() {
            filter = filter.with_distance_km(
                self.min_km.unwrap_or(0.0),
                self.max_km.unwrap_or(f64::INFINITY),
            );
        }
        if let Some(name) = self.name {
            filter = filter.with_name_contains(name);
        }
        filter
    }
}

#[tokio::main]
async fn main() -> strava_cli::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ingest { after, before } => commands::ingest(after, before, cli.data_dir).await,
        Commands::Activities { filter, limit } => {
            commands::list_activities(filter.into_filter(), limit, cli.data_dir)
        }
        Commands::Stats { command } => match command {
            StatsCommands::Summary { filter } => {
                commands::summary(filter.into_filter(), cli.data_dir)
            }
            StatsCommands::Daily { filter } => commands::daily(filter.into_filter(), cli.data_dir),
            StatsCommands::Weekly { filter } => {
                commands::weekly(filter.into_filter(), cli.data_dir)
            }
            StatsCommands::Gear { filter } => commands::gear(filter.into_filter(), cli.data_dir),
            StatsCommands::Eddington { filter } => {
                commands::eddington(filter.into_filter(), cli.data_dir)
            }
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
