mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use confsched_core::config::ConfschedConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "confsched")]
#[command(about = "Browse conference schedules and keep track of your favorite talks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the schedule, one section per day
    Schedule {
        /// Only show this conference (by name)
        #[arg(short, long)]
        conference: Option<String>,

        /// Expand only this day (1-based)
        #[arg(short, long)]
        day: Option<usize>,

        /// Expand every day
        #[arg(short, long, conflicts_with = "day")]
        expand: bool,

        /// Only list favorite talks
        #[arg(short, long)]
        favorites_only: bool,
    },
    /// Mark or unmark a talk as favorite, by its position in `schedule`
    Toggle {
        conference: String,

        /// Day number (1-based)
        day: usize,

        /// Row number within the day (1-based)
        row: usize,
    },
    /// List favorite talks
    Favorites {
        /// Fetch schedules to show each favorite's title and time
        #[arg(short, long)]
        resolve: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show config and preference file locations
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("confsched=warn,confsched_core=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ConfschedConfig::load()?;

    match cli.command {
        Commands::Schedule {
            conference,
            day,
            expand,
            favorites_only,
        } => {
            let conferences = match conference {
                Some(name) => vec![config.find_conference(&name)?],
                None => config.conferences(),
            };
            let expand = match (day, expand) {
                (Some(day), _) => commands::schedule::Expand::Day(to_index(day, "day")?),
                (None, true) => commands::schedule::Expand::All,
                (None, false) => commands::schedule::Expand::None,
            };
            commands::schedule::run(&config, conferences, expand, favorites_only).await
        }
        Commands::Toggle {
            conference,
            day,
            row,
        } => {
            let conference = config.find_conference(&conference)?;
            commands::toggle::run(&config, conference, to_index(day, "day")?, to_index(row, "row")?)
                .await
        }
        Commands::Favorites { resolve, json } => commands::favorites::run(&config, resolve, json).await,
        Commands::Config => commands::config::run(&config),
    }
}

/// Convert a 1-based number from the command line to an index.
fn to_index(n: usize, what: &str) -> Result<usize> {
    n.checked_sub(1)
        .ok_or_else(|| anyhow::anyhow!("{} numbers start at 1", what))
}
