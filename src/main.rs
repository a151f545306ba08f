//! Studysite
//!
//! Runs the site server, or inspects the published schedule from the
//! terminal.
//!
//! ```text
//! studysite                 # same as `studysite serve`
//! studysite schedule        # print availability tables
//! studysite stats           # print hero figures
//! studysite config -o studysite.toml
//! ```

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use studysite::config::{generate_default_config, Config, LoggingConfig};
use studysite::content;
use studysite::schedule::{earliest_date_label, AvailabilityTable, AvailabilityTier, ScheduleDocument};
use studysite::{api, participants, upstream};

#[derive(Parser)]
#[command(name = "studysite")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Recruitment site for the wearable tech testing study")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the web server
    Serve,

    /// Fetch the schedule and print the availability tables
    Schedule {
        /// Print the raw document as JSON instead
        #[arg(long)]
        json: bool,
    },

    /// Print the hero figures
    Stats,

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

    // The logging section decides the subscriber, so the config is read
    // first and its search problems are reported once tracing is up.
    let (config, search) = match &cli.config {
        Some(path) => (Config::load_with_env(path)?, None),
        None => {
            let search = Config::load_default();
            (search.config.clone(), Some(search))
        }
    };

    init_tracing(&config.logging);

    if let Some(search) = &search {
        search.report();
    }

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server(config).await,
        Commands::Schedule { json } => print_schedule(&config, json).await,
        Commands::Stats => print_stats(&config).await,
        Commands::Config { output } => write_config(output),
    }
}

/// Initialize tracing from the logging section. `RUST_LOG` wins when set.
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("studysite={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    tracing::info!("Starting studysite v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("UI bundle directory: {}", config.server.static_dir);

    let source = upstream::from_config(&config.schedule)?;
    let state = api::AppState::new(source, config.server);

    api::serve(state).await?;

    tracing::info!("Studysite stopped");
    Ok(())
}

async fn fetch_document(config: &Config) -> anyhow::Result<ScheduleDocument> {
    let source = upstream::from_config(&config.schedule)?;
    source
        .fetch()
        .await
        .with_context(|| format!("Unable to load availability data from {}", source.describe()))
}

async fn print_schedule(config: &Config, json: bool) -> anyhow::Result<()> {
    let doc = fetch_document(config).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    let last_update = doc.last_update_label(&Local::now());
    let mut printed = 0;

    for (title, week) in doc.weeks() {
        let Some(table) = AvailabilityTable::from_week(week) else {
            tracing::debug!("{} has no dates or slots, skipping", title);
            continue;
        };
        println!("{} - NYC Facility (last update: {})", title, last_update);
        println!("{}", render_table(&table));
        printed += 1;
    }

    if printed == 0 {
        println!("No availability published.");
    } else {
        println!("{}", render_legend());
    }

    Ok(())
}

/// Plain-text grid: time column, then one column per date
fn render_table(table: &AvailabilityTable) -> String {
    let time_width = table
        .rows
        .iter()
        .map(|r| r.label.len())
        .chain(std::iter::once("Time".len()))
        .max()
        .unwrap_or(4);
    let col_width = table
        .columns
        .iter()
        .map(|c| c.day_name.len().max(c.date.len()))
        .max()
        .unwrap_or(0)
        .max(5);

    let mut out = String::new();

    out.push_str(&format!("{:<w$}", "Time", w = time_width));
    for column in &table.columns {
        out.push_str(&format!(" | {:^w$}", column.day_name, w = col_width));
    }
    out.push('\n');

    out.push_str(&" ".repeat(time_width));
    for column in &table.columns {
        out.push_str(&format!(" | {:^w$}", column.date, w = col_width));
    }
    out.push('\n');

    out.push_str(&"-".repeat(time_width + table.columns.len() * (col_width + 3)));
    out.push('\n');

    for row in &table.rows {
        out.push_str(&format!("{:<w$}", row.label, w = time_width));
        for cell in &row.cells {
            let text = format!("{}{}", cell.tier.marker(), cell.text);
            out.push_str(&format!(" | {:^w$}", text, w = col_width));
        }
        out.push('\n');
    }

    out
}

fn render_legend() -> String {
    AvailabilityTier::ALL
        .iter()
        .map(|tier| format!("[{}] {}", tier.marker(), tier.label()))
        .collect::<Vec<_>>()
        .join("  ")
}

async fn print_stats(config: &Config) -> anyhow::Result<()> {
    let doc = match fetch_document(config).await {
        Ok(doc) => Some(doc),
        Err(e) => {
            tracing::warn!("{:#}", e);
            None
        }
    };

    let stats = content::hero_stats(
        participants::total_participants_label(Local::now().date_naive()),
        earliest_date_label(doc.as_ref()),
    );

    for stat in &stats {
        println!("{:>24}  {}", stat.label, stat.value);
    }

    Ok(())
}

fn write_config(output: Option<PathBuf>) -> anyhow::Result<()> {
    let content = generate_default_config();

    match output {
        Some(path) => {
            std::fs::write(&path, content)
                .with_context(|| format!("Failed to write config to {:?}", path))?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", content),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use studysite::schedule::parse_document;

    #[test]
    fn test_render_table_shape() {
        let doc = parse_document(
            r#"{"Week1": {"dates": ["2025-06-02", "2025-06-03"], "slots": {"9:00": [null, 45], "10:00": [95, 70]}}}"#,
        )
        .unwrap();
        let table = AvailabilityTable::from_week(doc.week1.as_ref().unwrap()).unwrap();

        let text = render_table(&table);
        let lines: Vec<_> = text.lines().collect();

        // two header lines, a rule, one line per slot
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("Monday") && lines[0].contains("Tuesday"));
        assert!(lines[1].contains("2025-06-02"));
        assert!(lines[3].starts_with("9:00"));
        assert!(lines[3].contains("!45"));
        assert!(lines[4].contains("+95"));
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["studysite", "schedule", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Schedule { json: true })));

        let cli = Cli::try_parse_from(["studysite"]).unwrap();
        assert!(cli.command.is_none());
    }
}
