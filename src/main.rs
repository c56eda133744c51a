use clap::Parser;
use serde_json::json;
use startup_tracker::cli::{Cli, Commands};
use startup_tracker::config::{resolve_database_path, ServerConfig};
use startup_tracker::dashboard::server::DashboardServer;
use startup_tracker::error::{Result, TrackerError};
use startup_tracker::export::{run_update, UpdateConfig, UpdateOutcome};
use startup_tracker::logging::LoggingConfig;
use startup_tracker::registry::StartupRegistry;
use startup_tracker::sources::external_sources;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut log_config = LoggingConfig::from_args(cli.quiet, cli.verbose > 0, cli.json);
    if matches!(cli.command, Commands::Serve { .. }) {
        log_config.redirect_server_output();
    }

    if let Err(e) = startup_tracker::logging::init_logging(log_config) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&cli).await {
        let error_response = e.to_error_response();
        match serde_json::to_string_pretty(&error_response) {
            Ok(body) => eprintln!("{}", body),
            Err(_) => eprintln!("{}", e),
        }
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    match cli.command.clone() {
        Commands::Serve {
            host,
            port,
            static_dir,
        } => {
            let config = ServerConfig {
                host,
                port,
                static_dir,
            };

            let registry = Arc::new(StartupRegistry::with_sample_data().await);
            DashboardServer::new(config, registry)
                .run()
                .await
                .map_err(TrackerError::OtherError)?;
        },

        Commands::UpdateDb {
            database,
            limit,
            format,
        } => {
            if limit == 0 {
                return Err(TrackerError::InvalidInput(
                    "--limit must be at least 1".to_string(),
                ));
            }
            if format != "text" && format != "json" {
                return Err(TrackerError::InvalidInput(format!(
                    "Unknown format '{}', expected text or json",
                    format
                )));
            }

            let config = UpdateConfig::new(resolve_database_path(database.as_deref()));
            tracing::info!("Database: {}", config.csv_path.display());

            let outcome = run_update(&config, &external_sources(limit)).await?;
            print_update_outcome(&config, &outcome, &format)?;
        },
    }

    Ok(())
}

fn print_update_outcome(
    config: &UpdateConfig,
    outcome: &UpdateOutcome,
    format: &str,
) -> Result<()> {
    if format == "json" {
        let body = match outcome {
            UpdateOutcome::Unchanged => json!({
                "updated": false,
                "database": config.csv_path.display().to_string(),
            }),
            UpdateOutcome::Updated { added, total } => json!({
                "updated": true,
                "database": config.csv_path.display().to_string(),
                "summary": config.md_path.display().to_string(),
                "added": added,
                "total": total,
            }),
        };
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    match outcome {
        UpdateOutcome::Unchanged => {
            println!("No new data fetched. Database unchanged.");
        },
        UpdateOutcome::Updated { added, total } => {
            println!("Update complete");
            println!("Added: {} new startups", added);
            println!("Total startups: {}", total);
            println!("Database location: {}", config.csv_path.display());
        },
    }

    Ok(())
}
