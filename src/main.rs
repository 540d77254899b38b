use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tissue_search::{check_index, SearchIndex, SearchWidget, WidgetConfig};

mod cli;
use cli::{display, Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins; otherwise `-v` picks the level for this crate.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tissue_search={}", level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Returns `Ok(false)` when the command ran but found problems.
fn run(command: Commands) -> Result<bool> {
    match command {
        Commands::Search {
            index,
            query,
            html,
            raw,
        } => {
            let loaded = SearchIndex::load(&index)
                .with_context(|| format!("loading {}", index.display()))?;
            let total = loaded.len();
            let config = WidgetConfig {
                raw_markup: raw,
                ..WidgetConfig::default()
            };
            let widget = SearchWidget::new(loaded, &config);
            let query = query.join(" ");

            if html {
                let mut markup = String::new();
                widget.handle_input(&query, &mut markup);
                println!("{}", markup);
            } else {
                display::print_results(&query, &widget.results(&query), total);
            }
            tracing::debug!(mode = ?config.markup_mode(), "search finished");
            Ok(true)
        }
        Commands::Check { index } => {
            let loaded = SearchIndex::load(&index)
                .with_context(|| format!("loading {}", index.display()))?;
            let report = check_index(&loaded);
            for issue in &report.issues {
                tracing::warn!("{}", issue);
            }
            display::print_report(&report);
            Ok(report.is_clean())
        }
        Commands::Inspect { index } => {
            let loaded = SearchIndex::load(&index)
                .with_context(|| format!("loading {}", index.display()))?;
            display::print_summary(&loaded);
            Ok(true)
        }
    }
}
