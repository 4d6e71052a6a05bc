//! # Autocrew CLI
//!
//! Command-line interface for generating CrewAI agent rosters.
//!
//! Usage:
//!   autocrew <goal>
//!   autocrew -a <goal>
//!   autocrew -m 3 <goal>
//!   autocrew -r <goal>
//!
//! Examples:
//!   autocrew "research AI safety"
//!   autocrew --auto_run "summarize this week's arxiv papers"
//!   autocrew --multiple 3 "research AI safety"
//!   autocrew --ranking "research AI safety"

use autocrew_core::run::{run_generation, run_ranking_only};
use autocrew_core::version::{check_latest_version, AUTOCREW_VERSION};
use autocrew_core::RunConfig;
use clap::Parser;
use std::io::Write;

#[derive(Parser)]
#[command(name = "autocrew")]
#[command(author, version, about = "Autocrew - generate CrewAI agent rosters with a local LLM")]
struct Cli {
    /// The overall goal for the crew (prompted interactively if omitted)
    overall_goal: Option<String>,

    /// Automatically run the generated script
    #[arg(short = 'a', long = "auto_run")]
    auto_run: bool,

    /// Create NUM scripts for the same overall goal. Example: -m 3
    #[arg(short = 'm', long = "multiple", value_name = "NUM")]
    multiple: Option<usize>,

    /// Perform ranking only, based on existing CSV files
    #[arg(short = 'r', long = "ranking")]
    ranking: bool,
}

/// Ask for the goal on stdin when it was not passed on the command line.
fn prompt_for_goal() -> String {
    print!("Please specify the overall goal: ");
    let _ = std::io::stdout().flush();

    let mut line = String::new();
    if std::io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_string()
}

fn report_error(err: &autocrew_error::Error) {
    eprintln!("Error: {}", err);
    eprintln!("{:?}", err);
}

#[tokio::main]
async fn main() {
    println!();
    println!("Autocrew (v{}) for CrewAI", AUTOCREW_VERSION);

    // Best effort; failures are reported and swallowed
    match check_latest_version().await {
        Ok(Some(latest)) => println!("\nNew version available: {}", latest),
        Ok(None) => {}
        Err(e) => println!("Error checking the latest version: {}", e),
    }

    println!("\nTo see the available command line parameters, type: autocrew --help");
    println!();

    let cli = Cli::parse();

    // Incompatible modes fail before any model call
    if cli.multiple.is_some() && cli.auto_run {
        report_error(&autocrew_error::Error::config_invalid(
            "the -m and -a command line parameters must not be used simultaneously",
        ));
        std::process::exit(1);
    }

    let overall_goal = match cli.overall_goal {
        Some(goal) => goal,
        None => prompt_for_goal(),
    };

    if cli.ranking {
        if let Err(e) = run_ranking_only(&overall_goal).await {
            report_error(&e);
            std::process::exit(1);
        }
        return;
    }

    let config = RunConfig::new(overall_goal)
        .with_auto_run(cli.auto_run)
        .with_count(cli.multiple.unwrap_or(1));

    if let Err(e) = run_generation(&config).await {
        report_error(&e);
        std::process::exit(1);
    }
}
