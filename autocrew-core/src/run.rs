//! The run loop
//!
//! Coordinates one invocation end to end: prompt, model call, parse, emit,
//! persist, optionally execute, and for multi-run requests a final ranking
//! pass. Everything is sequential; each model call blocks until the full
//! reply is back, and a failure anywhere aborts the remaining iterations by
//! plain error propagation. Nothing is retried.

use crate::artifact::{
    discover_csv_artifacts, ranking_file_name, save_csv_output, script_file_name,
    write_ranking_csv, RunArtifact,
};
use crate::prompt::roster_prompt;
use crate::provider::{LlmProvider, OllamaProvider};
use crate::ranking::rank_crews;
use crate::roster::parse_roster;
use crate::script::write_script;
use autocrew_error::{Error, Result};

/// Configuration for one invocation.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// The overall goal for the crew
    pub goal: String,
    /// Execute each generated script synchronously after writing it
    pub auto_run: bool,
    /// Number of roster variants to generate
    pub count: usize,
    /// CSV field delimiter requested from the model
    pub delimiter: char,
}

impl RunConfig {
    pub fn new(goal: impl Into<String>) -> Self {
        Self {
            goal: goal.into(),
            auto_run: false,
            count: 1,
            delimiter: ',',
        }
    }

    pub fn with_auto_run(mut self, auto_run: bool) -> Self {
        self.auto_run = auto_run;
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Reject incompatible modes before any model call is made.
    pub fn validate(&self) -> Result<()> {
        if self.count > 1 && self.auto_run {
            return Err(Error::config_invalid(
                "the -m and -a command line parameters must not be used simultaneously",
            )
            .with_operation("run::validate"));
        }
        Ok(())
    }
}

/// Generate `count` rosters for the goal, writing CSV and script artifacts
/// into the current working directory. For multi-run requests, rank the
/// variants once at the end and persist the ranking.
pub async fn run_generation(config: &RunConfig) -> Result<Vec<RunArtifact>> {
    config.validate()?;

    let dir = std::env::current_dir().map_err(Error::from)?;
    let mut artifacts = Vec::with_capacity(config.count);

    for index in 1..=config.count {
        // Fresh model session per script
        let provider = OllamaProvider::local();

        let response = provider
            .invoke(&roster_prompt(&config.goal, config.delimiter))
            .await?;
        if response.trim().is_empty() {
            return Err(Error::empty_response("no response from Ollama")
                .with_operation("run::generate")
                .with_context("iteration", index.to_string()));
        }

        let csv_path = save_csv_output(&dir, &response, &config.goal, index)?;

        let records = parse_roster(&response, config.delimiter, &csv_path.display().to_string())?;
        if records.is_empty() {
            return Err(Error::empty_response("no agent data parsed")
                .with_operation("run::generate")
                .with_context("csv", csv_path.display().to_string()));
        }

        let script_path = dir.join(script_file_name(&config.goal, index));
        write_script(&records, &script_path)?;

        println!("\nScript {} written to {}", index, script_path.display());

        if config.auto_run {
            println!("\nRunning script {}...", index);
            // Blocks until the child exits; its exit code is not checked
            let _ = tokio::process::Command::new("python3")
                .arg(&script_path)
                .status()
                .await;
        }

        artifacts.push(RunArtifact {
            csv_path,
            script_path,
        });
    }

    if config.count > 1 {
        let csv_paths = artifacts.iter().map(|a| a.csv_path.clone()).collect();

        let provider = OllamaProvider::local();
        let (ranked, summary) = rank_crews(&provider, csv_paths, &config.goal).await?;

        let ranking_path = dir.join(ranking_file_name(&config.goal));
        write_ranking_csv(&ranking_path, &ranked)?;

        println!("\nRanked crews saved as {}", ranking_path.display());
        println!("\nOverall Summary:");
        println!("{}", summary);

        // Final model call; the reply is intentionally unused
        provider.invoke(&summary).await?;
    }

    Ok(artifacts)
}

/// Rank existing CSV artifacts matching the goal, without generating
/// anything new. When none are found, reports and stops before any model
/// call.
pub async fn run_ranking_only(overall_goal: &str) -> Result<()> {
    let dir = std::env::current_dir().map_err(Error::from)?;

    let csv_paths = discover_csv_artifacts(&dir, overall_goal)?;
    if csv_paths.is_empty() {
        println!(
            "No CSV files found for the provided overall goal: {}",
            overall_goal
        );
        return Ok(());
    }

    let provider = OllamaProvider::local();
    let (_ranked, summary) = rank_crews(&provider, csv_paths, overall_goal).await?;

    println!("\nOverall Summary:");
    println!("{}", summary);

    Ok(())
}
