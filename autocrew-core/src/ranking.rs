//! Ranking runs - compare previously generated rosters
//!
//! A ranking run is a second model invocation: every prior CSV artifact is
//! folded into one table (one extra leading `filename` column identifies the
//! crew each row came from) and the model is asked for a ranked comparison.
//! The reply is kept as free-form text; no schema is enforced on it.

use crate::prompt::ranking_prompt;
use crate::provider::LlmProvider;
use autocrew_error::{Error, Result};
use std::path::PathBuf;

/// Shared header for the concatenated roster data.
pub const CONCATENATED_HEADER: &str =
    "filename,role,goal,backstory,assigned_task,allow_delegation";

/// The outcome of one ranking run.
///
/// The model's raw reply serves as both ranking and critique; this is an
/// accepted limitation, not something to parse further.
#[derive(Debug, Clone)]
pub struct RankedCrews {
    pub csv_files: Vec<PathBuf>,
    pub ranking: String,
    pub critique: String,
}

/// Deduplicate paths (first occurrence wins) and drop anything that is
/// itself a ranking artifact, so a previous ranking is never re-ranked.
fn rankable_paths(csv_paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut seen = Vec::new();
    for path in csv_paths {
        if seen.contains(path) {
            continue;
        }
        if path.display().to_string().to_lowercase().contains("ranking") {
            continue;
        }
        seen.push(path.clone());
    }
    seen
}

/// Read every rankable CSV and concatenate all rows under one shared
/// header, each row prefixed with its source file's base name.
pub fn concatenate_csv_data(csv_paths: &[PathBuf]) -> Result<String> {
    let mut concatenated = format!("{}\n", CONCATENATED_HEADER);

    for path in csv_paths {
        println!("\nProcessing CSV: {}", path.display());

        let csv_data = std::fs::read_to_string(path).map_err(|e| {
            Error::from(e)
                .with_operation("ranking::concatenate")
                .with_context("path", path.display().to_string())
        })?;

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        for row in csv_data.trim().split('\n') {
            concatenated.push_str(&format!("{},{}\n", filename, row));
        }
    }

    Ok(concatenated)
}

/// Run one ranking pass over the given CSV artifacts.
///
/// Returns the ranked crews plus a human-readable overall summary string.
pub async fn rank_crews<P: LlmProvider>(
    provider: &P,
    csv_paths: Vec<PathBuf>,
    overall_goal: &str,
) -> Result<(Vec<RankedCrews>, String)> {
    let csv_paths = rankable_paths(&csv_paths);

    println!("Invoking Ollama...");

    let concatenated = concatenate_csv_data(&csv_paths)?;

    println!("\nConcatenated CSV Data:");
    println!("{}", concatenated);

    let prompt = ranking_prompt(overall_goal, &concatenated);
    let ranking = provider.invoke(&prompt).await?;

    println!("\nOllama Ranking:");
    println!("{}", ranking);

    // The raw reply doubles as the critique
    let critique = ranking.clone();
    println!("\nOllama Critique:");
    println!("{}", critique);

    let mut summary = String::from("\n\nCrews in the following CSV files:\n");
    for path in &csv_paths {
        summary.push_str(&format!("{}\n", path.display()));
    }
    summary.push_str(&format!("Ranking: {}\n", ranking));
    summary.push_str(&format!("Critique: {}\n", critique));

    summary.push_str("\nOverall Summary:\n");
    summary.push_str("Ollama has ranked the crews based on their likelihood of success.\n");
    summary.push_str("It has provided a critique for each crew, highlighting their strengths and weaknesses.\n");
    summary.push_str("The ranking and critique can be used to make informed decisions about the crews.\n");

    let ranked = vec![RankedCrews {
        csv_files: csv_paths,
        ranking,
        critique,
    }];

    Ok((ranked, summary))
}
