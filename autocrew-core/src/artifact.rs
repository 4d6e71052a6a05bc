//! Artifact naming and persistence
//!
//! Every run writes its raw CSV reply and generated script into the working
//! directory under a common prefix, so later ranking runs can rediscover
//! them by goal. File writes are plain synchronous writes; the tool assumes
//! exclusive use of its working directory.

use crate::ranking::RankedCrews;
use autocrew_error::{Error, Result};
use chrono::Local;
use std::path::{Path, PathBuf};

/// Prefix shared by all generated files.
pub const TOOL_PREFIX: &str = "autocrew";

/// A (CSV path, generated script path) pair produced by one iteration.
#[derive(Debug, Clone)]
pub struct RunArtifact {
    pub csv_path: PathBuf,
    pub script_path: PathBuf,
}

fn timestamp() -> String {
    Local::now().format("%Y%m%d-%H%M%S").to_string()
}

/// Goal slug used in file names: truncate to `max_len` characters, then
/// replace spaces with dashes.
pub fn goal_slug(goal: &str, max_len: usize) -> String {
    goal.chars().take(max_len).collect::<String>().replace(' ', "-")
}

/// File name for one iteration's raw CSV reply (40-char goal slug).
pub fn csv_file_name(goal: &str, index: usize) -> String {
    format!("{}-{}-{}-{}.csv", TOOL_PREFIX, timestamp(), goal_slug(goal, 40), index)
}

/// File name for one iteration's generated script (50-char goal slug).
pub fn script_file_name(goal: &str, index: usize) -> String {
    format!("{}-{}-{}-{}.py", TOOL_PREFIX, timestamp(), goal_slug(goal, 50), index)
}

/// File name for the ranking artifact of a multi-run invocation.
pub fn ranking_file_name(goal: &str) -> String {
    format!("{}-{}-{}-ranking.csv", TOOL_PREFIX, timestamp(), goal_slug(goal, 50))
}

/// Write the raw model reply for iteration `index` into `dir` and return
/// the full path.
pub fn save_csv_output(dir: &Path, response: &str, goal: &str, index: usize) -> Result<PathBuf> {
    let path = dir.join(csv_file_name(goal, index));
    std::fs::write(&path, response).map_err(|e| {
        Error::from(e)
            .with_operation("artifact::save_csv")
            .with_context("path", path.display().to_string())
    })?;
    Ok(path)
}

/// Quote a field for the ranking CSV: wrap when it contains a delimiter,
/// quote, or newline; embedded quotes are doubled.
fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Persist ranked crews as `CSV File, Ranking, Critique` rows.
pub fn write_ranking_csv(path: &Path, ranked: &[RankedCrews]) -> Result<()> {
    let mut out = String::from("CSV File,Ranking,Critique\r\n");
    for crews in ranked {
        let file_list = crews
            .csv_files
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join("; ");
        out.push_str(&format!(
            "{},{},{}\r\n",
            quote_field(&file_list),
            quote_field(&crews.ranking),
            quote_field(&crews.critique)
        ));
    }
    std::fs::write(path, out).map_err(|e| {
        Error::from(e)
            .with_operation("artifact::write_ranking")
            .with_context("path", path.display().to_string())
    })
}

/// Find prior CSV artifacts in `dir` whose names carry the tool prefix and
/// contain the goal substring. Used by ranking-only mode.
pub fn discover_csv_artifacts(dir: &Path, goal: &str) -> Result<Vec<PathBuf>> {
    let needle = goal.replace(' ', "-");
    let mut paths = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| {
        Error::from(e)
            .with_operation("artifact::discover")
            .with_context("dir", dir.display().to_string())
    })?;

    for entry in entries.flatten() {
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if name.starts_with(&format!("{}-", TOOL_PREFIX))
            && name.ends_with(".csv")
            && (name.contains(goal) || name.contains(&needle))
        {
            paths.push(entry.path());
        }
    }

    paths.sort();
    Ok(paths)
}
