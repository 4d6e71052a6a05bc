//! The CSV roster contract
//!
//! The model is asked for delimited text with a header row and one row per
//! agent. Parsing is deliberately minimal: fields are split on the delimiter
//! (quote-aware, so a quoted field may contain the delimiter) and then
//! stripped of literal wrapping quotes. Full CSV quote-escaping is NOT
//! implemented; that matches the contract the prompt asks the model for.

use autocrew_error::{Error, Result};

/// The column set the roster prompt asks for, in canonical order.
pub const EXPECTED_COLUMNS: [&str; 5] =
    ["role", "goal", "backstory", "assigned_task", "allow_delegation"];

/// One row of parsed model output.
///
/// Constructed once per CSV row right after a model response is received,
/// never mutated, consumed by the script emitter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentRecord {
    /// Uniquely identifies the agent within a run; must be non-empty
    pub role: String,
    pub goal: String,
    pub backstory: String,
    pub assigned_task: String,
    /// Boolean-like string; anything other than "True" means no delegation
    pub allow_delegation: String,
    /// Provenance: the artifact the row came from, added by the parser
    pub source_file: String,
}

/// Parse a raw model reply into agent records.
///
/// The first row is the header. Header names are matched case-insensitively
/// against [`EXPECTED_COLUMNS`]; unrecognized columns are silently dropped,
/// and expected columns absent from the header are simply never populated.
/// Rows shorter than the header are tolerated. A row whose `role` field is
/// empty or absent fails the whole run.
pub fn parse_roster(response: &str, delimiter: char, source_file: &str) -> Result<Vec<AgentRecord>> {
    let mut lines = response.lines();

    let header_line = lines.next().ok_or_else(|| {
        Error::parse_failed("missing header row")
            .with_operation("roster::parse")
            .with_context("source_file", source_file)
    })?;

    let columns: Vec<Option<&'static str>> = split_row(header_line, delimiter)
        .iter()
        .map(|cell| {
            let name = cell.to_lowercase();
            EXPECTED_COLUMNS.iter().find(|c| **c == name).copied()
        })
        .collect();

    let mut records = Vec::new();
    for (row_index, line) in lines.enumerate() {
        let mut record = AgentRecord::default();
        for (i, value) in split_row(line, delimiter).into_iter().enumerate() {
            match columns.get(i).copied().flatten() {
                Some("role") => record.role = value,
                Some("goal") => record.goal = value,
                Some("backstory") => record.backstory = value,
                Some("assigned_task") => record.assigned_task = value,
                Some("allow_delegation") => record.allow_delegation = value,
                _ => {}
            }
        }

        if record.role.is_empty() {
            return Err(Error::parse_failed("role component missing in CSV data")
                .with_operation("roster::parse")
                .with_context("row", (row_index + 1).to_string())
                .with_context("source_file", source_file));
        }

        record.source_file = source_file.to_string();
        records.push(record);
    }

    Ok(records)
}

/// Split one row on the delimiter, honoring double quotes so a quoted field
/// may contain the delimiter. Each field is trimmed and stripped of literal
/// wrapping quotes.
fn split_row(line: &str, delimiter: char) -> Vec<String> {
    if line.is_empty() {
        return Vec::new();
    }

    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
            current.push(ch);
        } else if ch == delimiter && !in_quotes {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    fields.push(current);

    fields
        .into_iter()
        .map(|f| f.trim().trim_matches('"').to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = "role,goal,backstory,assigned_task,allow_delegation\n\
        \"Researcher\",\"find papers\",\"veteran analyst\",\"scan arxiv\",\"True\"\n\
        \"Writer\",\"draft report\",\"former journalist\",\"summarize findings\",\"False\"";

    #[test]
    fn test_parse_yields_one_record_per_row_in_order() {
        let records = parse_roster(RESPONSE, ',', "crew.csv").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].role, "Researcher");
        assert_eq!(records[0].goal, "find papers");
        assert_eq!(records[0].allow_delegation, "True");
        assert_eq!(records[0].source_file, "crew.csv");
        assert_eq!(records[1].role, "Writer");
        assert_eq!(records[1].allow_delegation, "False");
    }

    #[test]
    fn test_missing_role_is_fatal() {
        let response = "role,goal\n\"\",\"a goal\"";
        let err = parse_roster(response, ',', "crew.csv").unwrap_err();
        assert_eq!(err.kind(), autocrew_error::ErrorKind::ParseFailed);
        assert!(err.message().contains("role component missing"));
    }

    #[test]
    fn test_role_absent_from_row_is_fatal() {
        // Blank interior row carries no role at all
        let response = "role,goal\n\"Researcher\",\"find papers\"\n\n\"Writer\",\"draft\"";
        assert!(parse_roster(response, ',', "crew.csv").is_err());
    }

    #[test]
    fn test_short_row_tolerated_when_role_present() {
        let response = "role,goal,backstory,assigned_task,allow_delegation\n\"Researcher\",\"find papers\"";
        let records = parse_roster(response, ',', "crew.csv").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].role, "Researcher");
        assert_eq!(records[0].backstory, "");
        assert_eq!(records[0].allow_delegation, "");
    }

    #[test]
    fn test_header_matching_is_case_insensitive() {
        let response = "Role,GOAL,Backstory,Assigned_Task,Allow_Delegation\n\"R\",\"g\",\"b\",\"t\",\"True\"";
        let records = parse_roster(response, ',', "crew.csv").unwrap();
        assert_eq!(records[0].role, "R");
        assert_eq!(records[0].assigned_task, "t");
    }

    #[test]
    fn test_unknown_columns_silently_dropped() {
        let response = "role,notes,goal\n\"R\",\"ignore me\",\"g\"";
        let records = parse_roster(response, ',', "crew.csv").unwrap();
        assert_eq!(records[0].role, "R");
        assert_eq!(records[0].goal, "g");
        assert_eq!(records[0].backstory, "");
    }

    #[test]
    fn test_quoted_field_may_contain_delimiter() {
        let response = "role,goal\n\"Researcher\",\"find, read, rank papers\"";
        let records = parse_roster(response, ',', "crew.csv").unwrap();
        assert_eq!(records[0].goal, "find, read, rank papers");
    }

    #[test]
    fn test_alternate_delimiter() {
        let response = "role;goal\n\"Researcher\";\"find papers\"";
        let records = parse_roster(response, ';', "crew.csv").unwrap();
        assert_eq!(records[0].role, "Researcher");
        assert_eq!(records[0].goal, "find papers");
    }

    #[test]
    fn test_empty_response_fails_on_header() {
        assert!(parse_roster("", ',', "crew.csv").is_err());
    }

    #[test]
    fn test_split_row_strips_wrapping_quotes_only() {
        let fields = split_row("\"a\",b, \"c\" ", ',');
        assert_eq!(fields, vec!["a", "b", "c"]);
    }
}
