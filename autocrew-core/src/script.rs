//! CrewAI script emission
//!
//! The generated script is an opaque templated artifact: Python source text
//! describing agents, tasks, and a sequential crew. It is never executed by
//! this crate directly, only written out (and optionally handed to a child
//! interpreter by the run loop).
//!
//! Escaping note: `role` and `backstory` backslash-escape both quote kinds,
//! `assigned_task` escapes double quotes only, and `goal` is emitted
//! verbatim. Downstream consumers depend on exactly this behavior, so it is
//! reproduced as-is.

use crate::roster::AgentRecord;
use autocrew_error::{Error, Result};
use std::path::Path;

/// Derive a generated-script identifier from an agent role.
///
/// Every space, hyphen, and period becomes an underscore. The same
/// derivation is used wherever a role is referenced, so generated
/// identifiers stay internally consistent.
pub fn derive_ident(role: &str) -> String {
    role.replace([' ', '-', '.'], "_")
}

/// The task variable name for an agent role.
pub fn task_ident(role: &str) -> String {
    format!("task_{}", derive_ident(role))
}

fn escape_quotes(s: &str) -> String {
    s.replace('"', "\\\"").replace('\'', "\\'")
}

/// Render one `Agent(...)` definition.
fn define_agent(record: &AgentRecord) -> String {
    let ident = derive_ident(&record.role);
    let role = escape_quotes(&record.role);
    let backstory = escape_quotes(&record.backstory);
    let delegation = if record.allow_delegation == "True" { "True" } else { "False" };

    format!(
        "{ident} = Agent(\n\
        \x20   role=\"{role}\",\n\
        \x20   goal=\"{goal}\",\n\
        \x20   backstory=\"{backstory}\",\n\
        \x20   verbose=True,\n\
        \x20   allow_delegation={delegation},\n\
        \x20   llm=ollama_openhermes,\n\
        \x20   tools=[search_tool]\n\
        )\n\n",
        goal = record.goal,
    )
}

/// Render one `Task(...)` definition bound to its agent.
fn define_task(record: &AgentRecord) -> String {
    let task_var = task_ident(&record.role);
    let agent_var = derive_ident(&record.role);
    // Double quotes only; single quotes pass through untouched here
    let description = record.assigned_task.trim().replace('"', "\\\"");

    format!(
        "{task_var} = Task(\n\
        \x20description=\"{description}\",\n\
        \x20agent={agent_var},\n\
        \x20verbose=True,\n\
        )\n\n"
    )
}

/// Render the full script for an ordered roster.
pub fn render_script(records: &[AgentRecord]) -> String {
    let crew_agents = records
        .iter()
        .map(|r| derive_ident(&r.role))
        .collect::<Vec<_>>()
        .join(", ");
    let crew_tasks = records
        .iter()
        .map(|r| task_ident(&r.role))
        .collect::<Vec<_>>()
        .join(", ");

    let mut script = String::from(
        "import os\n\
         from langchain_community.chat_models import ChatOpenAI\n\
         from langchain_community.llms import Ollama\n\
         from langchain_community.tools import DuckDuckGoSearchRun\n\
         from crewai import Agent, Task, Crew, Process\n\n\
         os.environ[\"OPENAI_API_KEY\"] = \"your_OPENAI_api_key_here\"\n\n\
         ollama_openhermes = Ollama(model=\"openhermes\")\n\
         search_tool = DuckDuckGoSearchRun()\n\n",
    );

    for record in records {
        script.push_str(&define_agent(record));
        script.push('\n');
    }

    for record in records {
        script.push_str(&define_task(record));
        script.push('\n');
    }

    script.push_str(&format!(
        "crew = Crew(\n\
        \x20   agents=[{crew_agents}],\n\
        \x20   tasks=[{crew_tasks}],\n\
        \x20   verbose=True,\n\
        \x20   process=Process.sequential,\n\
        )\n\n\
        # Kickoff the crew tasks\n\
        result = crew.kickoff()\n\n\
        # Handle the \"result\" as needed\n"
    ));

    script
}

/// Write the rendered script to `path`, overwriting any existing file.
pub fn write_script(records: &[AgentRecord], path: &Path) -> Result<()> {
    std::fs::write(path, render_script(records)).map_err(|e| {
        Error::from(e)
            .with_operation("script::write")
            .with_context("path", path.display().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(role: &str) -> AgentRecord {
        AgentRecord {
            role: role.into(),
            goal: "find papers".into(),
            backstory: "veteran analyst".into(),
            assigned_task: "scan arxiv".into(),
            allow_delegation: "True".into(),
            source_file: "crew.csv".into(),
        }
    }

    #[test]
    fn test_derive_ident_replaces_separators() {
        assert_eq!(derive_ident("Data Scientist"), "Data_Scientist");
        assert_eq!(derive_ident("QA-Engineer"), "QA_Engineer");
        assert_eq!(derive_ident("Sr. Analyst"), "Sr__Analyst");
        assert_eq!(task_ident("Data Scientist"), "task_Data_Scientist");
    }

    #[test]
    fn test_derive_ident_idempotent() {
        let once = derive_ident("a b-c.d");
        assert_eq!(derive_ident(&once), once);
    }

    #[test]
    fn test_agent_definition_fields() {
        let text = define_agent(&record("Researcher"));
        assert!(text.starts_with("Researcher = Agent(\n"));
        assert!(text.contains("role=\"Researcher\""));
        assert!(text.contains("goal=\"find papers\""));
        assert!(text.contains("allow_delegation=True"));
        assert!(text.contains("llm=ollama_openhermes"));
        assert!(text.contains("tools=[search_tool]"));
    }

    #[test]
    fn test_delegation_normalized() {
        let mut r = record("Researcher");
        r.allow_delegation = "yes".into();
        assert!(define_agent(&r).contains("allow_delegation=False"));
        r.allow_delegation = "True".into();
        assert!(define_agent(&r).contains("allow_delegation=True"));
    }

    #[test]
    fn test_role_and_backstory_escaped_but_goal_is_not() {
        let mut r = record("Researcher");
        r.role = "The \"Best\" Researcher".into();
        r.backstory = "it's complicated".into();
        r.goal = "say \"hi\"".into();
        let text = define_agent(&r);
        assert!(text.contains("role=\"The \\\"Best\\\" Researcher\""));
        assert!(text.contains("backstory=\"it\\'s complicated\""));
        // goal passes through verbatim, quotes and all
        assert!(text.contains("goal=\"say \"hi\"\""));
    }

    #[test]
    fn test_task_escapes_double_quotes_only() {
        let mut r = record("Researcher");
        r.assigned_task = "  review \"papers\" and don't stop  ".into();
        let text = define_task(&r);
        assert!(text.contains("description=\"review \\\"papers\\\" and don't stop\""));
        assert!(text.contains("agent=Researcher"));
    }

    #[test]
    fn test_script_identifiers_consistent_between_definition_and_crew() {
        let records = vec![record("Data Scientist"), record("QA-Engineer")];
        let script = render_script(&records);

        for role in ["Data Scientist", "QA-Engineer"] {
            let agent_var = derive_ident(role);
            let task_var = task_ident(role);
            assert!(script.contains(&format!("{} = Agent(", agent_var)));
            assert!(script.contains(&format!("{} = Task(", task_var)));
        }
        assert!(script.contains("agents=[Data_Scientist, QA_Engineer]"));
        assert!(script.contains("tasks=[task_Data_Scientist, task_QA_Engineer]"));
        assert!(script.contains("process=Process.sequential"));
        assert!(script.contains("result = crew.kickoff()"));
    }

    #[test]
    fn test_write_script_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crew.py");
        std::fs::write(&path, "old contents").unwrap();

        write_script(&[record("Researcher")], &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("import os\n"));
        assert!(!written.contains("old contents"));
    }
}
