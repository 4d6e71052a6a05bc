//! Instruction strings sent to the model
//!
//! Both builders are pure string construction: deterministic, no side
//! effects, no validation of the goal's content.

/// Build the roster instruction for one generation run.
///
/// Asks for quoted-CSV output with the fixed column set the parser expects:
/// `role, goal, backstory, assigned_task, allow_delegation`.
pub fn roster_prompt(overall_goal: &str, delimiter: char) -> String {
    format!(
        "Create a dataset in a CSV format with each field enclosed in double quotes, \
         for a team of agents with the goal: \"{overall_goal}\". \
         Use the delimiter \"{delimiter}\" to separate the fields. \
         Include columns \"role\", \"goal\", \"backstory\", \"assigned_task\", \"allow_delegation\". \
         Each agent's details should be in quotes to avoid confusion with the delimiter. \
         Provide a single-word role, specific goal, brief backstory, assigned task, \
         and delegation ability (True/False) for each agent."
    )
}

/// Build the ranking instruction comparing multiple prior rosters.
///
/// `concatenated_csv` is the combined roster data produced by
/// [`crate::ranking::concatenate_csv_data`], where the `filename` column
/// identifies each crew.
pub fn ranking_prompt(overall_goal: &str, concatenated_csv: &str) -> String {
    format!(
        "From a list of crews, you need to provide identify which crew is most likely \
         to successfully complete the task: {overall_goal}. \
         Each crew contains agents and tasks. The list of all agents is here: {concatenated_csv}. \
         In this list, the information in the filename column is the crew name. \
         I want you to return a CSV with the following columns: crewname, rank, explanation, recommendation. \
         In rank, assign 1 to your preferred crew. \
         In explanation, explain why you assigned this rank to this particular crew. \
         In recommendation, outline changes that would further improve the performance of this crew."
    )
}
