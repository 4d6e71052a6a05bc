//! # Autocrew Core
//!
//! Everything between the command line and the model runtime:
//!
//! - **Provider**: trait-based access to a local Ollama daemon
//! - **Prompt**: the roster and ranking instruction strings
//! - **Roster**: CSV contract parsing into `AgentRecord`s
//! - **Script**: CrewAI script emission (opaque templated Python text)
//! - **Ranking**: concatenate prior rosters and ask the model to compare
//! - **Artifact**: file naming and persistence in the working directory
//! - **Run**: the sequential loop tying it all together
//!
//! The model runtime and the CrewAI framework stay opaque: one is reached
//! through a single `invoke(prompt) -> text` call, the other only ever
//! exists as generated source text.

pub mod artifact;
pub mod prompt;
pub mod provider;
pub mod ranking;
pub mod roster;
pub mod run;
pub mod script;
pub mod version;

pub use artifact::{RunArtifact, TOOL_PREFIX};
pub use provider::{
    CompletionRequest, CompletionResponse, LlmProvider, OllamaProvider, ProviderConfig,
};
pub use ranking::RankedCrews;
pub use roster::AgentRecord;
pub use run::RunConfig;
