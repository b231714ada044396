//! Bridge to an external generative text service.
//!
//! The service is reached through the [`CompletionService`] trait, which is
//! the only asynchronous seam of the engine. [`build_prompt`] turns a goal into
//! the instruction sent to it and [`parse_reply`] classifies whatever comes
//! back.

use async_trait::async_trait;

use crate::{error::ServiceError, models::Task};

pub mod openai;

pub use openai::OpenAiService;

/// Number of reply characters kept in `llm_note` when a reply is unusable.
pub const NOTE_CHAR_LIMIT: usize = 400;

/// A text completion capability. Each call is independent.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Sends one prompt and returns the reply text.
    async fn complete(&self, prompt: &str) -> Result<String, ServiceError>;
}

/// What a service reply turned out to contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// A JSON array of task objects, to be used as-is
    Parsed(Vec<Task>),
    /// Anything else, with the first [`NOTE_CHAR_LIMIT`] characters of it
    Unparseable { note: String },
}

/// Builds the instruction asking the service to decompose `goal`.
pub fn build_prompt(goal: &str) -> String {
    format!(
        "Break down this user goal into an actionable task list. \
         Include for each task: title, short description, estimated start date and end date \
         (ISO YYYY-MM-DD), and dependencies (titles). \
         If the goal includes a duration (e.g., 'in 2 weeks'), use that to set deadlines. \
         Goal: {goal}\n\
         Return as JSON array of objects with keys: title, description, start_date, end_date, depends_on."
    )
}

/// Classifies a reply. A markdown code fence around the JSON is tolerated;
/// an empty array counts as unparseable.
pub fn parse_reply(reply: &str) -> ReplyOutcome {
    match serde_json::from_str::<Vec<Task>>(strip_code_fence(reply)) {
        Ok(tasks) if !tasks.is_empty() => ReplyOutcome::Parsed(tasks),
        _ => ReplyOutcome::Unparseable {
            note: reply.chars().take(NOTE_CHAR_LIMIT).collect(),
        },
    }
}

fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = body.trim_end().strip_suffix("```").unwrap_or(body);
    // Drop an info string such as `json` on the opening fence.
    let body = match body.split_once('\n') {
        Some((info, rest)) if !info.trim_start().starts_with('[') => rest,
        _ => {
            let inline = body.trim_start();
            inline.strip_prefix("json").unwrap_or(inline)
        }
    };
    body.trim()
}
