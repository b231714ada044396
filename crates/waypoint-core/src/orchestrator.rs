//! Entry point of the decomposition engine.
//!
//! [`PlanOrchestrator`] picks between the external bridge and the
//! deterministic pipeline. The bridge is only tried when the caller asks for
//! it and a service is configured, and every way it can fail ends in the
//! deterministic plan:
//!
//! | bridge result               | plan returned                            |
//! |-----------------------------|------------------------------------------|
//! | not requested / unavailable | deterministic                            |
//! | call failed                 | deterministic                            |
//! | reply not a task array      | deterministic, each task with `llm_note` |
//! | reply is a task array       | the reply's tasks                        |

use std::sync::Arc;

use jiff::Timestamp;
use log::{debug, warn};

use crate::{
    bridge::{build_prompt, parse_reply, CompletionService, OpenAiService, ReplyOutcome},
    config::EngineConfig,
    engine::{decompose, Goal},
    error::ServiceError,
    models::Task,
};

/// Generates task plans from goal text.
#[derive(Clone, Default)]
pub struct PlanOrchestrator {
    service: Option<Arc<dyn CompletionService>>,
}

impl PlanOrchestrator {
    /// Builds an orchestrator from configuration. A service that cannot be
    /// constructed is logged and left out.
    pub fn new(config: &EngineConfig) -> Self {
        let service = config.service.as_ref().and_then(|service_config| {
            match OpenAiService::from_config(service_config) {
                Ok(client) => Some(Arc::new(client) as Arc<dyn CompletionService>),
                Err(e) => {
                    warn!("Completion service disabled: {e}");
                    None
                }
            }
        });
        Self { service }
    }

    /// An orchestrator that only runs the deterministic pipeline.
    pub fn deterministic() -> Self {
        Self::default()
    }

    /// An orchestrator backed by the given completion service.
    pub fn with_service(service: Arc<dyn CompletionService>) -> Self {
        Self {
            service: Some(service),
        }
    }

    /// True when an external service is available.
    pub fn has_service(&self) -> bool {
        self.service.is_some()
    }

    /// Generates a plan for `goal_text` relative to the current instant.
    pub async fn generate(&self, goal_text: &str, use_external: bool) -> Vec<Task> {
        self.generate_at(goal_text, use_external, Timestamp::now()).await
    }

    /// Generates a plan for `goal_text` relative to `now`. Never fails.
    pub async fn generate_at(&self, goal_text: &str, use_external: bool, now: Timestamp) -> Vec<Task> {
        let goal = Goal::new(goal_text);

        let reply = match (&self.service, use_external) {
            (Some(service), true) => Some(service.complete(&build_prompt(goal.text())).await),
            (None, true) => {
                debug!("External planning requested without a configured service");
                None
            }
            _ => None,
        };

        select_plan(&goal, now, reply)
    }
}

/// Chooses the plan for a goal given the outcome of the external call, if
/// one was made.
pub fn select_plan(
    goal: &Goal,
    now: Timestamp,
    reply: Option<Result<String, ServiceError>>,
) -> Vec<Task> {
    match reply {
        None => decompose(goal, now),
        Some(Err(e)) => {
            warn!("Completion service call failed, using deterministic plan: {e}");
            decompose(goal, now)
        }
        Some(Ok(text)) => match parse_reply(&text) {
            ReplyOutcome::Parsed(tasks) => {
                debug!("Using {} tasks from completion service", tasks.len());
                tasks
            }
            ReplyOutcome::Unparseable { note } => {
                warn!("Completion service reply was not a task array, using deterministic plan");
                decompose(goal, now)
                    .into_iter()
                    .map(|task| Task {
                        llm_note: Some(note.clone()),
                        ..task
                    })
                    .collect()
            }
        },
    }
}
