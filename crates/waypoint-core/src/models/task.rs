//! Task model shared by the engine, the external bridge and storage.

use serde::{Deserialize, Deserializer, Serialize};

/// One scheduled unit of work in a generated plan.
///
/// Dates are ISO-8601 calendar dates (`YYYY-MM-DD`). `depends_on` is either
/// empty or the title of the phase this task follows.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Short title, also used as a dependency anchor
    #[serde(default)]
    pub title: String,

    /// What the task involves
    #[serde(default)]
    pub description: String,

    /// First day of the task window
    #[serde(default)]
    pub start_date: String,

    /// Last day of the task window
    #[serde(default)]
    pub end_date: String,

    /// Title of the task this one depends on, or empty
    #[serde(default, deserialize_with = "titles_or_text")]
    pub depends_on: String,

    /// Raw external reply kept for diagnosis when it could not be used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_note: Option<String>,
}

impl Task {
    /// Creates a task without a debug note.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        depends_on: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            depends_on: depends_on.into(),
            llm_note: None,
        }
    }

    /// True when this task starts a dependency chain.
    pub fn is_root(&self) -> bool {
        self.depends_on.is_empty()
    }
}

/// Accepts `depends_on` as a string, a list of titles, or null.
fn titles_or_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Titles {
        Text(String),
        List(Vec<String>),
    }

    Ok(match Option::<Titles>::deserialize(deserializer)? {
        Some(Titles::Text(text)) => text,
        Some(Titles::List(list)) => list.join(", "),
        None => String::new(),
    })
}
