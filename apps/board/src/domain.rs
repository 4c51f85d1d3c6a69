use serde::{Deserialize, Deserializer};

/// A project record as published in `projects.json`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub code: String,
    #[serde(default, deserialize_with = "loose_text_or_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "loose_text_or_empty")]
    pub author: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub target_date: Option<String>,
    #[serde(default, deserialize_with = "tasks_or_empty")]
    pub tasks: Vec<Task>,
}

impl Project {
    pub fn completed_tasks(&self) -> usize {
        self.tasks
            .iter()
            .filter(|task| task.effective_status() == TaskStatus::Done)
            .count()
    }
}

/// A single checklist item within a project
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Task {
    #[serde(default, deserialize_with = "loose_text_or_empty")]
    pub task: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub status: Option<String>,
    #[serde(default)]
    pub complete: Option<Completion>,
}

impl Task {
    /// Resolves the display status.
    ///
    /// A non-empty `status` wins; otherwise the legacy `complete` flag decides
    /// between done and todo. Unrecognised status strings render as todo.
    pub fn effective_status(&self) -> TaskStatus {
        match self.status.as_deref() {
            Some(status) if !status.is_empty() => {
                TaskStatus::parse(status).unwrap_or(TaskStatus::Todo)
            }
            _ => {
                if self.complete.as_ref().is_some_and(Completion::is_truthy) {
                    TaskStatus::Done
                } else {
                    TaskStatus::Todo
                }
            }
        }
    }

    /// Text shown as the completion date of a done task.
    ///
    /// Once a task carries a `status`, `complete` holds the date it was
    /// finished; older records still carry the boolean flag, which is shown
    /// as-is.
    pub fn completion_text(&self) -> Option<String> {
        self.complete.as_ref().and_then(Completion::display_text)
    }
}

/// The `complete` field: a legacy boolean flag or a completion date
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Completion {
    Flag(bool),
    Date(String),
    Number(f64),
    Other(serde_json::Value),
}

impl Completion {
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Date(date) => !date.is_empty(),
            Self::Number(number) => number.abs() > 0.0,
            Self::Other(value) => !value.is_null(),
        }
    }

    fn display_text(&self) -> Option<String> {
        if !self.is_truthy() {
            return None;
        }
        match self {
            Self::Flag(flag) => Some(flag.to_string()),
            Self::Date(date) => Some(date.clone()),
            Self::Number(number) => Some(number.to_string()),
            Self::Other(value) => Some(value.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Done,
    InProgress,
    Todo,
}

impl TaskStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Done => "done",
            Self::InProgress => "in_progress",
            Self::Todo => "todo",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "done" => Some(Self::Done),
            "in_progress" => Some(Self::InProgress),
            "todo" => Some(Self::Todo),
            _ => None,
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Done => "✓",
            Self::InProgress => "⏳",
            Self::Todo => "○",
        }
    }

    /// CSS modifier for the status mark
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Done => "done",
            Self::InProgress => "in-progress",
            Self::Todo => "pending",
        }
    }
}

// Display fields accept any JSON scalar. Falsy non-strings (null, false, 0)
// count as absent; other values keep their JSON text.
fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null | serde_json::Value::Bool(false) => None,
        serde_json::Value::String(text) => Some(text),
        serde_json::Value::Number(number) if number.as_f64().is_some_and(|n| n == 0.0) => None,
        other => Some(other.to_string()),
    })
}

fn loose_text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(loose_text(deserializer)?.unwrap_or_default())
}

// Anything that is not an array counts as "no tasks"
fn tasks_or_empty<'de, D>(deserializer: D) -> Result<Vec<Task>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_array() {
        serde_json::from_value(value).map_err(serde::de::Error::custom)
    } else {
        Ok(Vec::new())
    }
}
