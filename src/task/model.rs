//! Task data model

use chrono::NaiveDate;
use std::fmt;

/// Task identifier, unique across every project in a session.
///
/// Auto-assigned ids are the stringified session counter (`1`, `2`, ...);
/// explicit ids are whatever alphanumeric token the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(String);

impl TaskId {
    /// Create a task ID from the session counter
    pub fn from_number(n: u64) -> Self {
        Self(n.to_string())
    }

    /// Accept a user-supplied ID if it is made of ASCII letters and digits only
    pub fn explicit(s: &str) -> Option<Self> {
        if is_valid_id(s) {
            Some(Self(s.to_string()))
        } else {
            None
        }
    }

    /// Case-insensitive comparison against a raw ID typed by the user
    pub fn matches(&self, raw: &str) -> bool {
        self.0.eq_ignore_ascii_case(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ID is valid when it is non-empty and contains only ASCII letters and digits.
pub fn is_valid_id(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// A task
#[derive(Debug, Clone)]
pub struct Task {
    id: TaskId,
    description: String,
    done: bool,
    created_on: NaiveDate,
    deadline: Option<NaiveDate>,
}

impl Task {
    /// Create an unchecked task without a deadline
    pub fn new(id: TaskId, description: impl Into<String>, created_on: NaiveDate) -> Self {
        Self {
            id,
            description: description.into(),
            done: false,
            created_on,
            deadline: None,
        }
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    pub fn created_on(&self) -> NaiveDate {
        self.created_on
    }

    pub fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    pub fn set_deadline(&mut self, deadline: NaiveDate) {
        self.deadline = Some(deadline);
    }

    /// Check if the deadline falls on the given day
    pub fn is_due_on(&self, day: NaiveDate) -> bool {
        self.deadline == Some(day)
    }

    /// Format as a listing line: `    [x] id: description`
    pub fn to_line(&self) -> String {
        format!(
            "    [{}] {}: {}",
            if self.done { 'x' } else { ' ' },
            self.id,
            self.description
        )
    }
}

/// A named, ordered bucket of tasks
#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    pub tasks: Vec<Task>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
        }
    }
}
