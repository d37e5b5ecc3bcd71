//! Task management module
//!
//! This module provides the interactive task list:
//! - Task and project data model
//! - Line-oriented command parsing
//! - The interpreter that applies commands and renders listings

pub mod command;
pub mod error;
pub mod manager;
pub mod model;

pub use command::{Command, ViewKind};
pub use error::CommandError;
pub use manager::{help_lines, TaskManager};
pub use model::{is_valid_id, Project, Task, TaskId};
