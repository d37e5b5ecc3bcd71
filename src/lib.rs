//! Task List library - Core functionality for the interactive task manager

pub mod cli;
pub mod clock;
pub mod config;
pub mod task;
