//! Command line parser
//!
//! Every input line is split on its first space into a command token and
//! the rest. Sub-arguments are split the same way, so descriptions keep
//! their inner spacing untouched.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

use super::error::{CommandError, Result};

// d/M/yyyy: one or two digit day and month, four digit year
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").expect("deadline date pattern is valid")
});

/// Which flattened or grouped listing `view` should print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Date,
    Deadline,
    Project,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    AddProject { name: String },
    /// `text` is everything after the project name: either
    /// `<description>` or `<id> <description>`.
    AddTask { project: String, text: String },
    Check(String),
    Uncheck(String),
    Deadline { id: String, date: NaiveDate },
    Delete(String),
    Today,
    View(ViewKind),
    Help,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let (command, rest) = split_first(line);

        match command {
            "show" => Ok(Self::Show),
            "add" => parse_add(required(rest)?),
            "check" => Ok(Self::Check(required(rest)?.to_string())),
            "uncheck" => Ok(Self::Uncheck(required(rest)?.to_string())),
            "deadline" => parse_deadline(required(rest)?),
            "delete" => Ok(Self::Delete(required(rest)?.to_string())),
            "today" => Ok(Self::Today),
            "view" => parse_view(rest),
            "help" => Ok(Self::Help),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

fn split_first(s: &str) -> (&str, Option<&str>) {
    match s.split_once(' ') {
        Some((head, tail)) => (head, Some(tail)),
        None => (s, None),
    }
}

fn required(rest: Option<&str>) -> Result<&str> {
    rest.filter(|r| !r.is_empty()).ok_or(CommandError::Syntax)
}

fn parse_add(rest: &str) -> Result<Command> {
    let (subcommand, rest) = split_first(rest);
    match subcommand {
        "project" => Ok(Command::AddProject {
            name: required(rest)?.to_string(),
        }),
        "task" => {
            let (project, text) = split_first(required(rest)?);
            Ok(Command::AddTask {
                project: project.to_string(),
                text: required(text)?.to_string(),
            })
        }
        _ => Err(CommandError::Syntax),
    }
}

fn parse_deadline(rest: &str) -> Result<Command> {
    let mut parts = rest.split_whitespace();
    let id = parts.next().ok_or(CommandError::Syntax)?;
    let date = parts.next().ok_or(CommandError::InvalidDate)?;

    Ok(Command::Deadline {
        id: id.to_string(),
        date: parse_date(date)?,
    })
}

fn parse_view(rest: Option<&str>) -> Result<Command> {
    let mut parts = rest.unwrap_or_default().split_whitespace();
    let qualifier = match parts.next() {
        Some("by") => parts.next(),
        other => other,
    };

    match qualifier {
        Some("date") => Ok(Command::View(ViewKind::Date)),
        Some("deadline") => Ok(Command::View(ViewKind::Deadline)),
        Some("project") => Ok(Command::View(ViewKind::Project)),
        _ => Err(CommandError::Syntax),
    }
}

/// Parse a `d/M/yyyy` deadline, rejecting dates that do not exist on the calendar.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let caps = DATE_RE.captures(s).ok_or(CommandError::InvalidDate)?;

    let day: u32 = caps[1].parse().map_err(|_| CommandError::InvalidDate)?;
    let month: u32 = caps[2].parse().map_err(|_| CommandError::InvalidDate)?;
    let year: i32 = caps[3].parse().map_err(|_| CommandError::InvalidDate)?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(CommandError::InvalidDate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("show"), Ok(Command::Show));
        assert_eq!(Command::parse("today"), Ok(Command::Today));
        assert_eq!(Command::parse("help"), Ok(Command::Help));
        assert_eq!(Command::parse("check 3"), Ok(Command::Check("3".into())));
        assert_eq!(Command::parse("uncheck a1"), Ok(Command::Uncheck("a1".into())));
        assert_eq!(Command::parse("delete t1"), Ok(Command::Delete("t1".into())));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            Command::parse("frobnicate now"),
            Err(CommandError::UnknownCommand("frobnicate".into()))
        );
        assert_eq!(
            Command::parse(""),
            Err(CommandError::UnknownCommand(String::new()))
        );
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(
            Command::parse("add project secrets of the universe"),
            Ok(Command::AddProject {
                name: "secrets of the universe".into()
            })
        );
        assert_eq!(
            Command::parse("add task home t1 Buy  milk"),
            Ok(Command::AddTask {
                project: "home".into(),
                text: "t1 Buy  milk".into()
            })
        );
    }

    #[test]
    fn test_parse_add_missing_arguments() {
        assert_eq!(Command::parse("add"), Err(CommandError::Syntax));
        assert_eq!(Command::parse("add project"), Err(CommandError::Syntax));
        assert_eq!(Command::parse("add task"), Err(CommandError::Syntax));
        assert_eq!(Command::parse("add task home"), Err(CommandError::Syntax));
        assert_eq!(Command::parse("add milestone x"), Err(CommandError::Syntax));
        assert_eq!(Command::parse("check"), Err(CommandError::Syntax));
    }

    #[test]
    fn test_parse_view() {
        assert_eq!(Command::parse("view date"), Ok(Command::View(ViewKind::Date)));
        assert_eq!(
            Command::parse("view deadline"),
            Ok(Command::View(ViewKind::Deadline))
        );
        assert_eq!(
            Command::parse("view by project"),
            Ok(Command::View(ViewKind::Project))
        );
        assert_eq!(Command::parse("view"), Err(CommandError::Syntax));
        assert_eq!(Command::parse("view by"), Err(CommandError::Syntax));
        assert_eq!(Command::parse("view colour"), Err(CommandError::Syntax));
    }

    #[test]
    fn test_parse_deadline() {
        assert_eq!(
            Command::parse("deadline t1 5/3/2024"),
            Ok(Command::Deadline {
                id: "t1".into(),
                date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
            })
        );
        assert_eq!(Command::parse("deadline t1"), Err(CommandError::InvalidDate));
        assert_eq!(Command::parse("deadline"), Err(CommandError::Syntax));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("25/12/2024"),
            Ok(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap())
        );
        assert_eq!(
            parse_date("01/02/2024"),
            Ok(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
        );
        assert_eq!(
            parse_date("29/2/2024"),
            Ok(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        );
        assert_eq!(parse_date("31/2/2024"), Err(CommandError::InvalidDate));
        assert_eq!(parse_date("2024-12-25"), Err(CommandError::InvalidDate));
        assert_eq!(parse_date("25/12/24"), Err(CommandError::InvalidDate));
        assert_eq!(parse_date("25/13/2024"), Err(CommandError::InvalidDate));
        assert_eq!(parse_date("tomorrow"), Err(CommandError::InvalidDate));
    }
}
