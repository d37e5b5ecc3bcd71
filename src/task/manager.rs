//! Command interpreter owning the project -> task collection

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::command::{Command, ViewKind};
use super::error::{CommandError, Result};
use super::model::{Project, Task, TaskId};
use crate::clock::{Clock, SystemClock};

/// Fixed command summary printed by `help`
pub fn help_lines() -> Vec<String> {
    [
        "Commands:",
        "  show",
        "  view date|deadline|project",
        "  add project <project name>",
        "  add task <project name> [<task ID>] <task description>",
        "  check <task ID>",
        "  uncheck <task ID>",
        "  deadline <task ID> <d/M/yyyy>",
        "  delete <task ID>",
        "  today",
        "  help",
        "  quit",
        "",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}

/// In-memory task list for one session.
///
/// Projects keep their declaration order and tasks keep their insertion
/// order. Every lookup by task ID scans projects in that order and the
/// first match wins, so duplicate explicit IDs resolve deterministically.
pub struct TaskManager {
    projects: Vec<Project>,
    last_id: u64,
    clock: Box<dyn Clock>,
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskManager {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            projects: Vec::new(),
            last_id: 0,
            clock: Box::new(clock),
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }

    pub fn find_task(&self, id: &str) -> Option<&Task> {
        self.projects
            .iter()
            .flat_map(|p| &p.tasks)
            .find(|t| t.id().matches(id))
    }

    fn find_task_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.projects
            .iter_mut()
            .flat_map(|p| &mut p.tasks)
            .find(|t| t.id().matches(id))
    }

    /// Run one input line and return the lines to print for it.
    ///
    /// Errors never escape: a rejected command yields its message as the
    /// only output line and leaves the task list unchanged.
    pub fn execute(&mut self, line: &str) -> Vec<String> {
        debug!("Executing command: {:?}", line);

        match Command::parse(line).and_then(|command| self.apply(command)) {
            Ok(output) => output,
            Err(err) => {
                warn!("Command rejected: {:?} ({:?})", line, err);
                vec![err.to_string()]
            }
        }
    }

    fn apply(&mut self, command: Command) -> Result<Vec<String>> {
        match command {
            Command::Show | Command::View(ViewKind::Project) => Ok(self.show()),
            Command::AddProject { name } => {
                self.add_project(&name);
                Ok(Vec::new())
            }
            Command::AddTask { project, text } => {
                self.add_task(&project, &text)?;
                Ok(Vec::new())
            }
            Command::Check(id) => {
                self.set_done(&id, true)?;
                Ok(Vec::new())
            }
            Command::Uncheck(id) => {
                self.set_done(&id, false)?;
                Ok(Vec::new())
            }
            Command::Deadline { id, date } => {
                self.set_deadline(&id, date);
                Ok(Vec::new())
            }
            Command::Delete(id) => {
                self.delete(&id);
                Ok(Vec::new())
            }
            Command::Today => Ok(self.today()),
            Command::View(ViewKind::Date) => Ok(self.view_by_date()),
            Command::View(ViewKind::Deadline) => Ok(self.view_by_deadline()),
            Command::Help => Ok(help_lines()),
        }
    }

    fn next_id(&mut self) -> TaskId {
        self.last_id += 1;
        TaskId::from_number(self.last_id)
    }

    /// Declare a project. Re-declaring an existing name empties it in place.
    pub fn add_project(&mut self, name: &str) {
        match self.projects.iter_mut().find(|p| p.name == name) {
            Some(project) => {
                warn!(
                    "Project {:?} redeclared, dropping {} task(s)",
                    name,
                    project.tasks.len()
                );
                project.tasks.clear();
            }
            None => {
                info!("Created project {:?}", name);
                self.projects.push(Project::new(name));
            }
        }
    }

    /// Append a task to `project`.
    ///
    /// `text` is `<description>` or `<id> <description>`: when a non-empty
    /// description follows the first token, that token is taken as an
    /// explicit ID and must pass [`TaskId::explicit`]. Otherwise the next
    /// counter value is assigned and the whole text is the description.
    pub fn add_task(&mut self, project: &str, text: &str) -> Result<TaskId> {
        let index = self
            .projects
            .iter()
            .position(|p| p.name == project)
            .ok_or_else(|| CommandError::ProjectNotFound(project.to_string()))?;

        let (id, description) = match text.split_once(' ') {
            Some((id, description)) if !description.is_empty() => {
                (TaskId::explicit(id).ok_or(CommandError::InvalidId)?, description)
            }
            _ => (self.next_id(), text),
        };

        let task = Task::new(id.clone(), description, self.clock.today());
        self.projects[index].tasks.push(task);
        info!("Added task {} to project {:?}", id, project);

        Ok(id)
    }

    pub fn set_done(&mut self, id: &str, done: bool) -> Result<()> {
        let task = self
            .find_task_mut(id)
            .ok_or_else(|| CommandError::TaskNotFound(id.to_string()))?;
        task.set_done(done);
        info!("Task {} marked {}", task.id(), if done { "done" } else { "not done" });
        Ok(())
    }

    /// Set the deadline of the first task matching `id`. Returns false when
    /// no task matches; that case prints nothing.
    pub fn set_deadline(&mut self, id: &str, deadline: NaiveDate) -> bool {
        match self.find_task_mut(id) {
            Some(task) => {
                task.set_deadline(deadline);
                info!("Task {} due {}", task.id(), deadline);
                true
            }
            None => {
                debug!("No task {:?} to set a deadline on", id);
                false
            }
        }
    }

    /// Remove the first task matching `id` from whichever project holds it.
    pub fn delete(&mut self, id: &str) -> Option<Task> {
        for project in &mut self.projects {
            if let Some(pos) = project.tasks.iter().position(|t| t.id().matches(id)) {
                let task = project.tasks.remove(pos);
                info!("Deleted task {} from project {:?}", task.id(), project.name);
                return Some(task);
            }
        }

        debug!("No task {:?} to delete", id);
        None
    }

    /// Every project followed by its tasks, a blank line after each project
    pub fn show(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for project in &self.projects {
            lines.push(project.name.clone());
            lines.extend(project.tasks.iter().map(Task::to_line));
            lines.push(String::new());
        }
        lines
    }

    /// Tasks due on the clock's current date, one block per project
    pub fn today(&self) -> Vec<String> {
        let today = self.clock.today();

        let mut lines = Vec::new();
        for project in &self.projects {
            lines.extend(
                project
                    .tasks
                    .iter()
                    .filter(|t| t.is_due_on(today))
                    .map(Task::to_line),
            );
            lines.push(String::new());
        }
        lines
    }

    fn flattened(&self) -> Vec<&Task> {
        self.projects.iter().flat_map(|p| &p.tasks).collect()
    }

    /// All tasks ordered by creation date, oldest first
    pub fn view_by_date(&self) -> Vec<String> {
        let mut tasks = self.flattened();
        tasks.sort_by_key(|t| t.created_on());
        render_flat(&tasks)
    }

    /// All tasks ordered by deadline, tasks without one first
    pub fn view_by_deadline(&self) -> Vec<String> {
        let mut tasks = self.flattened();
        // `None` orders before any `Some`, and the sort is stable.
        tasks.sort_by_key(|t| t.deadline());
        render_flat(&tasks)
    }
}

fn render_flat(tasks: &[&Task]) -> Vec<String> {
    let mut lines: Vec<String> = tasks.iter().map(|t| t.to_line()).collect();
    lines.push(String::new());
    lines
}
