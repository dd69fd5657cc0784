use crate::domain::{FollowUp, ItemStatus, SidebarItem, Timestamp};
use crate::providers::{truncate_label, SidebarSection};
use chrono::Timelike;

/// Progress of a [`Task`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Completed,
    InProgress,
    Pending,
    Blocked,
}

impl TaskState {
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Completed => "✓",
            Self::InProgress => "●",
            Self::Pending => "○",
            Self::Blocked => "×",
        }
    }

    #[must_use]
    pub const fn status(self) -> ItemStatus {
        match self {
            Self::Completed => ItemStatus::Success,
            Self::InProgress => ItemStatus::Info,
            Self::Pending => ItemStatus::Warning,
            Self::Blocked => ItemStatus::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub state: TaskState,
    pub priority: &'static str,
}

impl Task {
    fn new(name: &str, state: TaskState, priority: &'static str) -> Self {
        Self {
            name: name.to_string(),
            state,
            priority,
        }
    }
}

/// A fixed task list whose first task flips between in-progress and
/// completed on every refresh that lands on a multiple of ten seconds.
#[derive(Debug, Clone)]
pub struct TasksSection {
    tasks: Vec<Task>,
}

impl TasksSection {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: vec![
                Task::new("Design Review", TaskState::InProgress, "high"),
                Task::new("Code Review", TaskState::Pending, "medium"),
                Task::new("Testing", TaskState::Completed, "high"),
                Task::new("Documentation", TaskState::Pending, "low"),
                Task::new("Deployment", TaskState::Blocked, "high"),
            ],
        }
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

impl Default for TasksSection {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarSection for TasksSection {
    fn title(&self) -> String {
        "Tasks".to_string()
    }

    fn render_items(&self, max_items: usize, width: usize) -> Vec<SidebarItem> {
        self.tasks
            .iter()
            .take(max_items)
            .map(|task| {
                SidebarItem::new(
                    task.state.icon(),
                    truncate_label(&task.name, width),
                    task.priority,
                    task.state.status(),
                )
            })
            .collect()
    }

    fn refresh_section(&mut self, at: Timestamp) -> Vec<FollowUp> {
        if at.second() % 10 == 0 {
            if let Some(first) = self.tasks.first_mut() {
                first.state = match first.state {
                    TaskState::InProgress => TaskState::Completed,
                    _ => TaskState::InProgress,
                };
                tracing::debug!(task = %first.name, state = ?first.state, "task toggled");
            }
        }
        Vec::new()
    }
}
