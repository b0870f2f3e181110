//! View state and its transitions.

use students_core::Student;

/// Feedback shown to the user. Exactly one variant holds at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Success(String),
    Error(String),
}

impl Status {
    pub fn is_loading(&self) -> bool {
        matches!(self, Status::Loading)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Status::Success(message) => Some(message),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Status::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Started,
    Succeeded(String),
    Failed(String),
    Cleared,
}

/// Apply `action` to `status`.
///
/// `Failed` is accepted from any state so input validation can report an
/// error without a request ever starting. `Succeeded` outside `Loading` is
/// ignored: only an operation in flight can complete.
pub fn reduce(status: Status, action: Action) -> Status {
    match (status, action) {
        (_, Action::Started) => Status::Loading,
        (Status::Loading, Action::Succeeded(message)) => Status::Success(message),
        (other, Action::Succeeded(_)) => other,
        (_, Action::Failed(message)) => Status::Error(message),
        (_, Action::Cleared) => Status::Idle,
    }
}

/// What the front end renders: the last successful read and the feedback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    pub students: Vec<Student>,
    pub status: Status,
}

impl View {
    pub fn dispatch(&mut self, action: Action) {
        let status = std::mem::take(&mut self.status);
        self.status = reduce(status, action);
    }
}
