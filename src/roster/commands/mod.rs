use crate::error::RosterError;
use crate::model::Student;
use crate::store::{LoadReport, LoadStatus, StorageBackend};

pub mod add;
pub mod delete;
pub mod find;
pub mod init;
pub mod list;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Student>,
    pub listed: Vec<Student>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, students: Vec<Student>) -> Self {
        self.affected = students;
        self
    }

    pub fn with_listed(mut self, students: Vec<Student>) -> Self {
        self.listed = students;
        self
    }
}

/// Turn the startup load report into messages for the user.
pub fn load_messages<B: StorageBackend>(report: &LoadReport, backend: &B) -> Vec<CmdMessage> {
    let mut messages = Vec::new();
    match &report.status {
        LoadStatus::Missing => messages.push(CmdMessage::info(format!(
            "No existing data file found at {}. Starting fresh.",
            backend.location()
        ))),
        LoadStatus::Loaded(n) => messages.push(CmdMessage::info(format!(
            "Loaded {} {} from {}.",
            n,
            plural(*n),
            backend.location()
        ))),
        LoadStatus::Failed(e) => messages.push(CmdMessage::error(format!(
            "Error loading {}: {}. Starting with an empty roster.",
            backend.location(),
            e
        ))),
    }
    for rejected in &report.rejected {
        let text = match rejected {
            RosterError::DuplicateId(id) => format!("Skipped repeated student ID {}", id),
            other => format!("Skipped: {}", other),
        };
        messages.push(CmdMessage::warning(text));
    }
    messages
}

pub(crate) fn plural(n: usize) -> &'static str {
    if n == 1 {
        "student"
    } else {
        "students"
    }
}
