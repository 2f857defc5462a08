//! Task renderings for debug logging.

use crate::task::domain::Task;

/// Renders tasks for log output.
pub trait TaskFormatter: Send + Sync {
    /// Renders the task.
    fn format(&self, task: &Task) -> String;
}

/// Renders tasks as compact JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTaskFormatter;

impl TaskFormatter for JsonTaskFormatter {
    fn format(&self, task: &Task) -> String {
        serde_json::to_string(task).unwrap_or_else(|err| format!("<unrenderable task: {err}>"))
    }
}
