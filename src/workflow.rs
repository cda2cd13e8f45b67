// WHY: Adapter for a workflow-automation custom-code action
// Faults are caught here and turned into an error payload; nothing propagates to the caller

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::title_cleaner::TitleCleaner;

/// Maximum characters kept from a fault message
pub const MAX_ERROR_MESSAGE_CHARS: usize = 200;

pub const STATE_SUCCEEDED: &str = "Succeeded";
pub const STATE_REMOVED: &str = "Failed, object removed from workflow";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowOutcome {
    Changed,
    NoChange,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowOutput {
    pub new_title: String,
    #[serde(rename = "hs_execution_state")]
    pub execution_state: String,
    pub outcome: WorkflowOutcome,
    #[serde(rename = "error_state")]
    pub error_state: u8,
    #[serde(rename = "error_message", skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowResponse {
    pub output_fields: WorkflowOutput,
}

/// Run one event through the cleaner
///
/// The event is `{"inputFields": {"jobTitle": ...}}`. A missing `jobTitle` is the empty string.
pub fn handle_event(event: &Value, cleaner: &TitleCleaner) -> WorkflowResponse {
    let output = match extract_title(event) {
        Ok(title) => clean_title(&title, cleaner),
        Err(err) => {
            warn!("Workflow event rejected: {err:#}");
            error_output(&format!("{err:#}"))
        }
    };
    WorkflowResponse { output_fields: output }
}

fn extract_title(event: &Value) -> Result<String> {
    let fields = event
        .get("inputFields")
        .and_then(Value::as_object)
        .ok_or_else(|| anyhow!("event has no inputFields object"))?;

    match fields.get("jobTitle") {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(title)) => Ok(title.clone()),
        Some(other) => Err(anyhow!("jobTitle must be a string, got {other}")),
    }
}

fn clean_title(title: &str, cleaner: &TitleCleaner) -> WorkflowOutput {
    // Discarded titles pass through as-is
    let new_title = cleaner.clean(title).unwrap_or_else(|| title.to_string());
    let outcome = if new_title != title {
        WorkflowOutcome::Changed
    } else {
        WorkflowOutcome::NoChange
    };
    debug!(title, new_title = %new_title, ?outcome, "Workflow title processed");

    WorkflowOutput {
        execution_state: match outcome {
            WorkflowOutcome::Changed => STATE_SUCCEEDED,
            _ => STATE_REMOVED,
        }
        .to_string(),
        new_title,
        outcome,
        error_state: 0,
        error_message: None,
    }
}

fn error_output(message: &str) -> WorkflowOutput {
    WorkflowOutput {
        new_title: String::new(),
        execution_state: STATE_REMOVED.to_string(),
        outcome: WorkflowOutcome::Error,
        error_state: 1,
        error_message: Some(truncate_chars(message, MAX_ERROR_MESSAGE_CHARS)),
    }
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
