use thiserror::Error;

use crate::layout::GanttLayout;
use crate::model::Task;

/// JSON codec failure at the engine boundary.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("JSON codec error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode a task collection from a JSON array, as handed over by the
/// host's data-fetching layer. Individual malformed date or priority
/// values inside a record degrade to `None` rather than failing the
/// document.
pub fn tasks_from_json(json: &str) -> Result<Vec<Task>, CodecError> {
    Ok(serde_json::from_str(json)?)
}

/// Encode a render payload for a surface that consumes JSON.
pub fn layout_to_json(layout: &GanttLayout) -> Result<String, CodecError> {
    Ok(serde_json::to_string_pretty(layout)?)
}
