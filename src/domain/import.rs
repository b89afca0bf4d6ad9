// Import decoding - raw JSON document to a well-typed dashboard draft
use super::dashboard::{default_cell_fields, DashboardCell, DashboardDraft, DEFAULT_DASHBOARD_NAME};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("imported document is not a JSON object")]
    NotAnObject,
    #[error("dashboard name must be a string")]
    InvalidName,
    #[error("dashboard cells must be an array")]
    InvalidCells,
    #[error("cell {index} is not a JSON object")]
    CellNotAnObject { index: usize },
    #[error("cell {index} is malformed: {source}")]
    InvalidCell {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Decode an imported document into a draft ready to persist.
///
/// Accepts an exported file (`{meta, dashboard}`) or a bare dashboard.
/// A missing name falls back to [`DEFAULT_DASHBOARD_NAME`]; every cell is
/// laid over the default cell so imported fields win on conflict. Any `id`
/// or `links` in the document are dropped.
pub fn decode_import(document: &Value) -> Result<DashboardDraft, ImportError> {
    let root = document.as_object().ok_or(ImportError::NotAnObject)?;

    let dashboard = match (root.get("meta"), root.get("dashboard")) {
        (Some(_), Some(inner)) => inner.as_object().ok_or(ImportError::NotAnObject)?,
        _ => root,
    };

    let name = match dashboard.get("name") {
        None | Some(Value::Null) => DEFAULT_DASHBOARD_NAME.to_string(),
        Some(Value::String(name)) => name.clone(),
        Some(_) => return Err(ImportError::InvalidName),
    };

    let cells = match dashboard.get("cells") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(cells)) => cells
            .iter()
            .enumerate()
            .map(|(index, cell)| decode_cell(index, cell))
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => return Err(ImportError::InvalidCells),
    };

    Ok(DashboardDraft { name, cells })
}

fn decode_cell(index: usize, cell: &Value) -> Result<DashboardCell, ImportError> {
    let imported = cell
        .as_object()
        .ok_or(ImportError::CellNotAnObject { index })?;

    let mut merged: Map<String, Value> = default_cell_fields();
    for (key, value) in imported {
        merged.insert(key.clone(), value.clone());
    }

    serde_json::from_value(Value::Object(merged))
        .map_err(|source| ImportError::InvalidCell { index, source })
}
