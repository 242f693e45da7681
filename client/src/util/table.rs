//! Turn a JSON list reply into rows and columns for display.
//!
//! List endpoints return either a bare array or an object wrapping one
//! (`data`, `items`, `rows`). Columns are the union of object keys in order of
//! first appearance.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use serde_json::Value;

const WRAPPER_KEYS: [&str; 3] = ["data", "items", "rows"];
const SCALAR_COLUMN: &str = "valor";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn table_from_json(value: &Value) -> Table {
    let Some(items) = list_items(value) else {
        return Table::default();
    };

    let mut columns: Vec<String> = Vec::new();
    let mut has_scalars = false;
    for item in items {
        match item {
            Value::Object(map) => {
                for key in map.keys() {
                    if !columns.iter().any(|c| c == key) {
                        columns.push(key.clone());
                    }
                }
            }
            _ => has_scalars = true,
        }
    }
    if has_scalars && !columns.iter().any(|c| c == SCALAR_COLUMN) {
        columns.push(SCALAR_COLUMN.to_owned());
    }

    let rows = items
        .iter()
        .map(|item| {
            columns
                .iter()
                .map(|column| match item {
                    Value::Object(map) => map.get(column).map(cell_text).unwrap_or_default(),
                    other if column == SCALAR_COLUMN => cell_text(other),
                    _ => String::new(),
                })
                .collect()
        })
        .collect();

    Table { columns, rows }
}

fn list_items(value: &Value) -> Option<&Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(map) => WRAPPER_KEYS.iter().find_map(|k| map.get(*k)?.as_array()),
        _ => None,
    }
}

/// Display text for one cell.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "Sí".to_owned(),
        Value::Bool(false) => "No".to_owned(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
