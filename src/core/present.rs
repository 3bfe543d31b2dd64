//! Table projection of a variable set.
//!
//! Pure: builds numbered rows for display and does no I/O.

use serde::Serialize;
use tabled::Tabled;

use crate::core::domain::VariableSet;

/// One displayed variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct Row {
    /// 1-based position in the output.
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "KEY")]
    pub key: String,
    #[tabled(rename = "VALUE")]
    pub value: String,
    #[tabled(rename = "SECRET")]
    pub secret: bool,
}

/// Rows to render, or nothing to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    Empty,
    Rows(Vec<Row>),
}

impl Projection {
    pub fn rows(&self) -> &[Row] {
        match self {
            Projection::Empty => &[],
            Projection::Rows(rows) => rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Projection::Empty)
    }
}

/// Project `variables`, optionally narrowed to a single key.
pub fn project(variables: &VariableSet, key: Option<&str>) -> Projection {
    let rows: Vec<Row> = variables
        .filter_key(key)
        .iter()
        .enumerate()
        .map(|(i, var)| Row {
            index: i + 1,
            key: var.key().to_string(),
            value: var.value().to_string(),
            secret: var.is_secret(),
        })
        .collect();

    if rows.is_empty() {
        Projection::Empty
    } else {
        Projection::Rows(rows)
    }
}
