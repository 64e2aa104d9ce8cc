//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Tabular dataset payload for spreadsheet exports

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An in-memory tabular dataset: an ordered header sequence plus zero or
/// more data rows with values in column order. The exporter only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Column headers, in output order
    pub headers: Vec<String>,
    /// Data rows; each row carries scalar values in column order
    pub rows: Vec<Vec<Value>>,
}

impl Dataset {
    /// Create a new dataset
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { headers, rows }
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows, excluding the header
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The 2-D cell grid uploaded to the service: the header row first,
    /// then every data row in input order
    pub fn to_cell_grid(&self) -> Vec<Vec<Value>> {
        let mut grid = Vec::with_capacity(self.rows.len() + 1);
        grid.push(
            self.headers
                .iter()
                .map(|header| Value::String(header.clone()))
                .collect(),
        );
        grid.extend(self.rows.iter().cloned());
        grid
    }
}
