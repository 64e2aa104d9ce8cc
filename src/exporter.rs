//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Google Sheets exporter implementation
//!
//! This module provides the exporter that uploads a tabular dataset as a
//! new, shared spreadsheet document: authenticate, create the document
//! under a timestamped title, bulk-write the cell grid, share it.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info};

use crate::client::{SpreadsheetRef, SpreadsheetService};
use crate::config::GoogleSheetsConfig;
use crate::dataset::Dataset;
use crate::error::{GoogleSheetsError, GoogleSheetsResult};
use crate::DEFAULT_START_CELL;

/// Google Sheets exporter
pub struct SheetExporter {
    /// Export configuration
    config: GoogleSheetsConfig,
    /// Spreadsheet service client
    client: Arc<dyn SpreadsheetService>,
}

impl std::fmt::Debug for SheetExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetExporter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SheetExporter {
    /// Create a new exporter over an already-validated configuration
    pub fn new(config: GoogleSheetsConfig, client: Arc<dyn SpreadsheetService>) -> Self {
        Self { config, client }
    }

    /// Get the configuration
    pub fn config(&self) -> &GoogleSheetsConfig {
        &self.config
    }

    /// Export a dataset as a new spreadsheet document shared per the
    /// configured policy.
    ///
    /// Creates exactly one remote document per successful call, titled
    /// `"{label} {UTC timestamp}"`. Every failure propagates; a failure
    /// after creation leaves the document behind partially initialized,
    /// and no rollback is attempted.
    pub async fn export(
        &self,
        label: &str,
        dataset: &Dataset,
    ) -> GoogleSheetsResult<SpreadsheetRef> {
        if label.trim().is_empty() {
            return Err(GoogleSheetsError::validation(
                "Export label must not be empty",
            ));
        }

        info!(
            "Exporting '{}' to Google Sheets: {} columns, {} rows",
            label,
            dataset.column_count(),
            dataset.row_count()
        );

        self.client.authenticate().await?;
        debug!("Authenticated to the spreadsheet service");

        let title = document_title(label, Utc::now());
        let spreadsheet = self.client.create_spreadsheet(&title).await?;

        self.client
            .write_range(&spreadsheet, DEFAULT_START_CELL, dataset.to_cell_grid())
            .await?;
        debug!(
            "Wrote {} rows to {} starting at {}",
            dataset.row_count() + 1,
            spreadsheet.id,
            DEFAULT_START_CELL
        );

        self.client
            .share_spreadsheet(&spreadsheet, &self.config.share)
            .await?;

        info!("Export '{}' completed: {}", label, spreadsheet.id);

        Ok(spreadsheet)
    }
}

/// Document titles carry a call-time UTC timestamp at microsecond precision
/// so repeated exports of the same label stay distinct.
fn document_title(label: &str, at: DateTime<Utc>) -> String {
    format!("{} {}", label, at.format("%Y-%m-%dT%H:%M:%S%.6f"))
}
