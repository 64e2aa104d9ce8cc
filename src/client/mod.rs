//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Spreadsheet service abstraction
//!
//! This module provides the narrow interface the exporter drives (service
//! authentication, document creation, bulk range writes, and sharing) so
//! the export logic stays decoupled from any specific vendor client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::SharePolicy;
use crate::error::GoogleSheetsResult;

#[cfg(feature = "google-api")]
pub mod google;
pub mod mock;

/// Opaque reference to a remote spreadsheet document. The document is owned
/// by the remote service; the connector never tracks or cleans it up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadsheetRef {
    /// Service-assigned document identifier
    pub id: String,
    /// Title the document was created with
    pub title: String,
    /// Browser URL of the document, when the service reports one
    pub url: Option<String>,
}

/// Spreadsheet service operations used by the exporter
#[async_trait]
pub trait SpreadsheetService: Send + Sync {
    /// Establish a fresh authenticated session with the remote service
    async fn authenticate(&self) -> GoogleSheetsResult<()>;

    /// Create a new, empty spreadsheet document with the given title
    async fn create_spreadsheet(&self, title: &str) -> GoogleSheetsResult<SpreadsheetRef>;

    /// Bulk-write a 2-D cell grid to the first sheet of the document,
    /// starting at `start_cell`, in a single call
    async fn write_range(
        &self,
        spreadsheet: &SpreadsheetRef,
        start_cell: &str,
        values: Vec<Vec<Value>>,
    ) -> GoogleSheetsResult<()>;

    /// Apply a share policy to the document
    async fn share_spreadsheet(
        &self,
        spreadsheet: &SpreadsheetRef,
        policy: &SharePolicy,
    ) -> GoogleSheetsResult<()>;
}
