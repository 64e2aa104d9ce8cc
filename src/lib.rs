//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Google Sheets export connector
//!
//! This crate provides integration with Google Sheets for exporting
//! in-memory tabular datasets: each export creates a new spreadsheet
//! document, bulk-writes the dataset into it, and shares it according to
//! the configured policy. The capability sits behind a feature gate with
//! eager, startup-time configuration validation.

pub mod client;
pub mod config;
pub mod dataset;
pub mod error;
pub mod exporter;
pub mod feature;

#[cfg(test)]
mod tests;

// Re-export main types
pub use client::mock::{MockSpreadsheet, MockSpreadsheetConfig, MockSpreadsheetService};
pub use client::{SpreadsheetRef, SpreadsheetService};
pub use config::{GoogleSheetsConfig, PrincipalType, ShareRole, SharePolicy};
pub use dataset::Dataset;
pub use error::{GoogleSheetsError, GoogleSheetsResult};
pub use exporter::SheetExporter;
pub use feature::{GoogleSheetsExportFeature, GOOGLE_SHEETS_EXPORT_FLAG};

#[cfg(feature = "google-api")]
pub use client::google::GoogleSheetsClient;

/// Connector version
pub const GSHEETS_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Connector name
pub const GSHEETS_NAME: &str = "gsheets-connector";
/// Cell every export starts writing at
pub const DEFAULT_START_CELL: &str = "A1";
