//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Feature-gated initialization for the Google Sheets export capability
//!
//! The hosting application calls [`GoogleSheetsExportFeature::initialize`]
//! once at startup. With the gate off, no validation of any kind runs and
//! the feature is inert; with it on, configuration is validated eagerly so
//! a misconfigured deployment fails loudly at startup instead of at the
//! first export.

use std::sync::Arc;
use tracing::info;

use crate::client::SpreadsheetService;
use crate::config::GoogleSheetsConfig;
use crate::error::{GoogleSheetsError, GoogleSheetsResult};
use crate::exporter::SheetExporter;

/// Flag name under which the hosting application gates this capability
pub const GOOGLE_SHEETS_EXPORT_FLAG: &str = "GOOGLE_SHEETS_EXPORT";

/// Feature-gated handle to the Google Sheets export capability
#[derive(Debug)]
pub struct GoogleSheetsExportFeature {
    /// Ready exporter when the feature is enabled, None when inert
    exporter: Option<SheetExporter>,
}

impl GoogleSheetsExportFeature {
    /// Initialize the export feature with the real Google client.
    ///
    /// Fails when the gate is on and the configuration is missing or
    /// invalid, or when the crate was built without the `google-api`
    /// feature.
    pub fn initialize(
        enabled: bool,
        config: Option<GoogleSheetsConfig>,
    ) -> GoogleSheetsResult<Self> {
        if !enabled {
            info!("Google Sheets export is disabled; skipping configuration validation");
            return Ok(Self { exporter: None });
        }

        let config = Self::required_config(config)?;
        config.validate_config()?;
        let client = default_client(&config)?;

        info!(
            "Google Sheets export initialized; sharing with {} ({})",
            config.share.email_address,
            config.share.principal_type.as_str()
        );

        Ok(Self {
            exporter: Some(SheetExporter::new(config, client)),
        })
    }

    /// Like [`GoogleSheetsExportFeature::initialize`], but over a
    /// caller-supplied service implementation
    pub fn initialize_with_client(
        enabled: bool,
        config: Option<GoogleSheetsConfig>,
        client: Arc<dyn SpreadsheetService>,
    ) -> GoogleSheetsResult<Self> {
        if !enabled {
            return Ok(Self { exporter: None });
        }

        let config = Self::required_config(config)?;
        config.validate_config()?;

        Ok(Self {
            exporter: Some(SheetExporter::new(config, client)),
        })
    }

    /// Check if the capability is enabled
    pub fn is_enabled(&self) -> bool {
        self.exporter.is_some()
    }

    /// Access the exporter; explicit error when the gate is off
    pub fn exporter(&self) -> GoogleSheetsResult<&SheetExporter> {
        self.exporter.as_ref().ok_or_else(|| {
            GoogleSheetsError::disabled("Google Sheets export is not enabled in this deployment")
        })
    }

    fn required_config(
        config: Option<GoogleSheetsConfig>,
    ) -> GoogleSheetsResult<GoogleSheetsConfig> {
        config.ok_or_else(|| {
            GoogleSheetsError::configuration(
                "Google Sheets export is enabled but no configuration was provided",
            )
        })
    }
}

#[cfg(feature = "google-api")]
fn default_client(config: &GoogleSheetsConfig) -> GoogleSheetsResult<Arc<dyn SpreadsheetService>> {
    Ok(Arc::new(crate::client::google::GoogleSheetsClient::new(
        config.credentials_path.clone(),
    )))
}

#[cfg(not(feature = "google-api"))]
fn default_client(_config: &GoogleSheetsConfig) -> GoogleSheetsResult<Arc<dyn SpreadsheetService>> {
    Err(GoogleSheetsError::configuration(
        "Google Sheets export requires this crate to be built with the `google-api` feature",
    ))
}
