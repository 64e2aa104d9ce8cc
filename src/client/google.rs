//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Google-backed spreadsheet service
//!
//! This module provides the real [`SpreadsheetService`] implementation over
//! the Google Sheets v4 API (document creation, value writes) and the Google
//! Drive v3 API (permission grants), authenticated with a service-account
//! credential file.

use async_trait::async_trait;
use google_drive3::{api::Permission, DriveHub};
use google_sheets4::api::{Spreadsheet, SpreadsheetProperties, ValueRange};
use google_sheets4::{hyper_rustls, yup_oauth2, Sheets};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::client::{SpreadsheetRef, SpreadsheetService};
use crate::config::{PrincipalType, SharePolicy, ShareRole};
use crate::error::{GoogleSheetsError, GoogleSheetsResult};

type Connector = hyper_rustls::HttpsConnector<HttpConnector>;

/// Authenticated API session: a Sheets hub for document and value calls and
/// a Drive hub for permission grants, sharing one authenticator.
struct GoogleSession {
    sheets: Sheets<Connector>,
    drive: DriveHub<Connector>,
}

/// Google Sheets service client
pub struct GoogleSheetsClient {
    /// Path to the service-account credential JSON file
    credentials_path: String,
    /// Session state; rebuilt on every authenticate call
    session: RwLock<Option<GoogleSession>>,
}

impl GoogleSheetsClient {
    /// Create a new client for the given service-account credential file
    pub fn new(credentials_path: impl Into<String>) -> Self {
        Self {
            credentials_path: credentials_path.into(),
            session: RwLock::new(None),
        }
    }

    async fn build_session(&self) -> GoogleSheetsResult<GoogleSession> {
        let key = yup_oauth2::read_service_account_key(&self.credentials_path)
            .await
            .map_err(|e| {
                GoogleSheetsError::authentication_with_source(
                    "Failed to read service account key",
                    e,
                )
            })?;

        let auth = yup_oauth2::ServiceAccountAuthenticator::builder(key)
            .build()
            .await
            .map_err(|e| {
                GoogleSheetsError::authentication_with_source(
                    "Failed to build service account authenticator",
                    e,
                )
            })?;

        let connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()
            .map_err(|e| {
                GoogleSheetsError::authentication_with_source("Failed to load native TLS roots", e)
            })?
            .https_or_http()
            .enable_http1()
            .build();

        let client =
            hyper_util::client::legacy::Client::builder(TokioExecutor::new()).build(connector);

        Ok(GoogleSession {
            sheets: Sheets::new(client.clone(), auth.clone()),
            drive: DriveHub::new(client, auth),
        })
    }
}

#[async_trait]
impl SpreadsheetService for GoogleSheetsClient {
    async fn authenticate(&self) -> GoogleSheetsResult<()> {
        debug!(
            "Authenticating to Google APIs with credentials at {}",
            self.credentials_path
        );

        let session = self.build_session().await?;
        *self.session.write().await = Some(session);

        Ok(())
    }

    async fn create_spreadsheet(&self, title: &str) -> GoogleSheetsResult<SpreadsheetRef> {
        let guard = self.session.read().await;
        let session = guard.as_ref().ok_or_else(|| {
            GoogleSheetsError::authentication("No authenticated session; call authenticate first")
        })?;

        let request = Spreadsheet {
            properties: Some(SpreadsheetProperties {
                title: Some(title.to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let (_, created) = session
            .sheets
            .spreadsheets()
            .create(request)
            .doit()
            .await
            .map_err(|e| GoogleSheetsError::create_with_source("Spreadsheet creation failed", e))?;

        let id = created.spreadsheet_id.ok_or_else(|| {
            GoogleSheetsError::create("Create response carried no spreadsheet id")
        })?;

        info!("Created spreadsheet '{}' ({})", title, id);

        Ok(SpreadsheetRef {
            id,
            title: title.to_string(),
            url: created.spreadsheet_url,
        })
    }

    async fn write_range(
        &self,
        spreadsheet: &SpreadsheetRef,
        start_cell: &str,
        values: Vec<Vec<Value>>,
    ) -> GoogleSheetsResult<()> {
        let guard = self.session.read().await;
        let session = guard.as_ref().ok_or_else(|| {
            GoogleSheetsError::authentication("No authenticated session; call authenticate first")
        })?;

        let row_count = values.len();
        let value_range = ValueRange {
            major_dimension: Some("ROWS".to_string()),
            range: Some(start_cell.to_string()),
            values: Some(values),
        };

        // RAW keeps the uploaded values as-is instead of letting the service
        // re-parse them as user input.
        session
            .sheets
            .spreadsheets()
            .values_update(value_range, &spreadsheet.id, start_cell)
            .value_input_option("RAW")
            .doit()
            .await
            .map_err(|e| GoogleSheetsError::write_with_source("Bulk value write failed", e))?;

        debug!(
            "Wrote {} rows to spreadsheet {} at {}",
            row_count, spreadsheet.id, start_cell
        );

        Ok(())
    }

    async fn share_spreadsheet(
        &self,
        spreadsheet: &SpreadsheetRef,
        policy: &SharePolicy,
    ) -> GoogleSheetsResult<()> {
        let guard = self.session.read().await;
        let session = guard.as_ref().ok_or_else(|| {
            GoogleSheetsError::authentication("No authenticated session; call authenticate first")
        })?;

        let mut permission = Permission {
            type_: Some(policy.principal_type.as_str().to_string()),
            role: Some(policy.role.as_str().to_string()),
            ..Default::default()
        };
        match policy.principal_type {
            PrincipalType::Domain => permission.domain = Some(policy.email_address.clone()),
            PrincipalType::Anyone => {}
            _ => permission.email_address = Some(policy.email_address.clone()),
        }

        let mut call = session
            .drive
            .permissions()
            .create(permission, &spreadsheet.id);
        if let Some(notify) = policy.notify {
            call = call.send_notification_email(notify);
        }
        if let Some(message) = &policy.email_message {
            call = call.email_message(message);
        }
        // Drive rejects role=owner without an explicit ownership transfer.
        if policy.role == ShareRole::Owner {
            call = call.transfer_ownership(true);
        }

        call.doit()
            .await
            .map_err(|e| GoogleSheetsError::share_with_source("Permission grant failed", e))?;

        info!(
            "Shared spreadsheet {} with {} ({}) as {}",
            spreadsheet.id,
            policy.email_address,
            policy.principal_type.as_str(),
            policy.role.as_str()
        );

        Ok(())
    }
}
