//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Mock spreadsheet service for testing the Google Sheets connector
//!
//! This module provides an in-memory service implementation for testing and
//! development purposes. Every remote step can be made to fail, and the
//! documents a test created stay inspectable.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::client::{SpreadsheetRef, SpreadsheetService};
use crate::config::SharePolicy;
use crate::error::{GoogleSheetsError, GoogleSheetsResult};

/// Mock service configuration
#[derive(Debug, Clone, Default)]
pub struct MockSpreadsheetConfig {
    /// Fail the authentication step
    pub fail_authentication: bool,
    /// Fail the document creation step
    pub fail_create: bool,
    /// Fail the bulk write step
    pub fail_write: bool,
    /// Fail the sharing step
    pub fail_share: bool,
}

/// A document created through the mock service, carrying everything the
/// remote side would have persisted
#[derive(Debug, Clone)]
pub struct MockSpreadsheet {
    /// Handle handed back to the exporter
    pub reference: SpreadsheetRef,
    /// Cell grid written to the document, if the write step ran
    pub cells: Vec<Vec<Value>>,
    /// Start cell of the write, if the write step ran
    pub start_cell: Option<String>,
    /// Share policies applied to the document
    pub shares: Vec<SharePolicy>,
}

/// Mock spreadsheet service
pub struct MockSpreadsheetService {
    /// Service configuration
    config: MockSpreadsheetConfig,
    /// Whether authenticate has been called successfully
    authenticated: Arc<RwLock<bool>>,
    /// Documents created through this service
    documents: Arc<RwLock<Vec<MockSpreadsheet>>>,
    /// Id sequence for created documents
    sequence: Arc<RwLock<u64>>,
}

impl MockSpreadsheetService {
    /// Create a new mock service
    pub fn new(config: MockSpreadsheetConfig) -> Self {
        Self {
            config,
            authenticated: Arc::new(RwLock::new(false)),
            documents: Arc::new(RwLock::new(Vec::new())),
            sequence: Arc::new(RwLock::new(0)),
        }
    }

    /// Whether a session is currently established
    pub async fn is_authenticated(&self) -> bool {
        *self.authenticated.read().await
    }

    /// Snapshot of every document created through this service
    pub async fn documents(&self) -> Vec<MockSpreadsheet> {
        self.documents.read().await.clone()
    }

    /// Number of documents created through this service
    pub async fn document_count(&self) -> usize {
        self.documents.read().await.len()
    }
}

#[async_trait]
impl SpreadsheetService for MockSpreadsheetService {
    async fn authenticate(&self) -> GoogleSheetsResult<()> {
        if self.config.fail_authentication {
            return Err(GoogleSheetsError::authentication(
                "Simulated authentication failure",
            ));
        }

        *self.authenticated.write().await = true;
        debug!("Mock service authenticated");

        Ok(())
    }

    async fn create_spreadsheet(&self, title: &str) -> GoogleSheetsResult<SpreadsheetRef> {
        if !*self.authenticated.read().await {
            return Err(GoogleSheetsError::authentication(
                "Mock service is not authenticated",
            ));
        }
        if self.config.fail_create {
            return Err(GoogleSheetsError::create("Simulated creation failure"));
        }

        let id = {
            let mut sequence = self.sequence.write().await;
            *sequence += 1;
            format!("mock-spreadsheet-{}", sequence)
        };

        let reference = SpreadsheetRef {
            url: Some(format!("https://sheets.mock.invalid/{}", id)),
            id,
            title: title.to_string(),
        };

        self.documents.write().await.push(MockSpreadsheet {
            reference: reference.clone(),
            cells: Vec::new(),
            start_cell: None,
            shares: Vec::new(),
        });

        debug!("Mock created spreadsheet '{}' ({})", title, reference.id);

        Ok(reference)
    }

    async fn write_range(
        &self,
        spreadsheet: &SpreadsheetRef,
        start_cell: &str,
        values: Vec<Vec<Value>>,
    ) -> GoogleSheetsResult<()> {
        if self.config.fail_write {
            return Err(GoogleSheetsError::write("Simulated write failure"));
        }

        let mut documents = self.documents.write().await;
        let document = documents
            .iter_mut()
            .find(|d| d.reference.id == spreadsheet.id)
            .ok_or_else(|| {
                GoogleSheetsError::write(format!("Unknown spreadsheet id: {}", spreadsheet.id))
            })?;

        document.start_cell = Some(start_cell.to_string());
        document.cells = values;

        Ok(())
    }

    async fn share_spreadsheet(
        &self,
        spreadsheet: &SpreadsheetRef,
        policy: &SharePolicy,
    ) -> GoogleSheetsResult<()> {
        if self.config.fail_share {
            return Err(GoogleSheetsError::share("Simulated sharing failure"));
        }

        let mut documents = self.documents.write().await;
        let document = documents
            .iter_mut()
            .find(|d| d.reference.id == spreadsheet.id)
            .ok_or_else(|| {
                GoogleSheetsError::share(format!("Unknown spreadsheet id: {}", spreadsheet.id))
            })?;

        document.shares.push(policy.clone());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PrincipalType, ShareRole};
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_requires_authentication() {
        let service = MockSpreadsheetService::new(MockSpreadsheetConfig::default());

        let result = service.create_spreadsheet("Report").await;
        assert!(result.is_err());

        service.authenticate().await.unwrap();
        assert!(service.is_authenticated().await);
        assert!(service.create_spreadsheet("Report").await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_records_created_documents() {
        let service = MockSpreadsheetService::new(MockSpreadsheetConfig::default());
        service.authenticate().await.unwrap();

        let spreadsheet = service.create_spreadsheet("Report").await.unwrap();
        service
            .write_range(&spreadsheet, "A1", vec![vec![json!("a")]])
            .await
            .unwrap();
        service
            .share_spreadsheet(
                &spreadsheet,
                &SharePolicy::new("exports@example.com", PrincipalType::User, ShareRole::Reader),
            )
            .await
            .unwrap();

        let documents = service.documents().await;
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].cells, vec![vec![json!("a")]]);
        assert_eq!(documents[0].start_cell.as_deref(), Some("A1"));
        assert_eq!(documents[0].shares.len(), 1);
    }

    #[tokio::test]
    async fn test_mock_simulated_failures() {
        let service = MockSpreadsheetService::new(MockSpreadsheetConfig {
            fail_authentication: true,
            ..Default::default()
        });

        let result = service.authenticate().await;
        assert!(matches!(
            result.unwrap_err(),
            GoogleSheetsError::Authentication { .. }
        ));
    }
}
