//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Google Sheets connector tests
//!
//! This module contains unit and integration tests for the connector.


/// Test utilities and helpers
pub mod utils {
    use std::io::Write;
    use std::sync::Arc;
    use tempfile::NamedTempFile;

    use crate::client::mock::{MockSpreadsheetConfig, MockSpreadsheetService};
    use crate::config::{GoogleSheetsConfig, PrincipalType, ShareRole, SharePolicy};
    use crate::dataset::Dataset;
    use serde_json::json;

    /// Create a test share policy
    pub fn create_test_policy() -> SharePolicy {
        SharePolicy::new("exports@example.com", PrincipalType::User, ShareRole::Writer)
    }

    /// Create a test configuration backed by an existing credentials file.
    ///
    /// The returned temp file handle must stay alive for the duration of
    /// the test; dropping it deletes the file.
    pub fn create_test_config() -> (GoogleSheetsConfig, NamedTempFile) {
        let mut file = NamedTempFile::new().expect("temp credentials file");
        file.write_all(b"{}").expect("write credentials");

        let config =
            GoogleSheetsConfig::new(file.path().to_string_lossy(), create_test_policy());
        (config, file)
    }

    /// Create a two-column, two-row test dataset
    pub fn create_test_dataset() -> Dataset {
        Dataset::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec![json!(1), json!(2)], vec![json!(3), json!(4)]],
        )
    }

    /// Create a mock spreadsheet service
    pub fn create_mock_service(config: MockSpreadsheetConfig) -> Arc<MockSpreadsheetService> {
        Arc::new(MockSpreadsheetService::new(config))
    }
}
