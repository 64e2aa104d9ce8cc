//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Configuration management for the Google Sheets connector
//!
//! This module provides type-safe configuration structures with validation
//! for the Google Sheets export feature. Configuration is loaded once at
//! feature initialization and treated as read-only afterwards.

use crate::error::{GoogleSheetsError, GoogleSheetsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

/// Google Sheets export configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GoogleSheetsConfig {
    /// Path to the service-account credential JSON file
    #[validate(length(min = 1))]
    pub credentials_path: String,
    /// Share policy applied to every exported spreadsheet
    pub share: SharePolicy,
}

/// Sharing applied to a newly created spreadsheet: who gets access, as what
/// kind of principal, with which role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SharePolicy {
    /// Recipient of the grant; a domain name for domain-wide shares
    #[validate(length(min = 1))]
    pub email_address: String,
    /// Kind of principal receiving the grant
    pub principal_type: PrincipalType,
    /// Access level granted
    pub role: ShareRole,
    /// Whether the service sends a notification email for the grant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify: Option<bool>,
    /// Custom message for the notification email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_message: Option<String>,
}

/// Kind of principal a spreadsheet is shared with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrincipalType {
    User,
    Group,
    Domain,
    Anyone,
}

impl PrincipalType {
    /// Wire representation used by the sharing API
    pub fn as_str(&self) -> &'static str {
        match self {
            PrincipalType::User => "user",
            PrincipalType::Group => "group",
            PrincipalType::Domain => "domain",
            PrincipalType::Anyone => "anyone",
        }
    }
}

/// Access level granted on a shared spreadsheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareRole {
    Reader,
    Writer,
    Owner,
}

impl ShareRole {
    /// Wire representation used by the sharing API
    pub fn as_str(&self) -> &'static str {
        match self {
            ShareRole::Reader => "reader",
            ShareRole::Writer => "writer",
            ShareRole::Owner => "owner",
        }
    }
}

impl SharePolicy {
    /// Create a share policy with the three required fields
    pub fn new(
        email_address: impl Into<String>,
        principal_type: PrincipalType,
        role: ShareRole,
    ) -> Self {
        Self {
            email_address: email_address.into(),
            principal_type,
            role,
            notify: None,
            email_message: None,
        }
    }
}

impl GoogleSheetsConfig {
    /// Create a new Google Sheets export configuration
    pub fn new(credentials_path: impl Into<String>, share: SharePolicy) -> Self {
        Self {
            credentials_path: credentials_path.into(),
            share,
        }
    }

    /// Load configuration from file
    pub fn from_file(path: &Path) -> GoogleSheetsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            GoogleSheetsError::configuration_with_source("Failed to read config file", e)
        })?;

        Self::from_str(&content)
    }

    /// Load configuration from string
    pub fn from_str(content: &str) -> GoogleSheetsResult<Self> {
        let config: GoogleSheetsConfig = toml::from_str(content).map_err(|e| {
            GoogleSheetsError::configuration_with_source("Failed to parse config", e)
        })?;

        config.validate_config()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// The credentials file must exist on the local filesystem at validation
    /// time; a dangling path is a deployment problem, not a call-time one.
    pub fn validate_config(&self) -> GoogleSheetsResult<()> {
        self.validate()?;
        self.share.validate()?;

        if !Path::new(&self.credentials_path).is_file() {
            return Err(GoogleSheetsError::configuration(format!(
                "Credentials file not found: {}",
                self.credentials_path
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn credentials_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp credentials file");
        file.write_all(b"{}").expect("write credentials");
        file
    }

    #[test]
    fn test_config_creation() {
        let file = credentials_file();
        let config = GoogleSheetsConfig::new(
            file.path().to_string_lossy(),
            SharePolicy::new("exports@example.com", PrincipalType::User, ShareRole::Writer),
        );

        assert!(config.validate_config().is_ok());
        assert_eq!(config.share.role, ShareRole::Writer);
    }

    #[test]
    fn test_config_validation_empty_credentials_path() {
        let config = GoogleSheetsConfig::new(
            "",
            SharePolicy::new("exports@example.com", PrincipalType::User, ShareRole::Writer),
        );

        assert!(config.validate_config().is_err());
    }

    #[test]
    fn test_config_validation_missing_credentials_file() {
        let config = GoogleSheetsConfig::new(
            "/nonexistent/service-account.json",
            SharePolicy::new("exports@example.com", PrincipalType::User, ShareRole::Writer),
        );

        let result = config.validate_config();
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            GoogleSheetsError::Configuration { .. }
        ));
    }

    #[test]
    fn test_config_validation_empty_email_address() {
        let file = credentials_file();
        let config = GoogleSheetsConfig::new(
            file.path().to_string_lossy(),
            SharePolicy::new("", PrincipalType::Domain, ShareRole::Reader),
        );

        assert!(config.validate_config().is_err());
    }

    #[test]
    fn test_config_from_toml() {
        let file = credentials_file();
        let content = format!(
            r#"
            credentials_path = "{}"

            [share]
            email_address = "a8c.com"
            principal_type = "domain"
            role = "writer"
            "#,
            file.path().display()
        );

        let config = GoogleSheetsConfig::from_str(&content).expect("valid config");
        assert_eq!(config.share.principal_type, PrincipalType::Domain);
        assert_eq!(config.share.email_address, "a8c.com");
        assert!(config.share.notify.is_none());
    }

    #[test]
    fn test_config_from_toml_missing_share_key() {
        let file = credentials_file();
        let content = format!(
            r#"
            credentials_path = "{}"

            [share]
            email_address = "a8c.com"
            role = "writer"
            "#,
            file.path().display()
        );

        assert!(GoogleSheetsConfig::from_str(&content).is_err());
    }

    #[test]
    fn test_config_from_toml_malformed_role() {
        let file = credentials_file();
        let content = format!(
            r#"
            credentials_path = "{}"

            [share]
            email_address = "a8c.com"
            principal_type = "domain"
            role = "superuser"
            "#,
            file.path().display()
        );

        assert!(GoogleSheetsConfig::from_str(&content).is_err());
    }

    #[test]
    fn test_share_policy_pass_through_fields() {
        let content = r#"
            email_address = "team@example.com"
            principal_type = "group"
            role = "reader"
            notify = false
            email_message = "quarterly export"
        "#;

        let policy: SharePolicy = toml::from_str(content).expect("valid policy");
        assert_eq!(policy.notify, Some(false));
        assert_eq!(policy.email_message.as_deref(), Some("quarterly export"));
    }
}
