//! Site configuration: brand and account strings shown in the header,
//! mobile panel and footer.
//!
//! The browser build always uses [`SiteConfig::default`]. The export tool can
//! load overrides from a JSON file; any field left out keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Name shown next to the logo mark
    pub brand_name: String,
    /// Single character inside the logo mark
    pub brand_initial: String,
    /// Account name in the mobile panel
    pub user_name: String,
    /// Account email in the mobile panel
    pub user_email: String,
    /// Footer copyright line
    pub copyright: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand_name: "Aesthetic".into(),
            brand_initial: "A".into(),
            user_name: "User Name".into(),
            user_email: "user@example.com".into(),
            copyright: "© 2025 Aesthetic, Inc. All rights reserved.".into(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> SiteResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> SiteResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&raw)?;
        tracing::debug!(path = %path.display(), brand = %config.brand_name, "loaded site config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{"brand_name": "Northwind"}"#).unwrap();
        assert_eq!(
            config,
            SiteConfig {
                brand_name: "Northwind".into(),
                ..SiteConfig::default()
            }
        );
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = SiteConfig::from_json("{brand_name").unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
        assert!(err.to_string().starts_with("invalid site config"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SiteConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SiteError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
