//! Configuration support
//!
//! Settings come from TOML text, typically an `_md2html.toml` file read by
//! the caller:
//!
//! ```toml
//! [writer]
//! indent_length = 4
//!
//! [page]
//! lang = "en"
//! title = "Joe Schafer"
//! stylesheets = ["/style/main.css"]
//! ```

use crate::document::PageOptions;
use crate::error::Result;
use md2html_hast::WriterOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Conventional configuration file name
pub const CONFIG_FILE_NAME: &str = "_md2html.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct Config {
    /// HTML writer configuration
    pub writer: WriterOptions,
    /// Page template configuration
    pub page: PageOptions,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize configuration to TOML text
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Generate JSON schema for the configuration
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Generate JSON schema as a string
    pub fn json_schema_string() -> Result<String> {
        Ok(serde_json::to_string_pretty(&Self::json_schema())?)
    }

    /// A sample configuration with common settings filled in
    pub fn sample() -> Self {
        Config {
            writer: WriterOptions::default(),
            page: PageOptions {
                title: Some("My Blog".to_string()),
                favicon: Some("/favicon.ico".to_string()),
                stylesheets: vec!["/style/main.css".to_string()],
                scripts: vec!["/instantpage.min.js".to_string()],
                ..PageOptions::default()
            },
        }
    }
}
