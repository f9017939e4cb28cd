use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::BuildJsxError;

pub const DEFAULT_IMPORT_SOURCE: &str = "react";
pub const DEFAULT_PRAGMA: &str = "React.createElement";
pub const DEFAULT_PRAGMA_FRAG: &str = "React.Fragment";

/// How markup is turned into calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Runtime {
    /// Call the configured factory (`pragma`) directly.
    #[default]
    Classic,
    /// Call helpers imported from `<importSource>/jsx-runtime`.
    Automatic,
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Runtime::Classic => "classic",
            Runtime::Automatic => "automatic",
        })
    }
}

impl FromStr for Runtime {
    type Err = BuildJsxError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "classic" => Ok(Runtime::Classic),
            "automatic" => Ok(Runtime::Automatic),
            other => Err(BuildJsxError::InvalidRuntime {
                value: other.to_string(),
            }),
        }
    }
}

/// Transform configuration. Comment directives in the file win over these.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// In the automatic runtime, call `jsxDEV` from `jsx-dev-runtime` and pass
    /// source locations.
    pub development: bool,
    /// Path of the file being transformed, reported to `jsxDEV`.
    pub file_path: Option<String>,
    /// Package the automatic runtime helpers are imported from.
    pub import_source: Option<String>,
    /// Factory called in the classic runtime, e.g. `h` or `React.createElement`.
    pub pragma: Option<String>,
    /// Fragment symbol used in the classic runtime.
    pub pragma_frag: Option<String>,
    /// Output style; a `@jsxRuntime` comment overrides it, classic when neither is set.
    pub runtime: Option<Runtime>,
}

impl Options {
    /// Parse options from the JSON handed to the plugin.
    pub fn from_json(config: &str) -> Result<Self, BuildJsxError> {
        Ok(serde_json::from_str(config)?)
    }
}
