use std::fmt;

use swc_core::common::Span;
use thiserror::Error;

use crate::options::Runtime;

/// A comment directive that can clash with the effective runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Jsx,
    JsxFrag,
    JsxImportSource,
}

impl Directive {
    // `@jsx`/`@jsxFrag` name a pragma, `@jsxImportSource` does not.
    fn qualifier(self) -> &'static str {
        match self {
            Directive::Jsx | Directive::JsxFrag => "pragma ",
            Directive::JsxImportSource => "",
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Directive::Jsx => "jsx",
            Directive::JsxFrag => "jsxFrag",
            Directive::JsxImportSource => "jsxImportSource",
        })
    }
}

#[derive(Debug, Error)]
pub enum BuildJsxError {
    #[error("Unexpected `@{directive}` {}w/ {runtime} runtime", .directive.qualifier())]
    ConfigConflict {
        directive: Directive,
        runtime: Runtime,
    },
    #[error("Unexpected `jsxRuntime` `{value}`, expected `automatic` or `classic`")]
    InvalidRuntime { value: String },
    #[error("Expected `key` to come before any spread expressions")]
    KeyAfterSpread { span: Span },
    #[error("Spread children are not supported")]
    SpreadChild { span: Span },
    #[error("Invalid plugin configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl BuildJsxError {
    /// Source span of the offending node, for errors raised while lowering.
    pub fn span(&self) -> Option<Span> {
        match self {
            BuildJsxError::KeyAfterSpread { span } | BuildJsxError::SpreadChild { span } => {
                Some(*span)
            }
            _ => None,
        }
    }
}
