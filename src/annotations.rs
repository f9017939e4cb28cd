//! Configuration found in `@jsx`-style comment directives.

use once_cell::sync::Lazy;
use regex::Regex;
use swc_core::{
    common::{
        comments::{Comment, Comments, SingleThreadedComments},
        Span,
    },
    ecma::{
        ast::Program,
        visit::{Visit, VisitWith},
    },
};

use crate::error::{BuildJsxError, Directive};
use crate::options::{
    Options, Runtime, DEFAULT_IMPORT_SOURCE, DEFAULT_PRAGMA, DEFAULT_PRAGMA_FRAG,
};

static DIRECTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@(jsx|jsxFrag|jsxImportSource|jsxRuntime)\s+(\S+)")
        .expect("jsx directive regex should compile")
});

/// Directive values, last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    pub jsx: Option<String>,
    pub jsx_frag: Option<String>,
    pub jsx_import_source: Option<String>,
    pub jsx_runtime: Option<String>,
}

impl Annotations {
    pub fn scan<'a>(comments: impl IntoIterator<Item = &'a Comment>) -> Self {
        let mut annotations = Annotations::default();
        for comment in comments {
            for caps in DIRECTIVE.captures_iter(&comment.text) {
                let value = Some(caps[2].to_string());
                match &caps[1] {
                    "jsx" => annotations.jsx = value,
                    "jsxFrag" => annotations.jsx_frag = value,
                    "jsxImportSource" => annotations.jsx_import_source = value,
                    _ => annotations.jsx_runtime = value,
                }
            }
        }
        annotations
    }
}

/// Effective configuration for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub runtime: Runtime,
    pub pragma: String,
    pub pragma_frag: String,
    pub import_source: String,
    pub development: bool,
    pub file_path: Option<String>,
}

impl Settings {
    pub(crate) fn resolve(
        options: &Options,
        annotations: &Annotations,
    ) -> Result<Self, BuildJsxError> {
        let runtime = match &annotations.jsx_runtime {
            Some(value) => value.parse()?,
            None => options.runtime.unwrap_or_default(),
        };

        let conflict = match runtime {
            Runtime::Automatic if annotations.jsx.is_some() => Some(Directive::Jsx),
            Runtime::Automatic if annotations.jsx_frag.is_some() => Some(Directive::JsxFrag),
            Runtime::Classic if annotations.jsx_import_source.is_some() => {
                Some(Directive::JsxImportSource)
            }
            _ => None,
        };
        if let Some(directive) = conflict {
            return Err(BuildJsxError::ConfigConflict { directive, runtime });
        }

        let pick = |annotation: &Option<String>, option: &Option<String>, default: &str| {
            annotation
                .clone()
                .or_else(|| option.clone())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Settings {
            runtime,
            pragma: pick(&annotations.jsx, &options.pragma, DEFAULT_PRAGMA),
            pragma_frag: pick(&annotations.jsx_frag, &options.pragma_frag, DEFAULT_PRAGMA_FRAG),
            import_source: pick(
                &annotations.jsx_import_source,
                &options.import_source,
                DEFAULT_IMPORT_SOURCE,
            ),
            development: options.development,
            file_path: options.file_path.clone(),
        })
    }

    /// `jsxDEV` is only used by the automatic runtime.
    pub(crate) fn is_development(&self) -> bool {
        self.runtime == Runtime::Automatic && self.development
    }
}

/// Every comment recorded by the parser, in document order.
pub fn collect_comments(comments: &SingleThreadedComments) -> Vec<Comment> {
    let (leading, trailing) = comments.borrow_all();
    let mut all: Vec<Comment> = leading
        .values()
        .chain(trailing.values())
        .flatten()
        .cloned()
        .collect();
    all.sort_by_key(|comment| comment.span.lo);
    all.dedup_by_key(|comment| comment.span);
    all
}

/// Every comment attached to a node of `program`, in document order.
///
/// Used when the comment store can only be queried by position, as with the
/// plugin proxy.
pub fn program_comments(program: &Program, comments: &dyn Comments) -> Vec<Comment> {
    let mut collector = CommentCollector {
        comments,
        found: Vec::new(),
    };
    program.visit_with(&mut collector);

    let mut all = collector.found;
    all.sort_by_key(|comment| comment.span.lo);
    all.dedup_by_key(|comment| comment.span);
    all
}

struct CommentCollector<'a> {
    comments: &'a dyn Comments,
    found: Vec<Comment>,
}

impl Visit for CommentCollector<'_> {
    fn visit_span(&mut self, span: &Span) {
        if span.is_dummy() {
            return;
        }
        self.found
            .extend(self.comments.get_leading(span.lo).unwrap_or_default());
        self.found
            .extend(self.comments.get_trailing(span.hi).unwrap_or_default());
    }
}

#[cfg(test)]
mod tests {
    use swc_core::common::{comments::CommentKind, DUMMY_SP};

    use super::*;

    fn block(text: &str) -> Comment {
        Comment {
            kind: CommentKind::Block,
            span: DUMMY_SP,
            text: text.into(),
        }
    }

    #[test]
    fn reads_several_directives_from_one_comment() {
        let comments = [block(" @jsx a @jsxFrag b ")];
        let annotations = Annotations::scan(&comments);
        assert_eq!(annotations.jsx.as_deref(), Some("a"));
        assert_eq!(annotations.jsx_frag.as_deref(), Some("b"));
        assert_eq!(annotations.jsx_runtime, None);
    }

    #[test]
    fn later_directive_overrides_earlier() {
        let comments = [block("@jsx a"), block(" other "), block("* @jsx b")];
        assert_eq!(Annotations::scan(&comments).jsx.as_deref(), Some("b"));
    }

    #[test]
    fn directive_needs_a_value() {
        let comments = [block("@jsx"), block("@jsxRuntime   ")];
        assert_eq!(Annotations::scan(&comments), Annotations::default());
    }

    #[test]
    fn directive_wins_over_option() {
        let options = Options {
            runtime: Some(Runtime::Automatic),
            pragma: Some("h".into()),
            ..Default::default()
        };
        let annotations = Annotations::scan(&[block("@jsxRuntime classic")]);
        let settings = Settings::resolve(&options, &annotations).unwrap();
        assert_eq!(settings.runtime, Runtime::Classic);
        assert_eq!(settings.pragma, "h");
        assert_eq!(settings.pragma_frag, DEFAULT_PRAGMA_FRAG);
    }

    #[test]
    fn pragma_conflicts_with_automatic_runtime() {
        let annotations = Annotations::scan(&[block(" @jsx a @jsxRuntime automatic ")]);
        let err = Settings::resolve(&Options::default(), &annotations).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unexpected `@jsx` pragma w/ automatic runtime"
        );

        let annotations = Annotations::scan(&[block("@jsxFrag a")]);
        let options = Options {
            runtime: Some(Runtime::Automatic),
            ..Default::default()
        };
        let err = Settings::resolve(&options, &annotations).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unexpected `@jsxFrag` pragma w/ automatic runtime"
        );
    }

    #[test]
    fn import_source_conflicts_with_classic_runtime() {
        let annotations = Annotations::scan(&[block("@jsxImportSource a @jsxRuntime classic")]);
        let err = Settings::resolve(&Options::default(), &annotations).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unexpected `@jsxImportSource` w/ classic runtime"
        );
    }

    #[test]
    fn unknown_runtime_directive_fails() {
        let annotations = Annotations::scan(&[block("@jsxRuntime a")]);
        assert!(matches!(
            Settings::resolve(&Options::default(), &annotations),
            Err(BuildJsxError::InvalidRuntime { value }) if value == "a"
        ));
    }

    #[test]
    fn development_only_applies_to_automatic() {
        let options = Options {
            development: true,
            ..Default::default()
        };
        let classic = Settings::resolve(&options, &Annotations::default()).unwrap();
        assert!(!classic.is_development());

        let annotations = Annotations::scan(&[block("@jsxRuntime automatic")]);
        let automatic = Settings::resolve(&options, &annotations).unwrap();
        assert!(automatic.is_development());
    }
}
