//! Lower JSX elements and fragments into plain function calls.
//!
//! Two output styles are supported. The classic runtime calls a configured
//! factory (`React.createElement("a", null, "b")`). The automatic runtime calls
//! helpers imported from `<importSource>/jsx-runtime`
//! (`_jsx("a", {children: "b"})`), or `jsxDEV` from `jsx-dev-runtime` in
//! development. Files can override the configuration with `@jsx`, `@jsxFrag`,
//! `@jsxImportSource` and `@jsxRuntime` comments.

use swc_core::{
    common::{comments::Comment, SourceMapper, DUMMY_SP},
    ecma::{
        ast::{Module, Program},
        visit::VisitMutWith,
    },
    plugin::{
        errors::HANDLER, metadata::TransformPluginMetadataContextKind, plugin_transform,
        proxies::TransformPluginProgramMetadata,
    },
};
use tracing::debug;

mod annotations;
mod call;
mod children;
mod error;
mod imports;
mod names;
mod options;
mod props;
mod transform;

pub use annotations::{collect_comments, program_comments, Annotations};
pub use children::normalize_text;
pub use error::{BuildJsxError, Directive};
pub use names::is_identifier_name;
pub use options::{Options, Runtime};

use annotations::Settings;
use transform::BuildJsx;

/// Rewrite all markup in `program` into calls.
///
/// `comments` are the file's comments in document order; directives in them
/// override `options`. With a `source_map`, development calls report the line
/// and column of each element. On error nothing of the program is returned.
pub fn build_jsx(
    program: Program,
    comments: &[Comment],
    options: &Options,
    source_map: Option<&dyn SourceMapper>,
) -> Result<Program, BuildJsxError> {
    let settings = Settings::resolve(options, &Annotations::scan(comments))?;
    debug!(?settings, "resolved jsx settings");

    let mut program = program;
    let mut transform = BuildJsx::new(settings, source_map);
    program.visit_mut_with(&mut transform);
    transform.finish(program)
}

// -----------------------------------------------------------------------------
// Entrypoint
// -----------------------------------------------------------------------------

fn report(err: &BuildJsxError) {
    HANDLER.with(|handler| match err.span() {
        Some(span) => handler.struct_span_err(span, &err.to_string()).emit(),
        None => handler.err(&err.to_string()),
    });
}

fn empty_module() -> Program {
    Program::Module(Module {
        span: DUMMY_SP,
        body: vec![],
        shebang: None,
    })
}

/// Plugin pipeline after the host data has been read: parse the JSON
/// configuration, fill in the filename, lower the program.
fn run_plugin(
    program: Program,
    config: Option<String>,
    filename: Option<String>,
    comments: &[Comment],
    source_map: Option<&dyn SourceMapper>,
) -> Result<Program, BuildJsxError> {
    let mut options = match config {
        Some(config) => Options::from_json(&config)?,
        None => Options::default(),
    };
    if options.file_path.is_none() {
        options.file_path = filename;
    }
    build_jsx(program, comments, &options, source_map)
}

#[plugin_transform]
pub fn process_transform(program: Program, metadata: TransformPluginProgramMetadata) -> Program {
    let comments = metadata
        .comments
        .as_ref()
        .map(|comments| program_comments(&program, comments))
        .unwrap_or_default();

    run_plugin(
        program,
        metadata.get_transform_plugin_config(),
        metadata.get_context(&TransformPluginMetadataContextKind::Filename),
        &comments,
        Some(&metadata.source_map),
    )
    .unwrap_or_else(|err| {
        report(&err);
        empty_module()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_fails_like_a_lowering_error() {
        let err = run_plugin(empty_module(), Some("{".into()), None, &[], None).unwrap_err();
        assert!(matches!(err, BuildJsxError::Config(_)));
    }

    #[test]
    fn missing_config_uses_defaults() {
        let program = run_plugin(empty_module(), None, Some("a.jsx".into()), &[], None);
        assert_eq!(program.unwrap(), empty_module());
    }
}
