mod common;

use build_jsx_swc_plugin::{program_comments, Annotations};
use common::parse;

#[test]
fn collects_comments_in_document_order() {
    let parsed = parse("/* @jsx a */\nfoo(); // @jsx b\n/* @jsx c */\nbar();");
    let texts: Vec<&str> = parsed.comments.iter().map(|c| &*c.text).collect();
    assert_eq!(texts, vec![" @jsx a ", " @jsx b", " @jsx c "]);
    assert_eq!(
        Annotations::scan(&parsed.comments).jsx.as_deref(),
        Some("c")
    );
}

#[test]
fn program_comments_cover_top_level_items() {
    let parsed = parse("/* @jsxRuntime automatic */\nfoo();\n/* @jsxImportSource preact */\nbar();");
    let comments = program_comments(&parsed.program, &parsed.store);
    let annotations = Annotations::scan(&comments);
    assert_eq!(annotations.jsx_runtime.as_deref(), Some("automatic"));
    assert_eq!(annotations.jsx_import_source.as_deref(), Some("preact"));
}

#[test]
fn no_comments_no_annotations() {
    let parsed = parse("<a />;");
    assert!(parsed.comments.is_empty());
    assert_eq!(Annotations::scan(&parsed.comments), Annotations::default());
}

#[test]
fn program_comments_reach_nested_directives() {
    let parsed = parse("function f() {\n  /* @jsx h */\n  return <a/>;\n}");
    let comments = program_comments(&parsed.program, &parsed.store);
    assert_eq!(Annotations::scan(&comments).jsx.as_deref(), Some("h"));
}

#[test]
fn program_comments_reach_mid_statement_directives() {
    let parsed = parse("const x = /* @jsxRuntime automatic */ <a/>;");
    let comments = program_comments(&parsed.program, &parsed.store);
    assert_eq!(
        Annotations::scan(&comments).jsx_runtime.as_deref(),
        Some("automatic")
    );
}

#[test]
fn program_comments_match_the_full_store() {
    let code = "/* @jsx a */\nconst x = {\n  // @jsxFrag b\n  y: <c /> /* @jsx d */,\n};\nfoo(); // @jsx e\n";
    let parsed = parse(code);
    assert_eq!(
        program_comments(&parsed.program, &parsed.store),
        parsed.comments
    );
}
