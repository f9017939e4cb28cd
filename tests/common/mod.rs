#![allow(dead_code)]

use build_jsx_swc_plugin::{build_jsx, collect_comments, BuildJsxError, Options};
use swc_core::common::comments::{Comment, SingleThreadedComments};
use swc_core::common::sync::Lrc;
use swc_core::common::{FileName, SourceMap};
use swc_core::ecma::ast::{Module, ModuleItem, Program};
use swc_core::ecma::codegen::{text_writer::JsWriter, Config, Emitter};
use swc_core::ecma::parser::lexer::Lexer;
use swc_core::ecma::parser::{EsSyntax, Parser, StringInput, Syntax};

pub struct Parsed {
    pub program: Program,
    pub comments: Vec<Comment>,
    pub store: SingleThreadedComments,
    pub cm: Lrc<SourceMap>,
}

pub fn parse(code: &str) -> Parsed {
    let cm: Lrc<SourceMap> = Default::default();
    let fm = cm.new_source_file(
        Lrc::new(FileName::Custom("test.jsx".into())),
        code.to_string(),
    );
    let comments = SingleThreadedComments::default();
    let program = {
        let lexer = Lexer::new(
            Syntax::Es(EsSyntax {
                jsx: true,
                ..Default::default()
            }),
            Default::default(),
            StringInput::from(&*fm),
            Some(&comments),
        );
        let mut parser = Parser::new_from(lexer);
        let program = parser.parse_program().expect("failed to parse program");
        assert!(parser.take_errors().is_empty());
        program
    };

    Parsed {
        program,
        comments: collect_comments(&comments),
        store: comments,
        cm,
    }
}

pub fn print(cm: &Lrc<SourceMap>, program: &Program) -> String {
    let mut buf = Vec::new();
    {
        let writer = JsWriter::new(cm.clone(), "\n", &mut buf, None);
        let mut emitter = Emitter {
            cfg: Config::default(),
            comments: None,
            cm: cm.clone(),
            wr: writer,
        };
        let module = match program {
            Program::Module(module) => module.clone(),
            Program::Script(script) => Module {
                span: script.span,
                body: script.body.iter().cloned().map(ModuleItem::Stmt).collect(),
                shebang: script.shebang.clone(),
            },
        };
        emitter
            .emit_module(&module)
            .expect("failed to emit program");
    }

    String::from_utf8(buf).expect("program is not valid UTF-8")
}

/// Print `code` without transforming it, to compare against.
pub fn normalize(code: &str) -> String {
    let parsed = parse(code);
    print(&parsed.cm, &parsed.program)
}

pub fn try_transform(code: &str, options: &Options) -> Result<String, BuildJsxError> {
    let Parsed {
        program,
        comments,
        cm,
        ..
    } = parse(code);
    let program = build_jsx(program, &comments, options, Some(&*cm))?;
    Ok(print(&cm, &program))
}

pub fn transform(code: &str, options: &Options) -> String {
    try_transform(code, options).expect("transform should succeed")
}

/// Transform without a source map, so nodes carry no line/column.
pub fn transform_without_positions(code: &str, options: &Options) -> String {
    let Parsed {
        program,
        comments,
        cm,
        ..
    } = parse(code);
    let program =
        build_jsx(program, &comments, options, None).expect("transform should succeed");
    print(&cm, &program)
}

pub fn classic(pragma: &str) -> Options {
    Options {
        pragma: Some(pragma.into()),
        ..Default::default()
    }
}

pub fn automatic() -> Options {
    Options {
        runtime: Some(build_jsx_swc_plugin::Runtime::Automatic),
        ..Default::default()
    }
}
