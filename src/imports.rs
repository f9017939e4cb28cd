//! Automatic runtime helpers and the import that brings them in.

use swc_core::{
    common::DUMMY_SP,
    ecma::ast::*,
};
use tracing::debug;

use crate::names::ident;

pub(crate) const FRAGMENT: &str = "_Fragment";
pub(crate) const JSX: &str = "_jsx";
pub(crate) const JSXS: &str = "_jsxs";
pub(crate) const JSX_DEV: &str = "_jsxDEV";

/// Helpers referenced while lowering. Only ever switched on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ImportNeeds {
    pub fragment: bool,
    pub jsx: bool,
    pub jsxs: bool,
    pub jsx_dev: bool,
}

impl ImportNeeds {
    fn specifiers(&self) -> Vec<ImportSpecifier> {
        [
            (self.fragment, "Fragment", FRAGMENT),
            (self.jsx, "jsx", JSX),
            (self.jsxs, "jsxs", JSXS),
            (self.jsx_dev, "jsxDEV", JSX_DEV),
        ]
        .into_iter()
        .filter(|(needed, ..)| *needed)
        .map(|(_, imported, local)| {
            ImportSpecifier::Named(ImportNamedSpecifier {
                span: DUMMY_SP,
                local: ident(local, DUMMY_SP),
                imported: Some(ModuleExportName::Ident(ident(imported, DUMMY_SP))),
                is_type_only: false,
            })
        })
        .collect()
    }

    fn source(&self, import_source: &str) -> String {
        if self.jsx_dev {
            format!("{import_source}/jsx-dev-runtime")
        } else {
            format!("{import_source}/jsx-runtime")
        }
    }

    /// Build the single import declaration for everything needed, if anything.
    pub(crate) fn import_decl(&self, import_source: &str) -> Option<ImportDecl> {
        let specifiers = self.specifiers();
        if specifiers.is_empty() {
            return None;
        }
        Some(ImportDecl {
            span: DUMMY_SP,
            specifiers,
            src: Box::new(Str {
                span: DUMMY_SP,
                value: self.source(import_source).into(),
                raw: None,
            }),
            type_only: false,
            with: None,
            phase: ImportPhase::Evaluation,
        })
    }
}

fn is_directive(stmt: &Stmt) -> bool {
    matches!(stmt, Stmt::Expr(ExprStmt { expr, .. }) if matches!(&**expr, Expr::Lit(Lit::Str(_))))
}

/// Insert the helper import after the directive prologue.
///
/// A script has nowhere to put an import, so it is turned into a module first.
pub(crate) fn inject(program: Program, needs: &ImportNeeds, import_source: &str) -> Program {
    let Some(decl) = needs.import_decl(import_source) else {
        return program;
    };
    debug!(source = %needs.source(import_source), ?needs, "injecting jsx runtime import");

    let mut module = match program {
        Program::Module(module) => module,
        Program::Script(script) => Module {
            span: script.span,
            body: script.body.into_iter().map(ModuleItem::Stmt).collect(),
            shebang: script.shebang,
        },
    };

    let index = module
        .body
        .iter()
        .position(|item| !matches!(item, ModuleItem::Stmt(stmt) if is_directive(stmt)))
        .unwrap_or(module.body.len());
    module
        .body
        .insert(index, ModuleItem::ModuleDecl(ModuleDecl::Import(decl)));

    Program::Module(module)
}
