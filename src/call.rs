//! Building the call that replaces a markup node.

use swc_core::{
    common::{Span, SyntaxContext, DUMMY_SP},
    ecma::{ast::*, utils::ExprFactory},
};

use crate::annotations::Settings;
use crate::error::BuildJsxError;
use crate::imports::{ImportNeeds, FRAGMENT, JSX, JSXS, JSX_DEV};
use crate::names::{ident, member_path, str_lit, tag_name};
use crate::props::{automatic_props, classic_props, AutomaticProps};

/// Reported to `jsxDEV` when the caller did not name the file.
const UNKNOWN_FILE: &str = "<source.js>";

/// A markup node with its children already normalized.
pub(crate) struct Lowering {
    /// Tag name and attributes; `None` for fragments.
    pub element: Option<(JSXElementName, Vec<JSXAttrOrSpread>)>,
    pub children: Vec<Expr>,
    pub span: Span,
    /// 1-based line and column of the node, when known.
    pub position: Option<(usize, usize)>,
}

fn call(callee: Expr, args: Vec<Expr>, span: Span) -> Expr {
    Expr::Call(CallExpr {
        span,
        callee: callee.as_callee(),
        args: args.into_iter().map(|arg| arg.as_arg()).collect(),
        type_args: None,
        ctxt: SyntaxContext::empty(),
    })
}

fn null() -> Expr {
    Expr::Lit(Lit::Null(Null { span: DUMMY_SP }))
}

fn bool_lit(value: bool) -> Expr {
    Expr::Lit(Lit::Bool(Bool {
        span: DUMMY_SP,
        value,
    }))
}

fn num_lit(value: usize) -> Expr {
    Expr::Lit(Lit::Num(Number {
        span: DUMMY_SP,
        value: value as f64,
        raw: None,
    }))
}

fn key_value(key: &str, value: Expr) -> PropOrSpread {
    PropOrSpread::Prop(Box::new(Prop::KeyValue(KeyValueProp {
        key: PropName::Ident(IdentName::new(key.into(), DUMMY_SP)),
        value: Box::new(value),
    })))
}

/// `pragma(type, props | null, ...children)`.
///
/// The props slot is left out for elements without props or children.
pub(crate) fn classic(settings: &Settings, lowering: Lowering) -> Expr {
    let Lowering {
        element,
        children,
        span,
        ..
    } = lowering;

    let (tag, props, fragment) = match element {
        Some((name, attrs)) => (tag_name(name), classic_props(attrs), false),
        None => (member_path(&settings.pragma_frag, DUMMY_SP), None, true),
    };

    let mut args = Vec::with_capacity(children.len() + 2);
    args.push(tag);
    if fragment || props.is_some() || !children.is_empty() {
        args.push(props.unwrap_or_else(null));
    }
    args.extend(children);

    call(member_path(&settings.pragma, DUMMY_SP), args, span)
}

/// `_jsx(type, props, key?)`, `_jsxs(...)`, or in development
/// `_jsxDEV(type, props, key, isStaticChildren, source, this)`.
pub(crate) fn automatic(
    settings: &Settings,
    imports: &mut ImportNeeds,
    lowering: Lowering,
) -> Result<Expr, BuildJsxError> {
    let Lowering {
        element,
        mut children,
        span,
        position,
    } = lowering;

    let (tag, AutomaticProps { mut props, key }) = match element {
        Some((name, attrs)) => (tag_name(name), automatic_props(attrs)?),
        None => {
            imports.fragment = true;
            (
                Expr::Ident(ident(FRAGMENT, DUMMY_SP)),
                AutomaticProps {
                    props: Vec::new(),
                    key: None,
                },
            )
        }
    };

    let static_children = children.len() > 1;
    match children.len() {
        0 => {}
        1 => props.push(key_value("children", children.remove(0))),
        _ => props.push(key_value(
            "children",
            Expr::Array(ArrayLit {
                span: DUMMY_SP,
                elems: children.into_iter().map(|child| Some(child.as_arg())).collect(),
            }),
        )),
    }
    let props = Expr::Object(ObjectLit {
        span: DUMMY_SP,
        props,
    });

    if settings.is_development() {
        imports.jsx_dev = true;
        let key = key.map_or_else(|| Expr::Ident(ident("undefined", DUMMY_SP)), |key| *key);
        let args = vec![
            tag,
            props,
            key,
            bool_lit(static_children),
            source_location(settings.file_path.as_deref(), position),
            Expr::This(ThisExpr { span: DUMMY_SP }),
        ];
        return Ok(call(Expr::Ident(ident(JSX_DEV, DUMMY_SP)), args, span));
    }

    let helper = if static_children {
        imports.jsxs = true;
        JSXS
    } else {
        imports.jsx = true;
        JSX
    };
    let mut args = vec![tag, props];
    args.extend(key.map(|key| *key));
    Ok(call(Expr::Ident(ident(helper, DUMMY_SP)), args, span))
}

/// `{fileName, lineNumber, columnNumber}`, without the numbers when the node
/// has no position.
fn source_location(file_path: Option<&str>, position: Option<(usize, usize)>) -> Expr {
    let mut props = vec![key_value(
        "fileName",
        str_lit(file_path.unwrap_or(UNKNOWN_FILE), DUMMY_SP),
    )];
    if let Some((line, column)) = position {
        props.push(key_value("lineNumber", num_lit(line)));
        props.push(key_value("columnNumber", num_lit(column)));
    }
    Expr::Object(ObjectLit {
        span: DUMMY_SP,
        props,
    })
}
