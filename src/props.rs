//! Attribute merging for both runtimes.

use std::mem;

use swc_core::{
    common::{Span, SyntaxContext, DUMMY_SP},
    ecma::{ast::*, utils::ExprFactory},
};

use crate::error::BuildJsxError;
use crate::names::{member_path, prop_name};

/// Shallow-merge function used when attributes and spreads are mixed.
const MERGE: &str = "Object.assign";

/// Props in the automatic runtime: one object's entries plus the `key`.
pub(crate) struct AutomaticProps {
    pub props: Vec<PropOrSpread>,
    pub key: Option<Box<Expr>>,
}

fn attr_value(value: Option<JSXAttrValue>, span: Span) -> Box<Expr> {
    let value = match value {
        None => return Box::new(Expr::Lit(Lit::Bool(Bool { span, value: true }))),
        Some(value) => value,
    };
    match value {
        // Escaping is derived from the value again when printed.
        JSXAttrValue::Lit(Lit::Str(s)) => Box::new(Expr::Lit(Lit::Str(Str { raw: None, ..s }))),
        JSXAttrValue::Lit(lit) => Box::new(Expr::Lit(lit)),
        JSXAttrValue::JSXExprContainer(container) => match container.expr {
            JSXExpr::Expr(expr) => expr,
            JSXExpr::JSXEmptyExpr(_) => {
                Box::new(Expr::Lit(Lit::Bool(Bool { span, value: true })))
            }
        },
        JSXAttrValue::JSXElement(element) => Box::new(Expr::JSXElement(element)),
        JSXAttrValue::JSXFragment(fragment) => Box::new(Expr::JSXFragment(fragment)),
    }
}

fn property(attr: JSXAttr) -> PropOrSpread {
    PropOrSpread::Prop(Box::new(Prop::KeyValue(KeyValueProp {
        key: prop_name(attr.name),
        value: attr_value(attr.value, attr.span),
    })))
}

fn object(props: Vec<PropOrSpread>) -> Expr {
    Expr::Object(ObjectLit {
        span: DUMMY_SP,
        props,
    })
}

/// Classic runtime props: runs of attributes become object literals, spreads
/// stay as they are, and several sources are merged left to right.
pub(crate) fn classic_props(attrs: Vec<JSXAttrOrSpread>) -> Option<Expr> {
    let mut sources = Vec::new();
    let mut fields = Vec::new();

    for attr in attrs {
        match attr {
            JSXAttrOrSpread::JSXAttr(attr) => fields.push(property(attr)),
            JSXAttrOrSpread::SpreadElement(spread) => {
                if !fields.is_empty() {
                    sources.push(object(mem::take(&mut fields)));
                }
                sources.push(*spread.expr);
            }
        }
    }
    if !fields.is_empty() {
        sources.push(object(fields));
    }

    match sources.len() {
        0 => None,
        1 => sources.pop(),
        _ => {
            // Never merge into an object the caller owns.
            if !matches!(sources[0], Expr::Object(_)) {
                sources.insert(0, object(Vec::new()));
            }
            Some(Expr::Call(CallExpr {
                span: DUMMY_SP,
                callee: member_path(MERGE, DUMMY_SP).as_callee(),
                args: sources.into_iter().map(|source| source.as_arg()).collect(),
                type_args: None,
                ctxt: SyntaxContext::empty(),
            }))
        }
    }
}

/// Automatic runtime props: attributes and spreads in source order, with a
/// leading `key` attribute pulled out.
pub(crate) fn automatic_props(
    attrs: Vec<JSXAttrOrSpread>,
) -> Result<AutomaticProps, BuildJsxError> {
    let mut props = Vec::with_capacity(attrs.len());
    let mut key = None;
    let mut spread_seen = false;

    for attr in attrs {
        match attr {
            JSXAttrOrSpread::SpreadElement(spread) => {
                spread_seen = true;
                props.push(PropOrSpread::Spread(spread));
            }
            JSXAttrOrSpread::JSXAttr(attr) if is_key(&attr.name) => {
                if spread_seen {
                    return Err(BuildJsxError::KeyAfterSpread { span: attr.span });
                }
                key = Some(attr_value(attr.value, attr.span));
            }
            JSXAttrOrSpread::JSXAttr(attr) => props.push(property(attr)),
        }
    }

    Ok(AutomaticProps { props, key })
}

fn is_key(name: &JSXAttrName) -> bool {
    matches!(name, JSXAttrName::Ident(id) if &*id.sym == "key")
}
