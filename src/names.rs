//! Turning tag and attribute names into expressions.

use swc_core::{
    common::{Span, Spanned, SyntaxContext},
    ecma::{
        ast::*,
        atoms::Atom,
    },
};

/// Whether `name` could be written as a bare JavaScript identifier.
pub fn is_identifier_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if Ident::is_valid_start(first) => chars.all(Ident::is_valid_continue),
        _ => false,
    }
}

pub(crate) fn str_lit(value: impl Into<Atom>, span: Span) -> Expr {
    Expr::Lit(Lit::Str(Str {
        span,
        value: value.into(),
        raw: None,
    }))
}

pub(crate) fn ident(sym: impl Into<Atom>, span: Span) -> Ident {
    Ident::new(sym.into(), span, SyntaxContext::empty())
}

/// The value passed as the element type.
///
/// Identifier-shaped names starting with a lowercase ASCII letter are host
/// tags and become strings; other identifiers are component references.
pub(crate) fn tag_name(name: JSXElementName) -> Expr {
    match name {
        JSXElementName::Ident(id) => {
            let host = id
                .sym
                .chars()
                .next()
                .map(|c| c.is_ascii_lowercase())
                .unwrap_or(false);
            if is_identifier_name(&id.sym) && !host {
                Expr::Ident(id)
            } else {
                str_lit(id.sym, id.span)
            }
        }
        JSXElementName::JSXMemberExpr(member) => member_expr(member),
        JSXElementName::JSXNamespacedName(name) => namespaced(name),
    }
}

/// Object key for an attribute. Keys never get the host-tag treatment.
pub(crate) fn prop_name(name: JSXAttrName) -> PropName {
    match name {
        JSXAttrName::Ident(id) if is_identifier_name(&id.sym) => PropName::Ident(id),
        JSXAttrName::Ident(id) => PropName::Str(Str {
            span: id.span,
            value: id.sym,
            raw: None,
        }),
        JSXAttrName::JSXNamespacedName(name) => PropName::Str(Str {
            span: name.span(),
            value: format!("{}:{}", name.ns.sym, name.name.sym).into(),
            raw: None,
        }),
    }
}

fn namespaced(name: JSXNamespacedName) -> Expr {
    str_lit(format!("{}:{}", name.ns.sym, name.name.sym), name.span())
}

fn member_expr(member: JSXMemberExpr) -> Expr {
    let obj = match member.obj {
        JSXObject::Ident(id) => root_segment(id.sym, id.span),
        JSXObject::JSXMemberExpr(inner) => member_expr(*inner),
    };
    Expr::Member(MemberExpr {
        span: member.span,
        obj: Box::new(obj),
        prop: member_prop(member.prop.sym, member.prop.span),
    })
}

fn root_segment(sym: Atom, span: Span) -> Expr {
    if is_identifier_name(&sym) {
        Expr::Ident(ident(sym, span))
    } else {
        str_lit(sym, span)
    }
}

fn member_prop(sym: Atom, span: Span) -> MemberProp {
    if is_identifier_name(&sym) {
        MemberProp::Ident(IdentName::new(sym, span))
    } else {
        MemberProp::Computed(ComputedPropName {
            span,
            expr: Box::new(str_lit(sym, span)),
        })
    }
}

/// Resolve a dotted path such as `React.createElement` into a member chain.
pub(crate) fn member_path(path: &str, span: Span) -> Expr {
    let mut segments = path.split('.');
    let root = root_segment(segments.next().unwrap_or_default().into(), span);
    segments.fold(root, |obj, segment| {
        Expr::Member(MemberExpr {
            span,
            obj: Box::new(obj),
            prop: member_prop(segment.into(), span),
        })
    })
}
