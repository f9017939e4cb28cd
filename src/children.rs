use once_cell::sync::Lazy;
use regex::Regex;
use swc_core::{
    common::Spanned,
    ecma::ast::{Expr, JSXElementChild, JSXExpr},
};

use crate::error::BuildJsxError;
use crate::names::str_lit;

static AROUND_LINE_ENDING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" *(?:\r\n|\r|\n) *").expect("line ending regex should compile"));
static LINE_FEEDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n+").expect("line feed regex should compile"));

/// Collapse JSX text the way it renders.
///
/// Tabs become spaces, spaces around line endings are dropped, runs of line
/// endings collapse, trailing line endings go away and whatever line endings
/// remain turn into single spaces.
pub fn normalize_text(text: &str) -> String {
    let text = text.replace('\t', " ");
    let text = AROUND_LINE_ENDING.replace_all(&text, "\n");
    let text = LINE_FEEDS.replace_all(&text, "\n");
    text.trim_end_matches('\n').replace('\n', " ")
}

/// Children as call arguments, with empty expressions and blank text removed.
pub(crate) fn normalize_children(
    children: Vec<JSXElementChild>,
) -> Result<Vec<Expr>, BuildJsxError> {
    let mut out = Vec::with_capacity(children.len());
    for child in children {
        match child {
            JSXElementChild::JSXText(text) => {
                let value = normalize_text(&text.value);
                if !value.is_empty() {
                    out.push(str_lit(value, text.span));
                }
            }
            JSXElementChild::JSXExprContainer(container) => match container.expr {
                JSXExpr::JSXEmptyExpr(_) => {}
                JSXExpr::Expr(expr) => out.push(*expr),
            },
            JSXElementChild::JSXSpreadChild(spread) => {
                return Err(BuildJsxError::SpreadChild {
                    span: spread.span(),
                })
            }
            // Nested markup is lowered by the driver before its parent is left.
            JSXElementChild::JSXElement(element) => out.push(Expr::JSXElement(element)),
            JSXElementChild::JSXFragment(fragment) => out.push(Expr::JSXFragment(fragment)),
        }
    }
    Ok(out)
}
