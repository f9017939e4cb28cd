use std::mem;

use swc_core::{
    common::{util::take::Take, SourceMapper, Span, DUMMY_SP},
    ecma::{
        ast::*,
        visit::{VisitMut, VisitMutWith},
    },
};
use tracing::trace;

use crate::annotations::Settings;
use crate::call::{self, Lowering};
use crate::children::normalize_children;
use crate::error::BuildJsxError;
use crate::imports::{self, ImportNeeds};
use crate::options::Runtime;

/// An element or fragment waiting to be lowered.
pub(crate) enum Markup {
    Element(JSXElement),
    Fragment(JSXFragment),
}

impl Markup {
    fn span(&self) -> Span {
        match self {
            Markup::Element(element) => element.span,
            Markup::Fragment(fragment) => fragment.span,
        }
    }
}

/// Post-order rewrite of markup into calls.
///
/// Every element is replaced as it is left, so a parent only ever sees its
/// children in lowered form. The first failure stops all further lowering.
pub(crate) struct BuildJsx<'a> {
    settings: Settings,
    source_map: Option<&'a dyn SourceMapper>,
    imports: ImportNeeds,
    failure: Option<BuildJsxError>,
}

impl<'a> BuildJsx<'a> {
    pub(crate) fn new(settings: Settings, source_map: Option<&'a dyn SourceMapper>) -> Self {
        Self {
            settings,
            source_map,
            imports: ImportNeeds::default(),
            failure: None,
        }
    }

    /// Inject the helper import once the whole program has been lowered.
    pub(crate) fn finish(self, program: Program) -> Result<Program, BuildJsxError> {
        if let Some(err) = self.failure {
            return Err(err);
        }
        Ok(imports::inject(
            program,
            &self.imports,
            &self.settings.import_source,
        ))
    }

    fn position(&self, span: Span) -> Option<(usize, usize)> {
        if span.is_dummy() {
            return None;
        }
        let loc = self.source_map?.lookup_char_pos(span.lo());
        Some((loc.line, loc.col.0 + 1))
    }

    fn lower(&mut self, markup: Markup) -> Result<Expr, BuildJsxError> {
        let span = markup.span();
        let (element, children) = match markup {
            Markup::Element(element) => (
                Some((element.opening.name, element.opening.attrs)),
                element.children,
            ),
            Markup::Fragment(fragment) => (None, fragment.children),
        };
        let children = normalize_children(children)?;
        trace!(
            fragment = element.is_none(),
            children = children.len(),
            "lowering jsx"
        );

        let lowering = Lowering {
            element,
            children,
            span,
            position: self.position(span),
        };
        match self.settings.runtime {
            Runtime::Classic => Ok(call::classic(&self.settings, lowering)),
            Runtime::Automatic => call::automatic(&self.settings, &mut self.imports, lowering),
        }
    }

    fn replace(&mut self, markup: Markup) -> Expr {
        let span = markup.span();
        self.lower(markup).unwrap_or_else(|err| {
            self.failure = Some(err);
            Expr::Invalid(Invalid { span })
        })
    }
}

fn placeholder_child() -> JSXElementChild {
    JSXElementChild::JSXExprContainer(JSXExprContainer {
        span: DUMMY_SP,
        expr: JSXExpr::JSXEmptyExpr(JSXEmptyExpr { span: DUMMY_SP }),
    })
}

fn lowered_container(span: Span, expr: Expr) -> JSXExprContainer {
    JSXExprContainer {
        span,
        expr: JSXExpr::Expr(Box::new(expr)),
    }
}

impl VisitMut for BuildJsx<'_> {
    fn visit_mut_expr(&mut self, expr: &mut Expr) {
        if self.failure.is_some() {
            return;
        }
        expr.visit_mut_children_with(self);
        if self.failure.is_some() {
            return;
        }

        let markup = match expr {
            Expr::JSXElement(_) | Expr::JSXFragment(_) => match expr.take() {
                Expr::JSXElement(element) => Markup::Element(*element),
                Expr::JSXFragment(fragment) => Markup::Fragment(fragment),
                _ => return,
            },
            _ => return,
        };
        *expr = self.replace(markup);
    }

    fn visit_mut_jsx_element_child(&mut self, child: &mut JSXElementChild) {
        if self.failure.is_some() {
            return;
        }
        child.visit_mut_children_with(self);
        if self.failure.is_some() {
            return;
        }

        let markup = match mem::replace(child, placeholder_child()) {
            JSXElementChild::JSXElement(element) => Markup::Element(*element),
            JSXElementChild::JSXFragment(fragment) => Markup::Fragment(fragment),
            other => {
                *child = other;
                return;
            }
        };
        let span = markup.span();
        let lowered = self.replace(markup);
        *child = JSXElementChild::JSXExprContainer(lowered_container(span, lowered));
    }

    fn visit_mut_jsx_attr_value(&mut self, value: &mut JSXAttrValue) {
        if self.failure.is_some() {
            return;
        }
        value.visit_mut_children_with(self);
        if self.failure.is_some() {
            return;
        }

        let placeholder = JSXAttrValue::Lit(Lit::Null(Null { span: DUMMY_SP }));
        let markup = match mem::replace(value, placeholder) {
            JSXAttrValue::JSXElement(element) => Markup::Element(*element),
            JSXAttrValue::JSXFragment(fragment) => Markup::Fragment(fragment),
            other => {
                *value = other;
                return;
            }
        };
        let span = markup.span();
        let lowered = self.replace(markup);
        *value = JSXAttrValue::JSXExprContainer(lowered_container(span, lowered));
    }
}
