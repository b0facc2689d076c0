//! Tooltips and the decorator that wraps rendered components in one

use crate::enums::TooltipPlacement;
use crate::Component;
use swt_core::{Context, Result};
use swt_templates::TemplateEngine;

const TEMPLATE: &str = "tooltip.html";

/// Tooltip settings carried by tooltip-capable components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipSpec {
    pub title: String,
    pub placement: Option<TooltipPlacement>,
}

impl TooltipSpec {
    pub fn new(title: impl Into<String>, placement: Option<TooltipPlacement>) -> Self {
        Self {
            title: title.into(),
            placement,
        }
    }
}

/// Markup surrounded by a tooltip-bearing wrapper.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub spec: TooltipSpec,
    pub surrounded: String,
}

impl Tooltip {
    pub fn new(
        title: impl Into<String>,
        surrounded: impl Into<String>,
        placement: Option<TooltipPlacement>,
    ) -> Self {
        Self {
            spec: TooltipSpec::new(title, placement),
            surrounded: surrounded.into(),
        }
    }
}

impl Component for Tooltip {
    fn render_with(&self, engine: &TemplateEngine) -> Result<String> {
        let mut context = Context::new()
            .with("title", self.spec.title.as_str())
            .with_safe("surrounded_component", self.surrounded.as_str());
        if let Some(placement) = self.spec.placement {
            context = context.with("placement", placement.as_str());
        }
        engine.render(TEMPLATE, &context)
    }
}

/// Wrap already-rendered markup in a tooltip when one is configured.
pub fn wrap(engine: &TemplateEngine, rendered: String, tooltip: Option<&TooltipSpec>) -> Result<String> {
    match tooltip {
        None => Ok(rendered),
        Some(spec) => Tooltip {
            spec: spec.clone(),
            surrounded: rendered,
        }
        .render_with(engine),
    }
}
