use crate::enums::{BadgeColor, TooltipPlacement};
use crate::tooltip::{self, TooltipSpec};
use crate::ui::tag_accessors;
use crate::{Attributes, Component, Tag};
use swt_core::Result;
use swt_templates::TemplateEngine;

/// `<span class="badge ...">`
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    tag: Tag,
    color: Option<BadgeColor>,
    tooltip: Option<TooltipSpec>,
}

tag_accessors!(Badge);

impl Badge {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            tag: Tag::new("span")
                .with_attr("class", ["badge"])
                .with_content(content),
            color: None,
            tooltip: None,
        }
    }

    pub fn color(mut self, color: BadgeColor) -> Self {
        let old = self.color.replace(color);
        self.tag
            .attrs
            .replace_value("class", old.map(|c| c.as_str()), color.as_str());
        self
    }

    pub fn pill(mut self) -> Self {
        self.tag.update_attribute("class", ["badge-pill"]);
        self
    }

    pub fn tooltip(mut self, title: impl Into<String>, placement: Option<TooltipPlacement>) -> Self {
        self.tooltip = Some(TooltipSpec::new(title, placement));
        self
    }
}

impl Component for Badge {
    fn render_with(&self, engine: &TemplateEngine) -> Result<String> {
        tooltip::wrap(engine, self.tag.to_html(), self.tooltip.as_ref())
    }

    fn needs_perm(&self) -> Option<&str> {
        self.tag.needs_perm.as_deref()
    }

    fn attributes_mut(&mut self) -> Option<&mut Attributes> {
        Some(&mut self.tag.attrs)
    }
}

crate::impl_display!(Badge);
