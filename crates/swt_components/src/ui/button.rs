use crate::enums::{ButtonColor, ButtonSize, DataToggle, TooltipPlacement};
use crate::tag::new_dom_id;
use crate::tooltip::{self, TooltipSpec};
use crate::ui::tag_accessors;
use crate::{Attributes, Component, Tag};
use swt_core::Result;
use swt_templates::TemplateEngine;

/// `<button type="button" class="btn ...">` with a generated id.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    tag: Tag,
    id: String,
    color: Option<ButtonColor>,
    size: Option<ButtonSize>,
    tooltip: Option<TooltipSpec>,
}

tag_accessors!(Button);

impl Button {
    pub fn new(content: impl Into<String>) -> Self {
        let id = new_dom_id();
        Self {
            tag: Tag::new("button")
                .with_attr("type", ["button"])
                .with_attr("id", [id.as_str()])
                .with_attr("class", ["btn"])
                .with_content(content),
            id,
            color: None,
            size: None,
            tooltip: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn color(mut self, color: ButtonColor) -> Self {
        let old = self.color.replace(color);
        self.tag
            .attrs
            .replace_value("class", old.map(|c| c.as_str()), color.as_str());
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        let old = self.size.replace(size);
        self.tag
            .attrs
            .replace_value("class", old.map(|s| s.as_str()), size.as_str());
        self
    }

    pub fn data_toggle(mut self, toggle: DataToggle) -> Self {
        self.tag.attrs.set("data-toggle", toggle.as_str());
        self
    }

    /// Id of the element the button controls; written as `#id` in markup.
    pub fn data_target(mut self, id: impl Into<String>) -> Self {
        self.tag.attrs.set("data-target", id);
        self
    }

    pub fn aria_expanded(mut self, expanded: bool) -> Self {
        self.tag
            .attrs
            .set("aria-expanded", if expanded { "true" } else { "false" });
        self
    }

    pub fn aria_controls(mut self, id: impl Into<String>) -> Self {
        self.tag.attrs.set("aria-controls", id);
        self
    }

    pub fn additional_classes<I, V>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.tag.update_attribute("class", classes);
        self
    }

    pub fn tooltip(mut self, title: impl Into<String>, placement: Option<TooltipPlacement>) -> Self {
        self.tooltip = Some(TooltipSpec::new(title, placement));
        self
    }

    pub(crate) fn attrs_mut(&mut self) -> &mut Attributes {
        &mut self.tag.attrs
    }
}

impl Component for Button {
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

crate::impl_display!(Button);
