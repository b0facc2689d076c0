use crate::enums::{ButtonColor, ButtonSize, TextColor, TooltipPlacement};
use crate::tooltip::{self, TooltipSpec};
use crate::ui::tag_accessors;
use crate::{Attributes, Component, Tag};
use swt_core::Result;
use swt_templates::TemplateEngine;

/// `<a href="...">`
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    tag: Tag,
    color: Option<TextColor>,
    tooltip: Option<TooltipSpec>,
}

tag_accessors!(Link);

impl Link {
    pub fn new(url: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tag: Tag::new("a").with_attr("href", [url]).with_content(content),
            color: None,
            tooltip: None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.tag.attrs.first("href")
    }

    pub fn color(mut self, color: TextColor) -> Self {
        let old = self.color.replace(color);
        self.tag
            .attrs
            .replace_value("class", old.map(|c| c.as_str()), color.as_str());
        self
    }

    pub fn open_in_new_tab(mut self) -> Self {
        self.tag.attrs.set("target", "_blank");
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

impl Component for Link {
    fn render_with(&self, engine: &TemplateEngine) -> Result<String> {
        tooltip::wrap(engine, self.tag.to_html(), self.tooltip.as_ref())
    }

    fn needs_perm(&self) -> Option<&str> {
        self.tag.needs_perm.as_deref()
    }

    fn attributes_mut(&mut self) -> Option<&mut Attributes> {
        Some(&mut self.tag.attrs)
    }

    fn url_attribute(&self) -> Option<&'static str> {
        Some("href")
    }
}

/// A link styled as a button: `<a class="btn ..." role="button">`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkButton {
    tag: Tag,
    size: Option<ButtonSize>,
    tooltip: Option<TooltipSpec>,
}

tag_accessors!(LinkButton);

impl LinkButton {
    pub fn new(url: impl Into<String>, content: impl Into<String>, color: ButtonColor) -> Self {
        Self {
            tag: Tag::new("a")
                .with_attr("href", [url])
                .with_attr("class", ["btn", color.as_str()])
                .with_attr("role", ["button"])
                .with_content(content),
            size: None,
            tooltip: None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.tag.attrs.first("href")
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        let old = self.size.replace(size);
        self.tag
            .attrs
            .replace_value("class", old.map(|s| s.as_str()), size.as_str());
        self
    }

    pub fn tooltip(mut self, title: impl Into<String>, placement: Option<TooltipPlacement>) -> Self {
        self.tooltip = Some(TooltipSpec::new(title, placement));
        self
    }
}

impl Component for LinkButton {
    fn render_with(&self, engine: &TemplateEngine) -> Result<String> {
        tooltip::wrap(engine, self.tag.to_html(), self.tooltip.as_ref())
    }

    fn needs_perm(&self) -> Option<&str> {
        self.tag.needs_perm.as_deref()
    }

    fn attributes_mut(&mut self) -> Option<&mut Attributes> {
        Some(&mut self.tag.attrs)
    }

    fn url_attribute(&self) -> Option<&'static str> {
        Some("href")
    }
}

crate::impl_display!(Link, LinkButton);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link() {
        let link = Link::new("/users/?page=2", "Users")
            .color(TextColor::Muted)
            .open_in_new_tab();
        assert_eq!(
            link.tag().to_html(),
            r#"<a href="/users/?page=2" class="text-muted" target="_blank">Users</a>"#
        );
        assert_eq!(link.url(), Some("/users/?page=2"));
    }

    #[test]
    fn test_href_is_escaped() {
        let link = Link::new("/a?x=1&y=\"2\"", "A");
        assert_eq!(
            link.tag().to_html(),
            r#"<a href="/a?x=1&amp;y=&quot;2&quot;">A</a>"#
        );
    }

    #[test]
    fn test_link_button() {
        let button = LinkButton::new("/new", "Create", ButtonColor::Success).size(ButtonSize::Large);
        assert_eq!(
            button.tag().to_html(),
            r#"<a href="/new" class="btn btn-success btn-lg" role="button">Create</a>"#
        );
    }
}
