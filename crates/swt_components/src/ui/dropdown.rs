use crate::enums::{ButtonColor, DataToggle, TooltipPlacement};
use crate::tooltip::{self, TooltipSpec};
use crate::ui::{tag_accessors, Button, Link};
use crate::{Attributes, Component, Tag};
use swt_core::{Result, Value};
use swt_templates::TemplateEngine;

const TEMPLATE: &str = "dropdown.html";

/// A toggle button opening a menu of links.
#[derive(Debug, Clone, PartialEq)]
pub struct Dropdown {
    tag: Tag,
    button: Button,
    items: Vec<Link>,
    header: Option<String>,
    tooltip: Option<TooltipSpec>,
}

tag_accessors!(Dropdown);

impl Dropdown {
    pub fn new(content: impl Into<String>, items: Vec<Link>) -> Self {
        let mut button = Button::new(content)
            .additional_classes(["dropdown-toggle"])
            .data_toggle(DataToggle::Dropdown)
            .aria_expanded(false);
        button.attrs_mut().set("aria-haspopup", "true");

        let items = items
            .into_iter()
            .map(|mut item| {
                item.attrs_mut().update("class", ["dropdown-item"]);
                item
            })
            .collect();

        Self {
            tag: Tag::templated(TEMPLATE).with_attr("class", ["dropdown"]),
            button,
            items,
            header: None,
            tooltip: None,
        }
    }

    pub fn color(mut self, color: ButtonColor) -> Self {
        self.button = self.button.color(color);
        self
    }

    /// Heading shown above the items.
    pub fn header(mut self, text: impl Into<String>) -> Self {
        self.header = Some(text.into());
        self
    }

    pub fn tooltip(mut self, title: impl Into<String>, placement: Option<TooltipPlacement>) -> Self {
        self.tooltip = Some(TooltipSpec::new(title, placement));
        self
    }

    pub fn button(&self) -> &Button {
        &self.button
    }

    pub fn items(&self) -> &[Link] {
        &self.items
    }
}

impl Component for Dropdown {
    fn render_with(&self, engine: &TemplateEngine) -> Result<String> {
        let items = self
            .items
            .iter()
            .map(|item| item.render_with(engine).map(Value::String))
            .collect::<Result<Vec<_>>>()?;

        let mut context = self
            .tag
            .template_context()
            .with("button_id", self.button.id())
            .with("items", Value::List(items));
        context.set_safe("button".to_string(), self.button.render_with(engine)?.into());
        if let Some(header) = &self.header {
            context.set("header".to_string(), Value::String(header.clone()));
        }

        let rendered = engine.render(self.tag.require_template()?, &context)?;
        tooltip::wrap(engine, rendered, self.tooltip.as_ref())
    }

    fn needs_perm(&self) -> Option<&str> {
        self.tag.needs_perm.as_deref()
    }

    fn attributes_mut(&mut self) -> Option<&mut Attributes> {
        Some(&mut self.tag.attrs)
    }
}

crate::impl_display!(Dropdown);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::build_engine;
    use crate::SwtConfig;

    fn menu() -> Dropdown {
        Dropdown::new(
            "Actions",
            vec![Link::new("/edit", "Edit"), Link::new("/delete", "Delete")],
        )
    }

    #[test]
    fn test_items_get_dropdown_class_at_construction() {
        for item in menu().items() {
            assert!(item.attributes().contains("class", "dropdown-item"));
        }
    }

    #[test]
    fn test_toggle_button() {
        let dropdown = menu().color(ButtonColor::Info);
        let attrs = dropdown.button().attributes();
        assert_eq!(attrs.first("data-toggle"), Some("dropdown"));
        assert_eq!(attrs.first("aria-haspopup"), Some("true"));
        assert_eq!(attrs.first("aria-expanded"), Some("false"));
        assert_eq!(attrs.get("class").unwrap(), ["btn", "dropdown-toggle", "btn-info"]);
    }

    #[test]
    fn test_render() {
        let engine = build_engine(&SwtConfig::default());
        let dropdown = menu().header("Row <1>");
        let html = dropdown.render_with(&engine).unwrap();

        assert!(html.starts_with(r#"<div class="dropdown"><button"#));
        assert!(html.contains(&format!(
            r#"<div class="dropdown-menu" aria-labelledby="{}">"#,
            dropdown.button().id()
        )));
        assert!(html.contains(r#"<h6 class="dropdown-header">Row &lt;1&gt;</h6>"#));
        assert!(html.contains(r#"<a href="/edit" class="dropdown-item">Edit</a><a href="/delete" class="dropdown-item">Delete</a>"#));
    }
}
