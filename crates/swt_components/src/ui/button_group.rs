use crate::ui::{tag_accessors, Button, LinkButton};
use crate::{Attributes, Component, Tag};
use swt_core::Result;
use swt_templates::TemplateEngine;

/// Either kind of button a group can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupButton {
    Button(Button),
    Link(LinkButton),
}

impl From<Button> for GroupButton {
    fn from(button: Button) -> Self {
        GroupButton::Button(button)
    }
}

impl From<LinkButton> for GroupButton {
    fn from(button: LinkButton) -> Self {
        GroupButton::Link(button)
    }
}

impl Component for GroupButton {
    fn render_with(&self, engine: &TemplateEngine) -> Result<String> {
        match self {
            GroupButton::Button(b) => b.render_with(engine),
            GroupButton::Link(b) => b.render_with(engine),
        }
    }

    fn needs_perm(&self) -> Option<&str> {
        match self {
            GroupButton::Button(b) => b.needs_perm(),
            GroupButton::Link(b) => b.needs_perm(),
        }
    }

    fn attributes_mut(&mut self) -> Option<&mut Attributes> {
        match self {
            GroupButton::Button(b) => b.attributes_mut(),
            GroupButton::Link(b) => b.attributes_mut(),
        }
    }

    fn url_attribute(&self) -> Option<&'static str> {
        match self {
            GroupButton::Button(b) => b.url_attribute(),
            GroupButton::Link(b) => b.url_attribute(),
        }
    }
}

/// `<div class="btn-group" role="group">`
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonGroup {
    tag: Tag,
    buttons: Vec<GroupButton>,
}

tag_accessors!(ButtonGroup);

impl ButtonGroup {
    pub fn new<I, B>(aria_label: &str, buttons: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<GroupButton>,
    {
        Self {
            tag: Tag::new("div")
                .with_attr("class", ["btn-group"])
                .with_attr("role", ["group"])
                .with_attr("aria-label", [aria_label]),
            buttons: buttons.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push(&mut self, button: impl Into<GroupButton>) {
        self.buttons.push(button.into());
    }

    pub fn buttons(&self) -> &[GroupButton] {
        &self.buttons
    }
}

impl Component for ButtonGroup {
    fn render_with(&self, engine: &TemplateEngine) -> Result<String> {
        let mut content = String::new();
        for button in &self.buttons {
            content.push_str(&button.render_with(engine)?);
        }
        Ok(self.tag.to_html_with_content(&content))
    }

    fn needs_perm(&self) -> Option<&str> {
        self.tag.needs_perm.as_deref()
    }

    fn attributes_mut(&mut self) -> Option<&mut Attributes> {
        Some(&mut self.tag.attrs)
    }
}

crate::impl_display!(GroupButton, ButtonGroup);
