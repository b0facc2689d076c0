//! A single collapsible card whose header toggles the body

use crate::enums::{BackgroundColor, Breakpoint, DataToggle, TextColor};
use crate::tag::new_dom_id;
use crate::ui::{tag_accessors, Button, CardBody, CardHeader, Cell, Row};
use crate::{Attributes, Component, Tag};
use swt_core::Result;
use swt_templates::TemplateEngine;

const TEMPLATE: &str = "accordion.html";

/// Collapsible card. The header holds the toggle button and two optional
/// columns; the body is collapsed until the button is pressed.
#[derive(Debug, Clone, PartialEq)]
pub struct Accordion {
    tag: Tag,
    id: String,
    button: Button,
    header: CardHeader,
    body: CardBody,
    header_center: Option<String>,
    header_right: Option<String>,
}

tag_accessors!(Accordion);

impl Accordion {
    /// `button_content` and `content` are trusted markup.
    pub fn new(button_content: &str, content: impl Into<String>) -> Self {
        Self::build(button_content, CardBody::new(content))
    }

    /// Accordion whose body is fetched from `url` when first opened.
    pub fn fetched(button_content: &str, url: impl Into<String>) -> Self {
        Self::build(button_content, CardBody::new("").fetch_url(url))
    }

    fn build(button_content: &str, body: CardBody) -> Self {
        let id = new_dom_id();
        let header = CardHeader::new("");
        let body = body
            .additional_classes(["collapse"])
            .data_parent(id.as_str())
            .aria_labelledby(header.id());
        let button = Button::new(format!(
            r#"<i class="fa" aria-hidden="true"></i> {button_content}"#
        ))
        .data_toggle(DataToggle::Collapse)
        .data_target(body.id())
        .additional_classes(["collapsed", "accordion", "text-left"])
        .aria_expanded(false)
        .aria_controls(body.id());

        Self {
            tag: Tag::templated(TEMPLATE)
                .with_attr("id", [id.as_str()])
                .with_attr("class", ["accordion"]),
            id,
            button,
            header,
            body,
            header_center: None,
            header_right: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn header(&self) -> &CardHeader {
        &self.header
    }

    pub fn body(&self) -> &CardBody {
        &self.body
    }

    pub fn button(&self) -> &Button {
        &self.button
    }

    pub fn header_center(mut self, markup: impl Into<String>) -> Self {
        self.header_center = Some(markup.into());
        self
    }

    pub fn header_right(mut self, markup: impl Into<String>) -> Self {
        self.header_right = Some(markup.into());
        self
    }

    pub fn header_bg_color(mut self, color: BackgroundColor) -> Self {
        self.header = self.header.bg_color(color);
        self
    }

    pub fn header_text_color(mut self, color: TextColor) -> Self {
        self.header = self.header.text_color(color);
        self
    }

    pub fn body_bg_color(mut self, color: BackgroundColor) -> Self {
        self.body = self.body.bg_color(color);
        self
    }

    pub fn body_text_color(mut self, color: TextColor) -> Self {
        self.body = self.body.text_color(color);
        self
    }

    fn header_row(&self, engine: &TemplateEngine) -> Result<String> {
        let column = |width: u8, align: &str, content: String| {
            Cell::new(content)
                .span(width, Some(Breakpoint::Small))
                .additional_classes([align])
        };
        Row::new(vec![
            column(6, "text-left", self.button.render_with(engine)?),
            column(3, "text-center", self.header_center.clone().unwrap_or_default()),
            column(3, "text-right", self.header_right.clone().unwrap_or_default()),
        ])
        .render_with(engine)
    }
}

impl Component for Accordion {
    fn render_with(&self, engine: &TemplateEngine) -> Result<String> {
        let header = self
            .header
            .tag
            .to_html_with_content(&self.header_row(engine)?);
        let card = Tag::new("div")
            .with_attr("class", ["card"])
            .with_content(header + &self.body.render_with(engine)?);

        let mut context = self.tag.template_context();
        context.set_safe("content".to_string(), card.to_html().into());
        engine.render(self.tag.require_template()?, &context)
    }

    fn needs_perm(&self) -> Option<&str> {
        self.tag.needs_perm.as_deref()
    }

    fn attributes_mut(&mut self) -> Option<&mut Attributes> {
        Some(&mut self.tag.attrs)
    }
}

crate::impl_display!(Accordion);
