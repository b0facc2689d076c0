//! Modal dialogs and the button that opens them

use crate::enums::{ButtonColor, ButtonSize, DataToggle, ModalSize, TooltipPlacement};
use crate::tag::new_dom_id;
use crate::ui::card::fetch_placeholder;
use crate::ui::{tag_accessors, Button};
use crate::{Attributes, Component, Tag};
use swt_core::{Context, Result};
use swt_templates::filters::html_escape;
use swt_templates::TemplateEngine;

const TEMPLATE: &str = "modal.html";

const CLOSE_BUTTON: &str = r#"<button type="button" class="close" data-dismiss="modal" aria-label="Close"><span aria-hidden="true">&times;</span></button>"#;

/// A modal section given either as plain markup or as a built part.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalPart<T> {
    Raw(String),
    Built(T),
}

impl<T> From<&str> for ModalPart<T> {
    fn from(markup: &str) -> Self {
        ModalPart::Raw(markup.to_string())
    }
}

impl<T> From<String> for ModalPart<T> {
    fn from(markup: String) -> Self {
        ModalPart::Raw(markup)
    }
}

macro_rules! built_part {
    ($($ty:ty),+) => {$(
        impl From<$ty> for ModalPart<$ty> {
            fn from(part: $ty) -> Self {
                ModalPart::Built(part)
            }
        }
    )+};
}

built_part!(ModalHeader, ModalBody, ModalFooter);

impl<T> ModalPart<T> {
    fn build(self, from_raw: impl FnOnce(String) -> T) -> T {
        match self {
            ModalPart::Raw(markup) => from_raw(markup),
            ModalPart::Built(part) => part,
        }
    }
}

/// `<div class="modal-header">` with a title and a close button.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalHeader {
    tag: Tag,
}

tag_accessors!(ModalHeader);

impl ModalHeader {
    /// `title` is trusted markup.
    pub fn new(title: impl Into<String>) -> Self {
        let content = format!(r#"<h5 class="modal-title">{}</h5>{CLOSE_BUTTON}"#, title.into());
        Self {
            tag: Tag::new("div")
                .with_attr("class", ["modal-header"])
                .with_content(content),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalBody {
    tag: Tag,
}

tag_accessors!(ModalBody);

impl ModalBody {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            tag: Tag::new("div")
                .with_attr("class", ["modal-body"])
                .with_content(content),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalFooter {
    tag: Tag,
}

tag_accessors!(ModalFooter);

impl ModalFooter {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            tag: Tag::new("div")
                .with_attr("class", ["modal-footer"])
                .with_content(content),
        }
    }

    /// A footer with a single button closing the modal.
    pub fn close_button(label: &str) -> Self {
        Self::new(format!(
            r#"<button type="button" class="btn btn-secondary" data-dismiss="modal">{}</button>"#,
            html_escape(label)
        ))
    }
}

macro_rules! simple_part {
    ($($ty:ty),+) => {$(
        impl Component for $ty {
            fn render_with(&self, _engine: &TemplateEngine) -> Result<String> {
                Ok(self.tag.to_html())
            }

            fn needs_perm(&self) -> Option<&str> {
                self.tag.needs_perm.as_deref()
            }

            fn attributes_mut(&mut self) -> Option<&mut Attributes> {
                Some(&mut self.tag.attrs)
            }
        }
    )+};
}

simple_part!(ModalHeader, ModalBody, ModalFooter);

/// A modal dialog together with the button that opens it.
///
/// The modal itself has no attributes a render helper could change; those
/// updates go to the toggle button.
#[derive(Debug, Clone, PartialEq)]
pub struct Modal {
    id: String,
    header: ModalHeader,
    body: ModalBody,
    footer: Option<ModalFooter>,
    button: Button,
    fade: bool,
    size: Option<ModalSize>,
    fetch_url: Option<String>,
    needs_perm: Option<String>,
}

impl Modal {
    pub fn new(
        header: impl Into<ModalPart<ModalHeader>>,
        body: impl Into<ModalPart<ModalBody>>,
        button_content: impl Into<String>,
    ) -> Self {
        let id = new_dom_id();
        let button = Button::new(button_content)
            .data_toggle(DataToggle::Modal)
            .data_target(id.as_str());
        Self {
            header: header.into().build(ModalHeader::new),
            body: body.into().build(ModalBody::new),
            footer: None,
            button,
            fade: true,
            size: None,
            fetch_url: None,
            needs_perm: None,
            id,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn footer(mut self, footer: impl Into<ModalPart<ModalFooter>>) -> Self {
        self.footer = Some(footer.into().build(ModalFooter::new));
        self
    }

    pub fn fade(mut self, fade: bool) -> Self {
        self.fade = fade;
        self
    }

    pub fn size(mut self, size: ModalSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Load the body from `url` when the modal opens.
    pub fn fetch_url(mut self, url: impl Into<String>) -> Self {
        self.fetch_url = Some(url.into());
        self
    }

    pub fn button_color(mut self, color: ButtonColor) -> Self {
        self.button = self.button.color(color);
        self
    }

    pub fn button_size(mut self, size: ButtonSize) -> Self {
        self.button = self.button.size(size);
        self
    }

    pub fn button_tooltip(mut self, title: impl Into<String>, placement: Option<TooltipPlacement>) -> Self {
        self.button = self.button.tooltip(title, placement);
        self
    }

    pub fn with_needs_perm(mut self, perm: impl Into<String>) -> Self {
        self.needs_perm = Some(perm.into());
        self
    }

    pub fn button(&self) -> &Button {
        &self.button
    }

    pub fn button_mut(&mut self) -> &mut Button {
        &mut self.button
    }
}

impl Component for Modal {
    fn render_with(&self, engine: &TemplateEngine) -> Result<String> {
        let body = match &self.fetch_url {
            Some(_) => self.body.tag.to_html_with_content(&fetch_placeholder(engine)?),
            None => self.body.render_with(engine)?,
        };
        let footer = match &self.footer {
            Some(footer) => footer.render_with(engine)?,
            None => String::new(),
        };

        let mut context = Context::new()
            .with("modal_id", self.id.as_str())
            .with("fade", self.fade)
            .with_safe("button", self.button.render_with(engine)?)
            .with_safe("header", self.header.render_with(engine)?)
            .with_safe("body", body)
            .with_safe("footer", footer);
        if let Some(size) = self.size {
            context = context.with("size", size.as_str());
        }
        if let Some(url) = &self.fetch_url {
            context = context.with("fetch_url", url.as_str());
        }
        engine.render(TEMPLATE, &context)
    }

    fn needs_perm(&self) -> Option<&str> {
        self.needs_perm.as_deref()
    }

    fn attribute_target_mut(&mut self) -> Option<&mut Attributes> {
        Some(self.button.attrs_mut())
    }
}

crate::impl_display!(ModalHeader, ModalBody, ModalFooter, Modal);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::build_engine;
    use crate::SwtConfig;

    #[test]
    fn test_raw_and_built_parts_render_alike() {
        let engine = build_engine(&SwtConfig::default());
        let raw = Modal::new("Title", "Body", "Open");
        let built = Modal::new(ModalHeader::new("Title"), ModalBody::new("Body"), "Open");

        let strip_ids = |m: &Modal| {
            m.render_with(&engine)
                .unwrap()
                .replace(m.id(), "MODAL")
                .replace(m.button().id(), "BUTTON")
        };
        assert_eq!(strip_ids(&raw), strip_ids(&built));
    }

    #[test]
    fn test_button_targets_modal() {
        let engine = build_engine(&SwtConfig::default());
        let modal = Modal::new("Delete?", "Sure?", "Delete")
            .footer(ModalFooter::close_button("Cancel"))
            .size(ModalSize::Small)
            .button_color(ButtonColor::Danger);
        let html = modal.render_with(&engine).unwrap();

        assert_eq!(modal.button().attributes().first("data-target"), Some(modal.id()));
        assert!(html.contains(&format!(r##"data-target="#{}""##, modal.id())));
        assert!(html.contains(r#"data-toggle="modal""#));
        assert!(html.contains(&format!(r#"<div class="modal fade" id="{}""#, modal.id())));
        assert!(html.contains(r#"<div class="modal-dialog modal-sm""#));
        assert!(html.contains(r#"<h5 class="modal-title">Delete?</h5>"#));
        assert!(html.contains(r#"<div class="modal-footer">"#));
    }

    #[test]
    fn test_fetch_url_body_placeholder() {
        let engine = build_engine(&SwtConfig::default());
        let html = Modal::new("T", "static", "Open")
            .fade(false)
            .fetch_url("/detail/1")
            .render_with(&engine)
            .unwrap();

        assert!(html.contains(r#"<div class="modal" id="#));
        assert!(html.contains(r#"data-url="/detail/1""#));
        assert!(html.contains("ajax-loading-spinner"));
        assert!(!html.contains("static"));
    }

    #[test]
    fn test_attribute_target_is_button() {
        let mut modal = Modal::new("T", "B", "Open");
        modal
            .attribute_target_mut()
            .unwrap()
            .update("class", ["btn-block"]);
        assert!(modal.button().attributes().contains("class", "btn-block"));
        assert!(modal.attributes_mut().is_none());
    }
}
