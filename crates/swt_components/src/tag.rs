//! The generic HTML element every component is built from

use crate::attributes::Attributes;
use crate::Component;
use swt_core::{Context, Result, SwtError};
use swt_templates::TemplateEngine;
use uuid::Uuid;

/// Elements serialized without content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Fresh DOM id of the form `id_<uuid4>`.
pub fn new_dom_id() -> String {
    format!("id_{}", Uuid::new_v4())
}

/// An HTML element: name, attributes, trusted inner markup and an optional
/// permission gate.
///
/// A tag with an empty name is rendered through `template_name` instead of
/// being serialized directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tag {
    pub tag: String,
    pub attrs: Attributes,
    pub content: String,
    pub needs_perm: Option<String>,
    pub template_name: Option<String>,
}

impl Tag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// A tag rendered by the named template instead of direct serialization.
    pub fn templated(template_name: impl Into<String>) -> Self {
        Self {
            template_name: Some(template_name.into()),
            ..Default::default()
        }
    }

    pub fn with_attr<I, V>(mut self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.attrs.update(name, values);
        self
    }

    /// Trusted inner markup; it is emitted verbatim.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_needs_perm(mut self, perm: impl Into<String>) -> Self {
        self.needs_perm = Some(perm.into());
        self
    }

    pub fn update_attribute<I, V>(&mut self, name: &str, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.attrs.update(name, values);
    }

    pub fn update_attributes<I, K, V, S>(&mut self, mapping: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attrs.update_all(mapping);
    }

    pub fn push_content(&mut self, markup: &str) {
        self.content.push_str(markup);
    }

    pub fn id(&self) -> Option<&str> {
        self.attrs.first("id")
    }

    /// Serialize as `<tag attrs>content</tag>`.
    pub fn to_html(&self) -> String {
        self.to_html_with_content(&self.content)
    }

    /// Serialize with `content` in place of the stored content.
    pub fn to_html_with_content(&self, content: &str) -> String {
        let attrs = self.attrs.to_html();
        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return format!("<{}{}>", self.tag, attrs);
        }
        format!("<{tag}{attrs}>{content}</{tag}>", tag = self.tag)
    }

    /// Base context handed to templates: `tag`, the serialized `attrs` and
    /// the `content` markup, both marked safe.
    pub fn template_context(&self) -> Context {
        Context::new()
            .with("tag", self.tag.as_str())
            .with_safe("attrs", self.attrs.to_html())
            .with_safe("content", self.content.as_str())
    }

    pub(crate) fn require_template(&self) -> Result<&str> {
        self.template_name.as_deref().ok_or_else(|| {
            SwtError::TemplateError("tag has neither an element name nor a template".to_string())
        })
    }
}

impl Component for Tag {
    fn render_with(&self, engine: &TemplateEngine) -> Result<String> {
        if !self.tag.is_empty() {
            return Ok(self.to_html());
        }
        let template = self.require_template()?;
        engine.render(template, &self.template_context())
    }

    fn needs_perm(&self) -> Option<&str> {
        self.needs_perm.as_deref()
    }

    fn attributes_mut(&mut self) -> Option<&mut Attributes> {
        Some(&mut self.attrs)
    }

    fn url_attribute(&self) -> Option<&'static str> {
        (self.tag == "a").then_some("href")
    }
}
