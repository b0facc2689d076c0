//! Cards: header, body, footer and the card that holds them

use crate::enums::{BackgroundColor, BorderColor, TextColor};
use crate::tag::new_dom_id;
use crate::ui::tag_accessors;
use crate::{Attributes, Component, Tag};
use swt_core::{Context, Result};
use swt_templates::TemplateEngine;

const SPINNER_TEMPLATE: &str = "includes/ajax_loading_spinner.html";
const ERROR_TEMPLATE: &str = "includes/ajax_error.html";

/// Loading spinner followed by the hidden error placeholder shown while
/// content is fetched from a `data-url`.
pub(crate) fn fetch_placeholder(engine: &TemplateEngine) -> Result<String> {
    let context = Context::new();
    let mut markup = engine.render(SPINNER_TEMPLATE, &context)?;
    markup.push_str(&engine.render(ERROR_TEMPLATE, &context)?);
    Ok(markup)
}

/// Color setters shared by the card parts.
macro_rules! card_colors {
    ($ty:ty, $tag:ident) => {
        impl $ty {
            pub fn bg_color(mut self, color: BackgroundColor) -> Self {
                self.$tag.update_attribute("class", [color.as_str()]);
                self
            }

            pub fn text_color(mut self, color: TextColor) -> Self {
                self.$tag.update_attribute("class", [color.as_str()]);
                self
            }

            pub fn border_color(mut self, color: BorderColor) -> Self {
                self.$tag.update_attribute("class", ["border", color.as_str()]);
                self
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardHeader {
    pub(crate) tag: Tag,
    id: String,
}

tag_accessors!(CardHeader);
card_colors!(CardHeader, tag);

impl CardHeader {
    pub fn new(content: impl Into<String>) -> Self {
        let id = new_dom_id();
        Self {
            tag: Tag::new("div")
                .with_attr("class", ["card-header"])
                .with_attr("id", [id.as_str()])
                .with_content(content),
            id,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Component for CardHeader {
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

/// Card body: an outer element carrying the id and the collapse wiring,
/// around the `card-body` element holding the content.
#[derive(Debug, Clone, PartialEq)]
pub struct CardBody {
    tag: Tag,
    body: Tag,
    id: String,
    fetch_url: Option<String>,
}

tag_accessors!(CardBody);
card_colors!(CardBody, body);

impl CardBody {
    pub fn new(content: impl Into<String>) -> Self {
        let id = new_dom_id();
        Self {
            tag: Tag::new("div").with_attr("id", [id.as_str()]),
            body: Tag::new("div")
                .with_attr("class", ["card-body"])
                .with_content(content),
            id,
            fetch_url: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Load the content from `url` when shown; until then the body holds a
    /// loading spinner and a hidden error message.
    pub fn fetch_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.tag.attrs.set("data-url", url.as_str());
        self.fetch_url = Some(url);
        self
    }

    /// Id of the parent whose other children collapse when this opens.
    pub fn data_parent(mut self, id: impl Into<String>) -> Self {
        self.tag.attrs.set("data-parent", id);
        self
    }

    pub fn aria_labelledby(mut self, id: impl Into<String>) -> Self {
        self.tag.attrs.set("aria-labelledby", id);
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
}

impl Component for CardBody {
    fn render_with(&self, engine: &TemplateEngine) -> Result<String> {
        let body = match &self.fetch_url {
            Some(_) => self.body.to_html_with_content(&fetch_placeholder(engine)?),
            None => self.body.to_html(),
        };
        Ok(self.tag.to_html_with_content(&body))
    }

    fn needs_perm(&self) -> Option<&str> {
        self.tag.needs_perm.as_deref()
    }

    fn attributes_mut(&mut self) -> Option<&mut Attributes> {
        Some(&mut self.tag.attrs)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardFooter {
    tag: Tag,
}

tag_accessors!(CardFooter);
card_colors!(CardFooter, tag);

impl CardFooter {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            tag: Tag::new("div")
                .with_attr("class", ["card-footer"])
                .with_content(content),
        }
    }
}

impl Component for CardFooter {
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

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    tag: Tag,
    header: Option<CardHeader>,
    body: CardBody,
    footer: Option<CardFooter>,
}

tag_accessors!(Card);
card_colors!(Card, tag);

impl Card {
    pub fn new(body: CardBody) -> Self {
        Self {
            tag: Tag::new("div").with_attr("class", ["card"]),
            header: None,
            body,
            footer: None,
        }
    }

    pub fn header(mut self, header: CardHeader) -> Self {
        self.header = Some(header);
        self
    }

    pub fn footer(mut self, footer: CardFooter) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn body(&self) -> &CardBody {
        &self.body
    }
}

impl Component for Card {
    fn render_with(&self, engine: &TemplateEngine) -> Result<String> {
        let mut content = String::new();
        if let Some(header) = &self.header {
            content.push_str(&header.render_with(engine)?);
        }
        content.push_str(&self.body.render_with(engine)?);
        if let Some(footer) = &self.footer {
            content.push_str(&footer.render_with(engine)?);
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

crate::impl_display!(CardHeader, CardBody, CardFooter, Card);
