use crate::enums::AlertColor;
use crate::ui::tag_accessors;
use crate::{Attributes, Component, Tag};
use swt_core::Result;
use swt_templates::TemplateEngine;

const CLOSE_BUTTON: &str = r#"<button type="button" class="close" data-dismiss="alert" aria-label="Close"><span aria-hidden="true">&times;</span></button>"#;

/// `<div class="alert ..." role="alert">`
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    tag: Tag,
    dismissible: bool,
}

tag_accessors!(Alert);

impl Alert {
    pub fn new(content: impl Into<String>, color: AlertColor) -> Self {
        Self {
            tag: Tag::new("div")
                .with_attr("class", ["alert", color.as_str()])
                .with_attr("role", ["alert"])
                .with_content(content),
            dismissible: false,
        }
    }

    /// Add a close button; the alert fades out when dismissed.
    pub fn dismissible(mut self) -> Self {
        self.tag
            .update_attribute("class", ["alert-dismissible", "fade", "show"]);
        self.dismissible = true;
        self
    }
}

impl Component for Alert {
    fn render_with(&self, _engine: &TemplateEngine) -> Result<String> {
        if !self.dismissible {
            return Ok(self.tag.to_html());
        }
        let content = format!("{}{}", self.tag.content, CLOSE_BUTTON);
        Ok(self.tag.to_html_with_content(&content))
    }

    fn needs_perm(&self) -> Option<&str> {
        self.tag.needs_perm.as_deref()
    }

    fn attributes_mut(&mut self) -> Option<&mut Attributes> {
        Some(&mut self.tag.attrs)
    }
}

crate::impl_display!(Alert);
