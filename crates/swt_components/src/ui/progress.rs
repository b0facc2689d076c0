use crate::enums::ProgressColor;
use crate::ui::tag_accessors;
use crate::{Attributes, Component, Tag};
use swt_core::Result;
use swt_templates::TemplateEngine;

/// `<div class="progress">` holding a single bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    tag: Tag,
    progress: u8,
    color: Option<ProgressColor>,
    animated: bool,
    striped: bool,
}

tag_accessors!(ProgressBar);

impl ProgressBar {
    /// `progress` is a percentage; values above 100 are clamped.
    pub fn new(progress: u32) -> Self {
        Self {
            tag: Tag::new("div").with_attr("class", ["progress"]),
            progress: progress.min(100) as u8,
            color: None,
            animated: true,
            striped: true,
        }
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn color(mut self, color: ProgressColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    pub fn striped(mut self, striped: bool) -> Self {
        self.striped = striped;
        self
    }

    fn bar(&self) -> Tag {
        let mut bar = Tag::new("div").with_attr("class", ["progress-bar"]);
        if self.striped {
            bar.update_attribute("class", ["progress-bar-striped"]);
        }
        if self.animated {
            bar.update_attribute("class", ["progress-bar-animated"]);
        }
        if let Some(color) = self.color {
            bar.update_attribute("class", [color.as_str()]);
        }
        let percent = self.progress.to_string();
        bar.attrs.set("role", "progressbar");
        bar.attrs.set("style", format!("width: {percent}%"));
        bar.attrs.set("aria-valuenow", percent);
        bar.attrs.set("aria-valuemin", "0");
        bar.attrs.set("aria-valuemax", "100");
        bar
    }
}

impl Component for ProgressBar {
    fn render_with(&self, _engine: &TemplateEngine) -> Result<String> {
        Ok(self.tag.to_html_with_content(&self.bar().to_html()))
    }

    fn needs_perm(&self) -> Option<&str> {
        self.tag.needs_perm.as_deref()
    }

    fn attributes_mut(&mut self) -> Option<&mut Attributes> {
        Some(&mut self.tag.attrs)
    }
}

crate::impl_display!(ProgressBar);
