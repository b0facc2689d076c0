use crate::ui::tag_accessors;
use crate::{Attributes, Component, Tag};
use swt_core::Result;
use swt_templates::TemplateEngine;

const ITEM_TEMPLATE: &str = "list_group_item.html";

/// A list-group row with left, optional center and right columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ListGroupItem {
    tag: Tag,
    center: Option<String>,
    right: Option<String>,
}

tag_accessors!(ListGroupItem);

impl ListGroupItem {
    /// `left` is trusted markup, as are the other columns.
    pub fn new(left: impl Into<String>) -> Self {
        Self {
            tag: Tag::templated(ITEM_TEMPLATE)
                .with_attr("class", ["list-group-item"])
                .with_content(left),
            center: None,
            right: None,
        }
    }

    pub fn center(mut self, markup: impl Into<String>) -> Self {
        self.center = Some(markup.into());
        self
    }

    pub fn right(mut self, markup: impl Into<String>) -> Self {
        self.right = Some(markup.into());
        self
    }
}

impl Component for ListGroupItem {
    fn render_with(&self, engine: &TemplateEngine) -> Result<String> {
        let mut context = self
            .tag
            .template_context()
            .with_safe("left", self.tag.content.as_str())
            .with_safe("right", self.right.as_deref().unwrap_or_default());
        if let Some(center) = &self.center {
            context = context.with_safe("center", center.as_str());
        }
        engine.render(self.tag.require_template()?, &context)
    }

    fn needs_perm(&self) -> Option<&str> {
        self.tag.needs_perm.as_deref()
    }

    fn attributes_mut(&mut self) -> Option<&mut Attributes> {
        Some(&mut self.tag.attrs)
    }
}

/// `<ul class="list-group">`
#[derive(Debug, Clone, PartialEq)]
pub struct ListGroup {
    tag: Tag,
    items: Vec<ListGroupItem>,
}

tag_accessors!(ListGroup);

impl ListGroup {
    pub fn new(items: Vec<ListGroupItem>) -> Self {
        Self {
            tag: Tag::new("ul").with_attr("class", ["list-group"]),
            items,
        }
    }

    pub fn flush(mut self) -> Self {
        self.tag.update_attribute("class", ["list-group-flush"]);
        self
    }

    pub fn items(&self) -> &[ListGroupItem] {
        &self.items
    }
}

impl Component for ListGroup {
    fn render_with(&self, engine: &TemplateEngine) -> Result<String> {
        let mut content = String::new();
        for item in &self.items {
            content.push_str(&item.render_with(engine)?);
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

crate::impl_display!(ListGroupItem, ListGroup);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::build_engine;
    use crate::SwtConfig;

    #[test]
    fn test_item_columns() {
        let engine = build_engine(&SwtConfig::default());
        let html = ListGroupItem::new("Name")
            .right("<b>42</b>")
            .render_with(&engine)
            .unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<li class="list-group-item"><div class="row">"#,
                r#"<div class="col text-left">Name</div>"#,
                r#"<div class="col text-right"><b>42</b></div></div></li>"#
            )
        );
    }

    #[test]
    fn test_center_column_only_when_set() {
        let engine = build_engine(&SwtConfig::default());
        let html = ListGroupItem::new("a").center("b").render_with(&engine).unwrap();
        assert!(html.contains(r#"<div class="col text-center">b</div>"#));
    }

    #[test]
    fn test_list_group() {
        let engine = build_engine(&SwtConfig::default());
        let group = ListGroup::new(vec![ListGroupItem::new("one"), ListGroupItem::new("two")]).flush();
        let html = group.render_with(&engine).unwrap();
        assert!(html.starts_with(r#"<ul class="list-group list-group-flush"><li"#));
        assert!(html.find("one").unwrap() < html.find("two").unwrap());
        assert!(html.ends_with("</li></ul>"));
    }
}
