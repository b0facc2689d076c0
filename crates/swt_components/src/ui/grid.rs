//! Grid rows and the columns they hold

use crate::enums::Breakpoint;
use crate::ui::tag_accessors;
use crate::{Attributes, Component, Tag};
use swt_core::Result;
use swt_templates::TemplateEngine;

/// `<div class="col">` holding trusted markup.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    tag: Tag,
    width: String,
}

tag_accessors!(Cell);

impl Cell {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            tag: Tag::new("div")
                .with_attr("class", ["col"])
                .with_content(content),
            width: "col".to_string(),
        }
    }

    /// Fix the width to `columns` of twelve, from `breakpoint` up when one is
    /// given (`col-sm-6`). `columns` is clamped to 1..=12.
    pub fn span(mut self, columns: u8, breakpoint: Option<Breakpoint>) -> Self {
        let columns = columns.clamp(1, 12);
        let width = match breakpoint {
            Some(bp) => format!("col-{bp}-{columns}"),
            None => format!("col-{columns}"),
        };
        self.tag
            .attrs
            .replace_value("class", Some(self.width.as_str()), &width);
        self.width = width;
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

/// `<div class="row">` holding cells in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    tag: Tag,
    cells: Vec<Cell>,
}

tag_accessors!(Row);

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            tag: Tag::new("div").with_attr("class", ["row"]),
            cells,
        }
    }

    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Component for Cell {
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

impl Component for Row {
    fn render_with(&self, engine: &TemplateEngine) -> Result<String> {
        let cells = self
            .cells
            .iter()
            .map(|cell| cell.render_with(engine))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.tag.to_html_with_content(&cells.concat()))
    }

    fn needs_perm(&self) -> Option<&str> {
        self.tag.needs_perm.as_deref()
    }

    fn attributes_mut(&mut self) -> Option<&mut Attributes> {
        Some(&mut self.tag.attrs)
    }
}

crate::impl_display!(Cell, Row);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::build_engine;
    use crate::SwtConfig;

    #[test]
    fn test_cell() {
        assert_eq!(Cell::new("<b>x</b>").to_string(), r#"<div class="col"><b>x</b></div>"#);
    }

    #[test]
    fn test_span_replaces_width() {
        let cell = Cell::new("x")
            .additional_classes(["text-right"])
            .span(3, Some(Breakpoint::Small))
            .span(4, Some(Breakpoint::Medium));
        assert_eq!(cell.attributes().get("class").unwrap(), ["col-md-4", "text-right"]);

        let clamped = Cell::new("x").span(20, None);
        assert_eq!(clamped.attributes().first("class"), Some("col-12"));
    }

    #[test]
    fn test_row_renders_cells_in_order() {
        let engine = build_engine(&SwtConfig::default());
        let mut row = Row::new(vec![Cell::new("a"), Cell::new("b").span(6, None)]);
        row.push(Cell::new("c"));

        assert_eq!(
            row.render_with(&engine).unwrap(),
            r#"<div class="row"><div class="col">a</div><div class="col-6">b</div><div class="col">c</div></div>"#
        );
        assert_eq!(row.cells().len(), 3);
    }

    #[test]
    fn test_empty_row() {
        assert_eq!(Row::new(Vec::new()).to_string(), r#"<div class="row"></div>"#);
    }
}
