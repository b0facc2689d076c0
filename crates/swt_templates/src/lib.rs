//! Django-syntax template engine for component layouts
//!
//! This crate provides a small template engine compatible with the subset of
//! Django template syntax the component templates use: variables, filters,
//! `if`/`elif`/`else`, `for`/`empty`, `with`, `include` and comments.

use dashmap::DashMap;
use std::sync::Arc;
use swt_core::{Context, Result};

pub mod filters;
pub mod lexer;
pub mod loader;
pub mod parser;
pub mod renderer;

pub use loader::{ChainLoader, DirectoryLoader, MemoryLoader, TemplateLoader};
use parser::Node;
use renderer::render_nodes_with_loader;

/// A compiled template
#[derive(Debug, Clone)]
pub struct Template {
    nodes: Vec<Node>,
    source: String,
}

impl Template {
    pub fn new(source: &str) -> Result<Self> {
        let tokens = lexer::tokenize(source)?;
        let nodes = parser::parse(&tokens)?;

        Ok(Self {
            nodes,
            source: source.to_string(),
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn render(&self, context: &Context) -> Result<String> {
        renderer::render_nodes(&self.nodes, context)
    }

    /// Render with a template loader for `{% include %}` support
    pub fn render_with_loader<L: TemplateLoader + ?Sized>(
        &self,
        context: &Context,
        loader: &L,
    ) -> Result<String> {
        render_nodes_with_loader(&self.nodes, context, Some(loader))
    }
}

/// Resolves template names, parses each template once and renders it.
///
/// Names are resolved as `prefix + name` against the configured loader.
/// Parsed templates are cached for the engine's lifetime; the cache is safe
/// to share between threads.
pub struct TemplateEngine {
    loader: Box<dyn TemplateLoader + Send + Sync>,
    prefix: String,
    cache: DashMap<String, Arc<Vec<Node>>>,
}

impl TemplateEngine {
    pub fn new(loader: impl TemplateLoader + Send + Sync + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            prefix: String::new(),
            cache: DashMap::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Render the named template with `context`.
    pub fn render(&self, name: &str, context: &Context) -> Result<String> {
        let nodes = self.load_template(name)?;
        render_nodes_with_loader(&nodes, context, Some(self))
    }

    pub fn cached_templates(&self) -> usize {
        self.cache.len()
    }

    fn resolve(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }
}

impl TemplateLoader for TemplateEngine {
    fn load_source(&self, name: &str) -> Result<String> {
        self.loader.load_source(&self.resolve(name))
    }

    fn load_template(&self, name: &str) -> Result<Arc<Vec<Node>>> {
        let resolved = self.resolve(name);
        if let Some(nodes) = self.cache.get(&resolved) {
            return Ok(Arc::clone(&nodes));
        }

        let source = self.loader.load_source(&resolved)?;
        let tokens = lexer::tokenize(&source)?;
        let nodes = Arc::new(parser::parse(&tokens)?);
        tracing::debug!(template = %resolved, nodes = nodes.len(), "parsed and cached template");
        self.cache.insert(resolved, Arc::clone(&nodes));
        Ok(nodes)
    }
}
