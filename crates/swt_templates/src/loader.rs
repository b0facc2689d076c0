//! Template loaders: where template sources come from

use crate::lexer;
use crate::parser::{self, Node};
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use swt_core::{Result, SwtError};

/// Loads template sources by name.
///
/// `load_template` parses on every call; [`crate::TemplateEngine`] overrides
/// it with a cached version.
pub trait TemplateLoader {
    fn load_source(&self, name: &str) -> Result<String>;

    fn load_template(&self, name: &str) -> Result<Arc<Vec<Node>>> {
        let source = self.load_source(name)?;
        let tokens = lexer::tokenize(&source)?;
        Ok(Arc::new(parser::parse(&tokens)?))
    }
}

/// Templates held in memory, typically embedded with `include_str!`.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    templates: HashMap<String, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: impl Into<String>, source: impl Into<String>) {
        self.templates.insert(name.into(), source.into());
    }

    pub fn with(mut self, name: impl Into<String>, source: impl Into<String>) -> Self {
        self.add(name, source);
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }
}

impl TemplateLoader for MemoryLoader {
    fn load_source(&self, name: &str) -> Result<String> {
        self.templates
            .get(name)
            .cloned()
            .ok_or_else(|| SwtError::TemplateNotFound(name.to_string()))
    }
}

/// Templates read from a directory on disk. Names are relative paths and may
/// not escape the root.
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    root: PathBuf,
}

impl DirectoryLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        let stays_inside = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        stays_inside.then(|| self.root.join(relative))
    }
}

impl TemplateLoader for DirectoryLoader {
    fn load_source(&self, name: &str) -> Result<String> {
        let path = self
            .resolve(name)
            .ok_or_else(|| SwtError::TemplateNotFound(name.to_string()))?;
        match std::fs::read_to_string(&path) {
            Ok(source) => {
                tracing::debug!(template = name, path = %path.display(), "loaded template from disk");
                Ok(source)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(SwtError::TemplateNotFound(name.to_string()))
            }
            Err(e) => Err(SwtError::Io(e)),
        }
    }
}

/// Tries each loader in order; the first one that knows the name wins.
#[derive(Default)]
pub struct ChainLoader {
    loaders: Vec<Box<dyn TemplateLoader + Send + Sync>>,
}

impl ChainLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, loader: impl TemplateLoader + Send + Sync + 'static) {
        self.loaders.push(Box::new(loader));
    }

    pub fn with(mut self, loader: impl TemplateLoader + Send + Sync + 'static) -> Self {
        self.push(loader);
        self
    }

    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }
}

impl TemplateLoader for ChainLoader {
    fn load_source(&self, name: &str) -> Result<String> {
        for loader in &self.loaders {
            match loader.load_source(name) {
                Err(SwtError::TemplateNotFound(_)) => continue,
                other => return other,
            }
        }
        Err(SwtError::TemplateNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_loader() {
        let loader = MemoryLoader::new().with("a.html", "A");
        assert_eq!(loader.load_source("a.html").unwrap(), "A");
        assert!(matches!(
            loader.load_source("b.html"),
            Err(SwtError::TemplateNotFound(_))
        ));
    }

    #[test]
    fn test_directory_loader_reads_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("parts")).unwrap();
        std::fs::write(dir.path().join("parts/x.html"), "<p>x</p>").unwrap();

        let loader = DirectoryLoader::new(dir.path());
        assert_eq!(loader.load_source("parts/x.html").unwrap(), "<p>x</p>");
        assert!(matches!(
            loader.load_source("parts/missing.html"),
            Err(SwtError::TemplateNotFound(_))
        ));
    }

    #[test]
    fn test_directory_loader_rejects_parent_paths() {
        let dir = tempfile::tempdir().unwrap();
        let loader = DirectoryLoader::new(dir.path().join("root"));
        assert!(matches!(
            loader.load_source("../secret.html"),
            Err(SwtError::TemplateNotFound(_))
        ));
    }

    #[test]
    fn test_chain_loader_first_hit_wins() {
        let chain = ChainLoader::new()
            .with(MemoryLoader::new().with("a.html", "override"))
            .with(MemoryLoader::new().with("a.html", "builtin").with("b.html", "B"));

        assert_eq!(chain.load_source("a.html").unwrap(), "override");
        assert_eq!(chain.load_source("b.html").unwrap(), "B");
        assert!(chain.load_source("c.html").is_err());
    }

    #[test]
    fn test_load_template_parses() {
        let loader = MemoryLoader::new().with("v.html", "Hi {{ name }}");
        let nodes = loader.load_template("v.html").unwrap();
        assert_eq!(nodes.len(), 2);
    }
}
