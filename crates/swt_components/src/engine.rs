//! Embedded component templates and the process-wide default engine

use crate::config::SwtConfig;
use once_cell::sync::OnceCell;
use swt_core::{Result, SwtError};
use swt_templates::{ChainLoader, DirectoryLoader, MemoryLoader, TemplateEngine};

static DEFAULT_ENGINE: OnceCell<TemplateEngine> = OnceCell::new();

/// Templates shipped with the crate, by name relative to the prefix.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("tooltip.html", include_str!("../templates/tooltip.html")),
    ("modal.html", include_str!("../templates/modal.html")),
    ("accordion.html", include_str!("../templates/accordion.html")),
    ("dropdown.html", include_str!("../templates/dropdown.html")),
    ("list_group_item.html", include_str!("../templates/list_group_item.html")),
    (
        "includes/ajax_loading_spinner.html",
        include_str!("../templates/includes/ajax_loading_spinner.html"),
    ),
    (
        "includes/ajax_error.html",
        include_str!("../templates/includes/ajax_error.html"),
    ),
];

/// The embedded templates registered under `prefix`.
pub fn builtin_templates(prefix: &str) -> MemoryLoader {
    BUILTIN_TEMPLATES
        .iter()
        .fold(MemoryLoader::new(), |loader, (name, source)| {
            loader.with(format!("{prefix}{name}"), *source)
        })
}

/// Build an engine: override directories first, embedded templates last.
pub fn build_engine(config: &SwtConfig) -> TemplateEngine {
    let mut loader = ChainLoader::new();
    for dir in &config.template_dirs {
        loader.push(DirectoryLoader::new(dir));
    }
    loader.push(builtin_templates(&config.template_prefix));

    tracing::debug!(
        prefix = %config.template_prefix,
        override_dirs = config.template_dirs.len(),
        "built component template engine"
    );
    TemplateEngine::new(loader).with_prefix(config.template_prefix.clone())
}

/// Install the process-wide engine. Fails if one is already installed,
/// including one installed lazily by [`default_engine`].
pub fn init_default_engine(config: &SwtConfig) -> Result<()> {
    DEFAULT_ENGINE
        .set(build_engine(config))
        .map_err(|_| SwtError::Config("default template engine already initialized".to_string()))
}

/// The process-wide engine, built from [`SwtConfig::default`] on first use
/// unless [`init_default_engine`] ran earlier.
pub fn default_engine() -> &'static TemplateEngine {
    DEFAULT_ENGINE.get_or_init(|| build_engine(&SwtConfig::default()))
}
