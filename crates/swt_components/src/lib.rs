//! Bootstrap 4 components rendered to HTML
//!
//! Every component is built from [`Tag`]s: an element name, an ordered
//! attribute map and trusted inner markup. Simple components serialize their
//! tags directly; composites (modal, accordion, dropdown, tooltip, list group
//! item) render an embedded template through a [`TemplateEngine`].
//!
//! ```ignore
//! use swt_components::prelude::*;
//!
//! let badge = Badge::new("New").color(BadgeColor::Info);
//! let html = format!("{badge} messages");
//! ```
//!
//! The [`RenderHelper`] renders lists of components for a particular viewer:
//! it drops items the viewer lacks permission for, rewrites link query
//! strings and adds attributes before rendering.

use swt_core::{Result, SafeString};
use swt_templates::TemplateEngine;

pub mod attributes;
pub mod config;
pub mod engine;
pub mod enums;
pub mod helper;
pub mod permissions;
pub mod query;
pub mod tag;
pub mod tooltip;
pub mod ui;

pub use attributes::Attributes;
pub use config::SwtConfig;
pub use engine::{build_engine, default_engine, init_default_engine};
pub use helper::{CurrentView, RenderHelper};
pub use permissions::{CachedPermissions, PermissionBackend, PermissionSet};
pub use query::merge_query;
pub use tag::{new_dom_id, Tag};
pub use tooltip::{Tooltip, TooltipSpec};

pub mod prelude {
    pub use crate::enums::*;
    pub use crate::ui::*;
    pub use crate::{Component, RenderHelper, Tag, Tooltip};
}

/// Something that renders to HTML.
///
/// The render helper works against this trait only: it asks for the
/// permission gate, the attributes an attribute update lands on and the
/// attribute holding the URL, then renders.
pub trait Component {
    /// Render using `engine` for any templated parts.
    fn render_with(&self, engine: &TemplateEngine) -> Result<String>;

    /// Render using the process-wide default engine.
    fn render(&self) -> Result<String> {
        self.render_with(engine::default_engine())
    }

    fn render_safe(&self) -> Result<SafeString> {
        self.render().map(SafeString::from)
    }

    /// Permission token required to see this component.
    fn needs_perm(&self) -> Option<&str> {
        None
    }

    /// The component's own attribute map.
    fn attributes_mut(&mut self) -> Option<&mut Attributes> {
        None
    }

    /// Where a render helper's attribute update is applied.
    fn attribute_target_mut(&mut self) -> Option<&mut Attributes> {
        self.attributes_mut()
    }

    /// Name of the attribute carrying the component's URL.
    fn url_attribute(&self) -> Option<&'static str> {
        None
    }
}

impl<C: Component + ?Sized> Component for Box<C> {
    fn render_with(&self, engine: &TemplateEngine) -> Result<String> {
        (**self).render_with(engine)
    }

    fn render(&self) -> Result<String> {
        (**self).render()
    }

    fn needs_perm(&self) -> Option<&str> {
        (**self).needs_perm()
    }

    fn attributes_mut(&mut self) -> Option<&mut Attributes> {
        (**self).attributes_mut()
    }

    fn attribute_target_mut(&mut self) -> Option<&mut Attributes> {
        (**self).attribute_target_mut()
    }

    fn url_attribute(&self) -> Option<&'static str> {
        (**self).url_attribute()
    }
}

/// `Display` by rendering with the default engine, so components
/// concatenate with `format!`/`write!`.
macro_rules! impl_display {
    ($($ty:ty),+ $(,)?) => {$(
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match $crate::Component::render(self) {
                    Ok(markup) => f.write_str(&markup),
                    Err(e) => {
                        tracing::error!(error = %e, component = stringify!($ty), "component failed to render");
                        Err(std::fmt::Error)
                    }
                }
            }
        }
    )+};
}
pub(crate) use impl_display;

impl_display!(Tag, Tooltip);
