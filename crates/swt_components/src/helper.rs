//! Permission-aware rendering of component lists

use crate::config::SwtConfig;
use crate::engine::default_engine;
use crate::permissions::PermissionSet;
use crate::query::merge_query;
use crate::Component;
use indexmap::IndexMap;
use swt_core::Result;
use swt_templates::TemplateEngine;

/// The view a page was rendered from, forwarded to link targets so they can
/// send the user back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentView {
    pub view_name: String,
    pub arg: Option<String>,
}

impl CurrentView {
    pub fn new(view_name: impl Into<String>) -> Self {
        Self {
            view_name: view_name.into(),
            arg: None,
        }
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.arg = Some(arg.into());
        self
    }
}

/// Renders components for one viewer.
///
/// Items whose permission the viewer lacks render as nothing. Before
/// rendering, the configured query update is merged into each item's URL and
/// the configured attribute update is applied to its attribute target.
pub struct RenderHelper<'e> {
    engine: &'e TemplateEngine,
    permissions: Option<Box<dyn PermissionSet + 'e>>,
    update_url_qs: IndexMap<String, String>,
    update_attrs: IndexMap<String, Vec<String>>,
}

impl RenderHelper<'static> {
    /// A helper rendering through the default engine.
    pub fn new() -> Self {
        Self::with_engine(default_engine())
    }
}

impl Default for RenderHelper<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'e> RenderHelper<'e> {
    pub fn with_engine(engine: &'e TemplateEngine) -> Self {
        Self {
            engine,
            permissions: None,
            update_url_qs: IndexMap::new(),
            update_attrs: IndexMap::new(),
        }
    }

    pub fn with_permissions(mut self, permissions: impl PermissionSet + 'e) -> Self {
        self.permissions = Some(Box::new(permissions));
        self
    }

    /// Query parameters merged into every item URL.
    pub fn with_url_query<I, K, V>(mut self, updates: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.update_url_qs
            .extend(updates.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Attribute values added to every item.
    pub fn with_attributes<I, K, V, S>(mut self, updates: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (name, values) in updates {
            self.update_attrs
                .entry(name.into())
                .or_default()
                .extend(values.into_iter().map(Into::into));
        }
        self
    }

    /// Forward `view` to link targets using the parameter names in `config`.
    pub fn with_current_view(self, config: &SwtConfig, view: &CurrentView) -> Self {
        let mut params = vec![(config.current_view_param.clone(), view.view_name.clone())];
        if let Some(arg) = &view.arg {
            params.push((config.current_view_arg_param.clone(), arg.clone()));
        }
        self.with_url_query(params)
    }

    /// Whether the viewer may see `item`. Without a permission source only
    /// permission-free items pass.
    pub fn check_permission<C: Component + ?Sized>(&self, item: &C) -> bool {
        let Some(perm) = item.needs_perm() else {
            return true;
        };
        let granted = self
            .permissions
            .as_ref()
            .is_some_and(|permissions| permissions.has_perm(perm));
        tracing::trace!(perm, granted, "permission check");
        granted
    }

    pub fn render_item<C: Component + ?Sized>(&self, item: &mut C) -> Result<String> {
        self.render_item_with(item, false)
    }

    /// [`RenderHelper::render_item`], optionally leaving the item URL alone.
    pub fn render_item_with<C: Component + ?Sized>(
        &self,
        item: &mut C,
        ignore_url_query: bool,
    ) -> Result<String> {
        if !self.check_permission(item) {
            return Ok(String::new());
        }
        if !ignore_url_query {
            self.apply_url_query(item);
        }
        if !self.update_attrs.is_empty() {
            if let Some(attrs) = item.attribute_target_mut() {
                attrs.update_all(self.update_attrs.iter().map(|(k, v)| (k, v.iter().cloned())));
            }
        }
        item.render_with(self.engine)
    }

    pub fn render_list_coherent<C: Component>(&self, items: &mut [C]) -> Result<String> {
        self.render_list_coherent_with(items, false)
    }

    /// Render every item in order and concatenate; filtered items add nothing.
    pub fn render_list_coherent_with<C: Component>(
        &self,
        items: &mut [C],
        ignore_url_query: bool,
    ) -> Result<String> {
        let mut out = String::new();
        for item in items.iter_mut() {
            out.push_str(&self.render_item_with(item, ignore_url_query)?);
        }
        Ok(out)
    }

    fn apply_url_query<C: Component + ?Sized>(&self, item: &mut C) {
        if self.update_url_qs.is_empty() {
            return;
        }
        let Some(name) = item.url_attribute() else {
            return;
        };
        let Some(attrs) = item.attributes_mut() else {
            return;
        };
        if let Some(merged) = attrs.first(name).map(|url| merge_query(url, &self.update_url_qs)) {
            attrs.set(name, merged);
        }
    }
}
