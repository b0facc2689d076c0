//! Library configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use swt_core::{Result, SwtError};

pub const DEFAULT_TEMPLATE_PREFIX: &str = "bootstrap_swt/components/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwtConfig {
    /// Prefix component template names are resolved under.
    pub template_prefix: String,
    /// Directories searched, in order, before the embedded templates.
    pub template_dirs: Vec<PathBuf>,
    /// Query parameter naming the view a link was rendered from.
    pub current_view_param: String,
    /// Query parameter carrying that view's argument.
    pub current_view_arg_param: String,
}

impl Default for SwtConfig {
    fn default() -> Self {
        Self {
            template_prefix: DEFAULT_TEMPLATE_PREFIX.to_string(),
            template_dirs: Vec::new(),
            current_view_param: "current-view".to_string(),
            current_view_arg_param: "current-view-arg".to_string(),
        }
    }
}

impl SwtConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SwtConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading configuration");
        Self::from_json_str(&raw)
    }

    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dirs.push(dir.into());
        self
    }

    fn validate(&self) -> Result<()> {
        if !self.template_prefix.is_empty() && !self.template_prefix.ends_with('/') {
            return Err(SwtError::Config(format!(
                "template_prefix must end with '/', got '{}'",
                self.template_prefix
            )));
        }
        if self.current_view_param.is_empty() || self.current_view_arg_param.is_empty() {
            return Err(SwtError::Config(
                "current view parameter names must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SwtConfig::default();
        assert_eq!(config.template_prefix, "bootstrap_swt/components/");
        assert_eq!(config.current_view_param, "current-view");
        assert_eq!(config.current_view_arg_param, "current-view-arg");
        assert!(config.template_dirs.is_empty());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SwtConfig::from_json_str(r#"{"current_view_param": "from"}"#).unwrap();
        assert_eq!(config.current_view_param, "from");
        assert_eq!(config.template_prefix, DEFAULT_TEMPLATE_PREFIX);
    }

    #[test]
    fn test_invalid_prefix_rejected() {
        let result = SwtConfig::from_json_str(r#"{"template_prefix": "no-slash"}"#);
        assert!(matches!(result, Err(SwtError::Config(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(SwtConfig::from_json_str("{"), Err(SwtError::Json(_))));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"template_dirs": ["/srv/templates"]}}"#).unwrap();

        let config = SwtConfig::from_path(file.path()).unwrap();
        assert_eq!(config.template_dirs, vec![PathBuf::from("/srv/templates")]);
    }

    #[test]
    fn test_missing_file() {
        let result = SwtConfig::from_path("/nonexistent/swt.json");
        assert!(matches!(result, Err(SwtError::Io(_))));
    }
}
