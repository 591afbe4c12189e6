use crate::error::Result;
use crate::interface::config::ProjectConfig;
use crate::models::Params;
use chrono::Datelike;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Per-invocation generator state: the project root plus the immutable
/// render context derived from the project configuration.
///
/// Created fresh for every CLI invocation and discarded after the
/// operation completes. The project root is stored verbatim; existence
/// is only checked when an operation touches the filesystem.
#[derive(Debug, Clone)]
pub struct GeneratorContext {
    project_root: PathBuf,
    context: BTreeMap<String, Value>,
}

impl GeneratorContext {
    pub fn new(config: &ProjectConfig, project_root: impl Into<PathBuf>) -> Result<Self> {
        config.validate()?;

        let mut context = BTreeMap::new();
        context.insert(
            "package_name".to_string(),
            Value::from(config.package_name.as_str()),
        );
        context.insert(
            "folder_name".to_string(),
            Value::from(config.folder_name.as_str()),
        );
        context.insert(
            "copyright_year".to_string(),
            Value::from(chrono::Utc::now().year()),
        );

        Ok(Self {
            project_root: project_root.into(),
            context,
        })
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn render_context(&self) -> &BTreeMap<String, Value> {
        &self.context
    }

    /// Render context merged with per-call params, params winning.
    pub fn merged(&self, params: &Params) -> BTreeMap<String, Value> {
        let mut merged = self.context.clone();
        for (key, value) in params.iter() {
            merged.insert(key.clone(), value.clone());
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn sample_config() -> ProjectConfig {
        ProjectConfig::new("test_app", "test-app")
    }

    #[test]
    fn test_context_derived_from_config() {
        let context = GeneratorContext::new(&sample_config(), "/some/path").unwrap();

        assert_eq!(context.project_root(), Path::new("/some/path"));
        assert_eq!(
            context.render_context().get("package_name"),
            Some(&Value::from("test_app"))
        );
        assert_eq!(
            context.render_context().get("folder_name"),
            Some(&Value::from("test-app"))
        );
        assert!(context.render_context().contains_key("copyright_year"));
    }

    #[test]
    fn test_missing_package_name_is_a_configuration_error() {
        let config = ProjectConfig::new("", "test-app");
        let err = GeneratorContext::new(&config, "/some/path").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_missing_folder_name_is_a_configuration_error() {
        let config = ProjectConfig::new("test_app", "");
        let err = GeneratorContext::new(&config, "/some/path").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_params_win_over_context_values() {
        let context = GeneratorContext::new(&sample_config(), "/some/path").unwrap();

        let mut params = Params::new();
        params.insert("name", "visit_card");
        params.insert("package_name", "override");

        let merged = context.merged(&params);
        assert_eq!(merged.get("name"), Some(&Value::from("visit_card")));
        assert_eq!(merged.get("package_name"), Some(&Value::from("override")));
        // the context itself stays immutable
        assert_eq!(
            context.render_context().get("package_name"),
            Some(&Value::from("test_app"))
        );
    }
}
