use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Project configuration file name, looked up at the project root.
pub const CONFIG_FILE: &str = ".scaffgen.json";

/// Identifiers generators depend on, read from the project's
/// `.scaffgen.json`. The core treats this as an opaque context source;
/// both fields feed the render context verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Importable package name, e.g. `my_app`.
    #[serde(default)]
    pub package_name: String,

    /// Project folder name, e.g. `my-app`.
    #[serde(default)]
    pub folder_name: String,
}

impl ProjectConfig {
    pub fn new(package_name: &str, folder_name: &str) -> Self {
        Self {
            package_name: package_name.to_string(),
            folder_name: folder_name.to_string(),
        }
    }

    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(CONFIG_FILE);
        if !path.is_file() {
            return Err(Error::Configuration(format!(
                "{} not found, not a scaffgen project",
                path.display()
            )));
        }
        let raw = fs::read_to_string(&path)?;
        serde_json::from_str(&raw)
            .map_err(|e| Error::Configuration(format!("{}: {}", path.display(), e)))
    }

    pub fn validate(&self) -> Result<()> {
        if self.package_name.is_empty() {
            return Err(Error::Configuration(
                "package_name is not set".to_string(),
            ));
        }
        if self.folder_name.is_empty() {
            return Err(Error::Configuration("folder_name is not set".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_reads_both_identifiers() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{ "package_name": "test_app", "folder_name": "test-app" }"#,
        )
        .unwrap();

        let config = ProjectConfig::load(dir.path()).unwrap();
        assert_eq!(config.package_name, "test_app");
        assert_eq!(config.folder_name, "test-app");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_is_a_configuration_error() {
        let dir = TempDir::new().unwrap();
        let err = ProjectConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("not a scaffgen project"));
    }

    #[test]
    fn test_malformed_file_is_a_configuration_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "{ nope").unwrap();
        let err = ProjectConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_validate_requires_both_identifiers() {
        assert!(ProjectConfig::new("", "test-app").validate().is_err());
        assert!(ProjectConfig::new("test_app", "").validate().is_err());
        assert!(ProjectConfig::new("test_app", "test-app").validate().is_ok());
    }
}
