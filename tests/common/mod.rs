#![allow(dead_code)]
/// Common test utilities and helpers
use scaffgen::ProjectConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch root holding generator packages.
pub struct GeneratorRoot {
    temp_dir: TempDir,
}

impl GeneratorRoot {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a generator package with the given manifest content.
    pub fn add_package(&self, package: &str, manifest: &str) -> PathBuf {
        let dir = self.path().join(package);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("generator.json"), manifest).unwrap();
        dir
    }

    /// Add a file under the package's template tree.
    pub fn add_template_file(&self, package: &str, rel: &str, content: &str) {
        let path = self.path().join(package).join("template").join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    pub fn add_usage(&self, package: &str, content: &str) {
        fs::write(self.path().join(package).join("USAGE.md"), content).unwrap();
    }
}

pub fn simple_manifest(name: &str) -> String {
    format!(r#"{{ "name": "{name}", "template": "template", "usage": "USAGE.md" }}"#)
}

/// A scratch scaffgen project with a valid `.scaffgen.json`.
pub struct ScratchProject {
    temp_dir: TempDir,
}

impl ScratchProject {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(".scaffgen.json"),
            r#"{ "package_name": "test_app", "folder_name": "test-app" }"#,
        )
        .unwrap();
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config(&self) -> ProjectConfig {
        ProjectConfig::load(self.path()).unwrap()
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path().join(rel)).unwrap()
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.path().join(rel).exists()
    }
}
