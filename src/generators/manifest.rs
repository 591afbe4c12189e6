use crate::error::{Error, Result};
use crate::models::{CliArgument, CliOption};
use crate::generators::scaffold::ScaffoldGenerator;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// File name of the designated export slot inside a generator package.
pub const MANIFEST_FILE: &str = "generator.json";

/// Descriptor a generator package exposes through its `generator.json`.
///
/// A package must describe exactly one generator: a single JSON object
/// with at least a non-empty `name` and a `template` directory. The
/// load is split in two stages with different failure modes: a manifest
/// that cannot be read or parsed at all is a fatal
/// [`Error::ModuleLoad`], while a manifest that parses but is not a
/// conforming descriptor is silently excluded from the registry.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorManifest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    template: String,
    #[serde(default = "default_usage")]
    usage: String,
    #[serde(default)]
    arguments: Option<Vec<CliArgument>>,
    #[serde(default)]
    options: Option<Vec<CliOption>>,
}

fn default_usage() -> String {
    "USAGE.md".to_string()
}

impl GeneratorManifest {
    /// Read and parse a manifest file. IO and syntax failures are fatal
    /// module-load errors; they abort the whole scan.
    pub fn read(path: &Path) -> Result<Value> {
        let raw = fs::read_to_string(path).map_err(|e| Error::ModuleLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&raw).map_err(|e| Error::ModuleLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Interpret a parsed manifest document. `None` means the document
    /// is not a conforming single-generator descriptor.
    pub fn from_value(value: &Value) -> Option<Self> {
        let manifest: Self = serde_json::from_value(value.clone()).ok()?;
        if manifest.name.is_empty() || manifest.template.is_empty() {
            return None;
        }
        Some(manifest)
    }

    /// Build the generator this descriptor declares, resolving its
    /// template and usage paths against the package directory.
    pub fn into_generator(self, package_dir: &Path) -> ScaffoldGenerator {
        ScaffoldGenerator::new(
            self.name,
            package_dir.join(self.template),
            package_dir.join(self.usage),
            self.arguments,
            self.options,
        )
    }
}
