use crate::error::Result;
use crate::generators::manifest::{GeneratorManifest, MANIFEST_FILE};
use crate::generators::Generator;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Project-local generators directory, relative to the working
/// directory at process start.
pub const LOCAL_GENERATORS_DIR: &str = "lib/generators";

/// Environment override for the built-in generators root.
pub const GENERATORS_DIR_ENV: &str = "SCAFFGEN_GENERATORS_DIR";

/// Name-indexed mapping of registered generators.
///
/// Built fresh on every load call; nothing is cached across process
/// runs. Insertion is last-wins, so with built-ins scanned before the
/// local root, a local generator reusing a built-in name overrides it.
#[derive(Default)]
pub struct GeneratorRegistry {
    generators: BTreeMap<String, Arc<dyn Generator>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, generator: Arc<dyn Generator>) {
        self.generators
            .insert(generator.name().to_string(), generator);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Generator>> {
        self.generators.get(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.generators.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Generator>)> {
        self.generators
            .iter()
            .map(|(name, generator)| (name.as_str(), generator))
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

/// Scans generator roots and builds the name → generator registry used
/// for CLI dispatch.
pub struct GeneratorLoader {
    roots: Vec<PathBuf>,
}

impl GeneratorLoader {
    /// Loader over the well-known roots: built-in generators first,
    /// then the project-local `lib/generators` directory.
    pub fn new() -> Self {
        let local = env::current_dir()
            .map(|cwd| cwd.join(LOCAL_GENERATORS_DIR))
            .unwrap_or_else(|_| PathBuf::from(LOCAL_GENERATORS_DIR));
        Self {
            roots: vec![builtin_root(), local],
        }
    }

    /// Loader over explicit roots, scanned in the given order.
    pub fn with_roots(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Scan all roots and index every conforming generator package.
    ///
    /// A candidate is any subdirectory containing a `generator.json`.
    /// Manifests that fail to read or parse abort the scan; no partial
    /// registry is returned. Manifests that parse but do not describe a
    /// single conforming generator are skipped and the scan continues.
    /// Missing roots are skipped entirely.
    pub fn load(&self) -> Result<GeneratorRegistry> {
        let mut registry = GeneratorRegistry::new();

        for root in &self.roots {
            if !root.is_dir() {
                continue;
            }
            for package_dir in candidate_dirs(root)? {
                let manifest_path = package_dir.join(MANIFEST_FILE);
                if !manifest_path.is_file() {
                    continue;
                }
                let document = GeneratorManifest::read(&manifest_path)?;
                if let Some(manifest) = GeneratorManifest::from_value(&document) {
                    registry.insert(Arc::new(manifest.into_generator(&package_dir)));
                }
            }
        }

        Ok(registry)
    }
}

impl Default for GeneratorLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Subdirectories of a root in deterministic (sorted) order.
fn candidate_dirs(root: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Built-in generators root shipped with the tool.
///
/// Resolution order: the `SCAFFGEN_GENERATORS_DIR` environment
/// variable, a `share/scaffgen/generators` directory next to the
/// installed executable, and finally the source tree (development
/// builds and `cargo run`).
pub fn builtin_root() -> PathBuf {
    if let Ok(dir) = env::var(GENERATORS_DIR_ENV) {
        return PathBuf::from(dir);
    }
    if let Ok(exe) = env::current_exe() {
        if let Some(exe_dir) = exe.parent() {
            let shared = exe_dir.join("../share/scaffgen/generators");
            if shared.is_dir() {
                return shared;
            }
        }
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("generators")
}
