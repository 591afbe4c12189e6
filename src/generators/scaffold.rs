use crate::error::{Error, Result};
use crate::generators::context::GeneratorContext;
use crate::generators::{default_cli_arguments, default_cli_options, Generator};
use crate::models::{CliArgument, CliOption, Params};
use crate::render::{self, OverwritePolicy};
use heck::ToSnakeCase;
use regex::Regex;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Manifest-driven generator: materializes or removes a template tree
/// rooted in its generator package.
///
/// CLI metadata falls back to the contract defaults when the manifest
/// declares none, so a minimal package inherits the `NAME` argument and
/// the `--skip` flag unchanged.
#[derive(Debug, Clone)]
pub struct ScaffoldGenerator {
    name: String,
    template: PathBuf,
    usage: PathBuf,
    arguments: Option<Vec<CliArgument>>,
    options: Option<Vec<CliOption>>,
}

impl ScaffoldGenerator {
    pub fn new(
        name: String,
        template: PathBuf,
        usage: PathBuf,
        arguments: Option<Vec<CliArgument>>,
        options: Option<Vec<CliOption>>,
    ) -> Self {
        Self {
            name,
            template,
            usage,
            arguments,
            options,
        }
    }

    /// Merged render context for one operation. The `name` param, when
    /// present, is normalized to a snake_case identifier so it is safe
    /// to use in module names and paths; `new` and `destroy` go through
    /// the same merge so both resolve identical target paths.
    fn scaffold_context(
        &self,
        context: &GeneratorContext,
        params: &Params,
    ) -> Result<BTreeMap<String, Value>> {
        let mut merged = context.merged(params);

        let normalized = match merged.get("name").and_then(|value| value.as_str()) {
            Some(raw) => Some(normalize_name(raw)?),
            None => None,
        };
        if let Some(name) = normalized {
            merged.insert("name".to_string(), Value::from(name));
        }
        merged.insert("generator_name".to_string(), Value::from(self.name.as_str()));

        Ok(merged)
    }
}

impl Generator for ScaffoldGenerator {
    fn name(&self) -> &str {
        &self.name
    }

    fn template(&self) -> &Path {
        &self.template
    }

    fn usage(&self) -> &Path {
        &self.usage
    }

    fn cli_arguments(&self) -> Vec<CliArgument> {
        self.arguments.clone().unwrap_or_else(default_cli_arguments)
    }

    fn cli_options(&self) -> Vec<CliOption> {
        self.options.clone().unwrap_or_else(default_cli_options)
    }

    fn new(&self, context: &GeneratorContext, params: &Params) -> Result<()> {
        let render_context = self.scaffold_context(context, params)?;
        let policy = if params.get_flag("skip") {
            OverwritePolicy::Skip
        } else {
            OverwritePolicy::Fail
        };
        render::render_tree(
            &self.template,
            &render_context,
            context.project_root(),
            policy,
        )?;
        Ok(())
    }

    fn destroy(&self, context: &GeneratorContext, params: &Params) -> Result<()> {
        let render_context = self.scaffold_context(context, params)?;
        render::remove_tree(&self.template, &render_context, context.project_root())?;
        Ok(())
    }
}

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z_][a-z0-9_]*$").expect("name pattern is valid"))
}

fn normalize_name(raw: &str) -> Result<String> {
    let invalid = || Error::InvalidArgument(format!("'{raw}' cannot be used as an artifact name"));
    // path separators would let a name escape the template layout
    if raw.contains(['/', '\\']) {
        return Err(invalid());
    }
    let normalized = raw.trim().to_snake_case();
    if name_pattern().is_match(&normalized) {
        Ok(normalized)
    } else {
        Err(invalid())
    }
}
