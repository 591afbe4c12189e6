pub mod context;
pub mod loader;
pub mod manifest;
pub mod scaffold;

pub use context::GeneratorContext;
pub use loader::{
    builtin_root, GeneratorLoader, GeneratorRegistry, GENERATORS_DIR_ENV, LOCAL_GENERATORS_DIR,
};
pub use manifest::{GeneratorManifest, MANIFEST_FILE};
pub use scaffold::ScaffoldGenerator;

use crate::error::Result;
use crate::models::{CliArgument, CliOption, Params};
use std::path::Path;

/// Common contract for all generators.
///
/// The loader registers anything satisfying this trait under its
/// [`name`](Generator::name); the CLI layer builds one subcommand per
/// registered generator out of the declarative
/// [`cli_arguments`](Generator::cli_arguments) /
/// [`cli_options`](Generator::cli_options) metadata. The `--skip`
/// option is metadata only; honoring it is the concrete generator's
/// job inside [`new`](Generator::new).
pub trait Generator {
    /// Distinguishable name used for CLI dispatch and registry indexing.
    fn name(&self) -> &str;

    /// Template directory materialized by [`new`](Generator::new).
    /// Checked lazily, at operation time.
    fn template(&self) -> &Path;

    /// Usage file attached to the generated subcommand's help output.
    fn usage(&self) -> &Path;

    fn cli_arguments(&self) -> Vec<CliArgument> {
        default_cli_arguments()
    }

    fn cli_options(&self) -> Vec<CliOption> {
        default_cli_options()
    }

    /// Materialize the template into the project root, using the render
    /// context merged with `params`.
    fn new(&self, context: &GeneratorContext, params: &Params) -> Result<()>;

    /// Remove the artifacts [`new`](Generator::new) produced for the
    /// same logical target. Nothing to remove is a no-op.
    fn destroy(&self, context: &GeneratorContext, params: &Params) -> Result<()>;
}

/// Contract default: one required positional `NAME`, arity 1.
pub fn default_cli_arguments() -> Vec<CliArgument> {
    vec![CliArgument::positional("NAME")]
}

/// Contract default: a `-S`/`--skip` flag.
pub fn default_cli_options() -> Vec<CliOption> {
    vec![CliOption::flag("skip", 'S', "Skip files that already exist.")]
}
