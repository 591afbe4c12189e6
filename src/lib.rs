//! # scaffgen
//!
//! Scaffold project artifacts from generator templates.
//!
//! scaffgen discovers generator plugins in two places (the generators
//! shipped with the tool, then a project-local `lib/generators`
//! directory) and renders the chosen generator's template tree into the
//! current project. The operation is reversible: `destroy` removes the
//! files a previous `generate` run produced.
//!
//! ## Quick Start
//!
//! ```bash
//! # Install globally
//! cargo install scaffgen
//!
//! # Inside a scaffgen project (a directory with a .scaffgen.json)
//! scaffgen generate controller visit_card
//! scaffgen destroy controller visit_card
//! ```
//!
//! ## Writing a generator
//!
//! A generator is a directory under `lib/generators/` with a
//! `generator.json` descriptor, an optional `USAGE.md`, and a
//! `template/` tree:
//!
//! ```json
//! {
//!   "name": "foobar",
//!   "template": "template",
//!   "usage": "USAGE.md"
//! }
//! ```
//!
//! Template path segments and `*.tera` file contents are rendered with
//! the project context (`package_name`, `folder_name`, `name`, ...);
//! everything else is copied verbatim. A local generator reusing a
//! built-in name overrides it. Run `scaffgen generate foobar --help` to
//! see the CLI surface synthesized from the descriptor's metadata.
//!
//! ## Programmatic Usage
//!
//! ```rust,no_run
//! use scaffgen::generators::{Generator, GeneratorContext, GeneratorLoader};
//! use scaffgen::models::Params;
//! use scaffgen::ProjectConfig;
//!
//! let registry = GeneratorLoader::new().load()?;
//! let generator = registry.get("controller").expect("shipped with the tool");
//!
//! let config = ProjectConfig::load(std::path::Path::new("."))?;
//! let context = GeneratorContext::new(&config, ".")?;
//!
//! let mut params = Params::new();
//! params.insert("name", "visit_card");
//! generator.new(&context, &params)?;
//! # Ok::<(), scaffgen::Error>(())
//! ```

pub mod commands;
mod error;
pub mod generators;
pub mod interface;
pub mod models;
pub mod render;

pub use error::{Error, Result};
pub use models::*;

// Convenience re-exports for common use cases
pub use interface::config::ProjectConfig;
pub use interface::output::{Logger, ProgressReporter};
