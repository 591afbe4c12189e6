pub mod cli;
pub mod config;
pub mod output;

pub use cli::{build_cli, collect_params, run};
pub use config::ProjectConfig;
pub use output::{Logger, ProgressReporter};
