//! Deferred units of work and the two-slot [`Invoker`] that sequences
//! them. Call sites construct commands with everything bound up front,
//! hand them to the invoker's start/finish slots, and decide later
//! when, or whether, the pair runs.

mod invoker;
mod run_generator;

pub use invoker::Invoker;
pub use run_generator::{DestroyGenerator, RunGenerator};

use crate::error::Result;

/// A deferred unit of work. Side effects only; any parameters are bound
/// at construction, not at execute time.
pub trait Command {
    fn execute(&mut self) -> Result<()>;
}
