use crate::commands::Command;
use crate::error::Result;
use crate::generators::{Generator, GeneratorContext};
use crate::models::Params;
use std::sync::Arc;

/// Runs a generator's `new` operation. Generator, context and params
/// are all bound at construction.
pub struct RunGenerator {
    generator: Arc<dyn Generator>,
    context: GeneratorContext,
    params: Params,
}

impl RunGenerator {
    pub fn new(generator: Arc<dyn Generator>, context: GeneratorContext, params: Params) -> Self {
        Self {
            generator,
            context,
            params,
        }
    }
}

impl Command for RunGenerator {
    fn execute(&mut self) -> Result<()> {
        self.generator.new(&self.context, &self.params)
    }
}

/// Runs a generator's `destroy` operation, the inverse of
/// [`RunGenerator`] for the same logical target.
pub struct DestroyGenerator {
    generator: Arc<dyn Generator>,
    context: GeneratorContext,
    params: Params,
}

impl DestroyGenerator {
    pub fn new(generator: Arc<dyn Generator>, context: GeneratorContext, params: Params) -> Self {
        Self {
            generator,
            context,
            params,
        }
    }
}

impl Command for DestroyGenerator {
    fn execute(&mut self) -> Result<()> {
        self.generator.destroy(&self.context, &self.params)
    }
}
