use crate::commands::Command;
use crate::error::Result;

/// Two-slot command sequencer: an optional `on_start` command followed
/// by an optional `on_finish` command, in that fixed order.
///
/// Unset slots are skipped silently; both slots empty is a valid no-op.
/// An error from `on_start` propagates immediately, so `on_finish` is
/// never reached: there are no `finally` semantics here. Callers that
/// need guaranteed finish-phase execution must wrap at a higher layer.
/// Slots may be reassigned between executions.
#[derive(Default)]
pub struct Invoker {
    on_start: Option<Box<dyn Command>>,
    on_finish: Option<Box<dyn Command>>,
}

impl Invoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_on_start(&mut self, command: Box<dyn Command>) {
        self.on_start = Some(command);
    }

    pub fn set_on_finish(&mut self, command: Box<dyn Command>) {
        self.on_finish = Some(command);
    }

    pub fn execute(&mut self) -> Result<()> {
        if let Some(command) = self.on_start.as_mut() {
            command.execute()?;
        }
        if let Some(command) = self.on_finish.as_mut() {
            command.execute()?;
        }
        Ok(())
    }
}
