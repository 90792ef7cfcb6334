use crate::command::{CommandContext, CommandError, CommandOutcome, DevelopmentCommand};

/// Hides the console. Fails when run without one.
pub struct CloseCommand;

impl DevelopmentCommand for CloseCommand {
    fn id(&self) -> &'static str {
        "close"
    }

    fn usage(&self) -> &'static str {
        "close"
    }

    fn description(&self) -> &'static str {
        "Close the development console."
    }

    fn execute(&self, ctx: &mut CommandContext) -> Result<CommandOutcome, CommandError> {
        let console = ctx.console().ok_or(CommandError::NoConsole)?;
        console.hide();
        Ok(CommandOutcome::Ok)
    }
}
