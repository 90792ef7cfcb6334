use crate::command::{CommandContext, CommandError, CommandOutcome, DevelopmentCommand};

pub struct ClearCommand;

impl DevelopmentCommand for ClearCommand {
    fn id(&self) -> &'static str {
        "clear"
    }

    fn usage(&self) -> &'static str {
        "clear"
    }

    fn description(&self) -> &'static str {
        "Remove every line from the console output."
    }

    fn execute(&self, ctx: &mut CommandContext) -> Result<CommandOutcome, CommandError> {
        if let Some(console) = ctx.console() {
            console.clear();
        }
        Ok(CommandOutcome::Ok)
    }
}
