use crate::command::{CommandContext, CommandError, CommandOutcome, DevelopmentCommand};

/// `help` lists every command; `help <id>` shows one in detail.
pub struct HelpCommand;

impl DevelopmentCommand for HelpCommand {
    fn id(&self) -> &'static str {
        "help"
    }

    fn usage(&self) -> &'static str {
        "help [command]"
    }

    fn description(&self) -> &'static str {
        "List the available commands or describe one."
    }

    fn execute(&self, ctx: &mut CommandContext) -> Result<CommandOutcome, CommandError> {
        let lines = match ctx.args {
            [] => ctx
                .commands
                .iter()
                .map(|c| format!("{:<12} {}", c.id(), c.description()))
                .collect(),
            [id] => {
                let command = ctx
                    .commands
                    .get(id)
                    .ok_or_else(|| CommandError::UnknownCommand(id.clone()))?;
                vec![
                    format!("usage: {}", command.usage()),
                    command.description().to_string(),
                ]
            }
            _ => return Err(CommandError::Usage(self.usage())),
        };
        Ok(CommandOutcome::Output(lines))
    }
}
