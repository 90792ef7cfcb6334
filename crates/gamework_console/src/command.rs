//! The command interface every console command implements.

use thiserror::Error;

use crate::console::ConsoleState;
use crate::registry::CommandRegistry;

/// Outcome of a command that ran successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Ok,
    /// Lines to show to the user; the console prints them, headless
    /// dispatch logs them.
    Output(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help' for a list")]
    UnknownCommand(String),
    #[error("unterminated quote in '{0}'")]
    UnterminatedQuote(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("no development console")]
    NoConsole,
    #[error("{0}")]
    Failed(String),
}

/// What a command can see and touch while it runs.
pub struct CommandContext<'a> {
    /// Arguments after the command id, quotes already removed.
    pub args: &'a [String],
    /// Every registered command, including the one running.
    pub commands: &'a CommandRegistry,
    console: Option<&'a mut ConsoleState>,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        args: &'a [String],
        commands: &'a CommandRegistry,
        console: Option<&'a mut ConsoleState>,
    ) -> Self {
        Self {
            args,
            commands,
            console,
        }
    }

    /// The console the command was typed into, if any.
    pub fn console(&mut self) -> Option<&mut ConsoleState> {
        self.console.as_deref_mut()
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}

/// A command runnable from the development console.
///
/// Ids are matched case-insensitively.
pub trait DevelopmentCommand: Send + Sync {
    fn id(&self) -> &'static str;

    /// One-line synopsis, e.g. `help [command]`.
    fn usage(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn execute(&self, ctx: &mut CommandContext) -> Result<CommandOutcome, CommandError>;
}
