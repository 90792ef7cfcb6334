use std::collections::BTreeMap;

use log::info;
use thiserror::Error;

use crate::command::{CommandContext, CommandError, CommandOutcome, DevelopmentCommand};
use crate::commands;
use crate::console::ConsoleState;
use crate::tokenize::tokenize;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    #[error("a command with id '{0}' is already registered")]
    DuplicateCommand(String),
    #[error("command id '{0}' is empty or contains whitespace")]
    InvalidId(String),
}

/// Commands by lower-cased id, iterated in id order.
#[derive(Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, Box<dyn DevelopmentCommand>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding `close`, `help` and `clear`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for command in commands::builtins() {
            registry.commands.insert(command.id().to_lowercase(), command);
        }
        registry
    }

    pub fn register(&mut self, command: Box<dyn DevelopmentCommand>) -> Result<(), ConsoleError> {
        let id = command.id();
        if id.is_empty() || id.chars().any(char::is_whitespace) {
            return Err(ConsoleError::InvalidId(id.to_string()));
        }
        let key = id.to_lowercase();
        if self.commands.contains_key(&key) {
            return Err(ConsoleError::DuplicateCommand(id.to_string()));
        }
        self.commands.insert(key, command);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&dyn DevelopmentCommand> {
        self.commands.get(&id.to_lowercase()).map(|c| c.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn DevelopmentCommand> {
        self.commands.values().map(|c| c.as_ref())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Parse and run one command line. `console` is `None` when running
    /// headless, in which case output lines are logged instead of shown.
    pub fn execute(
        &self,
        line: &str,
        console: Option<&mut ConsoleState>,
    ) -> Result<CommandOutcome, CommandError> {
        let tokens = tokenize(line)?;
        let Some((id, args)) = tokens.split_first() else {
            return Ok(CommandOutcome::Ok);
        };
        let command = self
            .get(id)
            .ok_or_else(|| CommandError::UnknownCommand(id.clone()))?;

        // a console echoes the line and its output itself
        let headless = console.is_none();
        if headless {
            info!("console: {}", line.trim());
        }
        let mut ctx = CommandContext::new(args, self, console);
        let outcome = command.execute(&mut ctx)?;
        if headless {
            if let CommandOutcome::Output(lines) = &outcome {
                for l in lines {
                    info!("{l}");
                }
            }
        }
        Ok(outcome)
    }
}
