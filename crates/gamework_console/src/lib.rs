//! Development console: a toggleable in-game command line.
//!
//! Commands implement [`DevelopmentCommand`] and live in a
//! [`CommandRegistry`]; a [`DevelopmentConsole`] owns one, turns keyboard
//! input into command lines and shows their output together with captured
//! log records.
//!
//! ```rust
//! use gamework_console::{CommandOutcome, DevelopmentConsole};
//! use gamework_core::ConsoleConfig;
//!
//! let mut console = DevelopmentConsole::new(&ConsoleConfig::default());
//! console.state_mut().show();
//! assert_eq!(console.submit("close"), Ok(CommandOutcome::Ok));
//! assert!(!console.is_visible());
//! ```

pub mod command;
pub mod commands;
pub mod console;
pub mod registry;
pub mod sink;
mod tokenize;

pub use command::{CommandContext, CommandError, CommandOutcome, DevelopmentCommand};
pub use console::{ConsoleState, DevelopmentConsole};
pub use registry::{CommandRegistry, ConsoleError};
pub use sink::ConsoleSink;
pub use tokenize::tokenize;
