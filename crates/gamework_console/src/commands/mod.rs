//! Commands every console starts with.

mod clear;
mod close;
mod help;

pub use clear::ClearCommand;
pub use close::CloseCommand;
pub use help::HelpCommand;

use crate::command::DevelopmentCommand;

pub(crate) fn builtins() -> Vec<Box<dyn DevelopmentCommand>> {
    vec![Box::new(CloseCommand), Box::new(HelpCommand), Box::new(ClearCommand)]
}
