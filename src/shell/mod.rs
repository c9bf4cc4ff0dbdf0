pub mod command;
pub mod repl;

pub use command::{Command, CommandError};
pub use repl::run;
