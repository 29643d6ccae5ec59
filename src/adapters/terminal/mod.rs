//! Terminal adapter - a line-oriented stand-in for the web pages.
//!
//! - `Command` - parses one input line
//! - `Console` - runs commands against the page flow controller

mod command;
mod console;

pub use command::{Command, CommandError, Fields, LOGIN_FIELDS, REGISTER_FIELDS};
pub use console::{Console, Control};
