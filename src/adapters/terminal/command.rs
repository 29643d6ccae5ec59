//! Line commands accepted by the terminal console.
//!
//! Each input line is split into words and handed to clap, with no binary
//! name in front. Form commands take `key=value` words; the keys are checked
//! against the form they fill after clap has parsed the line.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use thiserror::Error;

use crate::domain::assessment::AssessmentForm;

/// Field values given as `key=value` words, in the order typed.
pub type Fields = Vec<(String, String)>;

/// Fields accepted by `register`.
pub const REGISTER_FIELDS: [&str; 4] = ["fullName", "email", "password", "confirmPassword"];

/// Fields accepted by `login`.
pub const LOGIN_FIELDS: [&str; 2] = ["email", "password"];

/// Root parser for one console line.
#[derive(Debug, Parser)]
#[command(name = "heartwise", no_binary_name = true, disable_help_subcommand = true)]
struct ConsoleLine {
    #[command(subcommand)]
    command: Command,
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Open a page by path.
    Goto {
        /// Route path, e.g. /results.
        path: String,
    },
    /// Leave the landing page for registration.
    GetStarted,
    /// Leave the landing page for login.
    SignIn,
    /// Submit the registration form.
    Register {
        /// fullName=.. email=.. password=.. confirmPassword=..
        #[arg(value_parser = parse_pair)]
        fields: Vec<(String, String)>,
    },
    /// Submit the login form.
    Login {
        /// email=.. password=..
        #[arg(value_parser = parse_pair)]
        fields: Vec<(String, String)>,
    },
    /// Start the assessment from the home page.
    Begin,
    /// Sign out from the home page.
    Logout,
    /// Submit the assessment form.
    Submit {
        /// <field>=<value> for each assessment answer.
        #[arg(value_parser = parse_pair)]
        fields: Vec<(String, String)>,
    },
    /// Leave the assessment.
    Cancel,
    /// Take a new assessment from the results page.
    New,
    /// Go back home from the results page.
    Home,
    /// Wait for the prediction.
    Wait,
    /// Save the results as JSON.
    Export {
        /// Target file, defaults to the standard export name.
        file: Option<PathBuf>,
    },
    /// Show the signed-in visitor.
    #[command(name = "whoami")]
    WhoAmI,
    /// List commands, or describe one.
    Help {
        /// Command to describe.
        command: Option<String>,
    },
    /// Leave the console.
    #[command(alias = "exit")]
    Quit,
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unterminated quote")]
    UnterminatedQuote,

    /// Rejected by the command grammar; `message` is clap's first line.
    #[error("{message}")]
    Usage { kind: ErrorKind, message: String },

    #[error("'{command}' has no field '{field}'")]
    UnknownField { command: &'static str, field: String },

    #[error("'{command}' was given '{field}' more than once")]
    DuplicateField { command: &'static str, field: String },
}

impl CommandError {
    fn usage(error: clap::Error) -> Self {
        let rendered = error.to_string();
        let first = rendered.lines().next().unwrap_or_default();
        Self::Usage {
            kind: error.kind(),
            message: first.trim_start_matches("error: ").to_string(),
        }
    }
}

impl Command {
    /// Command word, safe to log (arguments may hold passwords).
    pub fn name(&self) -> &'static str {
        match self {
            Command::Goto { .. } => "goto",
            Command::GetStarted => "get-started",
            Command::SignIn => "sign-in",
            Command::Register { .. } => "register",
            Command::Login { .. } => "login",
            Command::Begin => "begin",
            Command::Logout => "logout",
            Command::Submit { .. } => "submit",
            Command::Cancel => "cancel",
            Command::New => "new",
            Command::Home => "home",
            Command::Wait => "wait",
            Command::Export { .. } => "export",
            Command::WhoAmI => "whoami",
            Command::Help { .. } => "help",
            Command::Quit => "quit",
        }
    }

    /// Parses one line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let tokens = tokenize(line)?;
        if tokens.is_empty() {
            return Ok(None);
        }

        let command = match ConsoleLine::try_parse_from(&tokens) {
            Ok(line) => line.command,
            Err(e) if e.kind() == ErrorKind::DisplayHelp => Command::Help {
                command: tokens.first().cloned(),
            },
            Err(e) => return Err(CommandError::usage(e)),
        };

        match &command {
            Command::Register { fields } => check_fields("register", fields, &REGISTER_FIELDS)?,
            Command::Login { fields } => check_fields("login", fields, &LOGIN_FIELDS)?,
            Command::Submit { fields } => {
                check_fields("submit", fields, &AssessmentForm::FIELD_NAMES)?
            }
            _ => {}
        }

        Ok(Some(command))
    }

    /// Usage text for every command, or for `command` when it names one.
    pub fn help_text(command: Option<&str>) -> String {
        let mut root = ConsoleLine::command();
        let described = command
            .and_then(|name| root.find_subcommand_mut(name).map(|sub| sub.render_help()));
        described.unwrap_or_else(|| root.render_help()).to_string()
    }
}

/// Splits a line on whitespace. Double quotes group words and are removed.
fn tokenize(line: &str) -> Result<Vec<String>, CommandError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut started = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                started = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if started {
                    tokens.push(std::mem::take(&mut current));
                    started = false;
                }
            }
            c => {
                current.push(c);
                started = true;
            }
        }
    }

    if in_quotes {
        return Err(CommandError::UnterminatedQuote);
    }
    if started {
        tokens.push(current);
    }
    Ok(tokens)
}

fn parse_pair(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| "expected key=value".to_string())
}

fn check_fields(
    command: &'static str,
    fields: &Fields,
    allowed: &[&str],
) -> Result<(), CommandError> {
    for (index, (key, _)) in fields.iter().enumerate() {
        if !allowed.contains(&key.as_str()) {
            return Err(CommandError::UnknownField {
                command,
                field: key.clone(),
            });
        }
        if fields[..index].iter().any(|(earlier, _)| earlier == key) {
            return Err(CommandError::DuplicateField {
                command,
                field: key.clone(),
            });
        }
    }
    Ok(())
}
