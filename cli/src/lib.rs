//! Library behind the `protrans` command-line tool.
//!
//! - [`cli`] - argument definitions
//! - [`commands`] - command execution against injected writers
//! - [`check`] - properties file validation
//! - [`output`] - human and JSON rendering
//! - [`error`] - the [`error::CliError`] type

pub mod check;
pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
