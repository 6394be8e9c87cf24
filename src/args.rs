use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Front end tools for the Babel-17 language.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
#[command(propagate_version = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the tokens of a source file and report lexical errors.
    #[command(visible_alias = "l")]
    Lex(Options),
}

#[derive(Debug, Args)]
pub struct Options {
    /// Only report diagnostics, without printing the tokens.
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub quiet: bool,

    #[arg(required = true)]
    pub path: PathBuf,
}
