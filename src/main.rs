mod args;
mod console_driver;
mod driver;
mod input;

use std::process::ExitCode;

use babel17_frontend::lex::lex;
use clap::Parser;
use codespan_reporting::files::SimpleFiles;
use log::info;

use args::{Arguments, Command, Options};
use console_driver::ConsoleDriver;
use driver::Driver;

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let args = Arguments::parse();
    match &args.command {
        Command::Lex(options) => lex_file(options),
    }
}

/// Print the tokens of a file and report its lexical errors.
fn lex_file(options: &Options) -> anyhow::Result<ExitCode> {
    let source = input::read_file(&options.path)?;
    info!("read {}", options.path.display());

    let tokens = lex(&source);

    if !options.quiet {
        for token in tokens.tokens.iter() {
            println!("{}:{} {:?} {:?}", token.line, token.column, token.kind, token.text);
        }
    }

    let messages = tokens.messages();
    let failed = !messages.is_empty();

    let mut files = SimpleFiles::new();
    let file = files.add(options.path.display().to_string(), source);

    let mut driver = ConsoleDriver::new(files, file);
    driver.report(messages)?;

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
