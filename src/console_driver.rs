use babel17_common::message::Messages;
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use codespan_reporting::term::{self, Config, DisplayStyle};

use crate::driver::Driver;

/// Prints diagnostics about a single file to stderr.
pub struct ConsoleDriver {
    files: SimpleFiles<String, String>,
    file: usize,
    writer: StandardStream,
    config: Config,
}

impl ConsoleDriver {
    pub fn new(files: SimpleFiles<String, String>, file: usize) -> Self {
        Self {
            files,
            file,
            writer: StandardStream::stderr(ColorChoice::Auto),
            config: Config {
                display_style: DisplayStyle::Rich,
                ..Default::default()
            },
        }
    }
}

impl Driver for ConsoleDriver {
    fn report(&mut self, messages: Messages) -> anyhow::Result<()> {
        for msg in messages {
            let report = msg.to_report(&self.files, self.file);
            term::emit(&mut self.writer, &self.config, &self.files, &report)?;
        }

        Ok(())
    }
}
