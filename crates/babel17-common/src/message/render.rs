//! Conversion into `codespan-reporting` diagnostics, so that drivers can print
//! messages with source snippets.

use std::ops::Range;

use codespan_reporting::diagnostic::{Diagnostic as Report, Label};
use codespan_reporting::files::Files;
use log::warn;

use super::{Diagnostic, Location, Position};

impl Diagnostic {
    /// Produce a printable report for this diagnostic, assuming its location
    /// refers to the given file.
    pub fn to_report<'a, F: Files<'a>>(&self, files: &'a F, file: F::FileId) -> Report<F::FileId> {
        let range = byte_range(files, file, self.location).unwrap_or_else(|| {
            warn!("diagnostic at {} is outside its file", self.location);
            0..0
        });

        Report::error()
            .with_code(self.code)
            .with_message(self.message.clone())
            .with_labels(vec![Label::primary(file, range)])
    }
}

/// Find the bytes covered by a location. The end is exclusive, so the
/// character at `location.end` is included.
fn byte_range<'a, F: Files<'a>>(
    files: &'a F,
    file: F::FileId,
    location: Location,
) -> Option<Range<usize>> {
    let source = files.source(file).ok()?;
    let source = source.as_ref();

    let start = byte_offset(files, file, source, location.start, false)?;
    let end = byte_offset(files, file, source, location.end, true)?;

    Some(start..end.max(start))
}

fn byte_offset<'a, F: Files<'a>>(
    files: &'a F,
    file: F::FileId,
    source: &str,
    at: Position,
    after: bool,
) -> Option<usize> {
    let line = files.line_range(file, at.line.checked_sub(1)?).ok()?;
    let text = source.get(line.clone())?;

    let skip = if after { at.column } else { at.column.checked_sub(1)? };
    let offset = text
        .char_indices()
        .nth(skip)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len());

    Some(line.start + offset)
}
