use std::io::{self, Write};

use graph::AccessPath;
use walk::{Matches, ProgressSink};

/// How matches are written to standard output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One dotted access path per line.
    #[default]
    Text,
    /// A single JSON array of name arrays.
    Json,
}

/// Progress sink writing each match as a dotted line as soon as it is found.
///
/// The first write failure is kept and later writes are dropped, so a closed
/// pipe does not interrupt the walk itself.
pub(crate) struct StreamingProgress<'a, W: Write> {
    writer: &'a mut W,
    error: Option<io::Error>,
}

impl<'a, W: Write> StreamingProgress<'a, W> {
    pub(crate) fn new(writer: &'a mut W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    pub(crate) fn finish(self) -> io::Result<()> {
        match self.error {
            Some(error) => Err(error),
            None => self.writer.flush(),
        }
    }
}

impl<W: Write> ProgressSink for StreamingProgress<'_, W> {
    fn on_match(&mut self, path: &AccessPath) {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = writeln!(self.writer, "{path}") {
            self.error = Some(error);
        }
    }
}

pub(crate) fn write_text<W: Write>(writer: &mut W, matches: &Matches) -> io::Result<()> {
    for path in matches {
        writeln!(writer, "{path}")?;
    }
    writer.flush()
}

pub(crate) fn write_json<W: Write>(writer: &mut W, matches: &Matches) -> io::Result<()> {
    serde_json::to_writer(&mut *writer, matches)?;
    writeln!(writer)?;
    writer.flush()
}
