//! Line-based console I/O

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use crate::core::error::Result;
use crate::ui::{CommandReader, LineWriter};

/// Reads one command per line
pub struct ConsoleReader<R: BufRead> {
    input: R,
}

impl<R: BufRead> ConsoleReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl ConsoleReader<StdinLock<'static>> {
    pub fn stdin() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock())
    }
}

impl<R: BufRead> CommandReader for ConsoleReader<R> {
    fn read_command(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\r', '\n'][..]);
        Ok(Some(trimmed.to_string()))
    }
}

/// Writes one narration line at a time, flushing after each
pub struct ConsoleWriter<W: Write> {
    output: W,
}

impl<W: Write> ConsoleWriter<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl ConsoleWriter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> LineWriter for ConsoleWriter<W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reader_strips_line_endings_and_reports_eof() {
        let mut reader = ConsoleReader::new(Cursor::new("w\r\nE\n\nlast"));
        assert_eq!(reader.read_command().unwrap(), Some("w".to_string()));
        assert_eq!(reader.read_command().unwrap(), Some("E".to_string()));
        assert_eq!(reader.read_command().unwrap(), Some(String::new()));
        assert_eq!(reader.read_command().unwrap(), Some("last".to_string()));
        assert_eq!(reader.read_command().unwrap(), None);
    }

    #[test]
    fn test_writer_appends_newlines() {
        let mut writer = ConsoleWriter::new(Vec::new());
        writer.write_line("first").unwrap();
        writer.write_line("second").unwrap();
        assert_eq!(String::from_utf8(writer.into_inner()).unwrap(), "first\nsecond\n");
    }
}
