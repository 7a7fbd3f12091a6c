//! I/O collaborators
//!
//! The session only ever talks to a [`CommandReader`] and a [`LineWriter`].
//! Console implementations wrap stdin/stdout; the in-memory ones drive
//! headless tests.

pub mod console;
pub mod memory;

pub use console::{ConsoleReader, ConsoleWriter};
pub use memory::{RecordingWriter, ScriptedReader};

use crate::core::error::Result;

/// Source of player commands
pub trait CommandReader {
    /// Next line of input, or `None` at end of input
    fn read_command(&mut self) -> Result<Option<String>>;
}

/// Append-only sink for narration
pub trait LineWriter {
    fn write_line(&mut self, line: &str) -> Result<()>;
}

impl<T: CommandReader + ?Sized> CommandReader for &mut T {
    fn read_command(&mut self) -> Result<Option<String>> {
        (**self).read_command()
    }
}

impl<T: LineWriter + ?Sized> LineWriter for &mut T {
    fn write_line(&mut self, line: &str) -> Result<()> {
        (**self).write_line(line)
    }
}
