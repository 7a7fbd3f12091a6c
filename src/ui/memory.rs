//! In-memory I/O for headless runs

use std::collections::VecDeque;

use crate::core::error::Result;
use crate::ui::{CommandReader, LineWriter};

/// Feeds a fixed list of commands, then reports end of input
#[derive(Debug, Clone, Default)]
pub struct ScriptedReader {
    commands: VecDeque<String>,
}

impl ScriptedReader {
    pub fn new<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            commands: commands.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.commands.len()
    }
}

impl CommandReader for ScriptedReader {
    fn read_command(&mut self) -> Result<Option<String>> {
        Ok(self.commands.pop_front())
    }
}

/// Keeps every written line
#[derive(Debug, Clone, Default)]
pub struct RecordingWriter {
    lines: Vec<String>,
}

impl RecordingWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl LineWriter for RecordingWriter {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_reader_drains_then_ends() {
        let mut reader = ScriptedReader::new(["w", "e"]);
        assert_eq!(reader.read_command().unwrap().as_deref(), Some("w"));
        assert_eq!(reader.remaining(), 1);
        assert_eq!(reader.read_command().unwrap().as_deref(), Some("e"));
        assert_eq!(reader.read_command().unwrap(), None);
    }

    #[test]
    fn test_recording_writer() {
        let mut writer = RecordingWriter::new();
        writer.write_line("A Goblin appears!").unwrap();
        assert!(writer.contains("Goblin"));
        assert_eq!(writer.lines().len(), 1);
    }
}
