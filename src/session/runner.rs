//! Interactive loop over injected I/O

use crate::core::error::Result;
use crate::core::rng::RandomSource;
use crate::session::game::GameSession;
use crate::session::state::GameOutcome;
use crate::ui::{CommandReader, LineWriter};

/// Why [`GameSession::run`] returned
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    GameOver(GameOutcome),
    /// Input ran out before the game ended
    InputClosed,
}

impl<R: RandomSource> GameSession<R> {
    /// Drive the session until game over or end of input
    ///
    /// Before each read the hero's status (and the enemy's, in combat) and
    /// the command menu are written. End of input is resolved once as an
    /// empty command, then the loop stops since no further command can
    /// arrive.
    pub fn run(
        &mut self,
        reader: &mut dyn CommandReader,
        writer: &mut dyn LineWriter,
    ) -> Result<SessionEnd> {
        loop {
            if let Some(outcome) = self.outcome() {
                return Ok(SessionEnd::GameOver(outcome.clone()));
            }

            for line in self.status().lines() {
                writer.write_line(&line)?;
            }
            writer.write_line(&self.menu())?;

            let input = reader.read_command()?;
            let log = self.play_turn(input.as_deref());
            for line in log.lines() {
                writer.write_line(&line)?;
            }

            if input.is_none() {
                return Ok(match self.outcome() {
                    Some(outcome) => SessionEnd::GameOver(outcome.clone()),
                    None => {
                        tracing::warn!(turns = self.stats().turns, "input closed before game over");
                        SessionEnd::InputClosed
                    }
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::core::rng::ScriptedRandom;
    use crate::entity::Player;
    use crate::rules::catalog::EnemyCatalog;
    use crate::ui::{RecordingWriter, ScriptedReader};

    fn session(rolls: &[u32]) -> GameSession<ScriptedRandom> {
        let config = GameConfig::default();
        let player = Player::new("Knight", &config.hero);
        GameSession::new(
            player,
            EnemyCatalog::builtin(),
            config,
            ScriptedRandom::new(rolls.iter().copied()),
        )
    }

    #[test]
    fn test_run_until_quit() {
        let mut session = session(&[90]);
        let mut reader = ScriptedReader::new(["w", "s", "w"]);
        let mut writer = RecordingWriter::new();

        let end = session.run(&mut reader, &mut writer).unwrap();

        assert_eq!(end, SessionEnd::GameOver(GameOutcome::Quit));
        assert_eq!(reader.remaining(), 1);
        assert!(writer.contains("Nothing happens"));
        assert!(writer.contains("Farewell"));
    }

    #[test]
    fn test_run_stops_when_input_closes() {
        let mut session = session(&[]);
        let mut reader = ScriptedReader::new(["q"]);
        let mut writer = RecordingWriter::new();

        let end = session.run(&mut reader, &mut writer).unwrap();

        assert_eq!(end, SessionEnd::InputClosed);
        assert_eq!(session.stats().turns, 2);
        assert_eq!(writer.lines().last().unwrap(), "Invalid command.");
    }

    #[test]
    fn test_run_writes_status_and_menu_before_each_read() {
        let mut session = session(&[]);
        let mut reader = ScriptedReader::new(["s"]);
        let mut writer = RecordingWriter::new();

        session.run(&mut reader, &mut writer).unwrap();

        let lines = writer.lines();
        assert!(lines[0].starts_with("Knight"));
        assert_eq!(lines[1], "[w] advance  [q] rest  [s] quit");
    }
}
