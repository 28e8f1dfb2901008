//! Line-oriented console
//!
//! Plays one session over any reader and writer: one command per line
//! while exploring, then one line with the name of the accused.

use crate::game::{Game, GamePhase};
use std::io::{self, BufRead, Write};

/// Run the game to completion. End of input while exploring leaves the
/// mansion without an accusation; end of input at the accusation prompt
/// counts as an empty name.
pub fn run<R: BufRead, W: Write>(game: &mut Game, mut input: R, mut output: W) -> io::Result<()> {
    for message in &game.message_log {
        writeln!(output, "{}", message.line())?;
    }

    let mut line = String::new();
    while game.phase == GamePhase::Exploring {
        writeln!(output, "{}", game.exits_line())?;
        write!(output, "Choice: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            writeln!(output, "[SYSTEM] Input closed. Leaving the mansion without a verdict.")?;
            return Ok(());
        }

        writeln!(output)?;
        for text in game.execute_input(line.trim()) {
            writeln!(output, "{}", text)?;
        }
    }

    write!(output, "\nName the suspect you want to accuse (e.g. \"Mr Green\"): ")?;
    output.flush()?;
    line.clear();
    input.read_line(&mut line)?;
    writeln!(output)?;
    for text in game.accuse(line.trim()) {
        writeln!(output, "{}", text)?;
    }

    writeln!(output, "\n[SYSTEM] The end. Thanks for playing!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Fixture;
    use crate::game::verdict::Verdict;

    fn play(script: &str) -> (Game, String) {
        let mut game = Game::new(&Fixture::manor()).unwrap();
        let mut out = Vec::new();
        run(&mut game, script.as_bytes(), &mut out).unwrap();
        (game, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_scripted_session() {
        let (game, out) = play("r\nr\nx\nMr Red\n");
        assert_eq!(game.verdict(), Some(Verdict::Sufficient { count: 2 }));
        assert!(out.contains("[ROOM] You entered: Office"));
        assert!(out.contains(" - Broken glass"));
        assert!(out.contains("[SUCCESS]"));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let (game, out) = play("z\nx\n\n");
        assert!(out.contains("[ERROR] Unknown command"));
        assert_eq!(game.stats.rejected_commands, 1);
        assert_eq!(game.verdict(), Some(Verdict::Invalid));
    }

    #[test]
    fn test_eof_while_exploring() {
        let (game, out) = play("l\n");
        assert_eq!(game.phase, GamePhase::Exploring);
        assert!(out.contains("without a verdict"));
    }
}
