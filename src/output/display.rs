//! Display functions for the line-based game

use super::formatters::{letter_list, lines_left};
use crate::engine::{GuessOutcome, Session, Statistics};
use colored::Colorize;
use std::io::{self, Write};

/// Print the welcome banner
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_welcome(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, "{}", "  J U M P E R".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        "Welcome to Jumper! Guess the word before all parachute lines are cut."
    )?;
    Ok(())
}

/// Print the word line, the parachute and the wrong guesses
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_board(out: &mut impl Write, session: &Session) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  {}", session.word_line().as_str().bright_white().bold())?;
    writeln!(out)?;

    let parachute = session.parachute();
    for line in parachute.render_lines() {
        if parachute.is_cut_away() {
            writeln!(out, "{}", line.red())?;
        } else {
            writeln!(out, "{line}")?;
        }
    }

    let wrong = session.wrong_letters();
    writeln!(out)?;
    writeln!(out, "  {}", lines_left(parachute).as_str().bright_black())?;
    if !wrong.is_empty() {
        writeln!(out, "  Misses: {}", letter_list(&wrong).as_str().yellow())?;
    }
    Ok(())
}

/// Print feedback for a guess that was accepted
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_outcome(out: &mut impl Write, outcome: GuessOutcome) -> io::Result<()> {
    match outcome {
        GuessOutcome::Hit => writeln!(out, "{}", "✓ Good guess!".green()),
        GuessOutcome::Miss => writeln!(out, "{}", "✗ Snip! A parachute line was cut.".red()),
        GuessOutcome::Repeated => {
            writeln!(out, "{}", "You already guessed that letter.".yellow())
        }
    }
}

/// Print an error message for rejected input
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_error(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{} {message}", "❌".red())
}

/// Print the win banner
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_win(out: &mut impl Write, session: &Session) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "Yay! You are a winner! :)".bright_green().bold())?;
    writeln!(
        out,
        "Solved '{}' with {} {}.",
        session.word().text().bright_yellow(),
        session.parachute().count(),
        if session.parachute().count() == 1 {
            "miss"
        } else {
            "misses"
        }
    )
}

/// Print the loss banner, revealing the word
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_loss(out: &mut impl Write, session: &Session) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "Sad! You lose! :(".bright_red().bold())?;
    writeln!(out, "The word was '{}'.", session.word().text().bright_yellow())
}

/// Print the goodbye message with the run's statistics
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_farewell(out: &mut impl Write, stats: Statistics) -> io::Result<()> {
    writeln!(out)?;
    if stats.games_played > 0 {
        writeln!(
            out,
            "Games: {} | Won: {} | Win rate: {:.0}%",
            stats.games_played,
            stats.games_won,
            stats.win_rate()
        )?;
    }
    writeln!(out, "{}", "Thanks for playing!".bright_cyan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letter, SecretWord};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn session_with(word: &str, guesses: &str) -> Session {
        let mut session = Session::new(SecretWord::new(word).unwrap());
        for ch in guesses.chars() {
            session.apply(Letter::from_char(ch).unwrap());
        }
        session
    }

    #[test]
    fn board_shows_word_line_and_misses() {
        let session = session_with("hello", "lz");
        let text = render(|out| print_board(out, &session));

        assert!(text.contains("_ _ l l _"));
        assert!(text.contains("Misses: z"));
        assert!(text.contains("4 of 5 lines left"));
    }

    #[test]
    fn board_without_misses_omits_list() {
        let session = session_with("hello", "");
        let text = render(|out| print_board(out, &session));
        assert!(text.contains("_ _ _ _ _"));
        assert!(!text.contains("Misses"));
    }

    #[test]
    fn loss_reveals_word() {
        let session = session_with("trees", "abcdq");
        let text = render(|out| print_loss(out, &session));
        assert!(text.contains("You lose"));
        assert!(text.contains("'trees'"));
    }

    #[test]
    fn win_reports_misses() {
        let session = session_with("hello", "hzelo");
        let text = render(|out| print_win(out, &session));
        assert!(text.contains("winner"));
        assert!(text.contains("with 1 miss."));
    }

    #[test]
    fn farewell_with_stats() {
        let stats = Statistics {
            games_played: 4,
            games_won: 3,
        };
        let text = render(|out| print_farewell(out, stats));
        assert!(text.contains("Games: 4 | Won: 3 | Win rate: 75%"));
        assert!(text.contains("Thanks for playing!"));
    }

    #[test]
    fn farewell_without_games() {
        let text = render(|out| print_farewell(out, Statistics::default()));
        assert!(!text.contains("Games:"));
        assert!(text.contains("Thanks for playing!"));
    }
}
