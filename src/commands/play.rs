//! Line-based game mode
//!
//! Reads guesses and replay answers one line at a time and drives the
//! director until the player declines another round or input runs out.

use crate::engine::{Director, DirectorError, GameState, Statistics};
use crate::output::{
    print_board, print_error, print_farewell, print_loss, print_outcome, print_welcome, print_win,
};
use anyhow::Result;
use log::{debug, info};
use std::io::{BufRead, Write};

const GUESS_PROMPT: &str = "Guess a letter [a-z]: ";
const REPLAY_PROMPT: &str = "Would you like to play again? [y/n]: ";

/// Run the line-based game loop
///
/// End of input at any prompt is treated as declining to play again.
/// Returns the statistics for every session finished during the run.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R, W>(director: &mut Director, mut input: R, mut output: W) -> Result<Statistics>
where
    R: BufRead,
    W: Write,
{
    print_welcome(&mut output)?;

    while !director.is_terminated() {
        match director.state() {
            GameState::Playing => {
                print_board(&mut output, director.session())?;

                let Some(line) = prompt(&mut input, &mut output, GUESS_PROMPT)? else {
                    debug!("Input closed while waiting for a guess");
                    director.quit();
                    break;
                };

                match director.submit_guess(&line) {
                    Ok(outcome) => print_outcome(&mut output, outcome)?,
                    Err(DirectorError::InvalidGuess(err)) => {
                        print_error(&mut output, &err.to_string())?;
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            GameState::Won => {
                print_board(&mut output, director.session())?;
                print_win(&mut output, director.session())?;
                director.prompt_replay()?;
            }
            GameState::Lost => {
                print_board(&mut output, director.session())?;
                print_loss(&mut output, director.session())?;
                director.prompt_replay()?;
            }
            GameState::AwaitingReplay => {
                let Some(answer) = prompt(&mut input, &mut output, REPLAY_PROMPT)? else {
                    debug!("Input closed at the replay prompt");
                    director.quit();
                    break;
                };

                if director.answer_replay(&answer)? == GameState::Playing {
                    info!("Player chose to play again");
                    writeln!(output, "\n🔄 New game started!")?;
                }
            }
            GameState::Terminated => break,
        }
    }

    let stats = director.stats();
    print_farewell(&mut output, stats)?;
    output.flush()?;
    Ok(stats)
}

/// Write a prompt and read one line, returning `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<Option<String>> {
    write!(output, "\n{text}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MAX_MISSES, SecretWord};
    use crate::wordlists::{CANDIDATES, WordSource};
    use std::io::Cursor;

    fn director(word: &str) -> Director {
        Director::with_word(WordSource::seeded(11), SecretWord::new(word).unwrap())
    }

    fn run(director: &mut Director, input: &str) -> (Statistics, String) {
        colored::control::set_override(false);
        let mut output = Vec::new();
        let stats = run_play(director, Cursor::new(input.to_string()), &mut output).unwrap();
        (stats, String::from_utf8(output).unwrap())
    }

    #[test]
    fn win_then_decline() {
        let mut director = director("hello");
        let (stats, output) = run(&mut director, "h\ne\nl\no\nn\n");

        assert!(output.contains("Welcome to Jumper!"));
        assert!(output.contains("h e l l o"));
        assert!(output.contains("Yay! You are a winner! :)"));
        assert!(output.contains(REPLAY_PROMPT));
        assert!(output.contains("Thanks for playing!"));
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert!(director.is_terminated());
    }

    #[test]
    fn loss_then_decline() {
        let mut director = director("trees");
        let (stats, output) = run(&mut director, "a\nb\nc\nd\nq\nn\n");

        assert!(output.contains("Sad! You lose! :("));
        assert!(output.contains("The word was 'trees'."));
        assert_eq!(director.session().parachute().count(), MAX_MISSES);
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 0);
    }

    #[test]
    fn replay_yes_starts_new_session() {
        let mut director = director("hello");
        let (_, output) = run(&mut director, "h\ne\nl\no\ny\n");

        assert!(output.contains("New game started!"));
        // Input ran out during the second session
        assert!(director.is_terminated());
        let session = director.session();
        assert!(CANDIDATES.contains(&session.word().text()));
        assert!(session.guesses().is_empty());
        assert_eq!(session.parachute().count(), 0);
    }

    #[test]
    fn replay_any_other_answer_terminates() {
        let mut director = director("hello");
        let (_, output) = run(&mut director, "h\ne\nl\no\nsure\nh\n");

        assert!(director.is_terminated());
        assert!(!output.contains("New game started!"));
        assert_eq!(output.matches(REPLAY_PROMPT).count(), 1);
    }

    #[test]
    fn invalid_input_is_reported_and_not_counted() {
        let mut director = director("hello");
        let (_, output) = run(&mut director, "\nxy\n7\nh\n");

        assert!(output.contains("Please enter a letter"));
        assert!(output.contains("exactly one letter"));
        assert!(output.contains("'7' is not a letter"));
        assert_eq!(director.session().parachute().count(), 0);
        assert_eq!(director.session().word_line(), "h _ _ _ _");
    }

    #[test]
    fn repeated_guess_is_reported() {
        let mut director = director("hello");
        let (_, output) = run(&mut director, "z\nz\n");

        assert!(output.contains("You already guessed that letter."));
        assert_eq!(director.session().parachute().count(), 1);
    }

    #[test]
    fn empty_input_ends_run() {
        let mut director = director("hello");
        let (stats, output) = run(&mut director, "");

        assert!(director.is_terminated());
        assert_eq!(stats, Statistics::default());
        assert!(output.contains("_ _ _ _ _"));
        assert!(output.contains("Thanks for playing!"));
    }

    #[test]
    fn two_games_in_a_row() {
        let mut director = director("hello");
        let mut script = String::from("h\ne\nl\no\ny\n");
        // Second word is unknown up front, so guess the whole alphabet
        for ch in 'a'..='z' {
            script.push(ch);
            script.push('\n');
        }
        script.push_str("n\n");

        let (stats, _) = run(&mut director, &script);
        assert_eq!(stats.games_played, 2);
        assert!(director.is_terminated());
    }
}
