//! Director state machine
//!
//! Owns the current session and decides when it is won, lost, restarted or
//! finished. Each method checks the current state and refuses transitions
//! that are not allowed from it.

use super::session::{GuessOutcome, Session};
use crate::core::{Letter, LetterError, SecretWord};
use crate::wordlists::WordSource;
use log::{debug, info, trace};
use std::fmt;

/// Where the director is in the play/replay cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
    AwaitingReplay,
    Terminated,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
            Self::AwaitingReplay => "awaiting replay",
            Self::Terminated => "terminated",
        };
        f.write_str(name)
    }
}

/// Error type for rejected director operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectorError {
    /// The guess was not a single letter; the session is unchanged
    InvalidGuess(LetterError),
    /// The operation is not allowed in the current state
    WrongState {
        operation: &'static str,
        state: GameState,
    },
}

impl fmt::Display for DirectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuess(err) => write!(f, "{err}"),
            Self::WrongState { operation, state } => {
                write!(f, "Cannot {operation} while the game is {state}")
            }
        }
    }
}

impl std::error::Error for DirectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGuess(err) => Some(err),
            Self::WrongState { .. } => None,
        }
    }
}

impl From<LetterError> for DirectorError {
    fn from(err: LetterError) -> Self {
        Self::InvalidGuess(err)
    }
}

/// Results across every session played in this run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
}

impl Statistics {
    #[must_use]
    pub const fn games_lost(&self) -> usize {
        self.games_played.saturating_sub(self.games_won)
    }

    /// Percentage of finished games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

/// Drives sessions through `Playing -> Won/Lost -> AwaitingReplay -> Playing/Terminated`
pub struct Director {
    source: WordSource,
    session: Session,
    state: GameState,
    stats: Statistics,
}

impl Director {
    /// Start a director with a freshly drawn word
    #[must_use]
    pub fn new(mut source: WordSource) -> Self {
        let word = source.draw();
        Self::with_word(source, word)
    }

    /// Start a director whose first session uses `word`
    ///
    /// Later sessions draw from `source`.
    #[must_use]
    pub fn with_word(source: WordSource, word: SecretWord) -> Self {
        info!("Starting session with a {}-letter word", word.len());
        Self {
            source,
            session: Session::new(word),
            state: GameState::Playing,
            stats: Statistics::default(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[inline]
    #[must_use]
    pub const fn stats(&self) -> Statistics {
        self.stats
    }

    #[inline]
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.state == GameState::Terminated
    }

    /// Apply one raw guess to the current session
    ///
    /// Moves to `Won` or `Lost` when the guess decides the session.
    ///
    /// # Errors
    /// Returns `DirectorError::InvalidGuess` if the input is not a single
    /// letter, or `DirectorError::WrongState` outside of `Playing`. The
    /// session is unchanged in both cases.
    ///
    /// # Examples
    /// ```
    /// use jumper::core::SecretWord;
    /// use jumper::engine::{Director, GameState, GuessOutcome};
    /// use jumper::wordlists::WordSource;
    ///
    /// let word = SecretWord::new("hello").unwrap();
    /// let mut director = Director::with_word(WordSource::seeded(0), word);
    ///
    /// assert_eq!(director.submit_guess("h").unwrap(), GuessOutcome::Hit);
    /// assert_eq!(director.submit_guess("z").unwrap(), GuessOutcome::Miss);
    /// assert!(director.submit_guess("zz").is_err());
    /// assert_eq!(director.state(), GameState::Playing);
    /// ```
    pub fn submit_guess(&mut self, input: &str) -> Result<GuessOutcome, DirectorError> {
        self.expect_state(GameState::Playing, "guess")?;

        let letter = Letter::parse(input)?;
        let outcome = self.session.apply(letter);
        trace!("Guess '{letter}' -> {outcome:?}");

        if self.session.is_won() {
            self.finish(GameState::Won);
        } else if self.session.is_lost() {
            self.finish(GameState::Lost);
        }

        Ok(outcome)
    }

    /// Move a decided session to the replay prompt
    ///
    /// # Errors
    /// Returns `DirectorError::WrongState` unless the state is `Won` or `Lost`.
    pub fn prompt_replay(&mut self) -> Result<(), DirectorError> {
        match self.state {
            GameState::Won | GameState::Lost => {
                self.state = GameState::AwaitingReplay;
                Ok(())
            }
            state => Err(DirectorError::WrongState {
                operation: "ask to play again",
                state,
            }),
        }
    }

    /// Handle the answer to "play again?"
    ///
    /// `y` (any case) starts a new session with a new word; anything
    /// else terminates. Returns the resulting state.
    ///
    /// # Errors
    /// Returns `DirectorError::WrongState` outside of `AwaitingReplay`.
    pub fn answer_replay(&mut self, answer: &str) -> Result<GameState, DirectorError> {
        self.expect_state(GameState::AwaitingReplay, "answer the replay prompt")?;

        if wants_replay(answer) {
            let word = self.source.draw();
            info!("Starting new session with a {}-letter word", word.len());
            self.session.reset(word);
            self.state = GameState::Playing;
        } else {
            self.quit();
        }

        Ok(self.state)
    }

    /// Stop playing from any state
    pub fn quit(&mut self) {
        if self.state != GameState::Terminated {
            info!(
                "Terminating after {} games ({} won)",
                self.stats.games_played, self.stats.games_won
            );
            self.state = GameState::Terminated;
        }
    }

    fn finish(&mut self, state: GameState) {
        self.stats.games_played += 1;
        if state == GameState::Won {
            self.stats.games_won += 1;
        }
        debug!(
            "Session {state}: word '{}' after {} guesses",
            self.session.word(),
            self.session.guesses().len()
        );
        self.state = state;
    }

    fn expect_state(&self, expected: GameState, operation: &'static str) -> Result<(), DirectorError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(DirectorError::WrongState {
                operation,
                state: self.state,
            })
        }
    }
}

fn wants_replay(answer: &str) -> bool {
    answer.trim().to_lowercase() == "y"
}
