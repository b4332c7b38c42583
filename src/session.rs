//! Round lifecycle: guess editing, submission, restart.
//!
//! This module is the single place that mutates round state. A session is
//! exclusively owned by its caller (the presentation layer); every
//! operation completes synchronously in memory.

use crate::alphabet::Alphabet;
use crate::chance::ChanceSource;
use crate::code::{Code, CodeKind};
use crate::config::{ConfigError, LengthPolicy, SessionConfig};

/// Result of submitting the in-progress guess.
///
/// Player mistakes are ordinary values, never errors: incomplete and
/// duplicate guesses are expected and surfaced as user feedback.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Guess recorded as a scored attempt.
    Accepted,
    /// At least one peg slot is still unset. Nothing recorded.
    IncompleteGuess,
    /// The same peg sequence was already recorded this round. Nothing recorded.
    DuplicateGuess,
}

/// One round of code-breaking: a secret, the guess being edited, and the
/// ordered scored attempts so far.
///
/// Invariants: the secret, the guess, and every attempt share one length;
/// attempts are append-only within a round and cleared on restart. There
/// is no terminal state — win detection is a derived read over the last
/// attempt ([`Code::is_winning`]).
#[derive(Debug)]
pub struct GameSession {
    secret: Code,
    guess: Code,
    attempts: Vec<Code>,
    alphabet: Alphabet,
    config: SessionConfig,
    chance: ChanceSource,
}

impl GameSession {
    /// Start a round: validate the config, derive the code length from the
    /// length policy, and generate the secret.
    pub fn new(
        alphabet: Alphabet,
        config: SessionConfig,
        mut chance: ChanceSource,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let len = derive_len(&config, &mut chance);
        let mut secret = Code::new(CodeKind::Secret, len);
        secret.randomize(&alphabet, &mut chance);
        tracing::debug!(secret = ?secret, "secret generated");

        Ok(Self {
            guess: Code::new(CodeKind::Guess, len),
            secret,
            attempts: Vec::new(),
            alphabet,
            config,
            chance,
        })
    }

    /// Code length for the current round.
    pub fn code_len(&self) -> usize {
        self.secret.len()
    }

    pub fn guess(&self) -> &Code {
        &self.guess
    }

    /// Scored attempts, oldest first.
    pub fn attempts(&self) -> &[Code] {
        &self.attempts
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The secret code, only when `reveal_secret` is enabled.
    pub fn secret(&self) -> Option<&Code> {
        self.config.reveal_secret.then_some(&self.secret)
    }

    /// Cycle the symbol at `index` forward through the alphabet.
    ///
    /// An unset slot, or a symbol no longer in the alphabet (after a theme
    /// switch), goes to the alphabet's first symbol.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds for the current code length.
    pub fn cycle_guess_peg(&mut self, index: usize) {
        assert!(
            index < self.guess.len(),
            "peg index {} out of bounds for code length {}",
            index,
            self.guess.len()
        );
        let next = match self.guess.pegs()[index]
            .as_ref()
            .and_then(|current| self.alphabet.next_after(current))
        {
            Some(symbol) => symbol.clone(),
            None => self.alphabet.first().clone(),
        };
        self.guess.set_peg(index, next);
    }

    /// Score the in-progress guess against the secret and validate it.
    ///
    /// Incompleteness is checked before duplication, so a guess that is
    /// both reports [`SubmitOutcome::IncompleteGuess`]. On acceptance the
    /// attempt is appended to the history and the guess is left unchanged;
    /// callers that want a fresh row call [`GameSession::clear_guess`].
    pub fn submit_guess(&mut self) -> SubmitOutcome {
        let score = self.guess.match_against(&self.secret);
        let attempt = self.guess.to_attempt(score);

        if !self.guess.is_complete() {
            tracing::debug!("guess rejected: unset pegs remain");
            return SubmitOutcome::IncompleteGuess;
        }
        if self.attempts.iter().any(|a| a.same_pegs(&attempt)) {
            tracing::debug!("guess rejected: already attempted");
            return SubmitOutcome::DuplicateGuess;
        }

        tracing::debug!(attempt = ?attempt, "attempt recorded");
        self.attempts.push(attempt);
        SubmitOutcome::Accepted
    }

    /// Reset every guess slot to unset.
    pub fn clear_guess(&mut self) {
        self.guess.clear();
    }

    /// Start a new round with the current alphabet: regenerate the secret,
    /// reset the guess, clear the attempt history. The code length is
    /// re-derived from the length policy.
    pub fn restart(&mut self) {
        let len = derive_len(&self.config, &mut self.chance);
        self.secret = Code::new(CodeKind::Secret, len);
        self.secret.randomize(&self.alphabet, &mut self.chance);
        self.guess = Code::new(CodeKind::Guess, len);
        self.attempts.clear();
        tracing::debug!(secret = ?self.secret, "round restarted");
    }

    /// Start a new round with a replacement alphabet (theme switch).
    ///
    /// The alphabet was validated at construction, so this cannot fail.
    pub fn restart_with(&mut self, alphabet: Alphabet) {
        self.alphabet = alphabet;
        self.restart();
    }
}

fn derive_len(config: &SessionConfig, chance: &mut ChanceSource) -> usize {
    match config.length {
        LengthPolicy::Fixed { len } => len,
        LengthPolicy::SampledPerRound { min, max } => chance.sample_len(min, max),
    }
}
