//! Peg codes and the duplicate-safe matching algorithm.

use crate::alphabet::{Alphabet, Symbol};
use crate::chance::ChanceSource;

/// Per-position outcome of scoring a guess against a secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match {
    /// Right symbol in the right position.
    Exact,
    /// Symbol occurs in the secret, but at a different position.
    Present,
    /// Symbol does not occur in the remaining secret pool.
    Absent,
}

/// One outcome per code position, same length as the code it scores.
pub type ScoreVector = Vec<Match>;

/// Role of a code within a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeKind {
    Secret,
    /// In-progress guess, mutated slot by slot.
    Guess,
    /// A submitted guess together with its score.
    Attempt(ScoreVector),
}

/// Fixed-length sequence of peg slots with a role tag.
///
/// `None` slots are "unset": no symbol chosen yet. The length is set at
/// creation and never changes for the code's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    kind: CodeKind,
    pegs: Vec<Option<Symbol>>,
}

impl Code {
    /// Create a code with every slot unset.
    ///
    /// # Panics
    /// Panics if `len` is zero, or if `kind` is an attempt whose score
    /// length differs from `len`.
    pub fn new(kind: CodeKind, len: usize) -> Self {
        assert!(len > 0, "code length must be positive");
        if let CodeKind::Attempt(score) = &kind {
            assert_eq!(score.len(), len, "attempt score length must equal code length");
        }
        Self {
            kind,
            pegs: vec![None; len],
        }
    }

    pub fn len(&self) -> usize {
        self.pegs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pegs.is_empty()
    }

    pub fn kind(&self) -> &CodeKind {
        &self.kind
    }

    pub fn pegs(&self) -> &[Option<Symbol>] {
        &self.pegs
    }

    /// True when no slot is unset.
    pub fn is_complete(&self) -> bool {
        self.pegs.iter().all(|p| p.is_some())
    }

    /// Score vector for attempts; empty for secrets and guesses.
    pub fn score(&self) -> &[Match] {
        match &self.kind {
            CodeKind::Attempt(score) => score,
            _ => &[],
        }
    }

    /// True for an attempt whose every position scored [`Match::Exact`].
    pub fn is_winning(&self) -> bool {
        match &self.kind {
            CodeKind::Attempt(score) => score.iter().all(|m| *m == Match::Exact),
            _ => false,
        }
    }

    /// Symbol-sequence equality, ignoring role and score.
    pub fn same_pegs(&self, other: &Code) -> bool {
        self.pegs == other.pegs
    }

    pub(crate) fn set_peg(&mut self, index: usize, symbol: Symbol) {
        self.pegs[index] = Some(symbol);
    }

    pub(crate) fn clear(&mut self) {
        for peg in &mut self.pegs {
            *peg = None;
        }
    }

    /// Copy this code's pegs into a scored attempt.
    pub fn to_attempt(&self, score: ScoreVector) -> Code {
        assert_eq!(score.len(), self.len(), "score length must equal code length");
        Code {
            kind: CodeKind::Attempt(score),
            pegs: self.pegs.clone(),
        }
    }

    /// Fill every slot with an independent uniform sample from `alphabet`
    /// (with replacement; the same symbol may repeat).
    pub(crate) fn randomize(&mut self, alphabet: &Alphabet, chance: &mut ChanceSource) {
        for peg in &mut self.pegs {
            *peg = Some(chance.pick(alphabet.symbols()).clone());
        }
    }

    /// Score `self` (the guess) against `secret`, two-pass and duplicate-safe.
    ///
    /// Pass 1 scans positions last-to-first, marking [`Match::Exact`] and
    /// removing the consumed secret peg from a pool copy by position, so
    /// removals cannot shift indices still to be visited. Pass 2 scans the
    /// remaining positions first-to-last, consuming one pool entry by value
    /// for each [`Match::Present`]. A symbol occurring `k` times in the
    /// secret is therefore credited at most `k` times across Exact and
    /// Present combined.
    ///
    /// Pure: neither code is mutated.
    ///
    /// # Panics
    /// Panics if the lengths differ.
    pub fn match_against(&self, secret: &Code) -> ScoreVector {
        assert_eq!(
            self.len(),
            secret.len(),
            "guess and secret lengths must be equal"
        );

        let mut score = vec![Match::Absent; self.pegs.len()];
        let mut pool: Vec<Option<Symbol>> = secret.pegs.clone();

        for i in (0..self.pegs.len()).rev() {
            if self.pegs[i] == pool[i] {
                score[i] = Match::Exact;
                pool.remove(i);
            }
        }

        for i in 0..self.pegs.len() {
            if score[i] == Match::Exact {
                continue;
            }
            if let Some(pos) = pool.iter().position(|p| *p == self.pegs[i]) {
                score[i] = Match::Present;
                pool.remove(pos);
            }
        }

        score
    }
}
