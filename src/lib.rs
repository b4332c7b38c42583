//! cb-core: rules for a Mastermind-style code-breaking game.
//!
//! Peg codes, the duplicate-safe matching algorithm, and the round
//! lifecycle (guess editing, submission, restart). This crate is the
//! in-process core consumed by a GUI front end: no I/O, no blocking,
//! sessions exclusively owned by one caller, randomness injected via
//! [`ChanceSource`] so tests can pin exact secrets.

pub mod alphabet;
pub mod chance;
pub mod code;
pub mod config;
pub mod session;

pub use alphabet::{Alphabet, Symbol};
pub use chance::ChanceSource;
pub use code::{Code, CodeKind, Match, ScoreVector};
pub use config::{ConfigError, LengthPolicy, SessionConfig, MAX_CODE_LEN, MIN_CODE_LEN};
pub use session::{GameSession, SubmitOutcome};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_nonempty() {
        assert!(!VERSION.is_empty());
    }
}

#[cfg(test)]
mod alphabet_tests;
