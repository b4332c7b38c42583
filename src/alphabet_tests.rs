#[cfg(test)]
mod tests {
    use crate::alphabet::{Alphabet, Symbol};
    use crate::config::ConfigError;

    #[test]
    fn empty_alphabet_is_rejected() {
        let err = Alphabet::new(Vec::new()).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyAlphabet));
    }

    #[test]
    fn duplicate_symbols_are_rejected() {
        let err = Alphabet::from_tokens(["red", "blue", "red"]).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateSymbol { symbol } if symbol == "red"));
    }

    #[test]
    fn next_after_follows_declaration_order_and_wraps() {
        let alphabet = Alphabet::from_tokens(["red", "green", "blue"]).unwrap();
        assert_eq!(
            alphabet.next_after(&Symbol::from("red")),
            Some(&Symbol::from("green"))
        );
        assert_eq!(
            alphabet.next_after(&Symbol::from("green")),
            Some(&Symbol::from("blue"))
        );
        // Last wraps to first.
        assert_eq!(
            alphabet.next_after(&Symbol::from("blue")),
            Some(&Symbol::from("red"))
        );
    }

    #[test]
    fn next_after_unknown_symbol_is_none() {
        let alphabet = Alphabet::from_tokens(["red", "green"]).unwrap();
        assert_eq!(alphabet.next_after(&Symbol::from("purple")), None);
    }

    #[test]
    fn emoji_tokens_are_ordinary_symbols() {
        let alphabet = Alphabet::from_tokens(["😀", "🤪", "🥳"]).unwrap();
        assert_eq!(alphabet.len(), 3);
        assert_eq!(alphabet.first(), &Symbol::from("😀"));
        assert_eq!(
            alphabet.next_after(&Symbol::from("🥳")),
            Some(&Symbol::from("😀"))
        );
    }
}
