//! Character classes and pool building for password generation.

use super::GenerationConfig;
use crate::error::{Error, Result};

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SPECIAL: &str = "!@#$%^&*()_-+=[]{}|;:,.<>?/";

/// Visually confusable glyphs.
pub const SIMILAR: &str = "il1Lo0O";
/// Bracket, quote and punctuation symbols that tend to need escaping.
pub const AMBIGUOUS: &str = "{}[]()/\\'\"`~,;:.<>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Special,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Special,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Special => SPECIAL,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Upper => "uppercase",
            CharClass::Lower => "lowercase",
            CharClass::Digit => "digits",
            CharClass::Special => "special",
        }
    }

    /// Class of `c`, or `None` for characters outside every alphabet.
    pub fn of(c: char) -> Option<CharClass> {
        if c.is_ascii_uppercase() {
            Some(CharClass::Upper)
        } else if c.is_ascii_lowercase() {
            Some(CharClass::Lower)
        } else if c.is_ascii_digit() {
            Some(CharClass::Digit)
        } else if SPECIAL.contains(c) {
            Some(CharClass::Special)
        } else {
            None
        }
    }

    /// Alphabet with the excluded members removed.
    ///
    /// Similar-exclusion applies to letters and digits, ambiguous-exclusion to
    /// special characters only.
    pub fn filtered(self, exclude_similar: bool, exclude_ambiguous: bool) -> Vec<char> {
        let drop: &str = match self {
            CharClass::Special if exclude_ambiguous => AMBIGUOUS,
            CharClass::Special => "",
            _ if exclude_similar => SIMILAR,
            _ => "",
        };
        self.alphabet().chars().filter(|c| !drop.contains(*c)).collect()
    }
}

/// Eligible characters for one configuration, grouped by class.
#[derive(Debug, Clone)]
pub struct CharacterPool {
    classes: Vec<(CharClass, Vec<char>)>,
    chars: Vec<char>,
}

impl CharacterPool {
    /// Build the pool for every enabled class.
    /// Fails when no class is enabled.
    pub fn new(config: &GenerationConfig) -> Result<Self> {
        let enabled = config.enabled_classes();
        if enabled.is_empty() {
            return Err(Error::NoClassSelected);
        }

        let mut classes = Vec::with_capacity(enabled.len());
        let mut chars = Vec::new();
        for class in enabled {
            let alphabet = class.filtered(config.exclude_similar, config.exclude_ambiguous);
            chars.extend(&alphabet);
            classes.push((class, alphabet));
        }

        Ok(Self { classes, chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn classes(&self) -> impl Iterator<Item = (CharClass, &[char])> {
        self.classes.iter().map(|(c, a)| (*c, a.as_slice()))
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(class: CharClass) -> GenerationConfig {
        GenerationConfig {
            upper: class == CharClass::Upper,
            lower: class == CharClass::Lower,
            digits: class == CharClass::Digit,
            special: class == CharClass::Special,
            ..GenerationConfig::default()
        }
    }

    #[test]
    fn filtered_sizes() {
        assert_eq!(CharClass::Upper.filtered(true, true).len(), 24);
        assert_eq!(CharClass::Lower.filtered(true, true).len(), 23);
        assert_eq!(CharClass::Digit.filtered(true, true).len(), 8);
        assert_eq!(CharClass::Special.filtered(true, true).len(), 14);
        assert_eq!(CharClass::Special.filtered(false, false).len(), 27);
    }

    #[test]
    fn ambiguous_only_touches_special() {
        for class in [CharClass::Upper, CharClass::Lower, CharClass::Digit] {
            assert_eq!(
                class.filtered(false, true),
                class.filtered(false, false),
                "{} changed under ambiguous exclusion",
                class.name()
            );
            assert!(!class.alphabet().chars().any(|c| AMBIGUOUS.contains(c)));
        }
    }

    #[test]
    fn similar_never_touches_special() {
        assert_eq!(
            CharClass::Special.filtered(true, false),
            CharClass::Special.filtered(false, false)
        );
    }

    #[test]
    fn special_after_ambiguous_filter() {
        let s: String = CharClass::Special.filtered(false, true).into_iter().collect();
        assert_eq!(s, "!@#$%^&*_-+=|?");
    }

    #[test]
    fn classify() {
        assert_eq!(CharClass::of('Q'), Some(CharClass::Upper));
        assert_eq!(CharClass::of('q'), Some(CharClass::Lower));
        assert_eq!(CharClass::of('7'), Some(CharClass::Digit));
        assert_eq!(CharClass::of('/'), Some(CharClass::Special));
        assert_eq!(CharClass::of('~'), None);
        assert_eq!(CharClass::of(' '), None);
    }

    #[test]
    fn pool_keeps_class_boundaries() {
        let pool = CharacterPool::new(&GenerationConfig::default()).unwrap();
        assert_eq!(pool.class_count(), 4);
        assert_eq!(pool.len(), 24 + 23 + 8 + 14);
        for (class, alphabet) in pool.classes() {
            assert!(alphabet.iter().all(|c| CharClass::of(*c) == Some(class)));
        }
    }

    #[test]
    fn pool_rejects_no_class() {
        let config = GenerationConfig {
            upper: false,
            lower: false,
            digits: false,
            special: false,
            ..GenerationConfig::default()
        };
        assert!(matches!(
            CharacterPool::new(&config),
            Err(Error::NoClassSelected)
        ));
    }

    #[test]
    fn single_class_pool() {
        let pool = CharacterPool::new(&only(CharClass::Digit)).unwrap();
        assert_eq!(pool.chars(), &['2', '3', '4', '5', '6', '7', '8', '9']);
        assert!(!pool.chars().contains(&'0'));
    }
}
