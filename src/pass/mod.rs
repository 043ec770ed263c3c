//! Password generation, scoring and output.

pub mod charset;
mod generate;
pub mod output;
pub mod strength;

use zeroize::Zeroize;

use charset::CharClass;

pub use generate::{PasswordBuilder, build};
pub use strength::{Strength, entropy_bits, score};

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 32;

/// Everything the builder needs for one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub special: bool,
    pub exclude_similar: bool,
    pub exclude_ambiguous: bool,
}

impl GenerationConfig {
    pub fn enabled_classes(&self) -> Vec<CharClass> {
        CharClass::ALL
            .into_iter()
            .filter(|c| self.is_enabled(*c))
            .collect()
    }

    pub fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Upper => self.upper,
            CharClass::Lower => self.lower,
            CharClass::Digit => self.digits,
            CharClass::Special => self.special,
        }
    }

    /// Number of eligible characters after filtering.
    pub fn pool_size(&self) -> usize {
        self.enabled_classes()
            .into_iter()
            .map(|c| c.filtered(self.exclude_similar, self.exclude_ambiguous).len())
            .sum()
    }

    pub fn in_range(length: usize) -> bool {
        (MIN_LENGTH..=MAX_LENGTH).contains(&length)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 12,
            upper: true,
            lower: true,
            digits: true,
            special: true,
            exclude_similar: true,
            exclude_ambiguous: true,
        }
    }
}

/// A generated password. The buffer is wiped on drop.
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }
}

impl From<Vec<char>> for Password {
    fn from(mut chars: Vec<char>) -> Self {
        let s = chars.iter().collect();
        chars.zeroize();
        Password(s)
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Password(<{} chars>)", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_menu_state() {
        let config = GenerationConfig::default();
        assert_eq!(config.length, 12);
        assert_eq!(config.enabled_classes(), CharClass::ALL.to_vec());
        assert!(config.exclude_similar && config.exclude_ambiguous);
    }

    #[test]
    fn pool_size_follows_filters() {
        let mut config = GenerationConfig::default();
        assert_eq!(config.pool_size(), 69);
        config.exclude_similar = false;
        config.exclude_ambiguous = false;
        assert_eq!(config.pool_size(), 26 + 26 + 10 + 27);
        config.special = false;
        assert_eq!(config.pool_size(), 62);
    }

    #[test]
    fn length_range() {
        assert!(!GenerationConfig::in_range(7));
        assert!(GenerationConfig::in_range(MIN_LENGTH));
        assert!(GenerationConfig::in_range(MAX_LENGTH));
        assert!(!GenerationConfig::in_range(33));
    }

    #[test]
    fn password_from_chars() {
        let pass = Password::from(vec!['a', 'B', '3']);
        assert_eq!(pass.as_str(), "aB3");
        assert_eq!(pass.len(), 3);
    }
}
