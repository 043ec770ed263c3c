//! Heuristic strength rating and entropy estimate.

use super::charset::CharClass;

pub const MAX_LEVEL: u8 = 7;

const LENGTH_THRESHOLDS: [usize; 4] = [8, 12, 16, 20];

const LABELS: [&str; 8] = [
    "Very Weak",
    "Weak",
    "Fair",
    "Medium",
    "Good",
    "Strong",
    "Very Strong",
    "Excellent",
];

/// Meter colors, red through green.
pub const COLORS: [(u8, u8, u8); 8] = [
    (0xFF, 0x00, 0x00),
    (0xFF, 0x33, 0x00),
    (0xFF, 0x66, 0x00),
    (0xFF, 0x99, 0x00),
    (0xFF, 0xCC, 0x00),
    (0x99, 0xCC, 0x00),
    (0x66, 0xCC, 0x00),
    (0x33, 0xCC, 0x00),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Strength(u8);

impl Strength {
    pub fn level(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        LABELS[self.0 as usize]
    }

    pub fn color(self) -> (u8, u8, u8) {
        COLORS[self.0 as usize]
    }
}

/// Score a password on length thresholds and class diversity.
///
/// One point per threshold met among 8, 12, 16 and 20 characters, plus one
/// point per class present beyond the first. Capped at 7.
pub fn score(password: &str) -> Strength {
    let length = password.chars().count();
    let length_points = LENGTH_THRESHOLDS.iter().filter(|t| length >= **t).count();

    let classes = CharClass::ALL
        .into_iter()
        .filter(|class| password.chars().any(|c| CharClass::of(c) == Some(*class)))
        .count();

    let total = (length_points + classes.saturating_sub(1)).min(MAX_LEVEL as usize);
    Strength(total as u8)
}

/// Password entropy in bits for uniform draws from `pool_size` characters.
pub fn entropy_bits(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

pub fn entropy_label(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_class_eight_chars() {
        let s = score("abcdefgh");
        assert!(s.level() >= 1);
        assert_eq!(s.level(), 1);
        assert_eq!(s.label(), "Weak");
    }

    #[test]
    fn twenty_chars_four_classes_is_excellent() {
        let s = score("Abcdefgh12345678!@#$");
        assert_eq!(s.level(), 7);
        assert_eq!(s.label(), "Excellent");
    }

    #[test]
    fn clamped_at_seven() {
        let long = "Aa1!".repeat(16);
        assert_eq!(score(&long).level(), MAX_LEVEL);
    }

    #[test]
    fn short_password_scores_only_diversity() {
        assert_eq!(score("aA1!").level(), 3);
        assert_eq!(score("abc").level(), 0);
        assert_eq!(score("abc").label(), "Very Weak");
    }

    #[test]
    fn thresholds() {
        assert_eq!(score(&"a".repeat(11)).level(), 1);
        assert_eq!(score(&"a".repeat(12)).level(), 2);
        assert_eq!(score(&"a".repeat(16)).level(), 3);
        assert_eq!(score(&"a".repeat(20)).level(), 4);
    }

    #[test]
    fn unknown_symbols_are_not_a_class() {
        // '~' and '\'' sit outside every alphabet
        assert_eq!(score("abcdefgh~~'").level(), 1);
    }

    #[test]
    fn empty_is_very_weak() {
        assert_eq!(score("").level(), 0);
    }

    #[test]
    fn labels_and_colors_line_up() {
        for level in 0..=MAX_LEVEL {
            let s = Strength(level);
            assert_eq!(s.label(), LABELS[level as usize]);
            assert_eq!(s.color(), COLORS[level as usize]);
        }
    }

    #[test]
    fn entropy() {
        assert_eq!(entropy_bits(10, 0), 0.0);
        assert!((entropy_bits(8, 16) - 32.0).abs() < 1e-9);
        assert_eq!(entropy_label(32.0), "Weak");
        assert_eq!(entropy_label(72.0), "Strong");
        assert_eq!(entropy_label(130.0), "Very Strong");
    }
}
