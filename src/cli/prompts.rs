//! Centralized warning and notice messages for CLI output.

use super::quiet;
use crate::pass::Strength;
use crate::pass::strength::entropy_label;
use crate::terminal::{strength_label, strength_meter};

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Strength meter, label and entropy on stderr so stdout stays pipeable
pub fn strength(strength: Strength, entropy_bits: f64, count: usize) {
    if quiet::enabled() {
        return;
    }
    eprintln!("{}", strength_meter(strength));
    if count > 1 {
        eprintln!("{} (weakest of {count})", strength_label(strength));
    } else {
        eprintln!("{}", strength_label(strength));
    }
    eprintln!("Entropy: {:.1} bits ({})", entropy_bits, entropy_label(entropy_bits));
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        if count > 1 {
            eprintln!("*** -{count} PASSWORDS COPIED TO CLIPBOARD- ***");
        } else {
            eprintln!("*** -COPIED TO CLIPBOARD- ***");
        }
    }
}

/// Print clipboard error - NOT suppressed (errors are always shown)
pub fn clipboard_error(err: &str) {
    error(&format!("Clipboard error: {err}"));
}

pub fn settings_saved() {
    if !quiet::enabled() {
        eprintln!("Settings saved.");
    }
}
