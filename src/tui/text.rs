use crate::pass::MAX_LENGTH;
use crate::pass::MIN_LENGTH;
use crate::pass::charset::{AMBIGUOUS, SIMILAR};
use crate::pass::strength::entropy_label;
use crate::session::Session;
use crate::terminal::{
    BOLD, RESET, box_bottom, box_line, box_line_center, box_opt, box_toggle, box_top, flush,
    print_error, print_rule, print_success, print_warning, strength_label, strength_meter,
};

/// One-line feedback under the menu.
pub enum Status {
    None,
    Info(String),
    Warn(String),
    Error(String),
}

pub fn enter_prompt() -> &'static str {
    "Enter menu option (or press Enter to generate a password)"
}

fn spaced(chars: &str) -> String {
    chars
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_main_menu(session: &Session, source: &str, status: &Status) {
    let config = &session.config;

    box_top("Passbuild");
    box_line("");
    match session.current() {
        Some(current) => {
            box_line_center(&format!("{BOLD}{}{RESET}", current.password.as_str()));
            box_line("");
            box_line_center(&strength_meter(current.strength));
            box_line_center(&strength_label(current.strength));
            box_line_center(&format!(
                "Entropy: {:.1} bits ({})",
                current.entropy_bits,
                entropy_label(current.entropy_bits)
            ));
        }
        None => box_line_center("(no password generated yet)"),
    }
    box_line("");
    print_rule();

    box_opt(
        "  1)",
        &format!("Password Length: {} ({MIN_LENGTH}-{MAX_LENGTH})", config.length),
    );
    box_line("");
    box_line("Character Options:");
    box_toggle("2", "Uppercase Letters (A-Z)", config.upper);
    box_toggle("3", "Lowercase Letters (a-z)", config.lower);
    box_toggle("4", "Digits (0-9)", config.digits);
    box_toggle("5", "Special Characters (!@#$...)", config.special);
    box_line("");
    box_line("Advanced Options:");
    box_toggle(
        "6",
        &format!("Exclude similar characters ({})", spaced(SIMILAR)),
        config.exclude_similar,
    );
    box_toggle(
        "7",
        &format!("Exclude ambiguous characters ({})", spaced(AMBIGUOUS)),
        config.exclude_ambiguous,
    );
    box_opt("  8)", &format!("Random source: {source}"));
    box_line("");
    print_rule();
    box_line_center("g) generate | c) copy | s) save | h) help | q) quit");
    box_bottom();

    match status {
        Status::None => println!(),
        Status::Info(msg) => print_success(msg),
        Status::Warn(msg) => print_warning(msg),
        Status::Error(msg) => print_error(msg),
    }
    flush();
}

pub fn print_help() {
    box_top("Passbuild");
    box_line_center("Password generator with per-class guarantees");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Toggle character classes,");
    box_line("     generate, and copy the password from this menu.");
    box_line("  2) Client: Pass flags directly (e.g., -l 20 -n 5) to print");
    box_line("     passwords without the menu. See `passbuild --help`.");
    box_line("");
    box_line("RULES:");
    box_line("  Every selected class appears at least once. The remaining");
    box_line("  characters are drawn uniformly from all selected classes and");
    box_line("  the result is shuffled.");
    box_line("");
    box_line("STRENGTH (0-7):");
    box_line("  One point for each of 8, 12, 16 and 20 characters, plus one");
    box_line("  point per character class beyond the first.");
    box_line("");
    box_line("MENU KEYS:");
    box_opt("  Enter, g", "Generate a new password");
    box_opt("  1", "Set the length");
    box_opt("  2-7", "Toggle an option");
    box_opt("  8", "Switch between the thread RNG and the OS RNG");
    box_opt("  c", "Copy the current password to the clipboard");
    box_opt("  s", "Save the options as defaults (passwords are never saved)");
    box_opt("  h", "Display this help message");
    box_opt("  q", "Quit");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passbuild                      Interactive menu");
    box_line("  passbuild -l 16                One password, 16 characters");
    box_line("  passbuild -l 20 -n 3           Three passwords, 20 characters each");
    box_line("  passbuild --no-special -b      Alphanumeric, copied to clipboard");
    box_line("  passbuild -s -l 24 --save      Saved options with length 24, saved");
    box_line("");
    box_bottom();
    println!();
    flush();
}
