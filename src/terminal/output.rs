//! Terminal output utilities.
//!
//! Box drawing, strength meter, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

use crate::pass::strength::{COLORS, Strength};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const YELLOW: &str = "\x1b[38;5;11m";
const GREY: &str = "\x1b[38;5;250m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m");
    flush();
}

// ============================================================================
// Styled Output Helpers
// ============================================================================

pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

pub fn print_success(msg: &str) {
    println!("{GREEN}{msg}{RESET}");
}

pub fn print_warning(msg: &str) {
    println!("{YELLOW}{msg}{RESET}");
}

/// 24-bit foreground escape.
pub fn fg((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{r};{g};{b}m")
}

pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

// ============================================================================
// Strength Meter
// ============================================================================

const METER_CELL: &str = "███";

/// Eight cells, lit up to and including the strength level.
pub fn strength_meter(strength: Strength) -> String {
    let mut meter = String::new();
    for (i, color) in COLORS.iter().enumerate() {
        if i <= strength.level() as usize {
            meter.push_str(&fg(*color));
        } else {
            meter.push_str(GREY);
        }
        meter.push_str(METER_CELL);
        meter.push(' ');
    }
    meter.pop();
    meter.push_str(RESET);
    meter
}

/// `Password Strength: <label>` painted in the level's color.
pub fn strength_label(strength: Strength) -> String {
    format!(
        "{}{BOLD}Password Strength: {}{RESET}",
        fg(strength.color()),
        strength.label()
    )
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        println!("│ {}{} │", content, " ".repeat(padding));
    } else {
        println!("│ {} │", content);
    }
}

/// Print centered box content line: │          content          │
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let total_padding = inner_width - display_len;
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        println!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        );
    } else {
        println!("│ {} │", content);
    }
}

pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a menu option with key and description: │ 2) Uppercase (A-Z)   [x] │
pub fn box_toggle(key: &str, desc: &str, on: bool) {
    let mark = if on {
        format!("{GREEN}[x]{RESET}")
    } else {
        "[ ]".to_string()
    };
    box_opt(&format!("  {key})"), &format!("{mark} {desc}"));
}

/// Print a help option with flag and description, auto-wrapping if needed.
pub fn box_opt(flag: &str, desc: &str) {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 27;
    let desc_col = inner_width - flag_col;

    let flag_padded = if flag.len() < flag_col {
        format!("{}{}", flag, " ".repeat(flag_col - flag.len()))
    } else {
        flag[..flag_col].to_string()
    };

    let words: Vec<&str> = desc.split_whitespace().collect();
    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in words {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if console_width(&current_line) + 1 + console_width(word) <= desc_col {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if let Some(first) = lines.first() {
        let padding = desc_col.saturating_sub(console_width(first));
        println!("│ {}{}{} │", flag_padded, first, " ".repeat(padding));
    } else {
        println!("│ {}{} │", flag_padded, " ".repeat(desc_col));
    }

    let indent = " ".repeat(flag_col);
    for line in lines.iter().skip(1) {
        let padding = desc_col.saturating_sub(console_width(line));
        println!("│ {}{}{} │", indent, line, " ".repeat(padding));
    }
}

/// Calculate display width accounting for ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::score;

    #[test]
    fn width_ignores_escapes() {
        assert_eq!(console_width("plain"), 5);
        assert_eq!(console_width(&format!("{RED}red{RESET}")), 3);
        assert_eq!(console_width(&fg((1, 2, 3))), 0);
    }

    #[test]
    fn status_colors_are_distinct() {
        assert_ne!(YELLOW, RED);
        assert_ne!(YELLOW, GREEN);
        assert_eq!(console_width(&format!("{YELLOW}warn{RESET}")), 4);
    }

    #[test]
    fn meter_has_eight_cells() {
        let meter = strength_meter(score("abc"));
        assert_eq!(console_width(&meter), 8 * 3 + 7);
    }

    #[test]
    fn meter_lights_up_to_level() {
        // level 0 still lights the first cell
        let weak = strength_meter(score("abc"));
        assert_eq!(weak.matches(GREY).count(), 7);

        let best = strength_meter(score("Abcdefgh12345678!@#$"));
        assert_eq!(best.matches(GREY).count(), 0);
        assert!(best.starts_with(&fg(COLORS[0])));
    }

    #[test]
    fn label_uses_level_color() {
        let s = score("Abcdefgh12345678!@#$");
        let label = strength_label(s);
        assert!(label.starts_with(&fg((0x33, 0xCC, 0x00))));
        assert!(label.contains("Password Strength: Excellent"));
    }
}
