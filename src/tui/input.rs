use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Line editor shared by the text and numeric prompts.
/// Returns `None` on Esc or Ctrl+Q.
fn edit_line(prompt: &str, initial_value: &str, accept: fn(char) -> bool) -> Option<String> {
    let mut input: Vec<char> = initial_value.chars().collect();
    let mut cursor_pos = input.len() + 1; // 1-based: 1 = before first char
    let mut last_len = input.len();
    let mut cancelled = false;

    // RawModeGuard ensures raw mode is disabled even if we panic or return early
    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(initial_value.to_string()),
    };

    print!("{}: {}", prompt, initial_value);
    flush();

    loop {
        match read() {
            Ok(Event::Key(key_event)) if key_event.kind != KeyEventKind::Release => {
                let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
                match key_event.code {
                    KeyCode::Char('c') if ctrl => {
                        // process::exit skips destructors
                        reset_terminal();
                        println!();
                        std::process::exit(0);
                    }
                    KeyCode::Char('q') if ctrl => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Esc => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Char('u') if ctrl => {
                        input.clear();
                        cursor_pos = 1;
                    }
                    KeyCode::Enter => break,
                    KeyCode::Backspace => {
                        if cursor_pos > 1 {
                            cursor_pos -= 1;
                            input.remove(cursor_pos - 1);
                        }
                    }
                    KeyCode::Delete => {
                        if cursor_pos <= input.len() {
                            input.remove(cursor_pos - 1);
                        }
                    }
                    KeyCode::Left => {
                        if cursor_pos > 1 {
                            cursor_pos -= 1;
                        }
                    }
                    KeyCode::Right => {
                        if cursor_pos <= input.len() {
                            cursor_pos += 1;
                        }
                    }
                    KeyCode::Home => cursor_pos = 1,
                    KeyCode::End => cursor_pos = input.len() + 1,
                    KeyCode::Char(c) if accept(c) => {
                        input.insert(cursor_pos - 1, c);
                        cursor_pos += 1;
                    }
                    _ => {}
                }

                let text: String = input.iter().collect();
                print!("\r{}: {}", prompt, " ".repeat(last_len + 1));
                print!("\r{}: {}", prompt, text);
                last_len = input.len();

                print!("\x1b[{}G", prompt.chars().count() + 2 + cursor_pos);
                flush();
            }
            Err(_) => break,
            _ => {}
        }
    }

    // Disable raw mode BEFORE println
    drop(_guard);
    println!();

    if cancelled {
        None
    } else {
        Some(input.into_iter().collect())
    }
}

pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    edit_line(prompt, initial_value, |c| !c.is_control())
}

/// Digits only. Empty input keeps `initial_value`.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let digits = edit_line(prompt, &initial_value.to_string(), |c| c.is_ascii_digit())?;
    if digits.is_empty() {
        Some(initial_value)
    } else {
        digits.parse().ok()
    }
}

/// Block until any key is pressed.
pub fn wait_key(prompt: &str) {
    println!("{prompt}");
    flush();
    let Ok(_guard) = RawModeGuard::hidden() else {
        return;
    };
    loop {
        match read() {
            Ok(Event::Key(key_event)) if key_event.kind == KeyEventKind::Press => {
                if key_event.code == KeyCode::Char('c')
                    && key_event.modifiers.contains(KeyModifiers::CONTROL)
                {
                    reset_terminal();
                    std::process::exit(0);
                }
                break;
            }
            Err(_) => break,
            _ => {}
        }
    }
}
