use copypasta::ClipboardContext;
use log::warn;
use rand::RngCore;

use crate::error::Error;
use crate::pass::{GenerationConfig, MAX_LENGTH, MIN_LENGTH};
use crate::session::{CopyOutcome, Session};
use crate::settings::Settings;
use crate::terminal::{clear, reset_terminal};

use super::{
    Status, enter_prompt, get_editable_input, get_numeric_input, print_help, print_main_menu,
    wait_key,
};

/// Menu state: the session plus what outlives a single keypress.
struct Menu {
    session: Session,
    settings: Settings,
    rng: Box<dyn RngCore>,
    board: Option<ClipboardContext>,
    status: Status,
}

pub fn gen_main_menu() {
    reset_terminal();
    clear();

    let mut status = Status::None;
    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        status = Status::Error(format!("Error loading settings: {}", e));
        Settings::default()
    });

    let mut menu = Menu {
        session: Session::new(settings.config),
        rng: settings.source().rng(),
        settings,
        board: None,
        status,
    };
    if matches!(menu.status, Status::None) {
        menu.generate();
    }

    loop {
        clear();
        print_main_menu(&menu.session, menu.settings.source().name(), &menu.status);
        menu.status = Status::None;

        let input = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => continue,
        };

        match input.trim() {
            "" | "g" => menu.generate(),
            "1" => menu.set_length(),
            option @ ("2" | "3" | "4" | "5" | "6" | "7") => menu.toggle(option),
            "8" => menu.toggle_source(),
            "c" => menu.copy(),
            "s" => menu.save(),
            "h" => {
                clear();
                print_help();
                wait_key("Press any key to return to the menu...");
            }
            "q" => {
                clear();
                break;
            }
            _ => menu.status = Status::Error("Invalid option.".to_string()),
        }
    }
}

impl Menu {
    fn generate(&mut self) {
        if let Err(e) = self.session.regenerate(&mut self.rng) {
            self.status = Status::Error(describe(&e));
        }
    }

    fn set_length(&mut self) {
        let prompt = format!("Enter new password length ({MIN_LENGTH}-{MAX_LENGTH})");
        let Some(length) = get_numeric_input(&prompt, self.session.config.length) else {
            return;
        };
        if GenerationConfig::in_range(length) {
            self.session.config.length = length;
        } else {
            self.status = Status::Error(describe(&Error::LengthOutOfRange {
                length,
                min: MIN_LENGTH,
                max: MAX_LENGTH,
            }));
        }
    }

    fn toggle(&mut self, option: &str) {
        let c = &mut self.session.config;
        let flag = match option {
            "2" => &mut c.upper,
            "3" => &mut c.lower,
            "4" => &mut c.digits,
            "5" => &mut c.special,
            "6" => &mut c.exclude_similar,
            "7" => &mut c.exclude_ambiguous,
            _ => return,
        };
        *flag = !*flag;
    }

    fn toggle_source(&mut self) {
        self.settings.urandom = !self.settings.urandom;
        self.rng = self.settings.source().rng();
    }

    fn copy(&mut self) {
        if self.board.is_none() {
            match ClipboardContext::new() {
                Ok(board) => self.board = Some(board),
                Err(e) => {
                    warn!("clipboard context unavailable: {}", e);
                    self.status = Status::Error(format!("Clipboard unavailable: {e}"));
                    return;
                }
            }
        }
        let Some(board) = self.board.as_mut() else {
            return;
        };

        self.status = match self.session.copy(board) {
            Ok(CopyOutcome::Copied) => Status::Info("Password copied to clipboard!".to_string()),
            Ok(CopyOutcome::Nothing) => Status::Warn("No password generated yet!".to_string()),
            Err(e) => Status::Error(e.to_string()),
        };
    }

    fn save(&mut self) {
        self.settings.config = self.session.config;
        self.status = match self.settings.save_to_file() {
            Ok(()) => Status::Info("Settings saved.".to_string()),
            Err(e) => Status::Error(format!("Error saving settings: {}", e)),
        };
    }
}

/// User-facing wording for validation failures.
fn describe(e: &Error) -> String {
    match e {
        Error::NoClassSelected => "Please select at least one character type!".to_string(),
        Error::PoolTooSmall { .. } => format!(
            "Too many characters excluded for the requested length! ({e}). \
             Try a shorter length, more character types or fewer exclusions."
        ),
        _ => e.to_string(),
    }
}
