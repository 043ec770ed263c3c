//! CLI context - bundles settings, flags and the chosen random source.

use std::io;

use copypasta::ClipboardContext;
use log::{debug, warn};

use super::{CliFlags, prompts, quiet};
use crate::error::Result;
use crate::pass::output::{collect_batch, write_batch};
use crate::pass::{PasswordBuilder, entropy_bits};
use crate::session::copy_text;
use crate::settings::Settings;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Resolve saved or default settings and overlay the flags.
    pub fn new(flags: CliFlags) -> Self {
        let base = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        let settings = Settings {
            config: flags.apply(base.config),
            urandom: flags.urandom || base.urandom,
        };

        Self { settings, flags }
    }

    pub fn run(&mut self) -> Result<()> {
        quiet::set(self.flags.quiet);

        let builder = PasswordBuilder::new(&self.settings.config)?;
        self.handle_save();

        let source = self.settings.source();
        debug!("random source: {}", source.name());
        let mut rng = source.rng();
        let count = self.flags.number;

        let weakest = if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(mut board) => {
                    let (passwords, weakest) = collect_batch(&builder, &mut rng, count);
                    if let Err(e) = copy_text(&mut board, &passwords) {
                        prompts::clipboard_error(&e.to_string());
                        return Err(e);
                    }
                    prompts::clipboard_copied(count);
                    weakest
                }
                Err(e) => {
                    warn!("clipboard context unavailable: {}", e);
                    prompts::warn("Clipboard unavailable, printing to terminal instead.");
                    write_batch(&mut io::stdout().lock(), &builder, &mut rng, count)?
                }
            }
        } else {
            write_batch(&mut io::stdout().lock(), &builder, &mut rng, count)?
        };

        if let Some(strength) = weakest {
            let bits = entropy_bits(builder.length(), builder.pool_size());
            prompts::strength(strength, bits, count);
        }
        Ok(())
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }
        match self.settings.save_to_file() {
            Ok(()) => prompts::settings_saved(),
            Err(e) => prompts::warn(&format!("Failed to save settings: {}", e)),
        }
    }
}
