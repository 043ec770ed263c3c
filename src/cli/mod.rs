//! One-shot CLI mode.

mod context;
mod flags;
pub mod prompts;
pub mod quiet;

use clap::Parser;

pub use context::Context;
pub use flags::CliFlags;

use crate::error::Error;
use crate::exits::Code;

/// Parse `args` and generate. Help, version and usage errors exit inside clap.
pub fn run(args: Vec<String>) -> Code {
    let flags = CliFlags::try_parse_from(args).unwrap_or_else(|e| e.exit());

    let mut ctx = Context::new(flags);
    match ctx.run() {
        Ok(()) => Code::Ok,
        Err(e) => {
            // clipboard failures were already reported
            if !matches!(e, Error::Clipboard(_)) {
                prompts::error(&e.to_string());
            }
            if e.is_validation() {
                prompts::warn("See `passbuild --help` for the character and length options.");
            }
            Code::from(&e)
        }
    }
}
