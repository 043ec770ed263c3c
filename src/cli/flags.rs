use clap::Parser;

use crate::pass::{GenerationConfig, MAX_LENGTH, MIN_LENGTH};

/// Generate passwords that contain every selected character class.
///
/// Run without arguments for the interactive menu.
#[derive(Parser, Debug)]
#[command(name = "passbuild", version, about)]
pub struct CliFlags {
    /// Characters per password
    #[arg(short, long, value_parser = parse_length)]
    pub length: Option<usize>,

    /// How many passwords to generate
    #[arg(short, long, default_value_t = 1, value_parser = parse_count)]
    pub number: usize,

    /// Leave out uppercase letters (A-Z)
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters (a-z)
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out digits (0-9)
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out special characters (!@#$...)
    #[arg(long)]
    pub no_special: bool,

    /// Keep look-alike characters (i, l, 1, L, o, 0, O)
    #[arg(long)]
    pub allow_similar: bool,

    /// Keep bracket, quote and punctuation specials ({ } [ ] ( ) / \ ' " ` ~ , ; : . < >)
    #[arg(long)]
    pub allow_ambiguous: bool,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Draw every byte straight from the OS RNG
    #[arg(short, long)]
    pub urandom: bool,

    /// Start from saved settings instead of defaults
    #[arg(short, long)]
    pub saved: bool,

    /// Save the resulting settings as the new defaults
    #[arg(long)]
    pub save: bool,

    /// Print passwords only, no strength or notices
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliFlags {
    /// Overlay explicit flags onto `base`.
    pub fn apply(&self, base: GenerationConfig) -> GenerationConfig {
        let mut config = base;
        if let Some(length) = self.length {
            config.length = length;
        }
        if self.no_upper {
            config.upper = false;
        }
        if self.no_lower {
            config.lower = false;
        }
        if self.no_digits {
            config.digits = false;
        }
        if self.no_special {
            config.special = false;
        }
        if self.allow_similar {
            config.exclude_similar = false;
        }
        if self.allow_ambiguous {
            config.exclude_ambiguous = false;
        }
        config
    }
}

fn parse_length(s: &str) -> Result<usize, String> {
    let length: usize = s.parse().map_err(|_| format!("invalid number: {s}"))?;
    if GenerationConfig::in_range(length) {
        Ok(length)
    } else {
        Err(format!("must be between {MIN_LENGTH} and {MAX_LENGTH}"))
    }
}

fn parse_count(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("invalid number: {s}")),
    }
}
