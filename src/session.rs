//! The current password and the actions that replace or copy it.

use copypasta::ClipboardProvider;
use log::debug;
use rand::Rng;

use crate::error::{Error, Result};
use crate::pass::{GenerationConfig, Password, Strength, build, entropy_bits, score};

pub struct Generated {
    pub password: Password,
    pub strength: Strength,
    pub entropy_bits: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Nothing,
}

#[derive(Default)]
pub struct Session {
    pub config: GenerationConfig,
    current: Option<Generated>,
}

impl Session {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            config,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&Generated> {
        self.current.as_ref()
    }

    /// Replace the current password. On error the previous one stays.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&Generated> {
        let password = build(&self.config, rng)?;
        let strength = score(password.as_str());
        debug!(
            "generated {} chars, strength {} ({})",
            password.len(),
            strength.level(),
            strength.label()
        );

        let generated = self.current.insert(Generated {
            entropy_bits: entropy_bits(self.config.length, self.config.pool_size()),
            password,
            strength,
        });
        Ok(generated)
    }

    /// Copy the current password. Nothing generated is not an error.
    pub fn copy<C: ClipboardProvider + ?Sized>(&self, board: &mut C) -> Result<CopyOutcome> {
        let Some(current) = &self.current else {
            return Ok(CopyOutcome::Nothing);
        };

        copy_text(board, current.password.as_str())?;
        Ok(CopyOutcome::Copied)
    }
}

/// Write `text` to the clipboard in one call, no retry.
pub fn copy_text<C: ClipboardProvider + ?Sized>(board: &mut C, text: &str) -> Result<()> {
    board
        .set_contents(text.to_owned())
        .map_err(|e| Error::Clipboard(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::error::Error as StdError;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[derive(Default)]
    struct MockBoard {
        contents: Option<String>,
        writes: usize,
        reads: usize,
        fail: bool,
    }

    impl ClipboardProvider for MockBoard {
        fn get_contents(&mut self) -> std::result::Result<String, Box<dyn StdError + Send + Sync>> {
            self.reads += 1;
            self.contents.clone().ok_or_else(|| "empty".into())
        }

        fn set_contents(
            &mut self,
            contents: String,
        ) -> std::result::Result<(), Box<dyn StdError + Send + Sync>> {
            if self.fail {
                return Err("no display".into());
            }
            self.writes += 1;
            self.contents = Some(contents);
            Ok(())
        }
    }

    #[test]
    fn copy_without_password_is_a_noop() {
        let session = Session::default();
        let mut board = MockBoard::default();
        assert_eq!(session.copy(&mut board).unwrap(), CopyOutcome::Nothing);
        assert_eq!(board.writes, 0);
    }

    #[test]
    fn copy_writes_current_password() {
        let mut session = Session::default();
        let mut rng = StdRng::seed_from_u64(21);
        let expected = session.regenerate(&mut rng).unwrap().password.as_str().to_owned();

        let mut board = MockBoard::default();
        assert_eq!(session.copy(&mut board).unwrap(), CopyOutcome::Copied);
        assert_eq!(board.contents.as_deref(), Some(expected.as_str()));
        assert_eq!(board.writes, 1);
        assert_eq!(board.reads, 0);
    }

    #[test]
    fn clipboard_failure_surfaces() {
        let mut session = Session::default();
        let mut rng = StdRng::seed_from_u64(22);
        session.regenerate(&mut rng).unwrap();

        let mut board = MockBoard {
            fail: true,
            ..MockBoard::default()
        };
        assert!(matches!(session.copy(&mut board), Err(Error::Clipboard(_))));
    }

    #[test]
    fn failed_regeneration_keeps_previous() {
        let mut session = Session::default();
        let mut rng = StdRng::seed_from_u64(23);
        let before = session.regenerate(&mut rng).unwrap().password.as_str().to_owned();

        session.config.upper = false;
        session.config.lower = false;
        session.config.digits = false;
        session.config.special = false;
        let err = session.regenerate(&mut rng).err().unwrap();
        assert!(err.is_validation());

        let after = session.current().unwrap().password.as_str();
        assert_eq!(after, before);
    }

    #[test]
    fn regeneration_replaces_and_scores() {
        let mut session = Session::new(GenerationConfig {
            length: 20,
            ..GenerationConfig::default()
        });
        let mut rng = StdRng::seed_from_u64(24);
        let first = session.regenerate(&mut rng).unwrap().password.as_str().to_owned();
        let second = session.regenerate(&mut rng).unwrap();

        assert_ne!(second.password.as_str(), first);
        assert_eq!(second.strength.level(), 7);
        assert!(second.entropy_bits > 100.0);
    }
}
