//! Password generation.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use super::charset::CharacterPool;
use super::{GenerationConfig, Password};
use crate::error::{Error, Result};

/// Validated pool and length, reusable across many passwords.
#[derive(Debug, Clone)]
pub struct PasswordBuilder {
    pool: CharacterPool,
    length: usize,
}

impl PasswordBuilder {
    pub fn new(config: &GenerationConfig) -> Result<Self> {
        let pool = CharacterPool::new(config)?;

        if pool.len() < config.length {
            return Err(Error::PoolTooSmall {
                length: config.length,
                available: pool.len(),
            });
        }
        if config.length < pool.class_count() {
            return Err(Error::LengthBelowClassCount {
                length: config.length,
                classes: pool.class_count(),
            });
        }

        let names: Vec<&str> = pool.classes().map(|(c, _)| c.name()).collect();
        debug!(
            "pool ready: {} chars from {}, length {}",
            pool.len(),
            names.join("+"),
            config.length
        );

        Ok(Self {
            pool,
            length: config.length,
        })
    }

    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// One character from every class, the rest from the whole pool, then shuffled.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Password {
        let mut chars = Vec::with_capacity(self.length);

        for (_, alphabet) in self.pool.classes() {
            if let Some(c) = alphabet.choose(rng) {
                chars.push(*c);
            }
        }

        let all = self.pool.chars();
        while chars.len() < self.length {
            chars.push(all[rng.gen_range(0..all.len())]);
        }

        chars.shuffle(rng);
        Password::from(chars)
    }
}

/// Validate `config` and generate one password.
pub fn build<R: Rng + ?Sized>(config: &GenerationConfig, rng: &mut R) -> Result<Password> {
    Ok(PasswordBuilder::new(config)?.build(rng))
}
