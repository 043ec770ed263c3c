//! Random source selection.
//!
//! Both sources are cryptographically secure: the thread-local generator is a
//! ChaCha block cipher reseeded from the OS, and `Os` reads the OS RNG directly
//! for every draw.

use rand::RngCore;
use rand::rngs::OsRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Source {
    #[default]
    Thread,
    Os,
}

impl Source {
    pub fn from_urandom(urandom: bool) -> Self {
        if urandom { Source::Os } else { Source::Thread }
    }

    pub fn name(self) -> &'static str {
        match self {
            Source::Thread => "ChaCha12 (OS-seeded)",
            Source::Os => "OS RNG",
        }
    }

    pub fn rng(self) -> Box<dyn RngCore> {
        match self {
            Source::Thread => Box::new(rand::thread_rng()),
            Source::Os => Box::new(OsRng),
        }
    }
}
