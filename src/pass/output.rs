//! Password output to a writer or a clipboard buffer.

use std::io::{self, Write};

use log::debug;
use rand::Rng;
use zeroize::{Zeroize, Zeroizing};

use super::strength::{Strength, score};
use super::PasswordBuilder;

/// Write `count` passwords, one per line.
/// Returns the weakest rating among the lines written. A reader closing the
/// pipe early ends the batch without an error.
pub fn write_batch<W, R>(
    out: &mut W,
    builder: &PasswordBuilder,
    rng: &mut R,
    count: usize,
) -> io::Result<Option<Strength>>
where
    W: Write,
    R: Rng + ?Sized,
{
    let mut weakest: Option<Strength> = None;
    let mut line = String::with_capacity(builder.length() + 1);

    for _ in 0..count {
        let pass = builder.build(rng);
        line.push_str(pass.as_str());
        line.push('\n');
        let written = out.write_all(line.as_bytes());
        line.zeroize();
        match written {
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                debug!("output closed early");
                return Ok(weakest);
            }
            other => other?,
        }

        let strength = score(pass.as_str());
        weakest = Some(weakest.map_or(strength, |w| w.min(strength)));
    }

    match out.flush() {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(weakest),
        other => other.map(|()| weakest),
    }
}

/// Collect `count` passwords into one newline-separated buffer for the clipboard.
pub fn collect_batch<R: Rng + ?Sized>(
    builder: &PasswordBuilder,
    rng: &mut R,
    count: usize,
) -> (Zeroizing<String>, Option<Strength>) {
    let mut passwords = Zeroizing::new(String::new());
    let mut weakest: Option<Strength> = None;

    for i in 0..count {
        let pass = builder.build(rng);
        let strength = score(pass.as_str());
        weakest = Some(weakest.map_or(strength, |w| w.min(strength)));
        if i > 0 {
            passwords.push('\n');
        }
        passwords.push_str(pass.as_str());
    }

    (passwords, weakest)
}
