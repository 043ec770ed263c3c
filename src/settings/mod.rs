//! Saved generation preferences. Passwords are never written here.

mod file;

use crate::entropy::Source;
use crate::pass::GenerationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub config: GenerationConfig,
    pub urandom: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self)
    }

    pub fn source(&self) -> Source {
        Source::from_urandom(self.urandom)
    }
}
