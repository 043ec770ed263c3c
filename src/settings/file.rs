//! Settings file persistence.
//!
//! One comma-separated line:
//! `length,upper,lower,digits,special,exclude_similar,exclude_ambiguous,urandom`

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::Settings;
use crate::pass::{GenerationConfig, MAX_LENGTH, MIN_LENGTH};

const FIELDS: usize = 8;

pub fn save(settings: &Settings) -> std::io::Result<()> {
    save_at(&get_path(), settings)
}

pub fn load(settings: &mut Settings) -> std::io::Result<()> {
    load_at(&get_path(), settings)
}

fn save_at(path: &Path, settings: &Settings) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    file.write_all(encode(settings).as_bytes())?;
    debug!("settings saved to {}", path.display());
    Ok(())
}

fn load_at(path: &Path, settings: &mut Settings) -> std::io::Result<()> {
    if !path.exists()
        && let Some(parent) = path.parent()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        warn!("failed to create directory for settings file: {}", e);
        return Ok(());
    }

    let file = OpenOptions::new()
        .read(true)
        .create(true)
        .truncate(false)
        .write(true)
        .open(path)?;

    let mut reader = BufReader::new(file);
    let mut line = String::new();
    let parsed = match reader.read_line(&mut line) {
        Ok(_) if line.trim().is_empty() => return save_at(path, settings),
        Ok(_) => decode(&line),
        Err(e) if e.kind() == ErrorKind::InvalidData => None,
        Err(e) => return Err(e),
    };

    match parsed {
        Some(loaded) => *settings = loaded,
        None => {
            warn!("malformed settings file {}, rewriting defaults", path.display());
            save_at(path, settings)?;
        }
    }

    Ok(())
}

pub fn encode(settings: &Settings) -> String {
    let c = &settings.config;
    format!(
        "{},{},{},{},{},{},{},{}\n",
        c.length,
        c.upper,
        c.lower,
        c.digits,
        c.special,
        c.exclude_similar,
        c.exclude_ambiguous,
        settings.urandom
    )
}

/// Parse a settings line. Lengths outside the UI range are clamped into it.
pub fn decode(line: &str) -> Option<Settings> {
    let parts: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    if parts.len() != FIELDS {
        return None;
    }

    let length: usize = parts[0].parse().ok()?;
    let flag = |i: usize| parts[i].parse::<bool>().ok();

    Some(Settings {
        config: GenerationConfig {
            length: length.clamp(MIN_LENGTH, MAX_LENGTH),
            upper: flag(1)?,
            lower: flag(2)?,
            digits: flag(3)?,
            special: flag(4)?,
            exclude_similar: flag(5)?,
            exclude_ambiguous: flag(6)?,
        },
        urandom: flag(7)?,
    })
}

#[inline]
fn get_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    Path::new(&home).join(".config/passbuild/settings")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_line() {
        assert_eq!(
            encode(&Settings::default()),
            "12,true,true,true,true,true,true,false\n"
        );
    }

    #[test]
    fn decode_reads_every_field() {
        let s = decode("20,false,true,true,false,false,true,true\n").unwrap();
        assert_eq!(s.config.length, 20);
        assert!(!s.config.upper);
        assert!(s.config.lower);
        assert!(s.config.digits);
        assert!(!s.config.special);
        assert!(!s.config.exclude_similar);
        assert!(s.config.exclude_ambiguous);
        assert!(s.urandom);
        assert_eq!(decode(&encode(&s)), Some(s));
    }

    #[test]
    fn decode_clamps_length() {
        let s = decode("3,true,true,true,true,true,true,false").unwrap();
        assert_eq!(s.config.length, MIN_LENGTH);
        let s = decode("500,true,true,true,true,true,true,false").unwrap();
        assert_eq!(s.config.length, MAX_LENGTH);
    }

    #[test]
    fn decode_rejects_malformed() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("12,true,true"), None);
        assert_eq!(decode("twelve,true,true,true,true,true,true,false"), None);
        assert_eq!(decode("12,yes,true,true,true,true,true,false"), None);
        assert_eq!(decode("12,true,true,true,true,true,true,false,extra"), None);
    }

    fn settings_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join(".config/passbuild/settings")
    }

    #[test]
    fn load_creates_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = settings_path(&dir);

        let mut settings = Settings::default();
        load_at(&path, &mut settings).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            encode(&Settings::default())
        );
    }

    #[test]
    fn load_reads_saved_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = settings_path(&dir);
        let saved = decode("24,true,false,true,true,false,true,true").unwrap();
        save_at(&path, &saved).unwrap();

        let mut settings = Settings::default();
        load_at(&path, &mut settings).unwrap();
        assert_eq!(settings, saved);
    }

    #[test]
    fn load_rewrites_malformed_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = settings_path(&dir);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "12,true,maybe\n").unwrap();

        let mut settings = Settings::default();
        load_at(&path, &mut settings).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            encode(&Settings::default())
        );
    }

    #[test]
    fn load_rewrites_non_utf8_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = settings_path(&dir);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"\xff\xfe,bad\n").unwrap();

        let mut settings = Settings::default();
        load_at(&path, &mut settings).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            encode(&Settings::default())
        );
    }

    #[test]
    fn path_lives_under_config() {
        assert!(get_path().ends_with(".config/passbuild/settings"));
    }
}
