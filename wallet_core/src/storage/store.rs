use std::{fs, io, path::PathBuf};

use directories::ProjectDirs;
use log::warn;
use serde_json::Error as SerdeError;

use super::profile::ProviderProfile;

#[derive(Debug, Clone)]
pub struct ProviderStore {
    dir: PathBuf,
}

impl ProviderStore {
    /// `~/.config/wallet_panel/providers` on Linux, `%APPDATA%\wallet_panel\providers` on Windows, etc.
    pub fn new() -> io::Result<Self> {
        let proj = ProjectDirs::from("", "", "wallet_panel")
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Unable to locate config dir"))?;
        Self::with_dir(proj.config_dir().join("providers"))
    }

    /// Store rooted at an explicit directory (created if missing).
    pub fn with_dir(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    // Ids are free-form: every byte outside `[A-Za-z0-9_-]` (including `%`)
    // is percent-encoded, so distinct ids never share a file.
    fn file_for(&self, id: &str) -> PathBuf {
        let mut stem = String::with_capacity(id.len());
        for byte in id.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
                stem.push(char::from(byte));
            } else {
                stem.push_str(&format!("%{byte:02X}"));
            }
        }
        self.dir.join(format!("{stem}.json"))
    }

    /// Returns every stored provider sorted by id (silently skips malformed files).
    pub fn list(&self) -> io::Result<Vec<ProviderProfile>> {
        let mut out = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if !path.extension().is_some_and(|e| e == "json") {
                continue;
            }
            match fs::File::open(&path)
                .and_then(|f| serde_json::from_reader(f).map_err(SerdeError::into))
            {
                Ok(profile) => out.push(profile),
                Err(e) => warn!("Could not read {:?}: {e}", path),
            }
        }
        out.sort_by(|a: &ProviderProfile, b| a.id.cmp(&b.id));
        Ok(out)
    }

    /// Stored providers, or [`ProviderProfile::defaults`] if none are stored.
    pub fn list_or_defaults(&self) -> io::Result<Vec<ProviderProfile>> {
        let stored = self.list()?;
        if stored.is_empty() {
            Ok(ProviderProfile::defaults())
        } else {
            Ok(stored)
        }
    }

    /// Create or overwrite a provider.
    pub fn save(&self, profile: &ProviderProfile) -> io::Result<()> {
        let file = fs::File::create(self.file_for(profile.id.as_str()))?;
        serde_json::to_writer_pretty(file, profile).map_err(SerdeError::into)
    }

    /// Delete a provider (`Ok(true)` if removed, `Ok(false)` if it didn’t exist).
    pub fn delete(&self, id: &str) -> io::Result<bool> {
        match fs::remove_file(self.file_for(id)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}
