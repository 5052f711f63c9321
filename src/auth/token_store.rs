use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// File-backed bearer token storage.
///
/// The token is read from disk on every [`TokenStore::load`]; nothing is cached
/// between calls, so a sign-out in another process takes effect immediately.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `None` when no token is stored or the file is blank.
    pub fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                (!token.is_empty()).then(|| token.to_string())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(error = %e, path = %self.path.display(), "Failed to read token file");
                None
            }
        }
    }

    pub fn store(&self, token: &str) -> AppResult<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AppError::TokenStore("refusing to store an empty token".into()));
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::TokenStore(format!("mkdir {}: {}", parent.display(), e))
            })?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!(error = %e, path = %parent.display(), "Failed to chmod token directory");
                }
            }
        }

        fs::write(&self.path, token).map_err(|e| {
            AppError::TokenStore(format!("write {}: {}", self.path.display(), e))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                AppError::TokenStore(format!("chmod {}: {}", self.path.display(), e))
            })?;
        }

        tracing::debug!(path = %self.path.display(), "Token stored");
        Ok(())
    }

    /// Removing a token that is not there is not an error.
    pub fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::TokenStore(format!(
                "delete {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}
