//! Export file handling.
//!
//! GitLab hands values to later jobs through a dotenv file at
//! `{CI_PROJECT_DIR}/{CI_JOB_NAME}`. This module owns appending to that
//! file with owner-only permissions.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::error::{ExportError, Result};

/// Append-only handle on the job's export file.
///
/// Opened once per run, and only in CI. The handle closes in `Drop`, so the
/// file is released on every exit path, including mid-run failures.
#[derive(Debug)]
pub struct EnvFile {
    file: File,
    path: PathBuf,
}

impl EnvFile {
    /// Open the export file, creating it if missing, with owner-only
    /// read/write permission.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Access` when the path does not exist or
    /// permission is denied (the usual sign of a misconfigured project
    /// directory), and `ExportError::Open` for any other I/O failure.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        debug!(path = %path.display(), "opening env file");

        let mut options = OpenOptions::new();
        options.append(true).create(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(constants::PERMISSION_READ_WRITE_OWNER);
        }

        let file = match options.open(&path) {
            Ok(file) => file,
            Err(source)
                if matches!(
                    source.kind(),
                    std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied
                ) =>
            {
                return Err(ExportError::Access { path, source }.into());
            }
            Err(source) => return Err(ExportError::Open { path, source }.into()),
        };

        Ok(Self { file, path })
    }

    /// Append one `KEY=value` line, upper-casing the key.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Write` when the append fails. Lines written by
    /// earlier calls stay in place; there is no rollback.
    pub fn export_variable(&mut self, key: &str, value: &str) -> Result<()> {
        let line = Zeroizing::new(format!("{}={}\n", key.to_uppercase(), value));

        self.file
            .write_all(line.as_bytes())
            .map_err(|source| ExportError::Write {
                path: self.path.clone(),
                source,
            })?;

        Ok(())
    }

    /// File path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
