//! Git revision lookup.
//!
//! When the caller does not supply a version tag, the configuration is
//! tagged with the commit currently checked out in the working directory.

use crate::{Error, Result};
use std::path::Path;
use std::process::Command;

/// Return the commit sha of HEAD for the repository at `dir`, trimmed.
///
/// Fails if git cannot be spawned, if `dir` is not inside a working tree,
/// or if HEAD does not point at a commit yet.
pub fn head_revision(dir: &Path) -> Result<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--verify", "HEAD"])
        .current_dir(dir)
        .output()
        .map_err(|e| Error::Git(format!("failed to run git: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::Git(stderr.trim().to_string()));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
