use anyhow::anyhow;
use anyhow::Context;
use anyhow::Error;
use std::env;
use std::path::Path;
use std::path::PathBuf;

/// The name of the database file, looked for next to the executable.
pub const FILENAME_DATABASE: &str = "convdb.dat";

/// The environment variable that overrides the database location.
pub const ENV_DATABASE: &str = "CONV_DATABASE";

/// Resolves the location of the database file.
///
/// An explicit path (from `--database` or `CONV_DATABASE`) wins; otherwise
/// the database is expected in the directory of the running executable.
pub fn database_path(path_explicit: Option<PathBuf>) -> Result<PathBuf, Error> {
    if let Some(path) = path_explicit {
        return Ok(path);
    }

    let path_executable = env::current_exe()
    .context("Cannot determine the installation directory")?;

    database_path_beside(&path_executable)
}

/// Returns the database path in the same directory as the given executable.
fn database_path_beside(path_executable: &Path) -> Result<PathBuf, Error> {
    let directory = path_executable.parent().ok_or_else(|| {
        anyhow!("Executable {} has no parent directory", path_executable.display())
    })?;

    Ok(directory.join(FILENAME_DATABASE))
}
