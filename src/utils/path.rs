//! Path helpers for the `--db` override and config initialization.

use std::path::PathBuf;

/// Expand a leading `~/` to the user's home directory, so
/// `--db ~/exams.sqlite` works the same on every shell.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

pub fn is_absolute(path: &str) -> bool {
    PathBuf::from(path).is_absolute()
}
