//! `.env` file loading.
//!
//! Both loaders only add variables that are not already set, so values from
//! the real process environment always win over the file.

use super::error::ConfigError;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Load `.env` from the working directory or one of its parents.
///
/// Best effort: a missing file is expected, malformed lines are logged and
/// skipped, and a file that cannot be opened is logged and ignored. Returns
/// the path of the loaded file, if any.
///
/// # Example
///
/// ```rust,no_run
/// use calc_core::load_env_file;
///
/// if let Some(path) = load_env_file() {
///     println!("loaded {}", path.display());
/// }
/// ```
pub fn load_env_file() -> Option<PathBuf> {
    let Some(path) = find_env_file() else {
        debug!("No .env file found, using process environment");
        return None;
    };
    match load_lenient(&path) {
        Ok(vars) => {
            debug!(path = %path.display(), vars, "Loaded env file");
            Some(path)
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Ignoring unreadable .env file");
            None
        }
    }
}

/// First `.env` in the working directory or its ancestors.
fn find_env_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .map(|dir| dir.join(".env"))
        .find(|candidate| candidate.is_file())
}

/// Set every parseable, not yet present variable from `path`.
///
/// Malformed lines are skipped so one bad entry does not hide the rest of
/// the file. Returns the number of variables set.
fn load_lenient(path: &Path) -> Result<usize, dotenvy::Error> {
    let mut set = 0;
    for entry in dotenvy::from_path_iter(path)? {
        match entry {
            Ok((key, value)) => {
                if value.contains('\0') {
                    warn!(path = %path.display(), key = %key, "Skipping value with NUL byte");
                } else if std::env::var_os(&key).is_none() {
                    std::env::set_var(&key, value);
                    set += 1;
                }
            }
            Err(dotenvy::Error::Io(err)) => {
                warn!(path = %path.display(), error = %err, "Stopped reading .env file");
                break;
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Skipping malformed .env line");
            }
        }
    }
    Ok(set)
}

/// Load variables from an explicit env file.
///
/// Returns `Ok(true)` when the file was loaded and `Ok(false)` when it does
/// not exist. Read and parse failures are reported as
/// [`ConfigError::EnvFile`].
pub fn load_env_file_from(path: impl AsRef<Path>) -> Result<bool, ConfigError> {
    let path = path.as_ref();
    match dotenvy::from_path(path) {
        Ok(()) => {
            debug!(path = %path.display(), "Loaded env file");
            Ok(true)
        }
        Err(err) if err.not_found() => Ok(false),
        Err(source) => Err(ConfigError::EnvFile {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_loads_variables() {
        let file = env_file("CALC_CORE_UNIT_LOADED=from-file\n# comment\n\n");
        assert!(load_env_file_from(file.path()).unwrap());
        assert_eq!(std::env::var("CALC_CORE_UNIT_LOADED").unwrap(), "from-file");
    }

    #[test]
    fn test_does_not_override_existing() {
        std::env::set_var("CALC_CORE_UNIT_EXISTING", "from-process");
        let file = env_file("CALC_CORE_UNIT_EXISTING=from-file\n");
        assert!(load_env_file_from(file.path()).unwrap());
        assert_eq!(
            std::env::var("CALC_CORE_UNIT_EXISTING").unwrap(),
            "from-process"
        );
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_env_file_from(dir.path().join(".env")).unwrap();
        assert!(!loaded);
    }

    #[test]
    fn test_lenient_load_skips_malformed_lines() {
        std::env::set_var("CALC_CORE_UNIT_LENIENT_KEPT", "from-process");
        let file = env_file(
            "CALC_CORE_UNIT_LENIENT_BEFORE=one\n\
             DEBUG\n\
             CALC_CORE_UNIT_LENIENT_AFTER=two\n\
             CALC_CORE_UNIT_LENIENT_KEPT=from-file\n",
        );
        assert_eq!(load_lenient(file.path()).unwrap(), 2);
        assert_eq!(std::env::var("CALC_CORE_UNIT_LENIENT_BEFORE").unwrap(), "one");
        assert_eq!(std::env::var("CALC_CORE_UNIT_LENIENT_AFTER").unwrap(), "two");
        assert_eq!(
            std::env::var("CALC_CORE_UNIT_LENIENT_KEPT").unwrap(),
            "from-process"
        );
    }

    #[test]
    fn test_lenient_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_lenient(&dir.path().join(".env")).unwrap_err();
        assert!(err.not_found());
    }

    #[test]
    fn test_malformed_file() {
        let file = env_file("BROKEN LINE\n");
        let err = load_env_file_from(file.path()).unwrap_err();
        match err {
            ConfigError::EnvFile { path, .. } => assert_eq!(path, file.path()),
            other => panic!("unexpected error: {other}"),
        }
    }
}
