//! Where the CLI keeps the token pair between runs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::cli::GlobalArgs;

const CREDENTIALS_FILE: &str = "credentials.json";

/// The credentials file: the `--credentials-file` override, or
/// `credentials.json` in the user's data directory.
pub fn credentials_path(global: &GlobalArgs) -> Result<PathBuf> {
    if let Some(path) = &global.credentials_file {
        return Ok(path.clone());
    }

    let dirs =
        ProjectDirs::from("", "", "findmypet").context("Could not determine data directory")?;

    Ok(dirs.data_dir().join(CREDENTIALS_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global(credentials_file: Option<PathBuf>) -> GlobalArgs {
        GlobalArgs {
            api_url: "http://localhost:8080".to_string(),
            timeout_secs: 30,
            credentials_file,
        }
    }

    #[test]
    fn override_wins() {
        let path = PathBuf::from("/tmp/findmypet-test/creds.json");
        assert_eq!(credentials_path(&global(Some(path.clone()))).unwrap(), path);
    }

    #[test]
    fn default_lives_in_data_dir() {
        if let Ok(path) = credentials_path(&global(None)) {
            assert!(path.ends_with(CREDENTIALS_FILE));
        }
    }
}
