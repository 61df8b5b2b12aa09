//! Location of the stepman data directory.
//!
//! The routing file and the step collections both live under a stepman root
//! (`~/.stepman` unless told otherwise). Paths are stored unexpanded and
//! resolved on every lookup, so a `StepmanConfig` is plain data that can be
//! built once and shared across threads.

use crate::error::{Result, StepSpecError};
use std::path::{Component, Path, PathBuf};

pub const DEFAULT_STEPMAN_ROOT: &str = "~/.stepman";

const ROUTING_FILE: &str = "routing.json";
const COLLECTIONS_DIR: &str = "step_collections";
const SPEC_DIR: &str = "spec";
const SPEC_FILE: &str = "spec.json";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StepmanConfig {
    routing_file: PathBuf,
    collections_dir: PathBuf,
}

impl Default for StepmanConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STEPMAN_ROOT)
    }
}

impl StepmanConfig {
    /// Lay out the routing file and collections directory under `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            routing_file: root.join(ROUTING_FILE),
            collections_dir: root.join(COLLECTIONS_DIR),
        }
    }

    pub fn with_routing_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.routing_file = path.into();
        self
    }

    pub fn with_collections_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.collections_dir = path.into();
        self
    }

    /// Routing file path as configured, before expansion.
    pub fn routing_file(&self) -> &Path {
        &self.routing_file
    }

    pub fn collections_dir(&self) -> &Path {
        &self.collections_dir
    }

    /// Absolute path of the routing file.
    pub fn routing_file_path(&self) -> Result<PathBuf> {
        expand_path(&self.routing_file)
    }

    /// Absolute path of `<collections_dir>/<token>/spec/spec.json`.
    ///
    /// The token must be a single plain path component; anything that could
    /// climb out of the collections directory is rejected.
    pub fn spec_file_path(&self, token: &str) -> Result<PathBuf> {
        let mut components = Path::new(token).components();
        let single_normal = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !single_normal || token.contains(['/', '\\']) {
            return Err(StepSpecError::expansion(
                token,
                "routing token must be a single directory name",
            ));
        }

        let spec_path = self
            .collections_dir
            .join(token)
            .join(SPEC_DIR)
            .join(SPEC_FILE);
        expand_path(&spec_path)
    }
}

/// Expand a leading `~` against the home directory and make the result
/// absolute.
///
/// `~user` forms are not supported. Relative paths resolve against the
/// current directory; the path does not need to exist.
pub fn expand_path(path: &Path) -> Result<PathBuf> {
    let display = path.display().to_string();

    let expanded = if let Ok(rest) = path.strip_prefix("~") {
        let home = dirs::home_dir()
            .ok_or_else(|| StepSpecError::expansion(&display, "home directory is not available"))?;
        if rest.as_os_str().is_empty() {
            home
        } else {
            home.join(rest)
        }
    } else if display.starts_with('~') {
        return Err(StepSpecError::expansion(
            &display,
            "only '~' and '~/' prefixes are supported",
        ));
    } else {
        path.to_path_buf()
    };

    std::path::absolute(&expanded).map_err(|err| StepSpecError::expansion(&display, err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_lives_under_dot_stepman() {
        let config = StepmanConfig::default();
        assert_eq!(config.routing_file(), Path::new("~/.stepman/routing.json"));
        assert_eq!(
            config.collections_dir(),
            Path::new("~/.stepman/step_collections")
        );
    }

    #[test]
    fn tilde_expands_to_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let expanded = expand_path(Path::new("~/.stepman/routing.json")).unwrap();
        assert_eq!(expanded, home.join(".stepman/routing.json"));
        assert_eq!(expand_path(Path::new("~")).unwrap(), home);
    }

    #[test]
    fn user_tilde_is_rejected() {
        let err = expand_path(Path::new("~someone/.stepman")).unwrap_err();
        assert!(matches!(err, StepSpecError::PathExpansionFailed { .. }));
    }

    #[test]
    fn empty_path_fails_expansion() {
        let err = expand_path(Path::new("")).unwrap_err();
        assert!(matches!(err, StepSpecError::PathExpansionFailed { .. }));
    }

    #[test]
    fn relative_paths_become_absolute() {
        let expanded = expand_path(Path::new("relative/routing.json")).unwrap();
        assert!(expanded.is_absolute());
        assert!(expanded.ends_with("relative/routing.json"));
    }

    #[test]
    fn spec_path_follows_template() {
        let config = StepmanConfig::new("/data/stepman");
        let path = config.spec_file_path("abc123").unwrap();
        assert_eq!(
            path,
            PathBuf::from("/data/stepman/step_collections/abc123/spec/spec.json")
        );
    }

    #[test]
    fn overrides_replace_default_locations() {
        let config = StepmanConfig::new("/data/stepman")
            .with_routing_file("/etc/stepman/routes.json")
            .with_collections_dir("/srv/collections");
        assert_eq!(
            config.routing_file_path().unwrap(),
            PathBuf::from("/etc/stepman/routes.json")
        );
        assert_eq!(
            config.spec_file_path("t").unwrap(),
            PathBuf::from("/srv/collections/t/spec/spec.json")
        );
    }

    #[test]
    fn tokens_that_escape_the_collections_dir_are_rejected() {
        let config = StepmanConfig::new("/data/stepman");
        for token in ["", ".", "..", "../other", "a/b", "/abs"] {
            let err = config.spec_file_path(token).unwrap_err();
            assert!(
                matches!(err, StepSpecError::PathExpansionFailed { .. }),
                "token {token:?} should be rejected"
            );
        }
    }
}
