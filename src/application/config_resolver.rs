//! Config resolver - locates and parses an application's `nua-config.toml`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::entities::AppConfig;
use crate::domain::ports::FileSystem;
use crate::error::{NuaError, NuaResult};

/// File name of the per-application configuration
pub const CONFIG_FILE_NAME: &str = "nua-config.toml";

/// Candidate locations, in lookup order
pub fn candidate_paths(apps_root: &Path, app_id: &str) -> [PathBuf; 2] {
    let app_dir = apps_root.join(app_id);
    [
        app_dir.join(CONFIG_FILE_NAME),
        app_dir.join("nua").join(CONFIG_FILE_NAME),
    ]
}

/// Reads app configs through the `FileSystem` port. No caching.
pub struct ConfigResolver<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
}

impl<'a, F: FileSystem + ?Sized> ConfigResolver<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// Path of the config file that would be used, if any
    pub fn locate(&self, apps_root: &Path, app_id: &str) -> NuaResult<PathBuf> {
        let candidates = candidate_paths(apps_root, app_id);
        if let Some(found) = candidates.iter().find(|p| self.fs.is_file(p)) {
            debug!(app = app_id, path = %found.display(), "found app config");
            return Ok(found.clone());
        }

        Err(NuaError::ConfigNotFound {
            id: app_id.to_string(),
            searched: candidates.to_vec(),
        })
    }

    /// Locate, read and parse the config of `app_id`
    pub fn resolve(&self, apps_root: &Path, app_id: &str) -> NuaResult<AppConfig> {
        let path = self.locate(apps_root, app_id)?;
        let content = self.fs.read(&path)?;

        AppConfig::parse(&content).map_err(|e| NuaError::ConfigParse {
            id: app_id.to_string(),
            path,
            message: e.message().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fs::LocalFs;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn prefers_top_level_config() {
        let dir = tempdir().unwrap();
        let app = dir.path().join("galene");
        fs::create_dir_all(app.join("nua")).unwrap();
        fs::write(app.join("nua-config.toml"), "[metadata]\nid = \"top\"\n").unwrap();
        fs::write(app.join("nua/nua-config.toml"), "[metadata]\nid = \"nested\"\n").unwrap();

        let fs = LocalFs::new();
        let config = ConfigResolver::new(&fs).resolve(dir.path(), "galene").unwrap();

        assert_eq!(config.metadata_id(), Some("top"));
    }

    #[test]
    fn falls_back_to_nua_subdirectory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("hedgedoc/nua");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("nua-config.toml"), "[metadata]\nid = \"hedgedoc\"\n").unwrap();

        let fs = LocalFs::new();
        let resolver = ConfigResolver::new(&fs);

        assert_eq!(
            resolver.locate(dir.path(), "hedgedoc").unwrap(),
            nested.join("nua-config.toml")
        );
        assert_eq!(
            resolver
                .resolve(dir.path(), "hedgedoc")
                .unwrap()
                .metadata_id(),
            Some("hedgedoc")
        );
    }

    #[test]
    fn missing_config_lists_both_candidates() {
        let dir = tempdir().unwrap();
        let fs = LocalFs::new();

        let err = ConfigResolver::new(&fs)
            .resolve(dir.path(), "ackee")
            .unwrap_err();

        match err {
            NuaError::ConfigNotFound { id, searched } => {
                assert_eq!(id, "ackee");
                assert_eq!(searched, candidate_paths(dir.path(), "ackee").to_vec());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn directory_named_like_config_is_not_a_config() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("ackee/nua-config.toml")).unwrap();
        let fs = LocalFs::new();

        let err = ConfigResolver::new(&fs)
            .resolve(dir.path(), "ackee")
            .unwrap_err();
        assert!(matches!(err, NuaError::ConfigNotFound { .. }));
    }

    #[test]
    fn malformed_config_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let app = dir.path().join("dolibarr");
        fs::create_dir_all(&app).unwrap();
        fs::write(app.join("nua-config.toml"), "[metadata\nid = ").unwrap();

        let fs = LocalFs::new();
        let err = ConfigResolver::new(&fs)
            .resolve(dir.path(), "dolibarr")
            .unwrap_err();

        match err {
            NuaError::ConfigParse { id, path, .. } => {
                assert_eq!(id, "dolibarr");
                assert_eq!(path, app.join("nua-config.toml"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
