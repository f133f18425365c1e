//! Settings type definitions

use std::fmt;
use std::path::Path;

use serde::de::value::MapAccessDeserializer;
use serde::de::{self, MapAccess, Visitor};
use serde::Deserialize;

use crate::domain::entities::AppEntry;
use crate::domain::services::{AppCatalog, CatalogMissPolicy};
use crate::domain::value_objects::{TargetOverrides, Toolchain};
use crate::error::NuaResult;

use super::loader::{self, ConfigWarning};

/// Contents of `nua-deploy.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Target defaults (lowest priority after built-ins)
    pub target: TargetOverrides,
    /// Executable and staging layout
    pub toolchain: Toolchain,
    pub catalog: CatalogSection,
}

/// `[catalog]` table
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    /// What to do with ids that are not in the catalog
    pub unknown_apps: CatalogMissPolicy,
    /// Replaces the built-in application list when present
    pub apps: Option<Vec<AppSpec>>,
}

/// One application in the settings file.
///
/// Accepts either form:
///   apps = ["galene", { id = "hedgedoc", hostname = "pad" }]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppSpec {
    Bare(String),
    Record(AppRecord),
}

/// Table form of an application; misspelled keys are an error
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppRecord {
    #[serde(alias = "name")]
    pub id: String,
    #[serde(default)]
    pub hostname: Option<String>,
}

impl<'de> Deserialize<'de> for AppSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct AppSpecVisitor;

        impl<'de> Visitor<'de> for AppSpecVisitor {
            type Value = AppSpec;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an application id or a table with `id` and optional `hostname`")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<AppSpec, E> {
                Ok(AppSpec::Bare(value.to_string()))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<AppSpec, A::Error> {
                AppRecord::deserialize(MapAccessDeserializer::new(map)).map(AppSpec::Record)
            }
        }

        deserializer.deserialize_any(AppSpecVisitor)
    }
}

impl AppSpec {
    /// Normalize into a catalog entry
    pub fn into_entry(self) -> NuaResult<AppEntry> {
        match self {
            AppSpec::Bare(id) => AppEntry::new(id),
            AppSpec::Record(AppRecord {
                id,
                hostname: Some(hostname),
            }) => AppEntry::with_hostname(id, hostname),
            AppSpec::Record(AppRecord { id, hostname: None }) => AppEntry::new(id),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file, discarding warnings
    pub fn load(path: &Path) -> NuaResult<Self> {
        Self::load_with_warnings(path).map(|(settings, _)| settings)
    }

    /// Load settings and collect non-fatal warnings (unknown keys)
    pub fn load_with_warnings(path: &Path) -> NuaResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Application catalog described by these settings
    pub fn catalog(&self) -> NuaResult<AppCatalog> {
        let catalog = match &self.catalog.apps {
            Some(apps) => AppCatalog::new(
                apps.iter()
                    .cloned()
                    .map(AppSpec::into_entry)
                    .collect::<NuaResult<Vec<_>>>()?,
                self.catalog.unknown_apps,
            ),
            None => AppCatalog::builtin().with_miss_policy(self.catalog.unknown_apps),
        };
        Ok(catalog)
    }
}
