//! App catalog - the static list of known applications.

use serde::Deserialize;

use crate::domain::entities::AppEntry;
use crate::domain::value_objects::AppSelector;
use crate::error::{NuaError, NuaResult};

/// Built-in applications, in catalog order: `(id, hostname)`
const BUILTIN_APPS: &[(&str, &str)] = &[
    ("galene", "visio"),
    ("hedgedoc", "pad"),
    ("ackee", "stats"),
    ("dolibarr", "dolibarr"),
    ("etherpad-lite", "pad2"),
];

/// What `lookup` does with an id that is not in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogMissPolicy {
    /// Fail with `UnknownApplication`
    #[default]
    Reject,
    /// Treat the id as an app without hostname override
    Synthesize,
}

/// Read-only application catalog, established at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppCatalog {
    entries: Vec<AppEntry>,
    miss_policy: CatalogMissPolicy,
}

impl AppCatalog {
    pub fn new(entries: Vec<AppEntry>, miss_policy: CatalogMissPolicy) -> Self {
        Self {
            entries,
            miss_policy,
        }
    }

    /// The default Nua application set
    pub fn builtin() -> Self {
        let entries = BUILTIN_APPS
            .iter()
            .filter_map(|(id, hostname)| AppEntry::with_hostname(*id, *hostname).ok())
            .collect();
        Self::new(entries, CatalogMissPolicy::default())
    }

    pub fn with_miss_policy(mut self, miss_policy: CatalogMissPolicy) -> Self {
        self.miss_policy = miss_policy;
        self
    }

    pub fn entries(&self) -> &[AppEntry] {
        &self.entries
    }

    pub fn miss_policy(&self) -> CatalogMissPolicy {
        self.miss_policy
    }

    /// Find an entry by id
    pub fn lookup(&self, id: &str) -> NuaResult<AppEntry> {
        if let Some(entry) = self.entries.iter().find(|e| e.id() == id) {
            return Ok(entry.clone());
        }

        match self.miss_policy {
            CatalogMissPolicy::Reject => Err(NuaError::UnknownApplication { id: id.to_string() }),
            CatalogMissPolicy::Synthesize => AppEntry::new(id),
        }
    }

    /// Resolve a selector into the ordered list of entries to act on
    pub fn resolve_subset(&self, selector: &AppSelector) -> NuaResult<Vec<AppEntry>> {
        match selector {
            AppSelector::All => Ok(self.entries.clone()),
            AppSelector::Ids(ids) => ids.iter().map(|id| self.lookup(id)).collect(),
        }
    }
}

impl Default for AppCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn builtin_catalog_order() {
        let catalog = AppCatalog::builtin();
        let ids: Vec<_> = catalog.entries().iter().map(|e| e.id()).collect();
        assert_eq!(
            ids,
            vec!["galene", "hedgedoc", "ackee", "dolibarr", "etherpad-lite"]
        );
    }

    #[test]
    fn lookup_returns_hostname_override() {
        let entry = AppCatalog::builtin().lookup("galene").unwrap();
        assert_eq!(entry.display_hostname(), Some("visio"));
    }

    #[test]
    fn lookup_miss_is_rejected_by_default() {
        let err = AppCatalog::builtin().lookup("galen").unwrap_err();
        assert!(matches!(err, NuaError::UnknownApplication { ref id } if id == "galen"));
    }

    #[test]
    fn lookup_miss_is_synthesized_when_permissive() {
        let catalog = AppCatalog::builtin().with_miss_policy(CatalogMissPolicy::Synthesize);
        let entry = catalog.lookup("nextcloud").unwrap();
        assert_eq!(entry.id(), "nextcloud");
        assert_eq!(entry.display_hostname(), None);
    }

    #[test]
    fn resolve_all_is_whole_catalog() {
        let catalog = AppCatalog::builtin();
        assert_eq!(
            catalog.resolve_subset(&AppSelector::All).unwrap(),
            catalog.entries().to_vec()
        );
        assert_eq!(
            catalog
                .resolve_subset(&AppSelector::parse(Some("all")))
                .unwrap(),
            catalog.entries().to_vec()
        );
    }

    #[test]
    fn resolve_subset_stops_at_unknown_id() {
        let catalog = AppCatalog::builtin();
        let err = catalog
            .resolve_subset(&AppSelector::from_ids(["ackee", "typo", "galene"]))
            .unwrap_err();
        assert!(matches!(err, NuaError::UnknownApplication { ref id } if id == "typo"));
    }

    #[test]
    fn miss_policy_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: CatalogMissPolicy,
        }
        let w: Wrapper = toml::from_str("policy = \"synthesize\"").unwrap();
        assert_eq!(w.policy, CatalogMissPolicy::Synthesize);
    }

    proptest! {
        #[test]
        fn lookup_finds_every_catalog_entry(index in 0usize..5) {
            let catalog = AppCatalog::builtin();
            let expected = &catalog.entries()[index];
            let found = catalog.lookup(expected.id()).unwrap();
            prop_assert_eq!(&found, expected);
        }

        #[test]
        fn subset_preserves_order_and_duplicates(picks in proptest::collection::vec(0usize..5, 1..8)) {
            let catalog = AppCatalog::builtin();
            let ids: Vec<String> = picks
                .iter()
                .map(|i| catalog.entries()[*i].id().to_string())
                .collect();

            let resolved = catalog
                .resolve_subset(&AppSelector::parse(Some(&ids.join(","))))
                .unwrap();

            let resolved_ids: Vec<String> = resolved.iter().map(|e| e.id().to_string()).collect();
            prop_assert_eq!(resolved_ids, ids);
        }
    }
}
