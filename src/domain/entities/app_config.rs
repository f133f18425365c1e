//! Parsed `nua-config.toml` of one application.

/// Structured configuration read from an application's `nua-config.toml`.
///
/// Only `metadata.id` is interpreted; the rest of the table is kept as-is.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppConfig {
    table: toml::Table,
}

impl AppConfig {
    /// Parse TOML content
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let table = content.parse::<toml::Table>()?;
        Ok(Self { table })
    }

    /// Wrap an already-parsed table
    pub fn from_table(table: toml::Table) -> Self {
        Self { table }
    }

    /// Canonical image identifier (`metadata.id`), when present as a string
    pub fn metadata_id(&self) -> Option<&str> {
        self.table
            .get("metadata")
            .and_then(|m| m.get("id"))
            .and_then(|id| id.as_str())
    }

    /// Raw table access
    pub fn table(&self) -> &toml::Table {
        &self.table
    }
}
