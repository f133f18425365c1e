//! Application selector parsed from `--apps`.

/// Which applications an operation acts on
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppSelector {
    /// The whole catalog, in catalog order
    #[default]
    All,
    /// Explicit ids, in the given order (duplicates kept)
    Ids(Vec<String>),
}

impl AppSelector {
    /// Parse a `--apps` value: absent or `all` selects everything,
    /// otherwise a comma-separated list of ids.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("all") => Self::All,
            Some(list) => {
                let ids: Vec<String> = list
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
                if ids.is_empty() {
                    Self::All
                } else {
                    Self::Ids(ids)
                }
            }
        }
    }

    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Ids(ids.into_iter().map(Into::into).collect())
    }
}
