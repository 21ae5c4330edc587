/// Canonical search-term normalization: trim surrounding whitespace, then
/// lowercase. Matching is a plain substring check over text normalized the
/// same way, so `"  HELP "` and `"help"` are the same query.
pub fn normalize_term(input: &str) -> String {
    input.trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRecord {
    pub name: String,
    pub description: String,
    search_name: String,
    search_description: String,
}

impl CommandRecord {
    pub fn new(name: &str, description: &str) -> Self {
        Self::from_owned(name.to_string(), description.to_string())
    }

    pub fn from_owned(name: String, description: String) -> Self {
        let search_name = name.to_lowercase();
        let search_description = description.to_lowercase();
        Self {
            name,
            description,
            search_name,
            search_description,
        }
    }

    pub fn search_name(&self) -> &str {
        &self.search_name
    }

    pub fn search_description(&self) -> &str {
        &self.search_description
    }
}

/// The category selector attached to every query. `All` is spelled `"all"`
/// on the wire and in the UI filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Named(String),
}

pub const ALL_CATEGORIES: &str = "all";

impl CategoryFilter {
    /// Parse a wire/UI selection. Anything other than the `"all"` sentinel
    /// is taken verbatim as a category name, including names that do not
    /// exist in the catalog (those queries return empty results).
    pub fn parse(selection: &str) -> Self {
        if selection.eq_ignore_ascii_case(ALL_CATEGORIES) {
            Self::All
        } else {
            Self::Named(selection.to_string())
        }
    }

    pub fn as_selection(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Named(name) => name,
        }
    }
}
