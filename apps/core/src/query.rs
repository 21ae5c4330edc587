use crate::catalog::Catalog;
use crate::model::{normalize_term, CategoryFilter, CommandRecord};

/// One surviving category: its name plus the ordered subsequence of its
/// commands that passed the filter predicate. Never empty in a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySection {
    pub category: String,
    pub commands: Vec<CommandRecord>,
}

/// Output of [`query`]. Carries the normalized term and the filter that
/// produced it so projection downstream is self-contained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    pub term: String,
    pub filter: CategoryFilter,
    pub sections: Vec<QuerySection>,
}

/// Pure filter over an immutable catalog. Categories and commands keep the
/// catalog's declared order; there is no ranking or relevance scoring. An
/// unknown category name yields an empty result rather than an error.
pub fn query(catalog: &Catalog, search_term: &str, filter: &CategoryFilter) -> QueryResult {
    let term = normalize_term(search_term);

    let sections = catalog
        .categories()
        .iter()
        .filter(|category| match filter {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => category.name == *name,
        })
        .filter_map(|category| {
            let commands: Vec<CommandRecord> = category
                .commands
                .iter()
                .filter(|command| matches_term(command, &term))
                .cloned()
                .collect();

            if commands.is_empty() {
                return None;
            }

            Some(QuerySection {
                category: category.name.clone(),
                commands,
            })
        })
        .collect();

    QueryResult {
        term,
        filter: filter.clone(),
        sections,
    }
}

/// A command matches when the normalized term is a substring of its name or
/// its description. The empty term matches every command.
pub fn matches_term(command: &CommandRecord, normalized_term: &str) -> bool {
    if normalized_term.is_empty() {
        return true;
    }

    command.search_name().contains(normalized_term)
        || command.search_description().contains(normalized_term)
}

/// Which field satisfied the match, for highlight metadata. `None` when the
/// term is empty (everything matches by default, nothing to highlight).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Name,
    Description,
}

pub fn match_field(command: &CommandRecord, normalized_term: &str) -> Option<MatchField> {
    if normalized_term.is_empty() {
        return None;
    }
    if command.search_name().contains(normalized_term) {
        return Some(MatchField::Name);
    }
    if command.search_description().contains(normalized_term) {
        return Some(MatchField::Description);
    }
    None
}
