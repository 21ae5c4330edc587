use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::model::CommandRecord;

/// On-disk / embedded shape of a catalog. Declaration order is display
/// order, for categories and for commands within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDefinition {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub name: String,
    pub commands: Vec<CommandDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogDefinition {
    pub categories: Vec<CategoryDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedCatalogError {
    EmptyCategoryName,
    DuplicateCategory(String),
    EmptyCategory(String),
    EmptyCommandName(String),
    DuplicateCommand { category: String, command: String },
}

impl Display for MalformedCatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCategoryName => write!(f, "category name is empty"),
            Self::DuplicateCategory(name) => {
                write!(f, "duplicate category name: {name}")
            }
            Self::EmptyCategory(name) => {
                write!(f, "category has no commands: {name}")
            }
            Self::EmptyCommandName(category) => {
                write!(f, "empty command name in category: {category}")
            }
            Self::DuplicateCommand { category, command } => {
                write!(f, "duplicate command name in category {category}: {command}")
            }
        }
    }
}

impl std::error::Error for MalformedCatalogError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub commands: Vec<CommandRecord>,
}

/// Immutable after [`load`]. Never constructed from unvalidated input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn find_category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name == name)
    }

    /// Category names in declared order, for building the UI filter bar.
    pub fn category_names(&self) -> Vec<&str> {
        self.categories
            .iter()
            .map(|category| category.name.as_str())
            .collect()
    }

    /// Total number of commands across all categories.
    pub fn len(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.commands.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Validate a definition and freeze it into a [`Catalog`]. Pure: no side
/// effects, and a failed load leaves nothing partially constructed.
pub fn load(definition: CatalogDefinition) -> Result<Catalog, MalformedCatalogError> {
    let mut categories = Vec::with_capacity(definition.categories.len());

    for category in definition.categories {
        let name = category.name.trim().to_string();
        if name.is_empty() {
            return Err(MalformedCatalogError::EmptyCategoryName);
        }
        if categories.iter().any(|existing: &Category| existing.name == name) {
            return Err(MalformedCatalogError::DuplicateCategory(name));
        }
        if category.commands.is_empty() {
            return Err(MalformedCatalogError::EmptyCategory(name));
        }

        let mut commands = Vec::with_capacity(category.commands.len());
        for command in category.commands {
            if command.name.trim().is_empty() {
                return Err(MalformedCatalogError::EmptyCommandName(name));
            }
            if commands
                .iter()
                .any(|existing: &CommandRecord| existing.name == command.name)
            {
                return Err(MalformedCatalogError::DuplicateCommand {
                    category: name,
                    command: command.name,
                });
            }
            commands.push(CommandRecord::from_owned(command.name, command.description));
        }

        categories.push(Category { name, commands });
    }

    Ok(Catalog { categories })
}
