use serde::{Deserialize, Serialize};

use crate::query::MatchField;
use crate::render::{RenderBlock, RenderEntry, RenderPlan};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchInputRequest {
    pub term: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategorySelectRequest {
    /// A category name, or the `"all"` sentinel.
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum CoreRequest {
    InitialRender,
    SearchInput(SearchInputRequest),
    CategorySelect(CategorySelectRequest),
    Categories,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchFieldDto {
    Name,
    Description,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderEntryDto {
    pub display_name: String,
    pub name: String,
    pub description: String,
    pub matched: Option<MatchFieldDto>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntranceDto {
    pub delay_ms: u32,
    pub duration_ms: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderBlockDto {
    pub title: String,
    pub entries: Vec<RenderEntryDto>,
    pub changed: bool,
    pub entrance: EntranceDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderPlanDto {
    pub blocks: Vec<RenderBlockDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum CoreResponse {
    Plan(RenderPlanDto),
    Categories(CategoriesResponse),
}

impl From<MatchField> for MatchFieldDto {
    fn from(value: MatchField) -> Self {
        match value {
            MatchField::Name => Self::Name,
            MatchField::Description => Self::Description,
        }
    }
}

impl From<RenderEntry> for RenderEntryDto {
    fn from(value: RenderEntry) -> Self {
        Self {
            display_name: value.display_name,
            name: value.name,
            description: value.description,
            matched: value.matched.map(MatchFieldDto::from),
        }
    }
}

impl From<RenderBlock> for RenderBlockDto {
    fn from(value: RenderBlock) -> Self {
        Self {
            title: value.title,
            changed: value.changed,
            entrance: EntranceDto {
                delay_ms: value.entrance.delay_ms,
                duration_ms: value.entrance.duration_ms,
            },
            entries: value.entries.into_iter().map(RenderEntryDto::from).collect(),
        }
    }
}

impl From<RenderPlan> for RenderPlanDto {
    fn from(value: RenderPlan) -> Self {
        Self {
            blocks: value.blocks.into_iter().map(RenderBlockDto::from).collect(),
        }
    }
}
