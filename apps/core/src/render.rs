use crate::query::{match_field, MatchField, QueryResult};

/// Entrance-animation knobs the UI layer replays on changed blocks. Block
/// `i` starts `i * stagger_ms` after the plan is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTiming {
    pub stagger_ms: u32,
    pub duration_ms: u32,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            stagger_ms: 100,
            duration_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entrance {
    pub delay_ms: u32,
    pub duration_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderEntry {
    /// Slash-prefixed form the UI shows, e.g. `/ping`.
    pub display_name: String,
    pub name: String,
    pub description: String,
    pub matched: Option<MatchField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderBlock {
    pub title: String,
    pub entries: Vec<RenderEntry>,
    /// True when this block's rendered content differs from the previous
    /// plan, so the UI can replay its entrance animation selectively.
    pub changed: bool,
    pub entrance: Entrance,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderPlan {
    pub blocks: Vec<RenderBlock>,
}

impl RenderPlan {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn find_block(&self, title: &str) -> Option<&RenderBlock> {
        self.blocks.iter().find(|block| block.title == title)
    }
}

/// Turn a query result into a display-ready plan, diffed block-by-block
/// against the previous plan. With no previous plan every block is changed.
pub fn project(
    previous: Option<&RenderPlan>,
    result: &QueryResult,
    timing: AnimationTiming,
) -> RenderPlan {
    let blocks = result
        .sections
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let entries: Vec<RenderEntry> = section
                .commands
                .iter()
                .map(|command| RenderEntry {
                    display_name: format!("/{}", command.name),
                    name: command.name.clone(),
                    description: command.description.clone(),
                    matched: match_field(command, &result.term),
                })
                .collect();

            let changed = match previous.and_then(|plan| plan.find_block(&section.category)) {
                Some(prior) => prior.entries != entries,
                None => true,
            };

            RenderBlock {
                title: section.category.clone(),
                entries,
                changed,
                entrance: Entrance {
                    delay_ms: index as u32 * timing.stagger_ms,
                    duration_ms: timing.duration_ms,
                },
            }
        })
        .collect();

    RenderPlan { blocks }
}
