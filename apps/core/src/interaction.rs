use crate::catalog::Catalog;
use crate::model::CategoryFilter;
use crate::query::query;
use crate::render::{project, AnimationTiming, RenderPlan};

/// The only mutable state in the component: the current search term and the
/// active category filter. Two independent fields, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    search_term: String,
    active_category: CategoryFilter,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            active_category: CategoryFilter::All,
        }
    }
}

impl QueryState {
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn active_category(&self) -> &CategoryFilter {
        &self.active_category
    }
}

/// Owns the catalog, the query state, and the last produced plan. Each input
/// event runs a full query-and-project cycle synchronously; callers may
/// throttle keystrokes since output is idempotent per identical state.
#[derive(Debug)]
pub struct CommandBrowser {
    catalog: Catalog,
    timing: AnimationTiming,
    state: QueryState,
    last_plan: Option<RenderPlan>,
}

impl CommandBrowser {
    pub fn new(catalog: Catalog, timing: AnimationTiming) -> Self {
        Self {
            catalog,
            timing,
            state: QueryState::default(),
            last_plan: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// First render with the default state, as the page does on load.
    pub fn initial_plan(&mut self) -> RenderPlan {
        self.refresh()
    }

    /// A text-change event carrying the full current search string.
    pub fn on_search_input(&mut self, raw: &str) -> RenderPlan {
        self.state.search_term = raw.to_string();
        self.refresh()
    }

    /// A filter-click event carrying a category name or the `"all"` sentinel.
    pub fn on_category_select(&mut self, selection: &str) -> RenderPlan {
        self.state.active_category = CategoryFilter::parse(selection);
        self.refresh()
    }

    fn refresh(&mut self) -> RenderPlan {
        let result = query(
            &self.catalog,
            &self.state.search_term,
            &self.state.active_category,
        );
        let plan = project(self.last_plan.as_ref(), &result, self.timing);
        self.last_plan = Some(plan.clone());
        plan
    }
}
