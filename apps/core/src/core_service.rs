use std::fmt::{Display, Formatter};

use crate::catalog::{self, Catalog, MalformedCatalogError};
use crate::config::{validate, Config};
use crate::contract::{CategoriesResponse, CoreRequest, CoreResponse, RenderPlanDto};
use crate::interaction::CommandBrowser;
use crate::render::AnimationTiming;
use crate::source::{CatalogSource, EmbeddedSource, FileSource, SourceError};

#[derive(Debug)]
pub enum ServiceError {
    Config(String),
    Source(SourceError),
    Catalog(MalformedCatalogError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(error) => write!(f, "config error: {error}"),
            Self::Source(error) => write!(f, "source error: {error}"),
            Self::Catalog(error) => write!(f, "malformed catalog: {error}"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<SourceError> for ServiceError {
    fn from(value: SourceError) -> Self {
        Self::Source(value)
    }
}

impl From<MalformedCatalogError> for ServiceError {
    fn from(value: MalformedCatalogError) -> Self {
        Self::Catalog(value)
    }
}

/// Owns the validated catalog and the interaction state behind the wire
/// contract. Construction is the only fallible part; once built, every
/// request is total.
#[derive(Debug)]
pub struct CatalogService {
    config: Config,
    browser: CommandBrowser,
}

impl CatalogService {
    /// Load the catalog named by the config (embedded when unset), validate
    /// it, and refuse to serve anything on failure.
    pub fn new(config: Config) -> Result<Self, ServiceError> {
        validate(&config).map_err(ServiceError::Config)?;

        let definition = match &config.catalog_path {
            Some(path) => FileSource::new(path).load_definition()?,
            None => EmbeddedSource.load_definition()?,
        };
        let catalog = catalog::load(definition)?;

        Ok(Self::assemble(config, catalog))
    }

    /// Inject an already-validated catalog, bypassing sources. Used by tests
    /// and by embedders that build definitions programmatically.
    pub fn with_catalog(config: Config, catalog: Catalog) -> Result<Self, ServiceError> {
        validate(&config).map_err(ServiceError::Config)?;
        Ok(Self::assemble(config, catalog))
    }

    fn assemble(config: Config, catalog: Catalog) -> Self {
        let timing = AnimationTiming {
            stagger_ms: config.entrance_stagger_ms,
            duration_ms: config.entrance_duration_ms,
        };
        Self {
            config,
            browser: CommandBrowser::new(catalog, timing),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        self.browser.catalog()
    }

    /// Infallible by design: the catalog was validated at construction and
    /// query/projection are total over it, so no request can fail here.
    pub fn handle_command(&mut self, request: CoreRequest) -> CoreResponse {
        match request {
            CoreRequest::InitialRender => {
                CoreResponse::Plan(RenderPlanDto::from(self.browser.initial_plan()))
            }
            CoreRequest::SearchInput(payload) => {
                CoreResponse::Plan(RenderPlanDto::from(self.browser.on_search_input(&payload.term)))
            }
            CoreRequest::CategorySelect(payload) => CoreResponse::Plan(RenderPlanDto::from(
                self.browser.on_category_select(&payload.category),
            )),
            CoreRequest::Categories => CoreResponse::Categories(CategoriesResponse {
                categories: self
                    .catalog()
                    .category_names()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            }),
        }
    }
}
