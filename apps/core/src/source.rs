use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use crate::catalog::CatalogDefinition;

/// The Tourney Master catalog shipped with the binary, used whenever no
/// definition file is configured.
const EMBEDDED_CATALOG: &str = include_str!("../data/tourney_master.json5");

#[derive(Debug)]
pub enum SourceError {
    Io { path: PathBuf, error: std::io::Error },
    Parse { source_name: &'static str, error: String },
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, error } => {
                write!(f, "failed to read {}: {error}", path.display())
            }
            Self::Parse { source_name, error } => {
                write!(f, "failed to parse {source_name} definition: {error}")
            }
        }
    }
}

impl std::error::Error for SourceError {}

/// Where a catalog definition comes from. The component never cares; it
/// validates whatever the source produced.
pub trait CatalogSource {
    fn source_name(&self) -> &'static str;
    fn load_definition(&self) -> Result<CatalogDefinition, SourceError>;
}

pub struct EmbeddedSource;

impl CatalogSource for EmbeddedSource {
    fn source_name(&self) -> &'static str {
        "embedded"
    }

    fn load_definition(&self) -> Result<CatalogDefinition, SourceError> {
        parse_json5(self.source_name(), EMBEDDED_CATALOG)
    }
}

/// A JSON5 definition file, so any well-formed catalog can be swapped in
/// without code changes.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileSource {
    fn source_name(&self) -> &'static str {
        "file"
    }

    fn load_definition(&self) -> Result<CatalogDefinition, SourceError> {
        let text = std::fs::read_to_string(&self.path).map_err(|error| SourceError::Io {
            path: self.path.clone(),
            error,
        })?;
        parse_json5(self.source_name(), &text)
    }
}

fn parse_json5(
    source_name: &'static str,
    text: &str,
) -> Result<CatalogDefinition, SourceError> {
    json5::from_str(text).map_err(|error| SourceError::Parse {
        source_name,
        error: error.to_string(),
    })
}
