use std::fmt::{Display, Formatter};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{self, ConfigError};
use crate::core_service::{CatalogService, ServiceError};
use crate::logging;
use crate::transport;

#[derive(Debug)]
pub enum RuntimeError {
    Config(ConfigError),
    Service(ServiceError),
    Io(std::io::Error),
}

impl Display for RuntimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(error) => write!(f, "config error: {error}"),
            Self::Service(error) => write!(f, "service error: {error}"),
            Self::Io(error) => write!(f, "io error: {error}"),
        }
    }
}

impl std::error::Error for RuntimeError {}

impl From<ConfigError> for RuntimeError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<ServiceError> for RuntimeError {
    fn from(value: ServiceError) -> Self {
        Self::Service(value)
    }
}

impl From<std::io::Error> for RuntimeError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub config_path: Option<PathBuf>,
    pub catalog_path: Option<PathBuf>,
    pub request: Option<String>,
}

pub fn parse_cli_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--config requires a path".to_string())?;
                options.config_path = Some(PathBuf::from(value));
            }
            "--catalog" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--catalog requires a path".to_string())?;
                options.catalog_path = Some(PathBuf::from(value));
            }
            "--request" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--request requires a JSON payload".to_string())?;
                options.request = Some(value.clone());
            }
            other => {
                return Err(format!(
                    "unknown argument: {other} (expected --config, --catalog, or --request)"
                ));
            }
        }
    }

    Ok(options)
}

pub fn run_with_options(options: Options) -> Result<(), RuntimeError> {
    let mut config = config::load(options.config_path.as_deref())?;
    if !config.config_path.exists() {
        config::save(&config)?;
        println!(
            "[tourneycat-core] wrote default config to {}",
            config.config_path.display()
        );
    }

    // CLI catalog override is ephemeral; it is never written back.
    if let Some(path) = options.catalog_path {
        config.catalog_path = Some(path);
    }

    if let Err(error) = logging::init() {
        eprintln!("[tourneycat-core] logging unavailable: {error}");
    }

    let catalog_source = match &config.catalog_path {
        Some(path) => path.display().to_string(),
        None => "embedded".to_string(),
    };

    let mut service = CatalogService::new(config)?;
    let startup = format!(
        "startup catalog_source={catalog_source} categories={} commands={}",
        service.catalog().categories().len(),
        service.catalog().len(),
    );
    println!("[tourneycat-core] {startup}");
    logging::info(&startup);

    match options.request {
        Some(payload) => {
            println!("{}", transport::handle_json(&mut service, &payload));
            Ok(())
        }
        None => serve_stdio(&mut service),
    }
}

/// Newline-delimited JSON: one request per line on stdin, one response per
/// line on stdout, until EOF. Blank lines are ignored.
fn serve_stdio(service: &mut CatalogService) -> Result<(), RuntimeError> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = transport::handle_json(service, &line);
        writeln!(stdout, "{response}")?;
        stdout.flush()?;
    }

    logging::info("stdin closed; shutting down");
    Ok(())
}
