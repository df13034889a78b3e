use thiserror::Error;

// Everything in here is a configuration-time failure, surfaced from init before
// any handler is replaced. Run-time failures during exception handling never
// take this path - they're logged and swallowed, so the crash path is unaffected.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Config error: {0}")]
    ConfigError(#[from] envconfig::Error),
    #[error("sourcemap error: {0}")]
    SourceMapError(#[from] sourcemap::Error),
    #[error("no tokio runtime running: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}

// The stack-extraction collaborator's failure type. Reporting is best-effort,
// so these stop the reporting task and nothing else.
#[derive(Debug, Error)]
#[error("stack extraction failed: {0}")]
pub struct ExtractionError(pub String);
