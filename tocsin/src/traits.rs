use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{
    error::ExtractionError,
    exception::Exception,
    frames::{RawFrame, ReportFrame},
};

// Produces the ordered raw frames for a thrown exception. Extraction can be
// arbitrarily slow (it may need to fetch or parse), hence async; failures come
// back as values and are treated as best-effort by the caller.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StackExtractor: Send + Sync {
    async fn from_error(&self, exception: &Exception) -> Result<Vec<RawFrame>, ExtractionError>;
}

// The crash-aggregation backend. Fire-and-forget - no result is consumed.
#[cfg_attr(test, automock)]
pub trait CrashSink: Send + Sync {
    fn record_custom_exception_name(&self, name: &str, message: &str, frames: Vec<ReportFrame>);
}
