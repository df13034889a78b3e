use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::{debug, warn};

pub mod config;
pub mod error;
pub mod exception;
pub mod frames;
pub mod handler;
pub mod symbolicator;
pub mod traits;

use config::Config;
use error::Error;
use exception::Exception;
use frames::ReportFrame;
use handler::{DelegationStrategy, GlobalHandler, HandlerRegistry};
use symbolicator::Symbolicator;
use traits::{CrashSink, StackExtractor};

/// Installs the exception-reporting hook: captures the currently installed
/// global handler and replaces it with one that symbolicates and reports every
/// uncaught exception, then hands the exception back to the captured handler
/// so default crash behavior still happens.
///
/// In development mode this is a no-op. Fails if the supplied source map
/// doesn't parse, or if no tokio runtime is running; in both cases the handler
/// slot is left untouched.
///
/// Calling init again chains: the new replacement captures whatever handler is
/// current, including one installed by an earlier call, so each call adds one
/// report per exception. The outermost original handler still runs exactly
/// once.
pub fn init(
    config: &Config,
    source_map: Option<&str>,
    registry: &dyn HandlerRegistry,
    extractor: Arc<dyn StackExtractor>,
    sink: Arc<dyn CrashSink>,
) -> Result<(), Error> {
    if config.dev_mode {
        debug!("dev mode, not installing the exception hook");
        return Ok(());
    }

    let symbolicator = Arc::new(Symbolicator::new(source_map)?);
    let runtime = Handle::try_current()?;
    let strategy = DelegationStrategy::for_platform(config);
    let original = registry.get_global_handler();

    registry.set_global_handler(Arc::new(move |exception: Exception, is_fatal: bool| {
        report(
            &runtime,
            exception.clone(),
            symbolicator.clone(),
            extractor.clone(),
            sink.clone(),
        );
        delegate(&runtime, strategy, original.clone(), exception, is_fatal);
    }));

    Ok(())
}

// Spawned and never awaited - reporting is strictly best-effort and must not
// block or fail the delegation path.
fn report(
    runtime: &Handle,
    exception: Exception,
    symbolicator: Arc<Symbolicator>,
    extractor: Arc<dyn StackExtractor>,
    sink: Arc<dyn CrashSink>,
) {
    runtime.spawn(async move {
        let raw_frames = match extractor.from_error(&exception).await {
            Ok(frames) => frames,
            Err(e) => {
                warn!("failed to extract stack frames: {}", e);
                return;
            }
        };

        let frames: Vec<ReportFrame> = raw_frames
            .iter()
            .map(|raw| ReportFrame::from((raw, symbolicator.resolve(raw))))
            .collect();

        sink.record_custom_exception_name(&exception.message, &exception.message, frames);
    });
}

// The original handler runs exactly once per exception, whatever became of the
// report. On the delayed path it's pushed out to give an in-flight report a
// chance to land before the process goes down - a heuristic, not a guarantee.
fn delegate(
    runtime: &Handle,
    strategy: DelegationStrategy,
    original: Option<GlobalHandler>,
    exception: Exception,
    is_fatal: bool,
) {
    let Some(original) = original else {
        return;
    };

    match strategy {
        DelegationStrategy::Immediate => original(exception, is_fatal),
        DelegationStrategy::Delayed(delay) => {
            runtime.spawn(async move {
                tokio::time::sleep(delay).await;
                original(exception, is_fatal);
            });
        }
    }
}
