use std::{
    sync::{Arc, RwLock},
    time::Duration,
};

use tracing::debug;

use crate::{
    config::{Config, Platform},
    exception::Exception,
};

// A global uncaught-exception handler, as the runtime invokes it: the escaped
// exception, and whether the runtime considers it fatal.
pub type GlobalHandler = Arc<dyn Fn(Exception, bool) + Send + Sync>;

// The runtime's last-resort hook mechanism: get and set the currently
// installed global handler.
pub trait HandlerRegistry: Send + Sync {
    fn get_global_handler(&self) -> Option<GlobalHandler>;
    fn set_global_handler(&self, handler: GlobalHandler);
}

// A process-wide handler slot, for runtimes that don't bring their own hook
// mechanism. `raise` is the dispatch point for exceptions that escaped all
// application-level handling.
pub struct ProcessRegistry;

static GLOBAL_HANDLER: RwLock<Option<GlobalHandler>> = RwLock::new(None);

impl HandlerRegistry for ProcessRegistry {
    fn get_global_handler(&self) -> Option<GlobalHandler> {
        GLOBAL_HANDLER
            .read()
            .expect("handler slot lock is not poisoned")
            .clone()
    }

    fn set_global_handler(&self, handler: GlobalHandler) {
        *GLOBAL_HANDLER
            .write()
            .expect("handler slot lock is not poisoned") = Some(handler);
    }
}

impl ProcessRegistry {
    pub fn raise(&self, exception: Exception, is_fatal: bool) {
        match self.get_global_handler() {
            Some(handler) => handler(exception, is_fatal),
            None => debug!("no global handler installed, dropping exception"),
        }
    }
}

// How the previously installed handler is re-invoked. Immediate re-entry is
// safe on ios; on android it terminates the process before an in-flight report
// has a chance to land, so the call is pushed out by a fixed delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelegationStrategy {
    Immediate,
    Delayed(Duration),
}

impl DelegationStrategy {
    pub fn for_platform(config: &Config) -> Self {
        match config.platform {
            Platform::Ios => DelegationStrategy::Immediate,
            Platform::Android => {
                DelegationStrategy::Delayed(Duration::from_millis(config.delegation_delay_ms))
            }
        }
    }
}
