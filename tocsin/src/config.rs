use std::str::FromStr;

use envconfig::Envconfig;

// The two platform families we recognize. They differ only in how the original
// handler is re-invoked - see DelegationStrategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            other => Err(format!("unrecognized platform: {}", other)),
        }
    }
}

#[derive(Envconfig, Clone)]
pub struct Config {
    // Live and hot reloading throw a constant stream of spurious exceptions,
    // so in development the hook is never installed at all.
    #[envconfig(from = "DEV_MODE", default = "false")]
    pub dev_mode: bool,

    #[envconfig(from = "PLATFORM_OS", default = "android")]
    pub platform: Platform,

    // On android, re-invoking the original handler immediately kills the
    // process before an in-flight report lands, so delegation there is pushed
    // out by this many milliseconds.
    #[envconfig(from = "DELEGATION_DELAY_MS", default = "500")]
    pub delegation_delay_ms: u64,
}

impl Config {
    pub fn init_with_defaults() -> Result<Self, envconfig::Error> {
        Self::init_from_env()
    }
}
