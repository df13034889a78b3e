use serde::{Deserialize, Serialize};

// The value the runtime hands to global handlers. `stack` is the raw trace
// text, opaque to us - extractors parse it however their runtime formats it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Exception {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl Exception {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack: None,
        }
    }
}
