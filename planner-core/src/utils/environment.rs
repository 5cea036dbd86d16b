use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// A logger type which is called with various information.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences solver behavior.
#[derive(Clone)]
pub struct Environment {
    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment` with given logger.
    pub fn new(logger: InfoLogger) -> Self {
        Self { logger }
    }

    /// Creates an instance of `Environment` which discards all log messages.
    pub fn silent() -> Self {
        Self { logger: Arc::new(|_| ()) }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Arc::new(|msg| println!("{msg}")))
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment").finish_non_exhaustive()
    }
}
