use log::{debug, info, warn};

/// Thin wrapper over the `log` facade that tags every line with a scope.
pub struct LogManager {
    scope: &'static str,
}

impl LogManager {
    pub fn new(scope: &'static str) -> Self {
        Self { scope }
    }

    pub fn record(&self, message: &str) {
        info!("[{}] {}", self.scope, message);
    }

    pub fn caution(&self, message: &str) {
        warn!("[{}] {}", self.scope, message);
    }

    pub fn detail(&self, message: &str) {
        debug!("[{}] {}", self.scope, message);
    }

    pub fn scope(&self) -> &'static str {
        self.scope
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new("scan")
    }
}
