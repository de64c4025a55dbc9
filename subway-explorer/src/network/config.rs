//! Build configuration for the route-stop index.

/// Configuration parameters for fetching the network.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Maximum number of stop-list requests in flight at once.
    /// Results are always consumed in route order, whatever the value.
    pub max_concurrent: usize,
}

impl BuildConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_concurrent: usize) -> Self {
        Self { max_concurrent }
    }

    /// Concurrency actually used; zero is treated as sequential.
    pub fn concurrency(&self) -> usize {
        self.max_concurrent.max(1)
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self { max_concurrent: 1 }
    }
}
