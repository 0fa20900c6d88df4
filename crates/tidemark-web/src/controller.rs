//! Controller trait and registry.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use tidemark_router::RouterConfig;

use crate::config::ConfigError;
use crate::response::Response;

/// Everything a controller sees for one request: the merged parameter store
/// (query-string values plus route-derived defaults).
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Merged parameter store. Externally supplied query values win over
    /// route-derived ones on key collision.
    pub params: HashMap<String, String>,
}

impl RequestContext {
    /// Gets a parameter value.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Parses a parameter as a specific type.
    pub fn parse<T: std::str::FromStr>(&self, key: &str) -> Option<T> {
        self.param(key).and_then(|v| v.parse().ok())
    }
}

/// A page controller.
///
/// The routing layer resolves a name to one of these and invokes it exactly
/// once per request.
pub trait Controller {
    /// Handles the request and produces the response.
    fn go(&mut self, ctx: &RequestContext) -> Response;
}

/// Factory constructing a fresh controller instance per request.
pub type ControllerFactory = Arc<dyn Fn() -> Box<dyn Controller> + Send + Sync>;

/// Closed mapping from controller names to factories.
///
/// Replaces reflective construction from a resolved name string: a name
/// either hits an explicit registration or falls back to the not-found
/// controller, deterministically. The set of constructible controllers is
/// fixed once the registry is built.
#[derive(Clone)]
pub struct ControllerRegistry {
    factories: HashMap<String, ControllerFactory>,
    not_found: ControllerFactory,
}

impl ControllerRegistry {
    /// Creates a registry with the given not-found fallback.
    pub fn new<F, C>(not_found: F) -> Self
    where
        F: Fn() -> C + Send + Sync + 'static,
        C: Controller + 'static,
    {
        Self {
            factories: HashMap::new(),
            not_found: Arc::new(move || Box::new(not_found())),
        }
    }

    /// Registers a controller factory under a name.
    #[must_use]
    pub fn register<F, C>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> C + Send + Sync + 'static,
        C: Controller + 'static,
    {
        self.factories
            .insert(name.into(), Arc::new(move || Box::new(factory())));
        self
    }

    /// Whether a name has an explicit registration.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Constructs the controller registered under `name`, or the not-found
    /// controller when the name is unknown.
    pub fn construct(&self, name: &str) -> Box<dyn Controller> {
        match self.factories.get(name) {
            Some(factory) => factory(),
            None => {
                warn!("unknown controller {:?}, substituting not-found", name);
                (self.not_found)()
            }
        }
    }

    /// Verifies at startup that the controllers named by config exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownController`] when the configured
    /// default or not-found controller has no registration.
    pub fn validate(&self, config: &RouterConfig) -> Result<(), ConfigError> {
        for name in [&config.default_controller, &config.not_found_controller] {
            if !self.contains(name) {
                return Err(ConfigError::UnknownController(name.clone()));
            }
        }
        Ok(())
    }
}
