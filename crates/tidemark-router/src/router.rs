//! Route registry and resolution.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, RouterError};
use crate::params::RouteParams;
use crate::route::Route;

/// Configuration consumed by [`Router::new`].
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Path prefix the application is mounted under, stripped from every
    /// request target before matching.
    pub site_root_path: String,

    /// Controller selected when a matched route binds no `controller` key.
    pub default_controller: String,

    /// Controller callers substitute when no route matches.
    pub not_found_controller: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            site_root_path: "/".to_string(),
            default_controller: "DashboardController".to_string(),
            not_found_controller: "NotFoundController".to_string(),
        }
    }
}

/// Outcome of a resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A template matched. `controller` names the handler; `params` holds
    /// the merged mapping with the `controller` key already removed.
    Route {
        /// Resolved controller name.
        controller: String,
        /// Parameters exposed to the rest of the request pipeline.
        params: RouteParams,
    },

    /// No template matched the request path. An expected outcome, not an
    /// error: callers substitute their not-found controller.
    NoMatch,
}

/// An ordered route registry bound to one request path.
///
/// One `Router` serves exactly one request lifecycle: construct it from the
/// raw request target, `map` every template, then `resolve`. Matching
/// happens eagerly inside `map`, so registration order is precedence order —
/// register specific templates before general ones or the general one will
/// shadow them.
///
/// The registry and resolved state are not shared between requests; a
/// process serving requests concurrently builds one `Router` per request.
#[derive(Debug)]
pub struct Router {
    request_path: String,
    default_controller: String,
    routes: Vec<Route>,
    resolution: Option<Resolution>,
}

impl Router {
    /// Creates a router for one inbound request target.
    ///
    /// The request path is derived once: anything from `?` on is dropped,
    /// the configured site-root prefix is stripped, and a leading `/` is
    /// ensured.
    pub fn new(request_target: &str, config: &RouterConfig) -> Self {
        let request_path = derive_request_path(request_target, &config.site_root_path);
        Self {
            request_path,
            default_controller: config.default_controller.clone(),
            routes: Vec::new(),
            resolution: None,
        }
    }

    /// The normalized path this router matches against.
    pub fn request_path(&self) -> &str {
        &self.request_path
    }

    /// Registers a template with no static params or constraints.
    ///
    /// # Errors
    ///
    /// See [`Router::map_with`].
    pub fn map(&mut self, pattern: &str) -> Result<()> {
        self.map_with(pattern, &[], &[])
    }

    /// Registers a template with static params and placeholder constraints.
    ///
    /// `static_params` are bound on match regardless of path content and win
    /// over same-named captures; the conventional `controller` key selects
    /// the handler. `constraints` replace the default segment class for the
    /// named placeholders.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::DuplicateRoute`] if `pattern` is already
    /// registered, [`RouterError::InvalidPattern`] if it fails to compile,
    /// and [`RouterError::RegistryFrozen`] if [`Router::resolve`] has
    /// already run. All three indicate broken route setup and should fail
    /// startup rather than be swallowed.
    pub fn map_with(
        &mut self,
        pattern: &str,
        static_params: &[(&str, &str)],
        constraints: &[(&str, &str)],
    ) -> Result<()> {
        if self.resolution.is_some() {
            return Err(RouterError::RegistryFrozen);
        }
        if self.routes.iter().any(|route| route.pattern() == pattern) {
            return Err(RouterError::DuplicateRoute(pattern.to_string()));
        }

        let route = Route::compile(pattern, &self.request_path, static_params, constraints)?;
        debug!("mapped route {:?} (matched: {})", pattern, route.is_matched());
        self.routes.push(route);
        Ok(())
    }

    /// Resolves the request to a controller and parameter mapping.
    ///
    /// Scans the registry in registration order and stops at the first
    /// matched template. The winning mapping's `controller` key is removed
    /// and returned as the controller name, falling back to the configured
    /// default when absent.
    ///
    /// The result is computed once; later calls return the cached
    /// resolution.
    pub fn resolve(&mut self) -> Resolution {
        if let Some(resolution) = &self.resolution {
            return resolution.clone();
        }
        let resolution = self.find_match();
        self.resolution = Some(resolution.clone());
        resolution
    }

    fn find_match(&self) -> Resolution {
        for route in &self.routes {
            if route.is_matched() {
                let mut params = route.params().clone();
                let controller = params
                    .remove("controller")
                    .unwrap_or_else(|| self.default_controller.clone());
                debug!("resolved {:?} to {}", route.pattern(), controller);
                return Resolution::Route { controller, params };
            }
        }
        debug!("no route matched {:?}", self.request_path);
        Resolution::NoMatch
    }
}

/// Normalizes a raw request target into a matchable path.
fn derive_request_path(request_target: &str, site_root_path: &str) -> String {
    let path = match request_target.find('?') {
        Some(offset) => &request_target[..offset],
        None => request_target,
    };
    let path = path.strip_prefix(site_root_path).unwrap_or(path);
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
