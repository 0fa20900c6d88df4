//! Front-controller dispatch.

use std::collections::HashMap;

use tracing::{debug, info};

use tidemark_router::{Resolution, Result, RouteParams, Router};

use crate::config::AppConfig;
use crate::controller::{ControllerRegistry, RequestContext};
use crate::controllers::map_default_routes;
use crate::request::Request;
use crate::response::Response;
use crate::session::Session;

/// Routes one request and invokes the selected controller.
///
/// Builds a fresh router for the request (routing state is never shared
/// across requests), registers the application route table, resolves, merges
/// the resolved params into the query-parameter store and runs the
/// controller. A request no template matches goes to the configured
/// not-found controller.
///
/// # Errors
///
/// Propagates route-registration errors; these indicate a broken route table
/// and should fail startup, not be handled per request.
pub fn dispatch(
    request: &Request,
    config: &AppConfig,
    registry: &ControllerRegistry,
    session: &Session,
) -> Result<Response> {
    let mut router = Router::new(&request.target, &config.routing);
    map_default_routes(&mut router, session)?;

    let (controller, route_params) = match router.resolve() {
        Resolution::Route { controller, params } => (controller, params),
        Resolution::NoMatch => {
            debug!("no route for {:?}, using not-found controller", request.target);
            (config.routing.not_found_controller.clone(), RouteParams::new())
        }
    };

    info!("dispatching {:?} to {}", request.target, controller);

    let ctx = RequestContext {
        params: merge_params(&request.query, &route_params),
    };
    let mut handler = registry.construct(&controller);
    Ok(handler.go(&ctx))
}

/// Merges route-derived params into the query-parameter store.
///
/// Externally supplied query values win on key collision: route-derived
/// values are synthesized defaults, not user input.
fn merge_params(
    query: &HashMap<String, String>,
    route_params: &RouteParams,
) -> HashMap<String, String> {
    let mut merged = query.clone();
    for (key, value) in route_params.iter() {
        merged
            .entry(key.to_string())
            .or_insert_with(|| value.to_string());
    }
    merged
}
