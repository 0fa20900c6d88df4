//! The application's controllers and default route table.

use serde::Serialize;

use tidemark_router::{Result, Router};

use crate::controller::{Controller, ControllerRegistry, RequestContext};
use crate::response::Response;
use crate::session::Session;

/// Registers the application's route table on `router`.
///
/// Order matters: matching happens at registration time and the first
/// matched template wins, so the specific templates come before the general
/// network/user fallthroughs.
pub fn map_default_routes(router: &mut Router, session: &Session) -> Result<()> {
    // post pages, numeric post id
    router.map_with("/post/:n/:t", &[("controller", "PostController")], &[("t", "[0-9]+")])?;
    router.map_with("/post/:n/:t/:v", &[("controller", "PostController")], &[("t", "[0-9]+")])?;

    // user pages, seeded with the session user where one is logged in
    let mut user_params = vec![("controller", "UserController")];
    if let Some(user) = session.get("user") {
        user_params.push(("i", user));
    }
    router.map_with("/user/:n/:u", &user_params, &[])?;
    router.map_with("/user/:n/:u/:v", &user_params, &[])?;

    // account pages
    router.map_with("/account/:m", &[("controller", "AccountConfigurationController")], &[])?;
    router.map_with("/account/:m/:p", &[("controller", "AccountConfigurationController")], &[])?;

    // network/user/view fall through to the default controller
    router.map("/:n/:u/:v")?;
    router.map("/:n/:u")?;

    // dashboard front page
    router.map("/")?;

    Ok(())
}

/// Builds the registry of the application's standard controllers.
pub fn default_registry() -> ControllerRegistry {
    ControllerRegistry::new(NotFoundController::default)
        .register("DashboardController", DashboardController::default)
        .register("PostController", PostController::default)
        .register("PostApiController", PostApiController::default)
        .register("UserController", UserController::default)
        .register(
            "AccountConfigurationController",
            AccountConfigurationController::default,
        )
        .register("NotFoundController", NotFoundController::default)
}

/// Front-page dashboard for a network/user stream.
#[derive(Debug, Default)]
pub struct DashboardController;

impl Controller for DashboardController {
    fn go(&mut self, ctx: &RequestContext) -> Response {
        match (ctx.param("n"), ctx.param("u")) {
            (Some(network), Some(user)) => {
                Response::html(format!("<h1>Dashboard</h1><p>{user} on {network}</p>"))
            }
            _ => Response::html("<h1>Dashboard</h1>"),
        }
    }
}

/// Single-post page.
#[derive(Debug, Default)]
pub struct PostController;

impl Controller for PostController {
    fn go(&mut self, ctx: &RequestContext) -> Response {
        let network = ctx.param("n").unwrap_or("twitter");
        let id = ctx.param("t").unwrap_or_default();
        Response::html(format!("<h1>Post {id}</h1><p>network: {network}</p>"))
    }
}

/// User profile page.
#[derive(Debug, Default)]
pub struct UserController;

impl Controller for UserController {
    fn go(&mut self, ctx: &RequestContext) -> Response {
        let network = ctx.param("n").unwrap_or("twitter");
        let username = ctx.param("u").unwrap_or_default();
        Response::html(format!("<h1>User {username}</h1><p>network: {network}</p>"))
    }
}

/// Account configuration pages.
#[derive(Debug, Default)]
pub struct AccountConfigurationController;

impl Controller for AccountConfigurationController {
    fn go(&mut self, ctx: &RequestContext) -> Response {
        let area = ctx.param("m").unwrap_or("index");
        Response::html(format!("<h1>Account configuration</h1><p>area: {area}</p>"))
    }
}

/// JSON API over post streams.
#[derive(Debug, Default)]
pub struct PostApiController;

#[derive(Debug, Serialize)]
struct PostQuery {
    network: String,
    post_type: String,
    count: u32,
    page: u32,
}

impl Controller for PostApiController {
    fn go(&mut self, ctx: &RequestContext) -> Response {
        // Unparseable numeric values fall back to their defaults rather
        // than failing the request.
        let query = PostQuery {
            network: ctx.param("network").unwrap_or("twitter").to_string(),
            post_type: ctx.param("type").unwrap_or("post").to_string(),
            count: ctx.parse("count").unwrap_or(20),
            page: ctx.parse("page").unwrap_or(1),
        };
        Response::json(&query)
    }
}

/// 404 page for unroutable requests and unknown controller names.
#[derive(Debug, Default)]
pub struct NotFoundController;

impl Controller for NotFoundController {
    fn go(&mut self, _ctx: &RequestContext) -> Response {
        Response::not_found()
    }
}
