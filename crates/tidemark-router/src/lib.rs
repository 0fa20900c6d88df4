//! # tidemark-router
//!
//! URL template routing with first-registered-wins resolution.
//!
//! This crate provides:
//! - Declarative URL templates with `:name` placeholders
//! - Optional per-placeholder regex constraints
//! - Eager matching at registration time against one request path
//! - Ordered, first-match-wins resolution to a controller name plus params
//!
//! ## Quick Start
//!
//! ```
//! # fn main() -> Result<(), tidemark_router::RouterError> {
//! use tidemark_router::{Resolution, Router, RouterConfig};
//!
//! let config = RouterConfig::default();
//! let mut router = Router::new("/post/twitter/123?page=2", &config);
//!
//! router.map_with(
//!     "/post/:network/:id",
//!     &[("controller", "PostController")],
//!     &[("id", "[0-9]+")],
//! )?;
//! router.map("/:network/:username")?;
//!
//! match router.resolve() {
//!     Resolution::Route { controller, params } => {
//!         assert_eq!(controller, "PostController");
//!         assert_eq!(params.get("network"), Some("twitter"));
//!         assert_eq!(params.get("id"), Some("123"));
//!     }
//!     Resolution::NoMatch => unreachable!(),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Precedence
//!
//! Matching happens inside `map`, so the order of `map` calls is the order
//! of precedence: register `/post/:n/:t` before `/:n/:u` or the general
//! template will shadow the specific one. Re-registering a template string
//! is a hard error, never a silent overwrite.
//!
//! ## Lifecycle
//!
//! A `Router` is scoped to one request: build, map, resolve, read. The first
//! `resolve` call caches its result and freezes the registry; there is no
//! global routing table to share (or corrupt) across requests.

mod error;
mod params;
mod route;
mod router;

pub use error::{Result, RouterError};
pub use params::{decode, RouteParams};
pub use route::Route;
pub use router::{Resolution, Router, RouterConfig};
