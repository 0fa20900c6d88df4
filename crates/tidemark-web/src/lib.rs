//! # tidemark-web
//!
//! The multi-controller application layer over [`tidemark_router`].
//!
//! This crate provides:
//! - The application's route table and standard controllers
//! - A closed controller registry (name → factory, not-found fallback)
//! - Front-controller dispatch: route, merge params, invoke
//! - TOML configuration and a per-request session view
//!
//! ## Quick Start
//!
//! ```
//! use tidemark_web::{default_registry, dispatch, AppConfig, Request, Session};
//!
//! let config = AppConfig::default();
//! let registry = default_registry();
//! registry.validate(&config.routing).unwrap();
//!
//! let request = Request::new("/post/twitter/123");
//! let session = Session::new();
//! let response = dispatch(&request, &config, &registry, &session).unwrap();
//! assert_eq!(response.status, 200);
//! ```
//!
//! Every request gets its own router: the registry of URL templates is
//! rebuilt per request and resolved exactly once, so nothing routing-related
//! is shared mutable state.

mod config;
mod controller;
mod controllers;
mod dispatch;
mod request;
mod response;
mod session;

pub use config::{load_config, AppConfig, ConfigError};
pub use controller::{Controller, ControllerFactory, ControllerRegistry, RequestContext};
pub use controllers::{
    default_registry, map_default_routes, AccountConfigurationController, DashboardController,
    NotFoundController, PostApiController, PostController, UserController,
};
pub use dispatch::dispatch;
pub use request::{parse_query_string, Request};
pub use response::Response;
pub use session::Session;
