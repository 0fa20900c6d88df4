//! Webapp Example
//!
//! Simulates a handful of page requests through the routing pipeline.
//! Run with: cargo run --example webapp

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use tidemark_web::{default_registry, dispatch, AppConfig, Request, Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = AppConfig::default();
    let registry = default_registry();
    registry.validate(&config.routing)?;
    let session = Session::new().with("user", "1");

    for target in [
        "/",
        "/post/twitter/123",
        "/post/twitter/not-a-number",
        "/user/twitter/samwho",
        "/account/settings",
        "/twitter/samwho/posts",
        "/completely/unroutable/path/here",
    ] {
        let request = Request::new(target);
        let response = dispatch(&request, &config, &registry, &session)?;
        println!(
            "{target} -> {} {}",
            response.status,
            response.status_text()
        );
    }

    Ok(())
}
