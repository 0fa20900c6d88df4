//! End-to-end tests over the public routing pipeline.

use tidemark_web::{default_registry, dispatch, AppConfig, Request, Session};

fn run(target: &str) -> tidemark_web::Response {
    let config = AppConfig::default();
    let registry = default_registry();
    registry.validate(&config.routing).unwrap();
    dispatch(&Request::new(target), &config, &registry, &Session::new()).unwrap()
}

#[test]
fn account_settings_page() {
    let response = run("/account/settings");
    assert_eq!(response.status, 200);
    let body = response.body_string().unwrap();
    assert!(body.contains("Account configuration"));
    assert!(body.contains("settings"));
}

#[test]
fn network_user_view_falls_through_to_dashboard() {
    let response = run("/twitter/samwho/posts");
    assert_eq!(response.status, 200);
    let body = response.body_string().unwrap();
    assert!(body.contains("Dashboard"));
    assert!(body.contains("samwho on twitter"));
}

#[test]
fn root_is_the_dashboard() {
    let response = run("/");
    assert_eq!(response.status, 200);
    assert!(response.body_string().unwrap().contains("Dashboard"));
}

#[test]
fn numeric_post_id_reaches_the_post_controller() {
    let response = run("/post/twitter/123");
    assert_eq!(response.status, 200);
    assert!(response.body_string().unwrap().contains("Post 123"));
}

#[test]
fn unroutable_path_gets_not_found() {
    let response = run("/one/two/three/four");
    assert_eq!(response.status, 404);
}

#[test]
fn dispatch_is_deterministic() {
    let first = run("/post/twitter/123?page=2");
    let second = run("/post/twitter/123?page=2");
    assert_eq!(first.status, second.status);
    assert_eq!(first.body_string(), second.body_string());
}

#[test]
fn query_values_override_route_values() {
    // the route binds n = twitter from the path; the query supplies its own
    let response = run("/twitter/bob?n=facebook");
    let body = response.body_string().unwrap();
    assert!(body.contains("bob on facebook"));
}

#[test]
fn trailing_slash_is_tolerated() {
    let bare = run("/user/twitter/samwho");
    let slashed = run("/user/twitter/samwho/");
    assert_eq!(bare.body_string(), slashed.body_string());
}

#[test]
fn site_root_prefix_is_ignored_for_matching() {
    let mut config = AppConfig::default();
    config.routing.site_root_path = "/tidemark/".to_string();
    let registry = default_registry();

    let request = Request::new("/tidemark/account/settings");
    let response = dispatch(&request, &config, &registry, &Session::new()).unwrap();
    assert!(response.body_string().unwrap().contains("settings"));
}
