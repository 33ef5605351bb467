//! Cross-backend integration tests.
//!
//! Exercises the routing contract through the public API the way a host
//! server does: select a backend from configuration, register routes,
//! then dispatch concurrently.

use bytes::Bytes;
use http::{Method, Request, Response, StatusCode};
use http_body_util::{BodyExt, Full};

use gantry_router::{
    handler_fn, mux, new_router, route_vars, AnyRouter, HttpRequest, HttpResponse, Router,
    ServerConfig,
};

fn config_with(router_type: &str) -> ServerConfig {
    ServerConfig {
        router_type: router_type.to_string(),
        ..ServerConfig::default()
    }
}

fn make_request(method: Method, path: &str) -> HttpRequest {
    Request::builder()
        .method(method)
        .uri(path)
        .body(Full::new(Bytes::new()))
        .unwrap()
}

async fn body_string(resp: HttpResponse) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn text_handler(body: &'static str) -> gantry_router::BoxHandler {
    Box::new(handler_fn(move |_req: HttpRequest| async move {
        Response::new(Full::new(Bytes::from(body)))
    }))
}

/// Registers the same route set against whichever backend is live,
/// using the pattern syntax that backend defines.
fn register_routes(router: &mut AnyRouter) {
    let item_pattern = match router {
        AnyRouter::Mux(_) => "/items/:id",
        AnyRouter::Fast(_) => "/items/{id}",
    };

    router.handle(Method::GET, "/health", text_handler("ok"));
    router.handle_fn(Method::GET, item_pattern, |req: HttpRequest| async move {
        // Parameter lookup is backend-specific; try both accessors.
        let id = route_vars(&req)
            .and_then(|vars| vars.get("id").cloned())
            .or_else(|| {
                mux::path_params(&req)
                    .and_then(|p| p.find("id"))
                    .map(str::to_string)
            })
            .unwrap_or_default();
        Response::new(Full::new(Bytes::from(id)))
    });
}

#[tokio::test]
async fn registered_routes_are_reachable_on_both_backends() {
    for backend in ["mux", "fast"] {
        let mut router = new_router(&config_with(backend));
        register_routes(&mut router);

        let resp = router.serve(make_request(Method::GET, "/health")).await;
        assert_eq!(resp.status(), StatusCode::OK, "backend: {backend}");
        assert_eq!(body_string(resp).await, "ok", "backend: {backend}");

        // Wrong method and wrong path both miss.
        let resp = router.serve(make_request(Method::POST, "/health")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "backend: {backend}");
        let resp = router.serve(make_request(Method::GET, "/absent")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "backend: {backend}");
    }
}

#[tokio::test]
async fn parameters_round_trip_on_both_backends() {
    for backend in ["mux", "fast"] {
        let mut router = new_router(&config_with(backend));
        register_routes(&mut router);

        let resp = router.serve(make_request(Method::GET, "/items/42")).await;
        assert_eq!(body_string(resp).await, "42", "backend: {backend}");
    }
}

#[tokio::test]
async fn concurrent_requests_observe_only_their_own_parameters() {
    let mut router = new_router(&config_with("fast"));
    router.handle_fn(Method::GET, "/items/{id}", |req: HttpRequest| async move {
        // Yield so concurrent dispatches interleave before reading.
        tokio::task::yield_now().await;
        let id = route_vars(&req)
            .and_then(|vars| vars.get("id").cloned())
            .unwrap_or_default();
        Response::new(Full::new(Bytes::from(id)))
    });

    let router = std::sync::Arc::new(router);
    let mut tasks = Vec::new();
    for id in 1..=32 {
        let router = std::sync::Arc::clone(&router);
        tasks.push(tokio::spawn(async move {
            let resp = router
                .serve(make_request(Method::GET, &format!("/items/{id}")))
                .await;
            (id, body_string(resp).await)
        }));
    }

    for task in tasks {
        let (id, body) = task.await.unwrap();
        assert_eq!(body, id.to_string());
    }
}

#[tokio::test]
async fn not_found_handler_applies_to_every_miss() {
    for backend in ["mux", "fast"] {
        let mut router = new_router(&config_with(backend));
        router.handle(Method::GET, "/known", text_handler("hit"));
        router.set_not_found_handler(Box::new(handler_fn(|_req: HttpRequest| async {
            let mut resp = Response::new(Full::new(Bytes::from("custom miss")));
            *resp.status_mut() = StatusCode::NOT_FOUND;
            resp
        })));

        let resp = router.serve(make_request(Method::GET, "/unknown")).await;
        assert_eq!(body_string(resp).await, "custom miss", "backend: {backend}");

        let resp = router.serve(make_request(Method::PUT, "/known")).await;
        assert_eq!(body_string(resp).await, "custom miss", "backend: {backend}");
    }
}

#[tokio::test]
async fn patch_registration_on_fast_backend_answers_get() {
    // Current fallback behavior, pinned so a future change to a hard
    // error shows up here.
    let mut router = new_router(&config_with("fast"));
    router.handle(Method::PATCH, "/notes/{id}", text_handler("aliased"));

    let resp = router.serve(make_request(Method::GET, "/notes/9")).await;
    assert_eq!(body_string(resp).await, "aliased");
}

#[tokio::test]
async fn unknown_backend_behaves_like_the_default() {
    let mut default_router = new_router(&config_with(""));
    let mut unknown_router = new_router(&config_with("unknown-engine"));
    assert!(matches!(unknown_router, AnyRouter::Mux(_)));

    for router in [&mut default_router, &mut unknown_router] {
        register_routes(router);
    }

    for (method, path) in [
        (Method::GET, "/health"),
        (Method::GET, "/items/7"),
        (Method::POST, "/health"),
        (Method::GET, "/absent"),
    ] {
        let a = default_router.serve(make_request(method.clone(), path)).await;
        let b = unknown_router.serve(make_request(method, path)).await;
        assert_eq!(a.status(), b.status(), "path: {path}");
        assert_eq!(body_string(a).await, body_string(b).await, "path: {path}");
    }
}

#[tokio::test]
async fn route_vars_is_empty_on_the_mux_backend() {
    let mut router = new_router(&config_with("mux"));
    router.handle_fn(Method::GET, "/items/:id", |req: HttpRequest| async move {
        let body = if route_vars(&req).is_none() { "side channel empty" } else { "populated" };
        Response::new(Full::new(Bytes::from(body)))
    });

    let resp = router.serve(make_request(Method::GET, "/items/42")).await;
    assert_eq!(body_string(resp).await, "side channel empty");
}
