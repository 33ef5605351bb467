//! Minimal server wiring: config -> backend selection -> routes -> hyper.
//!
//! Run with a backend of your choice:
//!
//! ```text
//! cargo run --example hello
//! GANTRY_ROUTER=fast cargo run --example hello
//! ```

use std::sync::Arc;

use bytes::Bytes;
use http::{Method, Response};
use http_body_util::Full;
use hyper::server::conn::http1;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use gantry_router::{
    mux, new_router, route_vars, HttpRequest, HttpResponse, Router, RouterService, ServerConfig,
};

async fn hello(_req: HttpRequest) -> HttpResponse {
    Response::new(Full::new(Bytes::from("hello from gantry\n")))
}

async fn greet(req: HttpRequest) -> HttpResponse {
    // Parameter lookup depends on the active backend.
    let name = route_vars(&req)
        .and_then(|vars| vars.get("name").cloned())
        .or_else(|| {
            mux::path_params(&req)
                .and_then(|p| p.find("name"))
                .map(str::to_string)
        })
        .unwrap_or_else(|| "stranger".to_string());

    let body = serde_json::json!({ "greeting": format!("hello, {name}") });
    Response::builder()
        .header("content-type", "application/json")
        .body(Full::new(Bytes::from(body.to_string())))
        .expect("static response parts")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = ServerConfig {
        http_addr: "127.0.0.1:3000".to_string(),
        router_type: std::env::var("GANTRY_ROUTER").unwrap_or_default(),
    };

    let mut router = new_router(&config);
    tracing::info!(backend = router.backend_name(), "router selected");

    let greet_pattern = match router.backend_name() {
        "fast" => "/greet/{name}",
        _ => "/greet/:name",
    };
    router.handle_fn(Method::GET, "/", hello);
    router.handle_fn(Method::GET, greet_pattern, greet);

    let service = RouterService::from_shared(Arc::new(router));
    let listener = TcpListener::bind(&config.http_addr).await?;
    tracing::info!(addr = config.http_addr, "listening");

    loop {
        let (stream, remote_addr) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let service = service.clone();
        tokio::spawn(async move {
            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                tracing::error!(%remote_addr, error = %err, "connection error");
            }
        });
    }
}
