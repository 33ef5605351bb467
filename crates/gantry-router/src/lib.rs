//! # Gantry Router
//!
//! A pluggable HTTP routing layer: one registration and dispatch contract
//! over interchangeable third-party routing engines, selected by a
//! configuration string at startup.
//!
//! Gantry does not match paths itself — it normalizes the surface of
//! engines that do:
//!
//! - **mux** (default): the [`route-recognizer`](route_recognizer) path
//!   registry, with `:name` parameters read through its native
//!   [`Params`](route_recognizer::Params) accessor
//! - **fast**: the [`matchit`] radix tree, with `{name}` parameters
//!   copied into a request-scoped side channel read via [`route_vars`]
//!
//! Servers register routes against the [`Router`] trait and stay unaware
//! of which backend is live; swapping engines is a configuration change,
//! with one caveat — the two backends expose path parameters through
//! different accessors (see [`route_vars`] and [`mux::path_params`]).
//!
//! ## Example
//!
//! ```rust
//! use bytes::Bytes;
//! use gantry_router::{new_router, route_vars, HttpRequest, Router, ServerConfig};
//! use http::{Method, Response};
//! use http_body_util::Full;
//!
//! # async fn run() {
//! let config = ServerConfig {
//!     router_type: "fast".to_string(),
//!     ..ServerConfig::default()
//! };
//!
//! let mut router = new_router(&config);
//! router.handle_fn(Method::GET, "/items/{id}", |req: HttpRequest| async move {
//!     let id = route_vars(&req)
//!         .and_then(|vars| vars.get("id").cloned())
//!         .unwrap_or_default();
//!     Response::new(Full::new(Bytes::from(id)))
//! });
//! # }
//! ```

#![doc(html_root_url = "https://docs.rs/gantry-router/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod fast;
mod handler;
mod router;
mod service;
mod vars;

pub mod mux;

pub use config::{ConfigError, ServerConfig};
pub use fast::FastRouter;
pub use handler::{
    handler_fn, Body, BoxHandler, Handler, HandlerFn, HandlerFuture, HttpRequest, HttpResponse,
};
pub use mux::MuxRouter;
pub use router::{new_router, AnyRouter, Router};
pub use service::RouterService;
pub use vars::route_vars;
