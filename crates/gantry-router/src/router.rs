//! The routing contract and backend selection.
//!
//! [`Router`] is the interface every routing backend satisfies: register
//! handlers for (method, path) pairs, install a catch-all not-found
//! handler, and dispatch inbound requests. Servers program against this
//! trait and stay unaware of which engine is live.
//!
//! [`new_router`] picks the backend from configuration at startup. The
//! choice is a closed set — [`AnyRouter`] has one variant per backend and
//! there is no plugin mechanism.
//!
//! # Phases
//!
//! Registration methods take `&mut self` and dispatch takes `&self`, so
//! the register-then-serve phase split the backends rely on is enforced by
//! the borrow checker: once the router is shared (e.g. behind an `Arc`)
//! for concurrent dispatch, no further registration is possible.
//!
//! # Example
//!
//! ```rust
//! use bytes::Bytes;
//! use gantry_router::{new_router, HttpRequest, Router, ServerConfig};
//! use http::{Method, Response};
//! use http_body_util::Full;
//!
//! let config = ServerConfig::default();
//! let mut router = new_router(&config);
//!
//! router.handle_fn(Method::GET, "/ping", |_req: HttpRequest| async {
//!     Response::new(Full::new(Bytes::from("pong")))
//! });
//! ```

use std::future::Future;

use http::Method;

use crate::config::ServerConfig;
use crate::fast::FastRouter;
use crate::handler::{handler_fn, BoxHandler, HandlerFuture, HttpRequest, HttpResponse};
use crate::mux::MuxRouter;

/// The interface every routing backend satisfies.
pub trait Router: Send + Sync {
    /// Registers `handler` for requests matching `method` and `path`.
    ///
    /// Path pattern syntax is whatever the underlying engine defines; see
    /// the adapter docs. Registration never fails for well-formed input —
    /// a malformed or conflicting pattern is a programmer error and is
    /// surfaced however the engine surfaces it (documented per adapter).
    fn handle(&mut self, method: Method, path: &str, handler: BoxHandler);

    /// Installs the catch-all handler invoked when no route matches.
    ///
    /// At most one is active; calling this again replaces the previous
    /// handler.
    fn set_not_found_handler(&mut self, handler: BoxHandler);

    /// Dispatches an inbound request to the matching handler.
    ///
    /// Falls back to the not-found handler when nothing matches, or to a
    /// plain 404 response when none is installed. Safe for concurrent
    /// invocation once registration is done.
    fn serve(&self, req: HttpRequest) -> HandlerFuture;

    /// Convenience form of [`handle`](Router::handle) accepting a plain
    /// async function or closure.
    fn handle_fn<F, Fut>(&mut self, method: Method, path: &str, f: F)
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HttpResponse> + Send + 'static,
        Self: Sized,
    {
        self.handle(method, path, Box::new(handler_fn(f)));
    }
}

/// The closed set of routing backends, as selected by [`new_router`].
///
/// Delegates [`Router`] to the held adapter, so callers can treat it as
/// the router for the lifetime of the server.
pub enum AnyRouter {
    /// The mux backend ([`MuxRouter`], the default).
    Mux(MuxRouter),
    /// The fast backend ([`FastRouter`]).
    Fast(FastRouter),
}

impl Default for AnyRouter {
    fn default() -> Self {
        Self::Mux(MuxRouter::new())
    }
}

impl AnyRouter {
    /// Returns the short name of the live backend, as used in
    /// configuration.
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Mux(_) => "mux",
            Self::Fast(_) => "fast",
        }
    }
}

impl Router for AnyRouter {
    fn handle(&mut self, method: Method, path: &str, handler: BoxHandler) {
        match self {
            Self::Mux(r) => r.handle(method, path, handler),
            Self::Fast(r) => r.handle(method, path, handler),
        }
    }

    fn set_not_found_handler(&mut self, handler: BoxHandler) {
        match self {
            Self::Mux(r) => r.set_not_found_handler(handler),
            Self::Fast(r) => r.set_not_found_handler(handler),
        }
    }

    fn serve(&self, req: HttpRequest) -> HandlerFuture {
        match self {
            Self::Mux(r) => r.serve(req),
            Self::Fast(r) => r.serve(req),
        }
    }
}

/// Constructs the router named by the server configuration.
///
/// Recognized `router_type` values:
///
/// | value | backend |
/// |---|---|
/// | `"mux"` | [`MuxRouter`] |
/// | `"matchit"`, `"fast"` | [`FastRouter`] |
/// | `""` or anything else | [`MuxRouter`] (default) |
///
/// Backend selection never fails: an unrecognized value logs a warning and
/// falls back to the default, so a typo in configuration cannot take the
/// server down at startup.
#[must_use]
pub fn new_router(config: &ServerConfig) -> AnyRouter {
    match config.router_type.as_str() {
        "mux" => AnyRouter::Mux(MuxRouter::new()),
        "matchit" | "fast" => AnyRouter::Fast(FastRouter::new()),
        other => {
            if !other.is_empty() {
                tracing::warn!(
                    router_type = other,
                    "unrecognized router backend, defaulting to mux"
                );
            }
            AnyRouter::Mux(MuxRouter::new())
        }
    }
}
