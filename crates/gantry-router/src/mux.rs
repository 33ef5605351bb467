//! The mux backend: an adapter over the `route-recognizer` engine.
//!
//! `route-recognizer` registers path patterns only, so the adapter keeps a
//! method table per registered pattern and applies the method match
//! itself, the way a method matcher sits alongside a path registry in
//! mux-style routers. Pattern syntax is the engine's: `:name` for a
//! parameter segment, `*wildcard` for a trailing catch-all.
//!
//! Matched parameters are exposed natively: the engine's own
//! [`Params`](route_recognizer::Params) value is attached to the request
//! unconverted and read back with [`path_params`]. There is no conversion
//! shim on this backend.

use std::collections::HashMap;

use http::Method;
use route_recognizer::Params;

use crate::handler::{default_not_found, BoxHandler, HandlerFuture, HttpRequest};
use crate::router::Router;

/// Router backed by the `route-recognizer` path registry.
///
/// The default backend. Selected by `router_type = "mux"` (or by any
/// unrecognized value).
pub struct MuxRouter {
    /// The engine: maps a path pattern to a slot in `routes`.
    recognizer: route_recognizer::Router<usize>,
    /// Per-pattern method tables, indexed by slot.
    routes: Vec<HashMap<Method, BoxHandler>>,
    /// Patterns already registered with the engine, by slot.
    slots: HashMap<String, usize>,
    not_found: Option<BoxHandler>,
}

impl MuxRouter {
    /// Creates an empty mux router.
    #[must_use]
    pub fn new() -> Self {
        Self {
            recognizer: route_recognizer::Router::new(),
            routes: Vec::new(),
            slots: HashMap::new(),
            not_found: None,
        }
    }

    /// Returns the handler slot for `path`, registering the pattern with
    /// the engine on first sight.
    fn slot_for(&mut self, path: &str) -> usize {
        if let Some(&slot) = self.slots.get(path) {
            return slot;
        }
        let slot = self.routes.len();
        self.routes.push(HashMap::new());
        self.recognizer.add(path, slot);
        self.slots.insert(path.to_string(), slot);
        slot
    }

    fn miss(&self, req: HttpRequest) -> HandlerFuture {
        tracing::debug!(method = %req.method(), path = req.uri().path(), "no route matched");
        match &self.not_found {
            Some(handler) => handler.call(req),
            None => Box::pin(async { default_not_found() }),
        }
    }
}

impl Default for MuxRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl Router for MuxRouter {
    fn handle(&mut self, method: Method, path: &str, handler: BoxHandler) {
        let slot = self.slot_for(path);
        if self.routes[slot].insert(method.clone(), handler).is_some() {
            tracing::warn!(%method, path, "route re-registered, replacing previous handler");
        }
    }

    fn set_not_found_handler(&mut self, handler: BoxHandler) {
        self.not_found = Some(handler);
    }

    fn serve(&self, mut req: HttpRequest) -> HandlerFuture {
        let matched = match self.recognizer.recognize(req.uri().path()) {
            Ok(matched) => matched,
            Err(_) => return self.miss(req),
        };

        let slot = **matched.handler();
        match self.routes[slot].get(req.method()) {
            Some(handler) => {
                // Native parameter exposure: the engine's Params travel
                // with the request, retrievable via `path_params`.
                req.extensions_mut().insert(matched.params().clone());
                handler.call(req)
            }
            // A path match with the wrong method is still a miss; the
            // not-found handler owns every unmatched request.
            None => self.miss(req),
        }
    }
}

/// Returns the path parameters the mux engine extracted for this request.
///
/// This is the mux backend's native accessor, the counterpart of
/// [`route_vars`](crate::route_vars) on the fast backend. The two are not
/// interchangeable: under the mux backend `route_vars` returns `None`, and
/// under the fast backend this returns `None`.
///
/// # Example
///
/// ```rust
/// use gantry_router::{mux::path_params, HttpRequest};
///
/// fn item_id(req: &HttpRequest) -> Option<&str> {
///     path_params(req)?.find("id")
/// }
/// ```
#[must_use]
pub fn path_params(req: &HttpRequest) -> Option<&Params> {
    req.extensions().get::<Params>()
}
