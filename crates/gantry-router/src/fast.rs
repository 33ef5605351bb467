//! The fast backend: an adapter over the `matchit` radix-tree engine.
//!
//! `matchit` keeps one tree per HTTP method and reports matched
//! parameters as an ordered list of `(name, value)` pairs rather than
//! attaching them to the request. The adapter bridges both differences:
//! registration picks the per-verb tree, and a shim copies the parameter
//! list into the request's side channel (see [`route_vars`](crate::route_vars))
//! before the uniform handler runs.
//!
//! Pattern syntax is the engine's: `{name}` for a parameter segment,
//! `{*rest}` for a trailing catch-all.

use std::collections::HashMap;

use http::Method;

use crate::handler::{default_not_found, BoxHandler, HandlerFuture, HttpRequest};
use crate::router::Router;
use crate::vars::set_route_vars;

/// Router backed by per-method `matchit` radix trees.
///
/// Selected by `router_type = "fast"` or `"matchit"`.
///
/// # Method support
///
/// The engine keeps trees for GET, PUT, POST and DELETE. Registering any
/// other method (HEAD, PATCH, OPTIONS, or a typo) falls back to the GET
/// tree and logs a warning — the route then answers GET requests, not the
/// method it was registered with. This preserves the historical behavior
/// of this backend; prefer the mux backend for routes on other verbs.
///
/// # Panics
///
/// `handle` panics when the engine rejects a pattern (syntax error or a
/// conflict with an already-registered route). Registration runs during
/// single-threaded startup, so a bad pattern is a programmer error caught
/// before the server accepts traffic.
pub struct FastRouter {
    get: matchit::Router<BoxHandler>,
    put: matchit::Router<BoxHandler>,
    post: matchit::Router<BoxHandler>,
    delete: matchit::Router<BoxHandler>,
    not_found: Option<BoxHandler>,
}

impl FastRouter {
    /// Creates an empty fast router.
    #[must_use]
    pub fn new() -> Self {
        Self {
            get: matchit::Router::new(),
            put: matchit::Router::new(),
            post: matchit::Router::new(),
            delete: matchit::Router::new(),
            not_found: None,
        }
    }

    /// Returns the tree requests with `method` are served from, or `None`
    /// for methods the engine has no tree for.
    fn tree(&self, method: &Method) -> Option<&matchit::Router<BoxHandler>> {
        match method.as_str() {
            "GET" => Some(&self.get),
            "PUT" => Some(&self.put),
            "POST" => Some(&self.post),
            "DELETE" => Some(&self.delete),
            _ => None,
        }
    }

    fn miss(&self, req: HttpRequest) -> HandlerFuture {
        tracing::debug!(method = %req.method(), path = req.uri().path(), "no route matched");
        match &self.not_found {
            Some(handler) => handler.call(req),
            None => Box::pin(async { default_not_found() }),
        }
    }
}

impl Default for FastRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl Router for FastRouter {
    fn handle(&mut self, method: Method, path: &str, handler: BoxHandler) {
        let name = method.as_str();
        let tree = if name.eq_ignore_ascii_case("GET") {
            &mut self.get
        } else if name.eq_ignore_ascii_case("PUT") {
            &mut self.put
        } else if name.eq_ignore_ascii_case("POST") {
            &mut self.post
        } else if name.eq_ignore_ascii_case("DELETE") {
            &mut self.delete
        } else {
            tracing::warn!(
                %method,
                path,
                "method not supported by the fast backend, registering under GET"
            );
            &mut self.get
        };

        if let Err(err) = tree.insert(path, handler) {
            panic!("invalid route pattern {path:?} for {method}: {err}");
        }
    }

    fn set_not_found_handler(&mut self, handler: BoxHandler) {
        self.not_found = Some(handler);
    }

    fn serve(&self, mut req: HttpRequest) -> HandlerFuture {
        let Some(tree) = self.tree(req.method()) else {
            return self.miss(req);
        };

        let (handler, vars) = match tree.at(req.uri().path()) {
            Ok(matched) => {
                // The shim: the engine's ordered parameter list becomes an
                // owned name -> value map. Last write wins on duplicates.
                let mut vars = HashMap::new();
                for (name, value) in matched.params.iter() {
                    vars.insert(name.to_string(), value.to_string());
                }
                (matched.value, vars)
            }
            Err(_) => return self.miss(req),
        };

        set_route_vars(&mut req, vars);
        handler.call(req)
    }
}
