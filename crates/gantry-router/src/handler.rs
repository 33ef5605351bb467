//! The uniform handler surface shared by every routing backend.
//!
//! Handlers in Gantry are:
//!
//! - **Async**: every handler produces a boxed future
//! - **Infallible**: failures are expressed as HTTP responses, not errors
//! - **Type-erased**: adapters store [`BoxHandler`] values so the backend
//!   choice never leaks into handler signatures
//!
//! # Example
//!
//! ```rust
//! use bytes::Bytes;
//! use gantry_router::{handler_fn, HttpRequest, HttpResponse};
//! use http::Response;
//! use http_body_util::Full;
//!
//! async fn hello(_req: HttpRequest) -> HttpResponse {
//!     Response::new(Full::new(Bytes::from("hello")))
//! }
//!
//! let handler = handler_fn(hello);
//! ```

use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use http::{Request, Response, StatusCode};
use http_body_util::Full;

/// Type alias for the HTTP body used throughout Gantry.
pub type Body = Full<Bytes>;

/// Type alias for an inbound HTTP request.
pub type HttpRequest = Request<Body>;

/// Type alias for an outbound HTTP response.
pub type HttpResponse = Response<Body>;

/// Type alias for the boxed future returned by handlers and dispatch.
pub type HandlerFuture = Pin<Box<dyn Future<Output = HttpResponse> + Send>>;

/// A registered request handler.
///
/// Implemented for plain async functions and closures via [`handler_fn`].
/// Handlers must be safe for arbitrary concurrent invocation: dispatch
/// takes `&self` and the HTTP transport drives each request on its own
/// task.
pub trait Handler: Send + Sync + 'static {
    /// Handles a single request, producing the response to send.
    fn call(&self, req: HttpRequest) -> HandlerFuture;
}

/// A type-erased, boxed [`Handler`].
pub type BoxHandler = Box<dyn Handler>;

/// Adapter that implements [`Handler`] for async functions and closures.
///
/// Created by [`handler_fn`].
pub struct HandlerFn<F>(F);

impl<F, Fut> Handler for HandlerFn<F>
where
    F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HttpResponse> + Send + 'static,
{
    fn call(&self, req: HttpRequest) -> HandlerFuture {
        Box::pin((self.0)(req))
    }
}

/// Wraps an async function or closure into a [`Handler`].
///
/// # Example
///
/// ```rust
/// use bytes::Bytes;
/// use gantry_router::{handler_fn, HttpRequest, HttpResponse};
/// use http::Response;
/// use http_body_util::Full;
///
/// let handler = handler_fn(|_req: HttpRequest| async {
///     Response::new(Full::new(Bytes::from("ok")))
/// });
/// ```
pub fn handler_fn<F, Fut>(f: F) -> HandlerFn<F>
where
    F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HttpResponse> + Send + 'static,
{
    HandlerFn(f)
}

/// Builds the plain 404 response used when no route matches and no
/// not-found handler has been installed.
pub(crate) fn default_not_found() -> HttpResponse {
    let mut resp = Response::new(Full::new(Bytes::from("404 page not found")));
    *resp.status_mut() = StatusCode::NOT_FOUND;
    resp
}
