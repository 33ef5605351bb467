//! Hyper service integration.
//!
//! [`RouterService`] is the seam between the HTTP transport and a frozen
//! router: it implements [`hyper::service::Service`] over a shared
//! [`AnyRouter`], collecting the inbound body into memory and dispatching
//! through the routing contract. Clone it per connection — clones share
//! the same router.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use http::{Request, Response, StatusCode};
use http_body_util::{BodyExt, Full};
use hyper::service::Service;

use crate::handler::HttpResponse;
use crate::router::{AnyRouter, Router};

/// A [`hyper::service::Service`] dispatching to a routing backend.
///
/// # Example
///
/// ```rust,ignore
/// let router = Arc::new(router);
/// let service = RouterService::from_shared(Arc::clone(&router));
/// http1::Builder::new().serve_connection(io, service).await?;
/// ```
#[derive(Clone)]
pub struct RouterService {
    router: Arc<AnyRouter>,
}

impl RouterService {
    /// Wraps a fully registered router. Registration is no longer
    /// possible once the router is behind the service.
    #[must_use]
    pub fn new(router: AnyRouter) -> Self {
        Self {
            router: Arc::new(router),
        }
    }

    /// Wraps an already shared router, e.g. one also held by a shutdown
    /// or admin task.
    #[must_use]
    pub fn from_shared(router: Arc<AnyRouter>) -> Self {
        Self { router }
    }
}

impl<B> Service<Request<B>> for RouterService
where
    B: hyper::body::Body + Send + 'static,
    B::Data: Send,
    B::Error: std::fmt::Display,
{
    type Response = HttpResponse;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<HttpResponse, Infallible>> + Send>>;

    fn call(&self, req: Request<B>) -> Self::Future {
        let router = Arc::clone(&self.router);
        Box::pin(async move {
            let (parts, body) = req.into_parts();
            let bytes = match body.collect().await {
                Ok(collected) => collected.to_bytes(),
                Err(err) => {
                    tracing::debug!(error = %err, "failed to read request body");
                    let mut resp = Response::new(Full::new(Bytes::from("bad request")));
                    *resp.status_mut() = StatusCode::BAD_REQUEST;
                    return Ok(resp);
                }
            };
            let req = Request::from_parts(parts, Full::new(bytes));
            Ok(router.serve(req).await)
        })
    }
}
