//! The route-parameter side channel used by the fast backend.
//!
//! The fast engine hands matched parameters to the adapter as an ordered
//! list alongside the request instead of embedding them in it. The adapter
//! copies that list into the request's [`Extensions`](http::Extensions)
//! before invoking the handler, and [`route_vars`] reads it back out.
//!
//! The extension map is request-scoped by construction: it travels with
//! the request value, so parameters stored for one request are never
//! visible to another and are dropped when the request completes. The
//! private [`RouteVars`] newtype keys the entry by type, which cannot
//! collide with extensions installed by application code.

use std::collections::HashMap;

use crate::handler::HttpRequest;

/// Channel key for parameters extracted by the fast backend.
///
/// Kept private so the only way in is the adapter's shim and the only way
/// out is [`route_vars`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RouteVars(pub(crate) HashMap<String, String>);

/// Returns the route parameters extracted for this request by the fast
/// backend, e.g. `{"id": "42"}` for pattern `/items/{id}` and path
/// `/items/42`.
///
/// Returns `None` when the matched route declared no parameters, or when
/// the active backend is the mux adapter — mux parameters are exposed via
/// their native accessor, [`path_params`](crate::mux::path_params). The
/// two lookup paths are deliberately not interchangeable; handlers that
/// read parameters are coupled to the configured backend.
///
/// # Example
///
/// ```rust
/// use gantry_router::{route_vars, HttpRequest};
///
/// fn item_id(req: &HttpRequest) -> Option<&str> {
///     route_vars(req)?.get("id").map(String::as_str)
/// }
/// ```
#[must_use]
pub fn route_vars(req: &HttpRequest) -> Option<&HashMap<String, String>> {
    req.extensions().get::<RouteVars>().map(|vars| &vars.0)
}

/// Stores extracted parameters on the request. Empty maps are not stored,
/// so [`route_vars`] distinguishes "no parameters" as `None`.
pub(crate) fn set_route_vars(req: &mut HttpRequest, vars: HashMap<String, String>) {
    if !vars.is_empty() {
        req.extensions_mut().insert(RouteVars(vars));
    }
}
