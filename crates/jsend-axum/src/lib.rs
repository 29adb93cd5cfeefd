//! axum integration for the `jsend` crate.
//!
//! [`jsend_middleware`] gives every request its own [`JSendReply`]. Handlers
//! extract it and call `send_success`, `send_fail`, `send_error` or `send`;
//! the middleware turns whatever was sent into the HTTP response. Install it
//! with [`JSendRouterExt::jsend`] or `Router::layer(jsend_axum::layer(..))`.
//!
//! ```rust,no_run
//! use axum::{routing::get, Extension, Router};
//! use jsend::JSend;
//! use jsend_axum::{JSendFailure, JSendReply, JSendRouterExt};
//! use serde_json::json;
//!
//! async fn show(Extension(reply): Extension<JSendReply>) -> Result<(), JSendFailure> {
//!     reply.send_success(json!({"id": 1}), None)?;
//!     Ok(())
//! }
//!
//! let app: Router = Router::new()
//!     .route("/posts/1", get(show))
//!     .jsend(JSend::lenient());
//! ```

mod middleware;
mod response;
mod slot;

pub use middleware::{jsend_middleware, layer, JSendLayer, JSendReply, JSendRouterExt};
pub use response::{JSendFailure, JSendJson};
pub use slot::ResponseSlot;
