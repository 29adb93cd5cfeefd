use crate::slot::ResponseSlot;
use axum::{
    extract::{Request, State},
    middleware::{from_fn_with_state, FromFnLayer, Next},
    response::{IntoResponse, Response},
    Json, Router,
};
use jsend::{JSend, Responder};
use std::{future::Future, pin::Pin};
use tracing::debug;

/// Send helpers attached to every request that passes through
/// [`jsend_middleware`]. Extract them with `Extension<JSendReply>`.
pub type JSendReply = Responder<ResponseSlot>;

/// Attaches a fresh [`JSendReply`] to the request, then runs the rest of the
/// stack.
///
/// If the handler sent an envelope through the reply, that status and body
/// replace whatever the handler returned. Otherwise the handler's response
/// passes through untouched.
pub async fn jsend_middleware(
    State(jsend): State<JSend>,
    mut request: Request,
    next: Next,
) -> Response {
    let slot = ResponseSlot::new();
    request
        .extensions_mut()
        .insert::<JSendReply>(jsend.responder(slot.clone()));

    let response = next.run(request).await;

    match slot.take() {
        Some((status, body)) => {
            debug!(%status, "Responding with JSend envelope");
            (status, Json(body)).into_response()
        }
        None => response,
    }
}

type MiddlewareFuture = Pin<Box<dyn Future<Output = Response> + Send>>;
type MiddlewareFn = fn(State<JSend>, Request, Next) -> MiddlewareFuture;

/// Layer running [`jsend_middleware`] with the given bundle.
pub type JSendLayer = FromFnLayer<MiddlewareFn, JSend, (State<JSend>, Request)>;

fn boxed_middleware(state: State<JSend>, request: Request, next: Next) -> MiddlewareFuture {
    Box::pin(jsend_middleware(state, request, next))
}

/// Wraps [`jsend_middleware`] in a layer for `Router::layer` or a
/// `ServiceBuilder`.
pub fn layer(jsend: JSend) -> JSendLayer {
    from_fn_with_state(jsend, boxed_middleware as MiddlewareFn)
}

/// Installs [`layer`] on a router.
pub trait JSendRouterExt {
    fn jsend(self, jsend: JSend) -> Self;
}

impl<S> JSendRouterExt for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn jsend(self, jsend: JSend) -> Self {
        self.layer(layer(jsend))
    }
}
