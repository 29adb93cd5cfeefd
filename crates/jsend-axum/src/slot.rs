use axum::http::StatusCode;
use jsend::{ResponseSink, SinkError};
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Holds the status and body a handler sent for the current request.
///
/// One slot is created per request by [`crate::jsend_middleware`]; clones
/// share the same storage.
#[derive(Debug, Clone, Default)]
pub struct ResponseSlot {
    inner: Arc<Mutex<Option<(StatusCode, Value)>>>,
}

impl ResponseSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_filled(&self) -> bool {
        self.lock().is_some()
    }

    pub fn take(&self) -> Option<(StatusCode, Value)> {
        self.lock().take()
    }

    fn lock(&self) -> MutexGuard<'_, Option<(StatusCode, Value)>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ResponseSink for ResponseSlot {
    fn send_json(&self, status: u16, body: Value) -> Result<(), SinkError> {
        let status = StatusCode::from_u16(status)
            .map_err(|e| SinkError::new(format!("invalid HTTP status {}: {}", status, e)))?;

        let mut slot = self.lock();
        if slot.is_some() {
            return Err(SinkError::new("response already sent for this request"));
        }
        *slot = Some((status, body));
        Ok(())
    }
}
