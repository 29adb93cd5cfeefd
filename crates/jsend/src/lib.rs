//! # JSend Helper Crate
//!
//! This crate provides helpers for creating and validating JSend response
//! envelopes. An envelope is one of three variants tagged by `status`:
//! `success` and `fail` carry `data`, `error` carries a `message` plus an
//! optional numeric `code` and `data`.
//!
//! ## Basic Usage
//!
//! ```rust
//! use jsend::*;
//! use serde_json::{json, Value};
//!
//! let ok = success(json!({"id": 1}));
//! assert!(ok.is_success());
//!
//! let err: Envelope<Value> = error(ErrorDetails::new("Database unreachable").code(503));
//! assert_eq!(err.default_http_status(), 500);
//! ```
//!
//! ## Validation
//!
//! Untrusted values are parsed into a typed [`Envelope`]; the boolean
//! predicates are thin wrappers over [`Validator::parse`].
//!
//! ```rust
//! use jsend::*;
//! use serde_json::json;
//!
//! let candidate = json!({"status": "success", "data": 1, "extra": true});
//!
//! assert!(JSend::lenient().is_success(&candidate));
//! assert!(!JSend::strict().is_success(&candidate));
//! assert!(matches!(
//!     JSend::strict().parse(&candidate),
//!     Err(ValidationError::UnexpectedKeys { .. })
//! ));
//! ```
//!
//! ## Sending
//!
//! A [`Responder`] wraps a host framework's [`ResponseSink`] and picks a
//! status code from the envelope variant when none is given.
//!
//! ```rust
//! use jsend::*;
//! use serde_json::{json, Value};
//!
//! struct Stdout;
//!
//! impl ResponseSink for Stdout {
//!     fn send_json(&self, status: u16, body: Value) -> Result<(), SinkError> {
//!         println!("{status} {body}");
//!         Ok(())
//!     }
//! }
//!
//! let responder = JSend::lenient().responder(Stdout);
//! responder.send_success(json!({"id": 1}), None).expect("sent");
//! assert!(responder.send(json!({"status": "bogus"}), None).is_err());
//! ```

mod builder;
mod bundle;
mod config;
mod envelope;
mod responder;
mod schema;
mod validation;

pub use builder::{error, fail, success, ErrorDetails, ErrorInput};
pub use bundle::JSend;
pub use config::JSendConfig;
pub use envelope::*;
pub use responder::{Responder, ResponseSink, SendError, SinkError};
pub use schema::SchemaValidator;
pub use validation::{ValidationError, Validator};
