//! # Beacon Transmission
//!
//! This module owns the "send a small message and don't wait" capability.
//!
//! ## Core Components
//!
//! - **`BeaconSender` Trait**: the injected send capability. Its `send`
//!   method takes a path and a payload and returns nothing: there is no
//!   outcome for a caller to consult, which is the contract. Delivery is
//!   best-effort and failure is absorbed at the sending boundary.
//! - **`HttpBeaconSender`**: the production implementation. It joins the
//!   path onto the configured collector URL, POSTs the payload as the raw
//!   request body, and hands the request future to the runtime through an
//!   explicit detach-and-discard helper. Both the join handle and the
//!   future's result are visibly dropped rather than left unhandled.
//! - **`BeaconError`**: the typed error of the internal send future. The
//!   type exists so the discard is a deliberate, visible act instead of an
//!   accidentally empty error arm.
//!
//! Failures of every kind (endpoint join, connection, server error) fall
//! into a single class, "not attempted or not delivered", and none of them
//! are surfaced: not to the caller, not to the logs.

mod error;
mod http;
mod sender;

pub use error::BeaconError;
pub use http::HttpBeaconSender;
pub use sender::BeaconSender;
