//! # Lifecycle Events
//!
//! This module owns the teardown event and its distribution. It is the
//! event-source half of the agent: the beacon side decides *what* to send,
//! this module decides *when* handlers get to run.
//!
//! ## Core Components
//!
//! - **`TeardownDispatcher`**: a two-phase synchronous dispatcher.
//!   Handlers subscribe in either the capture or the bubble phase; on every
//!   dispatch all capture-phase handlers run before any bubble-phase
//!   handler. Dispatch returns only once every handler has returned, so
//!   anything a handler initiates is initiated before the host continues
//!   tearing down.
//! - **`signals`**: maps process signals (SIGINT, SIGTERM) onto a
//!   `TeardownReason`, in the same shape the rest of the agent uses for
//!   explicitly requested teardowns.
//!
//! The dispatcher is handed to subscribers during wiring and may fire more
//! than once over a process lifetime; every firing is an independent
//! dispatch to the same subscriber list.

mod dispatcher;
mod event;
pub mod signals;

pub use dispatcher::{TeardownDispatcher, TeardownHandler};
pub use event::{DispatchPhase, TeardownEvent, TeardownReason};
