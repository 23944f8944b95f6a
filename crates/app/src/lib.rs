//! # rsswitch-app
//!
//! Application layer: the switch use-case and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DeviceWriter`: deliver a control code to the socket driver
//!   - `CodeLogger`: record a dispatched control code in a log sink
//! - Define the **driving/inbound** use-case:
//!   - `SwitchService`: resolve a form, encode it, log it, write it
//! - Provide **in-process infrastructure** that doesn't need IO
//!   (a `tracing`-backed code logger)
//!
//! ## Dependency rule
//! Depends on `rsswitch-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod code_log;
pub mod ports;
pub mod services;
