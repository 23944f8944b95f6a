//! # rsswitch-domain
//!
//! Pure domain model for the rsswitch remote socket controller.
//!
//! ## Responsibilities
//! - Hold a decoded **form submission** (field name → value)
//! - Resolve a submission into a **selection** (group, socket, on/off state),
//!   keeping missing values as explicit markers instead of sentinels
//! - Encode a complete selection into the four-digit **control code** the
//!   `rsswitch` driver understands
//! - Define the selection error taxonomy
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.

pub mod control_code;
pub mod error;
pub mod form;
pub mod selection;
