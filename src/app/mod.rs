//! Application module - the page handlers
//!
//! `bridge` holds the platform-independent handlers; `gloo` wires them to the
//! browser document and exports them to JavaScript.

pub mod bridge;
pub use bridge::FormBridge;

#[cfg(feature = "wasm")]
pub mod gloo;
